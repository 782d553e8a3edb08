use super::inventory::InventoryConfig;
use super::local_records::{ARecordEntry, CnameEntry, StaticConfig, StaticDomain};
use super::root::Config;
use super::server::EndpointConfig;
use crate::endpoint::Protocol;

/// Domain used when a domain name is left empty.
pub const DEFAULT_DOMAIN: &str = "home";

impl Config {
    /// Sample configuration printed by `generate-config`.
    pub fn example() -> Self {
        let home = StaticDomain {
            domain: DEFAULT_DOMAIN.to_string(),
            a_records: vec![
                ARecordEntry::new("a_record_1", "192.168.1.1"),
                ARecordEntry::new("a_record_2", "192.168.1.2"),
            ],
            cname_records: vec![
                CnameEntry::new("cname_record_1", "a_record_1"),
                CnameEntry::new("cname_record_2", "a_record_2"),
            ],
            ptr_records: vec![],
        };

        let mut inventory = InventoryConfig {
            enabled: true,
            hostname: "https://10.0.1.1".to_string(),
            username: "homeauto".to_string(),
            password: "******".to_string(),
            site: "default".to_string(),
            ..Default::default()
        };
        inventory.add_ignore_macs(["60:22:32:9f:0f:fd"]);

        let mut config = Config {
            notes: "PTR records will automatically be created".to_string(),
            static_records: Some(StaticConfig {
                enabled: true,
                domains: vec![home],
            }),
            inventory: Some(inventory),
            ..Default::default()
        };

        config
            .add_listeners([EndpointConfig::new("", 53, Protocol::Udp)])
            .add_nameservers([
                EndpointConfig::new("8.8.8.8", 53, Protocol::Udp),
                EndpointConfig::new("8.8.4.4", 53, Protocol::Tcp),
                EndpointConfig::new("1.1.1.1", 53, Protocol::Tcp),
            ]);

        config
    }
}
