#![allow(dead_code)]
use async_trait::async_trait;
use home_dns_domain::DomainError;
use home_dns_infrastructure::providers::unifi::{
    InventorySource, UnifiDevice, UnifiNetwork, UnifiStation,
};

/// Fixed inventory; optionally fails on the device listing.
#[derive(Default)]
pub struct FakeInventory {
    pub clients: Vec<UnifiStation>,
    pub networks: Vec<UnifiNetwork>,
    pub devices: Vec<UnifiDevice>,
    pub fail_devices: bool,
}

impl FakeInventory {
    pub fn station(name: &str, hostname: &str, ip: &str, mac: &str) -> UnifiStation {
        UnifiStation {
            name: name.to_string(),
            hostname: hostname.to_string(),
            ip: ip.to_string(),
            mac: mac.to_string(),
        }
    }

    pub fn network(name: &str, ip_subnet: &str) -> UnifiNetwork {
        UnifiNetwork {
            name: name.to_string(),
            ip_subnet: ip_subnet.to_string(),
        }
    }

    pub fn device(name: &str, ip: &str, mac: &str) -> UnifiDevice {
        UnifiDevice {
            name: name.to_string(),
            ip: ip.to_string(),
            mac: mac.to_string(),
        }
    }
}

#[async_trait]
impl InventorySource for FakeInventory {
    async fn clients(&self) -> Result<Vec<UnifiStation>, DomainError> {
        Ok(self.clients.clone())
    }

    async fn networks(&self) -> Result<Vec<UnifiNetwork>, DomainError> {
        Ok(self.networks.clone())
    }

    async fn devices(&self) -> Result<Vec<UnifiDevice>, DomainError> {
        if self.fail_devices {
            return Err(DomainError::ProviderFailed {
                provider: "unifi".to_string(),
                reason: "GET stat/device: HTTP 401 Unauthorized".to_string(),
            });
        }
        Ok(self.devices.clone())
    }
}
