use super::errors::ConfigError;
use crate::endpoint::{Endpoint, Protocol, DEFAULT_DNS_PORT};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Which side of the server an endpoint is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Listener,
    Nameserver,
}

impl EndpointRole {
    fn as_str(&self) -> &'static str {
        match self {
            EndpointRole::Listener => "listener",
            EndpointRole::Nameserver => "nameserver",
        }
    }
}

/// Endpoint as written in the config file (`ip`, `port`, `proto`).
///
/// Kept raw so that out-of-range ports and unknown protocols can be
/// normalized once, when the config is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// IPv4 or IPv6 address; empty binds all interfaces for a listener
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip: String,

    /// Port; zero or negative means 53
    #[serde(default)]
    pub port: i64,

    /// "udp" or "tcp" (any case); anything else means UDP
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proto: String,
}

impl EndpointConfig {
    pub fn new(ip: impl Into<String>, port: i64, proto: Protocol) -> Self {
        Self {
            ip: ip.into(),
            port,
            proto: proto.as_str().to_string(),
        }
    }

    /// Applies the defaults (UDP, port 53) and validates address and port.
    ///
    /// An empty listener IP binds every interface; an empty nameserver IP is an error.
    pub fn normalize(&self, role: EndpointRole) -> Result<Endpoint, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            role: role.as_str(),
            endpoint: format!("{}:{}", self.ip, self.port),
            reason,
        };

        let protocol = Protocol::from_config(&self.proto);

        let port = if self.port <= 0 {
            DEFAULT_DNS_PORT
        } else {
            u16::try_from(self.port).map_err(|_| invalid("port out of range".to_string()))?
        };

        let ip: IpAddr = if self.ip.is_empty() {
            match role {
                EndpointRole::Listener => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                EndpointRole::Nameserver => return Err(invalid("ip is required".to_string())),
            }
        } else {
            self.ip
                .parse()
                .map_err(|e| invalid(format!("invalid ip: {e}")))?
        };

        Ok(Endpoint::new(SocketAddr::new(ip, port), protocol))
    }
}
