use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Default DNS port used when an endpoint leaves it unset.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Transport used to reach (or listen on) an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    #[default]
    Udp,
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
        }
    }

    /// Lenient parse: anything other than `udp`/`tcp` (any case) yields UDP.
    pub fn from_config(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Protocol::Udp),
            "tcp" => Ok(Protocol::Tcp),
            other => Err(format!("unsupported protocol '{other}'")),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized listen or upstream endpoint.
///
/// Renders as `addr/proto`, e.g. `8.8.8.8:53/udp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub addr: SocketAddr,
    pub protocol: Protocol,
}

impl Endpoint {
    pub fn new(addr: SocketAddr, protocol: Protocol) -> Self {
        Self { addr, protocol }
    }

    pub fn udp(addr: SocketAddr) -> Self {
        Self::new(addr, Protocol::Udp)
    }

    pub fn tcp(addr: SocketAddr) -> Self {
        Self::new(addr, Protocol::Tcp)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.protocol)
    }
}
