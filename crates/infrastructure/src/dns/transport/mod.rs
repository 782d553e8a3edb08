pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use home_dns_domain::{DomainError, Endpoint, Protocol};
use std::sync::Arc;
use std::time::Duration;

/// Per-exchange timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// Create the transport an upstream endpoint asks for.
pub fn create_transport(endpoint: &Endpoint) -> Arc<dyn DnsTransport> {
    match endpoint.protocol {
        Protocol::Udp => Arc::new(udp::UdpTransport::new(endpoint.addr)),
        Protocol::Tcp => Arc::new(tcp::TcpTransport::new(endpoint.addr)),
    }
}
