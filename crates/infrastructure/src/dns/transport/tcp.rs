use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use home_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 §4.2.2): each message is prefixed with its
/// length as a big-endian u16. One connection per exchange.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let io_err = |what: &str, e: std::io::Error| {
            DomainError::Transport(format!("TCP {} {}: {}", what, self.server_addr, e))
        };

        let length = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::Transport(format!(
                "DNS message of {} bytes is too large for TCP",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| io_err("connect to", e))?;

        let mut frame = Vec::with_capacity(message_bytes.len() + 2);
        frame.extend_from_slice(&length.to_be_bytes());
        frame.extend_from_slice(message_bytes);
        stream
            .write_all(&frame)
            .await
            .map_err(|e| io_err("write to", e))?;

        debug!(server = %self.server_addr, bytes_sent = message_bytes.len(), "TCP query sent");

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| io_err("read length from", e))?;

        let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| io_err("read response from", e))?;

        debug!(server = %self.server_addr, bytes_received = response.len(), "TCP response received");

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        Ok(TransportResponse { bytes })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
