use bytes::Bytes;
use home_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

/// Parsed upstream reply.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,
    pub message: Message,
}

impl DnsResponse {
    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();

        debug!(
            rcode = Self::rcode_to_status(rcode),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse { rcode, message })
    }

    pub fn is_transport_error(error: &DomainError) -> bool {
        matches!(
            error,
            DomainError::Transport(_) | DomainError::QueryTimeout | DomainError::IoError(_)
        )
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
