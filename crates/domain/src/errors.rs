use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("IP {0} is invalid")]
    InvalidAddress(String),

    #[error("{record} records must have a {field}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Upstream {server} answered with {rcode}")]
    UpstreamFailure { server: String, rcode: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
