use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid {role} endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        role: &'static str,
        endpoint: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("{section} requires {field}")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },
}
