use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Empty answer section in upstream response")]
    EmptyAnswer,

    #[error("Upstream query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
