use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Duplicate report id: {0}")]
    DuplicateKey(String),

    #[error("Malformed report payload: {0}")]
    MalformedPayload(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
