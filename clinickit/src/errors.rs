use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid priority: {0:?} (expected High, Medium or Low)")]
    InvalidPriority(String),

    #[error("Token space exhausted: requested {requested}, only {available} free")]
    TokensExhausted { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, ClinicError>;
