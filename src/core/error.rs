use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid remote payload: {0}")]
    InvalidPayload(String),

    #[error("Corrupt cached snapshot: {0}")]
    CorruptCache(String),

    #[error("Store is not loaded; call initialize() first")]
    NotLoaded,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
