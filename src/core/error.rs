use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Skill source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Chat delivery failed: {0}")]
    ChatDelivery(String),

    #[error("Unsupported host system: expected {expected}, found {found}")]
    HostMismatch { expected: String, found: String },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RequestError>;
