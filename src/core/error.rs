use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid save snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
