// src/domain/errors.rs
use thiserror::Error;

pub type SluggingResult<T> = Result<T, SluggingError>;

#[derive(Debug, Error)]
pub enum SluggingError {
    #[error("source field `{field}` must produce a string or null, got {found}")]
    SourceType { field: String, found: &'static str },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
