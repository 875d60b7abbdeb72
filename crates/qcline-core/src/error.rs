//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QcError {
    #[error("INPUT/{0}")]
    InvalidInput(String),

    #[error("PROFILE/{0}")]
    ProfileError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}

impl QcError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        QcError::InvalidInput(message.into())
    }

    /// Whether the caller sent bad data (as opposed to a server-side config problem)
    pub fn is_caller_error(&self) -> bool {
        matches!(self, QcError::InvalidInput(_))
    }
}
