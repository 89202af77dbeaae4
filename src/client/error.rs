use thiserror::Error;

use super::storage::StorageError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Email already registered")]
    DuplicateEmail,
}

/// Everything a client operation can fail with. None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Missing or malformed input; the form stays open.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Failed to connect to server: {0}")]
    Transport(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Transport(error.to_string())
    }
}
