//! Error types for the UserDeck client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Malformed input rejected by the server (400)
    #[error("{0}")]
    BadRequest(String),

    /// Store or unexpected server failure (5xx)
    #[error("{0}")]
    Server(String),

    /// Raw transport error, surfaced unchanged
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True for failures the console reports as a generic notification
    /// rather than a field-level message.
    pub fn is_server_side(&self) -> bool {
        matches!(self, Error::Server(_) | Error::Http(_))
    }
}
