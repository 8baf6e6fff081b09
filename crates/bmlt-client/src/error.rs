//! Client error types.

use thiserror::Error;

/// Error returned by [`crate::client::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, TLS, body I/O).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed — token endpoint rejection or a 401 from
    /// the server.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server returned 404 for the requested entity.
    #[error("resource not found")]
    NotFound,

    /// The server answered with a status outside the expected contract.
    /// The literal status code is preserved for the caller's message.
    #[error("API returned status {status}")]
    UnexpectedStatus { status: u16 },

    /// A 2xx body could not be decoded into the expected model.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The client could not be constructed from the given configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
