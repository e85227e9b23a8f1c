//! Error types for the API client.

/// Errors that can occur when building, sending, or decoding API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be built (bad URL, missing identifier, body on a GET).
    /// Nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body")]
    Encode(#[source] serde_json::Error),
    /// The request never completed (connection refused, timeout, cancelled).
    #[error("Request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The call went through but the response body did not match the expected shape.
    #[error("Failed to decode response body")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The API returned a non-success status.
    #[error("Request failed with status {status}: {message}")]
    HttpStatus {
        status: u16,
        /// Machine-readable error code from the service, e.g. `unfound_resource`.
        code: Option<String>,
        message: String,
    },
}

impl Error {
    /// Wraps a transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Transport(err.into())
    }

    /// HTTP status code, if the service answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
