//! Download errors.
use std::io::Error;

/// Errors that can occur while fetching a remote file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS or timeout failure before a response arrived
    #[error("Request to '{url}' failed")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request to '{url}' returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Reading the response body failed part way through
    #[error("Failed to read response body")]
    Body(#[source] Error),

    /// Writing the downloaded data failed
    #[error("Failed to write downloaded data")]
    Io(#[source] Error),
}

impl FetchError {
    /// Whether another attempt could succeed: transport failures and server errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Client(_) | FetchError::Body(_) | FetchError::Io(_) => false,
        }
    }
}
