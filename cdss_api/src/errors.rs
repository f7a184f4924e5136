//! Error types for the API client.

/// Errors that can occur when building or running a CDSS request.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller input was malformed (bad AOI shape, unknown timescale, table or
    /// parameter token). Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The API answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    /// The request never produced a response (network error, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// A success response whose body is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
