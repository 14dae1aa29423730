//! Errors produced while building or dispatching API requests.

/// Failure of a single API call.
///
/// Values are compared in tests to check that interceptors hand failures
/// back untouched, so every variant carries owned, comparable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request descriptor could not be built (for example, body encoding).
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The browser fetch itself failed.
    #[error("network request failed: {0}")]
    Network(String),

    /// The API answered with a non-success HTTP status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No browser is available to perform the request.
    #[error("not available on server")]
    Unavailable,
}
