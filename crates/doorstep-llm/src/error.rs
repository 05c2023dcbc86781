//! Error types for model invocation.

/// Errors returned by chat clients.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Required API credential is absent from the environment. Raised before
    /// any network attempt.
    #[error("missing API key: set {0} in the environment")]
    MissingApiKey(&'static str),
    /// The HTTP request failed to complete.
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The provider returned a non-success status.
    #[error("model API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The provider returned a response the client could not interpret.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}
