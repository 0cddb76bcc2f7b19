use thiserror::Error;

/// Failure modes of one analysis attempt.
///
/// The raw cause is for logs only; the user sees `user_message()`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Service returned status {0}")]
    Status(u16),

    #[error("Service returned no usable candidate text")]
    EmptyResponse,

    #[error("Response was not valid JSON for the analysis schema: {0}")]
    MalformedResponse(String),

    #[error("Response violated the analysis contract: {0}")]
    InvalidResult(String),
}

impl AnalysisError {
    /// Generic user-safe message; the underlying cause is never shown raw.
    pub fn user_message(&self) -> &'static str {
        "Failed to analyze audio. Please check the file and try again."
    }
}
