pub const CONNECTIVITY_MESSAGE: &str =
    "Could not reach the transcription service. Check your connection and try again.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Transcription failed. Please try again.";

/// Why a single transcription attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// No response was received (connect failure, timeout, aborted body).
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {status}")]
    Server { status: u16, detail: Option<String> },
    /// Success status, but the body carried no usable `text`.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl TranscriptionError {
    /// Message suitable for display. Server detail is never included.
    pub fn user_message(&self) -> &'static str {
        match self {
            TranscriptionError::Transport(_) => CONNECTIVITY_MESSAGE,
            TranscriptionError::Server { .. } | TranscriptionError::MalformedResponse(_) => {
                SUBMIT_FAILURE_MESSAGE
            }
        }
    }
}

impl From<reqwest::Error> for TranscriptionError {
    fn from(e: reqwest::Error) -> Self {
        TranscriptionError::Transport(e.to_string())
    }
}
