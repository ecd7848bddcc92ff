use serde::{Deserialize, Serialize};

/// Successful response from the file ASR endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Error body returned with a non-success status.
///
/// FastAPI reports `detail` as either a string or a list of validation
/// objects, so it is kept as raw JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
