use super::error::TranscriptionError;
use super::messages::{ErrorResponse, TranscribeResponse};
use crate::audio::AudioFile;
use crate::config::BackendConfig;
use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const UPLOAD_PATH: &str = "/api/file-asr/upload";
pub const FILE_FIELD: &str = "file";

/// Text returned by the transcription service for one submitted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
}

/// Anything that can turn a staged audio file into a transcript.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, file: &AudioFile) -> Result<TranscriptionResult, TranscriptionError>;
}

/// Client for the file ASR HTTP endpoint
pub struct HttpTranscriptionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranscriptionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_for(base_url),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        ensure!(
            config.timeout_secs > 0,
            "backend.timeout_secs must be greater than zero"
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint_for(&config.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transcriber for HttpTranscriptionClient {
    async fn transcribe(&self, file: &AudioFile) -> Result<TranscriptionResult, TranscriptionError> {
        let form = Form::new().part(FILE_FIELD, file_part(file));

        info!(
            "Uploading {} ({} bytes) to {}",
            file.name,
            file.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // A body that cannot be read still leaves the status to report
            let detail = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorResponse>(&body).ok())
                .and_then(|e| e.detail_text());

            warn!(
                "Transcription backend returned {}: {}",
                status,
                detail.as_deref().unwrap_or("<no detail>")
            );

            return Err(TranscriptionError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;

        let parsed: TranscribeResponse = serde_json::from_slice(&body)
            .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;

        debug!("Received transcript ({} chars)", parsed.text.chars().count());

        Ok(TranscriptionResult { text: parsed.text })
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH)
}

/// Multipart part carrying the raw bytes, original filename and declared type.
fn file_part(file: &AudioFile) -> Part {
    let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());

    match part.mime_str(&file.mime_type) {
        Ok(part) => part,
        Err(e) => {
            warn!(
                "Ignoring unparsable media type '{}' for {}: {}",
                file.mime_type, file.name, e
            );
            Part::bytes(file.bytes.clone()).file_name(file.name.clone())
        }
    }
}
