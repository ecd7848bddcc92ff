//! Transcription backend client
//!
//! One multipart `POST /api/file-asr/upload` per submit. Outcomes are mapped
//! onto [`TranscriptionError`]; nothing is retried or cached.

pub mod client;
pub mod error;
pub mod messages;

pub use client::{HttpTranscriptionClient, Transcriber, TranscriptionResult};
pub use error::TranscriptionError;
pub use messages::{ErrorResponse, TranscribeResponse};
