pub mod audio;
pub mod client;
pub mod config;
pub mod session;
pub mod transcript;

pub use audio::{AcceptRule, AudioFile, WavInfo};
pub use client::{HttpTranscriptionClient, Transcriber, TranscriptionError, TranscriptionResult};
pub use config::Config;
pub use session::{
    SessionConfig, SessionError, SessionMode, SessionState, SubmitOutcome, SubmitTicket,
    UploadSession,
};
pub use transcript::{TranscriptSink, TranscriptView};
