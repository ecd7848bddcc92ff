use crate::audio::AudioFile;
use crate::client::{TranscriptionError, TranscriptionResult};

/// Where an upload session currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing staged, no error
    #[default]
    Idle,

    /// A validated file is staged for submission
    Selected(AudioFile),

    /// A submission of this file is in flight
    Submitting(AudioFile),

    /// Last selection or submission failed; holds the user-facing message
    Errored(String),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Selected(_) => "selected",
            SessionState::Submitting(_) => "submitting",
            SessionState::Errored(_) => "errored",
        }
    }
}

/// Handle for one submission. Consumed on completion; only the ticket of
/// the most recent outstanding submission is applied.
#[derive(Debug)]
pub struct SubmitTicket {
    pub(crate) seq: u64,
    pub(crate) file: AudioFile,
}

impl SubmitTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn file(&self) -> &AudioFile {
        &self.file
    }
}

/// Result of a submission that was still current when it completed
#[derive(Debug)]
pub enum SubmitOutcome {
    Transcribed(TranscriptionResult),
    Failed(TranscriptionError),
}

/// Why a submission could not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no audio file is selected")]
    NothingSelected,
    #[error("{0} mode does not submit files")]
    SubmitUnsupported(super::SessionMode),
}
