use super::config::{SessionConfig, SessionMode};
use super::state::{SessionError, SessionState, SubmitOutcome, SubmitTicket};
use crate::audio::{AcceptRule, AudioFile};
use crate::client::{Transcriber, TranscriptionError, TranscriptionResult};
use crate::transcript::TranscriptSink;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// The file staged for transcription, and what happened to it last.
///
/// Owned by a single hosting surface. Each submission takes the next sequence
/// number; a completion is applied only if it belongs to the most recent
/// outstanding submission, and at most once. A selection or clear made while
/// a request is in flight does not cancel it: the outcome is still returned,
/// but the newer selection is kept.
pub struct UploadSession {
    /// Identifier for log correlation
    id: Uuid,

    config: SessionConfig,

    state: SessionState,

    /// Sequence number of the latest submission
    submit_seq: u64,

    /// Sequence number still awaiting completion, if any
    outstanding: Option<u64>,
}

impl UploadSession {
    pub fn new(config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        info!(
            "Creating upload session {} ({} mode, accepts {})",
            id, config.mode, config.accept
        );

        Self {
            id,
            config,
            state: SessionState::Idle,
            submit_seq: 0,
            outstanding: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> SessionMode {
        self.config.mode
    }

    pub fn accept_rule(&self) -> AcceptRule {
        self.config.accept
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The staged file, including one whose submission is in flight
    pub fn selected_file(&self) -> Option<&AudioFile> {
        match &self.state {
            SessionState::Selected(file) | SessionState::Submitting(file) => Some(file),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    /// Handle a file-picker change. `None` means the picker was canceled
    /// and leaves the session untouched.
    pub fn select_file(&mut self, candidate: Option<AudioFile>) {
        let Some(file) = candidate else {
            debug!("Session {}: picker canceled, keeping {}", self.id, self.state.name());
            return;
        };

        if !self.config.accept.accepts(&file) {
            warn!(
                "Session {}: rejected {} ({}) under {}",
                self.id, file.name, file.mime_type, self.config.accept
            );
            self.state = SessionState::Errored(self.config.accept.rejection_message().to_string());
            return;
        }

        info!(
            "Session {}: selected {} ({}, {} bytes)",
            self.id,
            file.name,
            file.mime_type,
            file.len()
        );
        self.state = SessionState::Selected(file);
    }

    pub fn clear(&mut self) {
        debug!("Session {}: cleared", self.id);
        self.state = SessionState::Idle;
    }

    /// Whether the submit action should be offered right now
    pub fn can_submit(&self) -> bool {
        self.config.mode.submits() && matches!(self.state, SessionState::Selected(_))
    }

    /// Move the staged file into `Submitting` and hand out a ticket for it.
    ///
    /// Calling this again while a submission is in flight is allowed; the
    /// earlier ticket becomes stale.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SessionError> {
        if !self.config.mode.submits() {
            return Err(SessionError::SubmitUnsupported(self.config.mode));
        }

        let file = match std::mem::take(&mut self.state) {
            SessionState::Selected(file) | SessionState::Submitting(file) => file,
            other => {
                self.state = other;
                return Err(SessionError::NothingSelected);
            }
        };

        self.submit_seq += 1;
        self.outstanding = Some(self.submit_seq);
        info!(
            "Session {}: submitting {} (seq {})",
            self.id, file.name, self.submit_seq
        );
        self.state = SessionState::Submitting(file.clone());

        Ok(SubmitTicket {
            seq: self.submit_seq,
            file,
        })
    }

    /// Apply the result of a submission. Returns `None` when the ticket is
    /// stale or already completed, in which case nothing changes.
    ///
    /// If the file was re-selected or cleared after the submission began, the
    /// outcome is still returned but the session state is left as is.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<TranscriptionResult, TranscriptionError>,
    ) -> Option<SubmitOutcome> {
        if self.outstanding != Some(ticket.seq) {
            warn!(
                "Session {}: discarding stale result for {} (seq {}, latest {})",
                self.id, ticket.file.name, ticket.seq, self.submit_seq
            );
            return None;
        }

        self.outstanding = None;
        let still_submitting = self.is_submitting();

        match result {
            Ok(transcript) => {
                info!(
                    "Session {}: transcribed {} ({} chars)",
                    self.id,
                    ticket.file.name,
                    transcript.text.chars().count()
                );
                if still_submitting {
                    self.state = SessionState::Idle;
                }
                Some(SubmitOutcome::Transcribed(transcript))
            }
            Err(e) => {
                error!("Session {}: transcription of {} failed: {}", self.id, ticket.file.name, e);
                if still_submitting {
                    self.state = SessionState::Errored(e.user_message().to_string());
                }
                Some(SubmitOutcome::Failed(e))
            }
        }
    }

    /// Submit the staged file and wait for it. On success the transcript is
    /// passed to `sink`; on failure the sink is left alone.
    pub async fn submit<T, S>(
        &mut self,
        client: &T,
        sink: &mut S,
    ) -> Result<Option<SubmitOutcome>, SessionError>
    where
        T: Transcriber + ?Sized,
        S: TranscriptSink + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = client.transcribe(&ticket.file).await;
        let outcome = self.complete_submit(ticket, result);

        if let Some(SubmitOutcome::Transcribed(transcript)) = &outcome {
            sink.set_transcript(Some(transcript.text.clone()));
        }

        Ok(outcome)
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
