//! Upload session management
//!
//! This module provides the `UploadSession` state machine that manages:
//! - File selection and validation against the configured accept rule
//! - Submission to a `Transcriber` and the resulting state transition
//! - Discarding outcomes of submissions superseded by later events

mod config;
mod session;
mod state;

pub use config::{SessionConfig, SessionMode};
pub use session::UploadSession;
pub use state::{SessionError, SessionState, SubmitOutcome, SubmitTicket};
