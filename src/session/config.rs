use crate::audio::AcceptRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which workflow a session backs. Fixed for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// Submit a pre-recorded file as a whole
    #[default]
    LongForm,

    /// Live microphone capture. Placeholder: never submits.
    Streaming,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::LongForm => "long-form",
            SessionMode::Streaming => "streaming",
        }
    }

    /// Whether this mode exposes an explicit submit action
    pub fn submits(&self) -> bool {
        matches!(self, SessionMode::LongForm)
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long-form" => Ok(SessionMode::LongForm),
            "streaming" => Ok(SessionMode::Streaming),
            other => Err(format!(
                "unknown mode '{}' (expected long-form or streaming)",
                other
            )),
        }
    }
}

/// Configuration for an upload session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Workflow variant (default: long-form)
    pub mode: SessionMode,

    /// Which files are accepted for upload (default: wav-only)
    pub accept: AcceptRule,
}
