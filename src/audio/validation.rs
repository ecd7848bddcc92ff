use super::file::AudioFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WAV_MIME_TYPE: &str = "audio/wav";
pub const WAV_EXTENSION: &str = ".wav";
pub const AUDIO_MIME_PREFIX: &str = "audio/";

pub const WAV_ONLY_REJECTION: &str = "FILE TYPE ERROR: Please upload ONLY .wav audio file!";
pub const ANY_AUDIO_REJECTION: &str = "FILE TYPE ERROR: Please upload ONLY AUDIO file!";

/// Which files a session accepts for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcceptRule {
    /// `audio/wav`, or any name ending in `.wav` (case-insensitive). Either suffices.
    #[default]
    WavOnly,
    /// Any declared `audio/*` media type.
    AnyAudio,
}

impl AcceptRule {
    pub fn accepts(&self, file: &AudioFile) -> bool {
        match self {
            AcceptRule::WavOnly => {
                file.mime_type == WAV_MIME_TYPE
                    || file.name.to_lowercase().ends_with(WAV_EXTENSION)
            }
            AcceptRule::AnyAudio => file.mime_type.starts_with(AUDIO_MIME_PREFIX),
        }
    }

    /// Fixed message shown when a file is rejected.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            AcceptRule::WavOnly => WAV_ONLY_REJECTION,
            AcceptRule::AnyAudio => ANY_AUDIO_REJECTION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AcceptRule::WavOnly => "wav-only",
            AcceptRule::AnyAudio => "any-audio",
        }
    }
}

impl fmt::Display for AcceptRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcceptRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wav-only" => Ok(AcceptRule::WavOnly),
            "any-audio" => Ok(AcceptRule::AnyAudio),
            other => Err(format!(
                "unknown accept rule '{}' (expected wav-only or any-audio)",
                other
            )),
        }
    }
}
