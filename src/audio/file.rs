use anyhow::{Context, Result};
use hound::WavReader;
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// An audio file picked for upload: name, declared media type and raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Header facts read from a WAV container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavInfo {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, declaring its media type from the extension
    /// the way a browser file picker does.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening audio file: {}", path.display());

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Path has no file name: {}", path.display()))?;

        let mime_type = mime_type_for_name(&name).to_string();

        info!("Audio file loaded: {} ({}, {} bytes)", name, mime_type, bytes.len());

        Ok(Self {
            name,
            mime_type,
            bytes,
        })
    }

    /// Replace the declared media type (e.g. when the caller knows better than the extension).
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Probe the bytes as WAV. Returns `None` for anything hound cannot parse.
    pub fn wav_info(&self) -> Option<WavInfo> {
        let reader = WavReader::new(Cursor::new(self.bytes.as_slice())).ok()?;
        let spec = reader.spec();
        let frames = reader.duration();

        Some(WavInfo {
            duration_seconds: frames as f64 / spec.sample_rate as f64,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }
}

// Bytes are elided so a staged file can be logged and asserted on.
impl fmt::Debug for AudioFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Media type a browser would report for a file with this name.
pub fn mime_type_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") | Some("oga") | Some("opus") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}
