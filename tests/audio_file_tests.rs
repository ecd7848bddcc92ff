// Integration tests for audio file loading and the accept rules
//
// These tests verify that files are read with the media type a browser
// would declare, and that each accept rule admits exactly the right files.

mod support;

use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use thai_asr_client::audio::mime_type_for_name;
use thai_asr_client::audio::validation::{ANY_AUDIO_REJECTION, WAV_ONLY_REJECTION};
use thai_asr_client::{AcceptRule, AudioFile};

#[test]
fn test_audio_file_open_wav() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("clip.wav");
    let bytes = support::wav_bytes(2)?;
    fs::write(&path, &bytes)?;

    let audio = AudioFile::open(&path)?;

    assert_eq!(audio.name, "clip.wav");
    assert_eq!(audio.mime_type, "audio/wav");
    assert_eq!(audio.bytes, bytes);

    let wav = audio.wav_info().expect("generated WAV should parse");
    assert_eq!(wav.sample_rate, 16000);
    assert_eq!(wav.channels, 1);
    assert!((wav.duration_seconds - 2.0).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_audio_file_open_derives_mime_from_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for (name, expected) in [
        ("song.mp3", "audio/mpeg"),
        ("LOUD.WAV", "audio/wav"),
        ("voice.m4a", "audio/mp4"),
        ("notes.txt", "application/octet-stream"),
    ] {
        let path = temp_dir.path().join(name);
        fs::write(&path, b"not really audio")?;

        let audio = AudioFile::open(&path)?;
        assert_eq!(audio.mime_type, expected, "mime type for {}", name);
        assert!(audio.wav_info().is_none(), "{} is not a WAV", name);
    }

    Ok(())
}

#[test]
fn test_audio_file_nonexistent() {
    let result = AudioFile::open("/nonexistent/path/to/audio.wav");
    assert!(result.is_err(), "Opening nonexistent file should fail");
}

#[test]
fn test_mime_type_for_name_without_extension() {
    assert_eq!(mime_type_for_name("README"), "application/octet-stream");
    assert_eq!(mime_type_for_name("take.flac"), "audio/flac");
}

#[test]
fn test_wav_only_accepts_type_or_extension() {
    let rule = AcceptRule::WavOnly;

    // Either the declared type or the extension is enough
    assert!(rule.accepts(&AudioFile::new("clip.wav", "audio/wav", vec![])));
    assert!(rule.accepts(&AudioFile::new("clip.WAV", "application/octet-stream", vec![])));
    assert!(rule.accepts(&AudioFile::new("recording", "audio/wav", vec![])));

    assert!(!rule.accepts(&AudioFile::new("clip.mp3", "audio/mpeg", vec![])));
    assert!(!rule.accepts(&AudioFile::new("clip.wav.mp3", "audio/x-wav", vec![])));
    assert!(!rule.accepts(&AudioFile::new("wav", "text/plain", vec![])));

    assert_eq!(rule.rejection_message(), WAV_ONLY_REJECTION);
}

#[test]
fn test_any_audio_accepts_audio_prefix() {
    let rule = AcceptRule::AnyAudio;

    assert!(rule.accepts(&AudioFile::new("clip.mp3", "audio/mpeg", vec![])));
    assert!(rule.accepts(&AudioFile::new("clip.ogg", "audio/ogg", vec![])));

    // The name plays no part under this rule
    assert!(!rule.accepts(&AudioFile::new("clip.wav", "application/octet-stream", vec![])));
    assert!(!rule.accepts(&AudioFile::new("movie.mp4", "video/mp4", vec![])));

    assert_eq!(rule.rejection_message(), ANY_AUDIO_REJECTION);
}

#[test]
fn test_accept_rule_parsing() {
    assert_eq!("wav-only".parse::<AcceptRule>(), Ok(AcceptRule::WavOnly));
    assert_eq!("any-audio".parse::<AcceptRule>(), Ok(AcceptRule::AnyAudio));
    assert!("audio/*".parse::<AcceptRule>().is_err());
    assert_eq!(AcceptRule::default(), AcceptRule::WavOnly);
}
