use crate::audio::AcceptRule;
use crate::session::{SessionConfig, SessionMode};
use anyhow::{ensure, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/thai-asr-client";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub backend: BackendConfig,
    pub upload: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and port of the transcription service, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Whole-request timeout; must be non-zero
    pub timeout_secs: u64,
}

impl Config {
    /// Load `path` (any extension the config crate understands) over the
    /// built-in defaults. A missing file is not an error.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "thai-asr-client")?
            .set_default("backend.base_url", "http://127.0.0.1:8000")?
            .set_default("backend.timeout_secs", 120)?
            .set_default("upload.mode", SessionMode::LongForm.as_str())?
            .set_default("upload.accept", AcceptRule::WavOnly.as_str())?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        ensure!(
            cfg.backend.timeout_secs > 0,
            "backend.timeout_secs must be greater than zero"
        );

        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "thai-asr-client".to_string(),
            },
            backend: BackendConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
                timeout_secs: 120,
            },
            upload: SessionConfig::default(),
        }
    }
}
