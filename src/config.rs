// ABOUTME: Runtime configuration for coi-voice
// ABOUTME: TOML-backed audio format and remote model settings with sensible defaults

use crate::audio::AudioFormat;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
///
/// Every section and field has a default, so a partial file such as
///
/// ```toml
/// [audio]
/// sample_rate = 48000
/// ```
///
/// is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub models: ModelConfig,
}

/// Format of the PCM returned by the speech model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: AudioFormat::SPEECH.sample_rate,
            channels: AudioFormat::SPEECH.channels,
        }
    }
}

impl AudioConfig {
    pub fn format(&self) -> AudioFormat {
        AudioFormat::new(self.sample_rate, self.channels)
    }
}

/// Remote model names and generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Text model for fast replies
    pub fast: String,
    /// Text model for extended reasoning
    pub think: String,
    /// Token budget granted to the reasoning model
    pub thinking_budget: u32,
    /// Speech synthesis model
    pub speech: String,
    /// Prebuilt voice used for synthesis
    pub voice: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            fast: "gemini-3-flash-preview".to_string(),
            think: "gemini-3-pro-preview".to_string(),
            thinking_budget: 32_768,
            speech: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Kore".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.audio
            .format()
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        let names = [
            ("models.fast", &self.models.fast),
            ("models.think", &self.models.think),
            ("models.speech", &self.models.speech),
            ("models.voice", &self.models.voice),
        ];
        if let Some((key, _)) = names.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::Config(format!("{} must not be empty", key)));
        }
        Ok(())
    }
}
