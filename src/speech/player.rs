// ABOUTME: Speech player for agent replies
// ABOUTME: Synthesize -> base64 decode -> PCM decode -> resume output -> play

use crate::audio::decode::decode_payload;
use crate::audio::{AudioFormat, AudioOutput, OutputState};
use crate::chat::client::SpeechSynthesizer;
use crate::chat::messages::SpeechRequest;
use crate::config::{Config, ModelConfig};
use crate::error::Error;
use std::time::Duration;

/// What a `speak` call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechOutcome {
    /// The speech model returned no audio; nothing was played
    NoAudio,
    /// Audio was decoded and queued on the output
    Played {
        /// Frames per channel
        frames: usize,
        duration: Duration,
    },
}

/// Plays synthesized speech for chat replies
///
/// The audio output is created through `factory` the first time a reply
/// decodes successfully and is reused by later calls. A closed output is
/// replaced on the next call.
pub struct SpeechPlayer<S, F, O> {
    synthesizer: S,
    factory: F,
    output: Option<O>,
    format: AudioFormat,
    models: ModelConfig,
}

impl<S, F, O> SpeechPlayer<S, F, O>
where
    S: SpeechSynthesizer,
    F: FnMut(&AudioFormat) -> Result<O, Error>,
    O: AudioOutput,
{
    pub fn new(synthesizer: S, factory: F, config: &Config) -> Self {
        Self {
            synthesizer,
            factory,
            output: None,
            format: config.audio.format(),
            models: config.models.clone(),
        }
    }

    /// Format speech payloads are decoded at
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    /// Whether the output has been created yet
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> Option<&mut O> {
        self.output.as_mut()
    }

    /// Voice `text` through the speech model
    ///
    /// Decode failures are returned before any output is touched, so a bad
    /// payload never opens a device or starts playback.
    pub async fn speak(&mut self, text: &str) -> Result<SpeechOutcome, Error> {
        let request = SpeechRequest::new(text, &self.models);

        let payload = match self.synthesizer.synthesize(&request).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::warn!("Speech model returned no audio");
                return Ok(SpeechOutcome::NoAudio);
            }
            Err(e) => {
                log::error!("Speech synthesis failed: {}", e);
                return Err(e);
            }
        };

        let buffer = decode_payload(&payload, &self.format).map_err(|e| {
            log::error!("Speech decode failed: {}", e);
            e
        })?;

        let output = self.ensure_output()?;

        if output.state() == OutputState::Suspended {
            output.resume().map_err(|e| {
                log::error!("Audio output resume failed: {}", e);
                e
            })?;
        }

        output.play(&buffer).map_err(|e| {
            log::error!("Speech playback failed: {}", e);
            e
        })?;

        log::info!(
            "Playing {} frames ({:.2}s) of speech",
            buffer.frames(),
            buffer.duration().as_secs_f64()
        );

        Ok(SpeechOutcome::Played {
            frames: buffer.frames(),
            duration: buffer.duration(),
        })
    }

    fn ensure_output(&mut self) -> Result<&mut O, Error> {
        let reusable = matches!(&self.output, Some(o) if o.state() != OutputState::Closed);
        if !reusable {
            let created = (self.factory)(&self.format).map_err(|e| {
                log::error!("Failed to create audio output: {}", e);
                e
            })?;
            log::info!("Audio output initialized");
            self.output = Some(created);
        }
        self.output
            .as_mut()
            .ok_or_else(|| Error::Output("Audio output unavailable".to_string()))
    }
}
