// ABOUTME: Main library entry point for coi-voice
// ABOUTME: Exports the speech decode pipeline, chat session and playback orchestration

//! # coi-voice
//!
//! Speech pipeline behind the COI (Career Optimization Interface) chat agent.
//!
//! Replies from a remote text model can be voiced through a remote speech
//! model. The speech comes back as base64-encoded 16-bit little-endian PCM,
//! which this crate decodes into planar floating-point audio buffers and hands
//! to an audio output that is created once and reused.

#![warn(missing_docs)]

/// Audio types, decoders and outputs
pub mod audio;
/// Conversation state and the remote model boundary
pub mod chat;
/// Runtime configuration
pub mod config;
/// Text-to-speech playback orchestration
pub mod speech;

pub use audio::decode::{decode_base64, decode_payload, Decoder, PcmDecoder};
pub use audio::{AudioBuffer, AudioFormat, AudioOutput, OutputState, Sample};
pub use chat::{ChatMessage, ChatMode, ChatSession, Role};
pub use config::Config;
pub use speech::{SpeechOutcome, SpeechPlayer};

/// Result type for coi-voice operations
pub type Result<T> = std::result::Result<T, error::Error>;

/// Error types for coi-voice
pub mod error {
    use thiserror::Error;

    /// Error types for coi-voice operations
    #[derive(Error, Debug)]
    pub enum Error {
        /// Payload is not valid base64
        #[error("Base64 decode error: {0}")]
        Decode(#[from] base64::DecodeError),

        /// Byte buffer cannot be read as 16-bit PCM
        #[error("Malformed audio: {0}")]
        MalformedAudio(String),

        /// Sample rate or channel layout is unusable
        #[error("Invalid audio format: {0}")]
        InvalidFormat(String),

        /// Audio output error
        #[error("Audio output error: {0}")]
        Output(String),

        /// Remote text or speech model failed
        #[error("Collaborator error: {0}")]
        Collaborator(String),

        /// Configuration could not be read or parsed
        #[error("Config error: {0}")]
        Config(String),
    }
}
