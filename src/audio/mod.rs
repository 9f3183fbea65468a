// ABOUTME: Audio types and processing for coi-voice
// ABOUTME: Contains Sample type, AudioFormat, planar AudioBuffer, decoders and outputs

/// Base64 and PCM decoders
pub mod decode;
/// Audio output trait and implementations
pub mod output;
/// Core audio type definitions (Sample, AudioFormat, AudioBuffer)
pub mod types;

#[cfg(feature = "playback")]
pub use output::CpalOutput;
pub use output::{AudioOutput, OutputState};
pub use types::{AudioBuffer, AudioFormat, Sample};
