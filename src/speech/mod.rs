// ABOUTME: Text-to-speech playback for agent replies
// ABOUTME: Fetches speech, decodes it and plays it on a lazily created output

/// Speech player owning the memoized audio output
pub mod player;

pub use player::{SpeechOutcome, SpeechPlayer};
