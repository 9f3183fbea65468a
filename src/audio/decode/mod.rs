// ABOUTME: Audio decoder implementations
// ABOUTME: Base64 payload decoding and 16-bit PCM to planar buffer decoding

/// Base64 payload decoder
pub mod base64;
/// PCM decoder implementation
pub mod pcm;

pub use self::base64::{decode_base64, encode_base64};
pub use pcm::PcmDecoder;

use crate::audio::{AudioBuffer, AudioFormat};
use crate::error::Error;

/// Decoder trait for raw audio bytes
pub trait Decoder {
    /// Decode raw audio data into a playable buffer
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, Error>;
}

/// Decode a base64 PCM payload straight into a buffer at `format`
pub fn decode_payload(payload: &str, format: &AudioFormat) -> Result<AudioBuffer, Error> {
    let bytes = decode_base64(payload)?;
    PcmDecoder::from_format(*format).decode(&bytes)
}
