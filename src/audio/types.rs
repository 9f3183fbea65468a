// ABOUTME: Core audio type definitions
// ABOUTME: Sample (16-bit), AudioFormat, planar AudioBuffer handed to the playback subsystem

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 16-bit signed PCM sample
/// Range: -32768 to 32767
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Sample(pub i16);

impl Sample {
    pub const MAX: Self = Self(i16::MAX);
    pub const MIN: Self = Self(i16::MIN);
    pub const ZERO: Self = Self(0);

    /// Full-scale divisor used when normalizing to floating point
    pub const SCALE: f32 = 32768.0;

    /// Convert from 16-bit little-endian bytes (low byte first)
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(i16::from_le_bytes(bytes))
    }

    /// Normalize to approximately [-1.0, 1.0)
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE
    }

    /// Quantize a normalized value back to 16 bits, rounding to nearest
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        let scaled = (value * Self::SCALE).round();
        Self(scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16)
    }
}

/// Audio format specification
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioFormat {
    /// Fixed output format of the remote speech model: 24 kHz mono
    pub const SPEECH: Self = Self {
        sample_rate: 24_000,
        channels: 1,
    };

    /// Create a new format
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Reject formats no playback subsystem can construct a buffer for
    pub fn validate(&self) -> Result<(), Error> {
        if self.channels == 0 {
            return Err(Error::InvalidFormat(
                "channel count must be at least 1".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidFormat(
                "sample rate must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::SPEECH
    }
}

/// Decoded audio: one normalized f32 buffer per channel, all of equal length
#[derive(Clone, Debug, PartialEq)]
pub struct AudioBuffer {
    format: AudioFormat,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Build a buffer from planar channel data
    ///
    /// The number of channel buffers must match `format.channels` and every
    /// channel must hold the same number of frames.
    pub fn from_planar(format: AudioFormat, channels: Vec<Vec<f32>>) -> Result<Self, Error> {
        format.validate()?;
        if channels.len() != format.channels as usize {
            return Err(Error::InvalidFormat(format!(
                "expected {} channel buffers, got {}",
                format.channels,
                channels.len()
            )));
        }
        let frames = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != frames) {
            return Err(Error::MalformedAudio(
                "channel buffers differ in length".to_string(),
            ));
        }
        Ok(Self { format, channels })
    }

    /// Format this buffer was tagged with
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    pub fn num_channels(&self) -> u16 {
        self.format.channels
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Samples of one channel, or `None` if the index is out of range
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Playback length at the tagged sample rate
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / self.format.sample_rate as f64)
    }

    /// Re-interleave into frame order (ch0, ch1, ..., ch0, ch1, ...)
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            for channel in &self.channels {
                out.push(channel[i]);
            }
        }
        out
    }
}
