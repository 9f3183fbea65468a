// ABOUTME: PCM decoder implementation
// ABOUTME: Reads interleaved 16-bit little-endian PCM into normalized planar channel buffers

use crate::audio::decode::Decoder;
use crate::audio::{AudioBuffer, AudioFormat, Sample};
use crate::error::Error;

/// 16-bit little-endian PCM decoder producing planar f32 buffers
#[derive(Clone, Debug)]
pub struct PcmDecoder {
    format: AudioFormat,
}

impl PcmDecoder {
    /// Create a decoder tagging its output with `sample_rate` and `channels`
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self::from_format(AudioFormat::new(sample_rate, channels))
    }

    pub fn from_format(format: AudioFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &AudioFormat {
        &self.format
    }
}

impl Default for PcmDecoder {
    /// 24 kHz mono
    fn default() -> Self {
        Self::from_format(AudioFormat::SPEECH)
    }
}

impl Decoder for PcmDecoder {
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, Error> {
        self.format.validate()?;

        if data.is_empty() {
            return Err(Error::MalformedAudio("empty PCM buffer".to_string()));
        }
        if data.len() % 2 != 0 {
            return Err(Error::MalformedAudio(format!(
                "odd PCM byte length: {}",
                data.len()
            )));
        }

        let channels = self.format.channels as usize;
        let total_samples = data.len() / 2;
        let frames = total_samples / channels;

        if frames == 0 {
            return Err(Error::MalformedAudio(format!(
                "{} samples do not fill a single {}-channel frame",
                total_samples, channels
            )));
        }

        let dropped = total_samples - frames * channels;
        if dropped > 0 {
            log::debug!(
                "Dropping {} trailing samples of an incomplete {}-channel frame",
                dropped,
                channels
            );
        }

        let mut planar: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();

        // Frame i, channel c lives at flat sample index i * channels + c
        for frame in data.chunks_exact(2 * channels) {
            for (c, bytes) in frame.chunks_exact(2).enumerate() {
                planar[c].push(Sample::from_le_bytes([bytes[0], bytes[1]]).to_f32());
            }
        }

        AudioBuffer::from_planar(self.format, planar)
    }
}
