// ABOUTME: Audio output trait and implementations
// ABOUTME: Provides abstraction over platform audio APIs (cpal) with suspended/running lifecycle

/// cpal-based audio output implementation
#[cfg(feature = "playback")]
pub mod cpal_output;

#[cfg(feature = "playback")]
pub use cpal_output::CpalOutput;

use crate::audio::{AudioBuffer, AudioFormat};
use crate::error::Error;

/// Lifecycle of an audio output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    /// Created but not producing sound; needs an explicit `resume()`
    Suspended,
    /// Stream is live
    Running,
    /// Torn down, cannot be resumed
    Closed,
}

/// Audio output for playing decoded buffers
pub trait AudioOutput {
    /// Current lifecycle state
    fn state(&self) -> OutputState;

    /// Transition from `Suspended` to `Running`
    ///
    /// Resuming a running output is a no-op.
    fn resume(&mut self) -> Result<(), Error>;

    /// Queue a buffer for playback
    fn play(&mut self, buffer: &AudioBuffer) -> Result<(), Error>;

    /// Stop the output for good; later `resume()`/`play()` calls fail
    fn close(&mut self) -> Result<(), Error>;

    /// Get the audio format this output expects
    fn format(&self) -> &AudioFormat;
}

/// Check a buffer against the format an output was opened with
pub fn ensure_format(expected: &AudioFormat, buffer: &AudioBuffer) -> Result<(), Error> {
    if buffer.format() != expected {
        return Err(Error::Output(format!(
            "buffer is {} Hz / {} ch but output expects {} Hz / {} ch",
            buffer.sample_rate(),
            buffer.num_channels(),
            expected.sample_rate,
            expected.channels
        )));
    }
    Ok(())
}
