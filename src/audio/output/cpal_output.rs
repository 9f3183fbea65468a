// ABOUTME: cpal-based audio output
// ABOUTME: Opens the default device paused and feeds it interleaved f32 samples from a shared queue

use crate::audio::output::{ensure_format, AudioOutput, OutputState};
use crate::audio::{AudioBuffer, AudioFormat};
use crate::error::Error;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, Stream, StreamConfig};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Audio output on the host's default device
///
/// The stream is built paused, so a fresh output reports
/// [`OutputState::Suspended`] until [`AudioOutput::resume`] is called.
/// `Stream` is `!Send`; keep the output on the thread that created it.
pub struct CpalOutput {
    stream: Stream,
    queue: Arc<Mutex<VecDeque<f32>>>,
    format: AudioFormat,
    state: OutputState,
}

impl CpalOutput {
    /// Open the default output device at `format`
    pub fn new(format: AudioFormat) -> Result<Self, Error> {
        format.validate()?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Output("No audio output device found".to_string()))?;

        let config = StreamConfig {
            channels: format.channels,
            sample_rate: SampleRate(format.sample_rate),
            buffer_size: BufferSize::Default,
        };

        let queue: Arc<Mutex<VecDeque<f32>>> = Arc::new(Mutex::new(VecDeque::new()));
        let queue_cb = Arc::clone(&queue);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut queue = queue_cb.lock();
                    for sample in data.iter_mut() {
                        *sample = queue.pop_front().unwrap_or(0.0);
                    }
                },
                |err| {
                    log::error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| Error::Output(format!("Failed to build output stream: {}", e)))?;

        // Some hosts start streams on creation
        stream
            .pause()
            .map_err(|e| Error::Output(format!("Failed to suspend new stream: {}", e)))?;

        log::info!(
            "Audio output opened: {} Hz, {} ch",
            format.sample_rate,
            format.channels
        );

        Ok(Self {
            stream,
            queue,
            format,
            state: OutputState::Suspended,
        })
    }

    /// Samples still waiting to be pulled by the device
    pub fn pending_samples(&self) -> usize {
        self.queue.lock().len()
    }
}

impl AudioOutput for CpalOutput {
    fn state(&self) -> OutputState {
        self.state
    }

    fn resume(&mut self) -> Result<(), Error> {
        match self.state {
            OutputState::Running => Ok(()),
            OutputState::Closed => Err(Error::Output("Output is closed".to_string())),
            OutputState::Suspended => {
                self.stream
                    .play()
                    .map_err(|e| Error::Output(format!("Failed to start playback: {}", e)))?;
                self.state = OutputState::Running;
                log::debug!("Audio output resumed");
                Ok(())
            }
        }
    }

    fn play(&mut self, buffer: &AudioBuffer) -> Result<(), Error> {
        if self.state == OutputState::Closed {
            return Err(Error::Output("Output is closed".to_string()));
        }
        ensure_format(&self.format, buffer)?;

        self.queue.lock().extend(buffer.interleaved());
        log::debug!(
            "Queued {} frames ({:?}) for playback",
            buffer.frames(),
            buffer.duration()
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.state == OutputState::Closed {
            return Ok(());
        }
        self.state = OutputState::Closed;
        self.queue.lock().clear();
        self.stream
            .pause()
            .map_err(|e| Error::Output(format!("Failed to stop playback: {}", e)))
    }

    fn format(&self) -> &AudioFormat {
        &self.format
    }
}
