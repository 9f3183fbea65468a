// ABOUTME: End-to-end speech playback example
// ABOUTME: Reads a base64 PCM payload, decodes it and plays it on the default device

use async_trait::async_trait;
use clap::Parser;
use coi_voice::audio::decode::decode_payload;
use coi_voice::audio::CpalOutput;
use coi_voice::chat::messages::SpeechRequest;
use coi_voice::chat::SpeechSynthesizer;
use coi_voice::config::Config;
use coi_voice::error::Error;
use coi_voice::speech::{SpeechOutcome, SpeechPlayer};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Play a base64-encoded 16-bit PCM speech payload
#[derive(Parser, Debug)]
#[command(name = "speak")]
#[command(about = "Decode a base64 PCM payload and play it", long_about = None)]
struct Args {
    /// File holding the base64 payload (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured sample rate
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Override the configured channel count
    #[arg(long)]
    channels: Option<u16>,

    /// Decode and report without opening an audio device
    #[arg(long)]
    dry_run: bool,
}

/// Serves an already-synthesized payload
struct StoredSpeech {
    payload: String,
}

#[async_trait]
impl SpeechSynthesizer for StoredSpeech {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Option<String>, Error> {
        log::debug!("Serving stored payload for voice {}", request.voice);
        Ok(Some(self.payload.clone()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(rate) = args.sample_rate {
        config.audio.sample_rate = rate;
    }
    if let Some(channels) = args.channels {
        config.audio.channels = channels;
    }
    config.validate()?;

    let payload = match &args.input {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    if args.dry_run {
        let buffer = decode_payload(&payload, &config.audio.format())?;
        println!(
            "Decoded {} frames x {} ch @ {} Hz ({:.2}s)",
            buffer.frames(),
            buffer.num_channels(),
            buffer.sample_rate(),
            buffer.duration().as_secs_f64()
        );
        return Ok(());
    }

    let mut player = SpeechPlayer::new(
        StoredSpeech { payload },
        |format: &coi_voice::AudioFormat| CpalOutput::new(*format),
        &config,
    );

    match player.speak("stored payload").await? {
        SpeechOutcome::Played { frames, duration } => {
            println!("Playing {} frames ({:.2}s)", frames, duration.as_secs_f64());
            // Let the device drain the queue before the stream is dropped
            tokio::time::sleep(duration + Duration::from_millis(250)).await;
        }
        SpeechOutcome::NoAudio => println!("No audio to play"),
    }

    Ok(())
}
