use coi_voice::audio::{AudioBuffer, AudioFormat, Sample};
use coi_voice::error::Error;
use std::time::Duration;

#[test]
fn test_sample_from_le_bytes() {
    assert_eq!(Sample::from_le_bytes([0x00, 0x04]).0, 1024);
    assert_eq!(Sample::from_le_bytes([0xFF, 0xFF]).0, -1);
    assert_eq!(Sample::from_le_bytes([0x00, 0x80]), Sample::MIN);
}

#[test]
fn test_sample_normalization() {
    assert_eq!(Sample::MIN.to_f32(), -1.0);
    assert_eq!(Sample::ZERO.to_f32(), 0.0);
    assert!(Sample::MAX.to_f32() < 1.0);
}

#[test]
fn test_sample_from_f32_clamps() {
    assert_eq!(Sample::from_f32(1.0), Sample::MAX);
    assert_eq!(Sample::from_f32(-2.0), Sample::MIN);
    assert_eq!(Sample::from_f32(0.5).0, 16384);
}

#[test]
fn test_audio_format_default_is_speech() {
    let format = AudioFormat::default();

    assert_eq!(format.sample_rate, 24_000);
    assert_eq!(format.channels, 1);
    assert!(format.validate().is_ok());
}

#[test]
fn test_audio_buffer_accessors() {
    let format = AudioFormat::new(48_000, 2);
    let buffer = AudioBuffer::from_planar(
        format,
        vec![vec![0.1, 0.2, 0.3], vec![-0.1, -0.2, -0.3]],
    )
    .unwrap();

    assert_eq!(buffer.frames(), 3);
    assert_eq!(buffer.num_channels(), 2);
    assert_eq!(buffer.format(), &format);
    assert_eq!(buffer.interleaved(), vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3]);
}

#[test]
fn test_audio_buffer_duration() {
    let buffer = AudioBuffer::from_planar(AudioFormat::SPEECH, vec![vec![0.0; 12_000]]).unwrap();
    assert_eq!(buffer.duration(), Duration::from_millis(500));
}

#[test]
fn test_audio_buffer_rejects_channel_mismatch() {
    let result = AudioBuffer::from_planar(AudioFormat::new(24_000, 2), vec![vec![0.0; 4]]);
    assert!(matches!(result, Err(Error::InvalidFormat(_))));
}

#[test]
fn test_audio_buffer_rejects_ragged_channels() {
    let result = AudioBuffer::from_planar(
        AudioFormat::new(24_000, 2),
        vec![vec![0.0; 4], vec![0.0; 3]],
    );
    assert!(matches!(result, Err(Error::MalformedAudio(_))));
}
