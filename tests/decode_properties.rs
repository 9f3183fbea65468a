use coi_voice::audio::decode::{decode_base64, encode_base64, Decoder, PcmDecoder};
use coi_voice::audio::Sample;
use proptest::prelude::*;

proptest! {
    #[test]
    fn base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_base64(&bytes);
        let decoded = decode_base64(&encoded).unwrap();
        prop_assert_eq!(&decoded, &bytes);
        prop_assert_eq!(encode_base64(&decoded), encoded.clone());

        // Dropping the padding must not change the result
        let unpadded = encoded.trim_end_matches('=');
        prop_assert_eq!(decode_base64(unpadded).unwrap(), bytes);
    }

    #[test]
    fn pcm_samples_survive_normalization(
        channels in 1u16..=6,
        frames in 1usize..128,
        seed in prop::collection::vec(any::<i16>(), 6 * 128),
    ) {
        let samples = &seed[..frames * channels as usize];
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

        let buffer = PcmDecoder::new(24_000, channels).decode(&bytes).unwrap();
        prop_assert_eq!(buffer.frames(), frames);

        for i in 0..frames {
            for c in 0..channels as usize {
                let original = samples[i * channels as usize + c] as i32;
                let restored = Sample::from_f32(buffer.channel(c).unwrap()[i]).0 as i32;
                prop_assert!((original - restored).abs() <= 1);
            }
        }
    }

    #[test]
    fn pcm_partial_frames_are_truncated(
        channels in 2u16..=6,
        samples in prop::collection::vec(any::<i16>(), 2..64),
    ) {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        let expected_frames = samples.len() / channels as usize;

        let result = PcmDecoder::new(24_000, channels).decode(&bytes);
        if expected_frames == 0 {
            prop_assert!(result.is_err());
        } else {
            let buffer = result.unwrap();
            prop_assert_eq!(buffer.frames(), expected_frames);
            prop_assert_eq!(buffer.interleaved().len(), expected_frames * channels as usize);
        }
    }
}
