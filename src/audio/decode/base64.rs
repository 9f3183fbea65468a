// ABOUTME: Base64 decoding for speech payloads
// ABOUTME: Accepts what a browser atob() accepts: full or absent padding, embedded whitespace

use crate::error::Error;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};
use std::borrow::Cow;

/// Standard alphabet, padding optional, lenient about trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64 payload into raw bytes
///
/// ASCII whitespace anywhere in the input is skipped. Padding may be left off
/// entirely, but when present the padded length must be a multiple of 4.
/// Characters outside the standard alphabet, partial or misplaced padding and
/// an impossible length fail with [`Error::Decode`].
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, Error> {
    let compact: Cow<'_, [u8]> = if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(
            payload
                .bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .collect(),
        )
    } else {
        Cow::Borrowed(payload.as_bytes())
    };

    if compact.contains(&b'=') && compact.len() % 4 != 0 {
        return Err(Error::Decode(DecodeError::InvalidPadding));
    }

    let bytes = LENIENT.decode(&*compact)?;

    log::trace!("Decoded {} base64 chars into {} bytes", payload.len(), bytes.len());
    Ok(bytes)
}

/// Encode bytes as standard padded base64
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
