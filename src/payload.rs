// src/payload.rs
//! Payload framing: `base64(iv) || base64(ciphertext)`
//!
//! The two segments are encoded independently and joined with no
//! delimiter. Decoding never splits the text; it decodes every padded
//! Base64 group back to bytes and then splits the bytes at offset 16.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::Iv16;
use crate::consts::IV_LEN;
use crate::error::{CipherError, Result};
use crate::key_ops::iv_from_slice;

/// Assemble the transportable payload string
pub fn encode_payload(iv: &Iv16, ciphertext: &[u8]) -> String {
    let mut out = STANDARD.encode(iv.expose_secret());
    STANDARD.encode_string(ciphertext, &mut out);
    out
}

/// Decode a payload into its IV and raw ciphertext
pub fn decode_payload(encoded: &str) -> Result<(Iv16, Vec<u8>)> {
    let decoded = decode_concatenated(encoded)?;
    if decoded.len() <= IV_LEN {
        #[cfg(feature = "logging")]
        tracing::warn!(decoded_len = decoded.len(), "payload too short");
        return Err(CipherError::PayloadCorrupted(format!(
            "decoded length {} must exceed {IV_LEN} bytes",
            decoded.len()
        )));
    }

    let (iv, ciphertext) = decoded.split_at(IV_LEN);
    Ok((iv_from_slice(iv)?, ciphertext.to_vec()))
}

/// Decode a string made of one or more padded Base64 segments
///
/// ASCII whitespace is ignored so line-wrapped encoder output still decodes.
pub(crate) fn decode_concatenated(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let mut out = Vec::with_capacity(compact.len() / 4 * 3);
    for segment in padded_segments(&compact) {
        STANDARD
            .decode_vec(segment, &mut out)
            .map_err(|e| CipherError::PayloadCorrupted(e.to_string()))?;
    }
    Ok(out)
}

/// Split after every run of `=` so each piece carries its own padding
fn padded_segments(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'=' {
            i += 1;
            continue;
        }
        while i < bytes.len() && bytes[i] == b'=' {
            i += 1;
        }
        segments.push(&text[start..i]);
        start = i;
    }
    if start < bytes.len() {
        segments.push(&text[start..]);
    }
    segments
}
