// src/key_ops.rs
//! Key and IV construction utilities
//!
//! Validated conversions from caller-supplied bytes into the fixed-size
//! secret types, plus OS-backed generation of fresh material.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::aliases::{Iv16, SecretKey32};
use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::{CipherError, Result};

/// Validate `key` as raw AES-256 key material
pub fn secret_key_from_slice(key: &[u8]) -> Result<SecretKey32> {
    let bytes: [u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| CipherError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
    Ok(SecretKey32::new(bytes))
}

/// Validate `iv` as a CBC initialization vector
pub fn iv_from_slice(iv: &[u8]) -> Result<Iv16> {
    let bytes: [u8; IV_LEN] = iv.try_into().map_err(|_| CipherError::InvalidIvLength {
        expected: IV_LEN,
        actual: iv.len(),
    })?;
    Ok(Iv16::new(bytes))
}

/// Draw a fresh IV from the operating system CSPRNG
pub fn generate_iv() -> Result<Iv16> {
    let mut iv = [0u8; IV_LEN];
    fill_from_os(&mut iv)?;
    Ok(Iv16::new(iv))
}

/// Generate a new random 256-bit key
pub fn generate_key() -> Result<SecretKey32> {
    let mut key = [0u8; KEY_LEN];
    fill_from_os(&mut key)?;
    Ok(SecretKey32::new(key))
}

fn fill_from_os(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CipherError::RandomSourceUnavailable(e.to_string()))
}
