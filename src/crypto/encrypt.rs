// src/crypto/encrypt.rs
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};

use crate::aliases::{Iv16, SecretKey32};
use crate::error::{CipherError, Result};
use crate::payload::encode_payload;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// AES-256-CBC encrypt with PKCS#7 padding → raw ciphertext (in-memory)
pub fn encrypt_to_vec(plaintext: &[u8], key: &SecretKey32, iv: &Iv16) -> Result<Vec<u8>> {
    let encryptor = Aes256CbcEnc::new_from_slices(key.expose_secret(), iv.expose_secret())
        .map_err(|e| CipherError::CipherOperationFailed(e.to_string()))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Encrypt plaintext → `base64(iv) || base64(ciphertext)`
///
/// Stateless: the caller owns both key and IV. Reusing an IV with the
/// same key leaks equality of plaintext prefixes.
pub fn encrypt_payload(plaintext: &[u8], key: &SecretKey32, iv: &Iv16) -> Result<String> {
    let ciphertext = encrypt_to_vec(plaintext, key, iv)?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted payload"
    );

    Ok(encode_payload(iv, &ciphertext))
}
