// src/crypto/decrypt.rs
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::aliases::{Iv16, SecretKey32};
use crate::error::{CipherError, Result};
use crate::payload::decode_payload;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256-CBC decrypt and strip PKCS#7 padding → plaintext (in-memory)
///
/// A padding failure is the only tamper signal this scheme has; it also
/// covers a wrong key or IV and ciphertext that is not block aligned.
pub fn decrypt_to_vec(ciphertext: &[u8], key: &SecretKey32, iv: &Iv16) -> Result<Vec<u8>> {
    let decryptor = Aes256CbcDec::new_from_slices(key.expose_secret(), iv.expose_secret())
        .map_err(|e| CipherError::CipherOperationFailed(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| CipherError::CipherOperationFailed(e.to_string()))
}

/// Decrypt a `base64(iv) || base64(ciphertext)` payload → plaintext
///
/// The IV always comes from the payload itself.
pub fn decrypt_payload(encoded: &str, key: &SecretKey32) -> Result<Vec<u8>> {
    let (iv, ciphertext) = decode_payload(encoded)?;
    let plaintext = decrypt_to_vec(&ciphertext, key, &iv);

    #[cfg(feature = "logging")]
    match &plaintext {
        Ok(p) => tracing::debug!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = p.len(),
            "decrypted payload"
        ),
        Err(e) => tracing::warn!(error = %e, "payload failed to decrypt"),
    }

    plaintext
}
