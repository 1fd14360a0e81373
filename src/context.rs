// src/context.rs
//! Stateful cipher context that holds an optional key and an optional IV
//!
//! A thin wrapper over the stateless functions in [`crate::crypto`].
//! Mutation needs `&mut self`; share across threads only behind a lock.
//! For stateless use, pass the key on every call and keep `reset_iv` on.

use std::fmt;

use crate::aliases::{Iv16, SecretKey32};
use crate::config::Config;
use crate::crypto::{decrypt_payload, encrypt_payload};
use crate::error::{CipherError, Result};
use crate::key_ops::{generate_iv, iv_from_slice, secret_key_from_slice};

#[derive(Default)]
pub struct CipherContext {
    key: Option<SecretKey32>,
    iv: Option<Iv16>,
}

impl CipherContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the key already set
    pub fn with_key(key: &[u8]) -> Result<Self> {
        let mut ctx = Self::new();
        ctx.set_key(key)?;
        Ok(ctx)
    }

    /// Seed key and IV from configuration; both are optional there
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_key(config, None)
    }

    /// Like [`CipherContext::from_config`], but a non-empty `key` wins over
    /// the configured key, which is then never validated
    pub fn from_config_with_key(config: &Config, key: Option<&[u8]>) -> Result<Self> {
        let mut ctx = Self::new();
        match key.filter(|k| !k.is_empty()) {
            Some(key) => ctx.set_key(key)?,
            None => {
                if let Some(key) = config.cipher.key.as_deref().filter(|k| !k.is_empty()) {
                    ctx.set_key(key.as_bytes())?;
                }
            }
        }
        if let Some(iv) = config.cipher.iv.as_deref().filter(|iv| !iv.is_empty()) {
            ctx.set_iv(Some(iv.as_bytes()))?;
        }
        Ok(ctx)
    }

    /// Replace the stored key; must be exactly 32 bytes
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.key = Some(secret_key_from_slice(key)?);

        #[cfg(feature = "logging")]
        tracing::debug!("secret key set");

        Ok(())
    }

    /// Replace the stored IV
    ///
    /// `None` or an empty slice generates a fresh random IV. Anything else
    /// must be exactly 16 bytes and is stored verbatim.
    pub fn set_iv(&mut self, iv: Option<&[u8]>) -> Result<()> {
        let iv = match iv {
            Some(bytes) if !bytes.is_empty() => iv_from_slice(bytes)?,
            _ => {
                #[cfg(feature = "logging")]
                tracing::trace!("generating random IV");

                generate_iv()?
            }
        };
        self.iv = Some(iv);
        Ok(())
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn has_iv(&self) -> bool {
        self.iv.is_some()
    }

    /// Forget the stored IV so the next `encrypt` draws a fresh one
    pub fn clear_iv(&mut self) {
        self.iv = None;
    }

    /// Encrypt `plaintext` into `base64(iv) || base64(ciphertext)`
    ///
    /// A non-empty `secret_key` replaces the stored key first. With
    /// `reset_iv` the IV is dropped after use; without it the same IV is
    /// reused by the next call, which is only safe with a different key.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        secret_key: Option<&[u8]>,
        reset_iv: bool,
    ) -> Result<String> {
        let key = resolve_key(&mut self.key, secret_key)?;
        let iv = match self.iv.take() {
            Some(iv) => iv,
            None => {
                #[cfg(feature = "logging")]
                tracing::trace!("generating random IV");

                generate_iv()?
            }
        };
        let iv = self.iv.insert(iv);
        let payload = encrypt_payload(plaintext, key, iv)?;

        if reset_iv {
            #[cfg(feature = "logging")]
            tracing::trace!("IV reset after encryption");

            self.iv = None;
        }
        Ok(payload)
    }

    /// Decrypt a payload produced by [`CipherContext::encrypt`]
    ///
    /// The IV is taken from the payload; the stored IV is left untouched.
    pub fn decrypt(&mut self, encoded: &str, secret_key: Option<&[u8]>) -> Result<Vec<u8>> {
        let key = resolve_key(&mut self.key, secret_key)?;
        decrypt_payload(encoded, key)
    }

    /// Text convenience over [`CipherContext::encrypt`]
    pub fn encrypt_str(
        &mut self,
        plaintext: &str,
        secret_key: Option<&str>,
        reset_iv: bool,
    ) -> Result<String> {
        self.encrypt(plaintext.as_bytes(), secret_key.map(str::as_bytes), reset_iv)
    }

    /// Text convenience over [`CipherContext::decrypt`]; plaintext must be UTF-8
    pub fn decrypt_to_string(&mut self, encoded: &str, secret_key: Option<&str>) -> Result<String> {
        let plaintext = self.decrypt(encoded, secret_key.map(str::as_bytes))?;
        Ok(String::from_utf8(plaintext)?)
    }
}

/// A non-empty per-call key replaces the stored one; otherwise the stored
/// key is used
fn resolve_key<'a>(
    slot: &'a mut Option<SecretKey32>,
    secret_key: Option<&[u8]>,
) -> Result<&'a SecretKey32> {
    if let Some(key) = secret_key.filter(|k| !k.is_empty()) {
        let key: &SecretKey32 = slot.insert(secret_key_from_slice(key)?);

        #[cfg(feature = "logging")]
        tracing::debug!("secret key set");

        return Ok(key);
    }
    slot.as_ref().ok_or(CipherError::KeyNotDefined)
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("iv", &self.iv.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
