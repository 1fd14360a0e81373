// src/lib.rs
//! cbc-payload: AES-256-CBC string encryption with an embedded IV
//!
//! Features:
//! - AES-256-CBC with PKCS#7 padding
//! - Self-describing payload: `base64(iv) || base64(ciphertext)`
//! - Stateless functions plus a reusable `CipherContext`
//! - Zeroizing key/IV types

pub mod aliases;
pub mod config;
pub mod consts;
pub mod context;
pub mod crypto;
pub mod error;
pub mod key_ops;
pub mod payload;

// Re-export everything users need at the crate root
pub use aliases::{Iv16, SecretKey32};
pub use config::load as load_config;
pub use context::CipherContext;
pub use crypto::{decrypt_payload, encrypt_payload};
pub use error::{CipherError, Result};
pub use key_ops::{generate_iv, generate_key};
