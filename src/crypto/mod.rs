// src/crypto/mod.rs
//! Pure cryptographic operations with no state and no I/O
//!
//! Everything here takes key and IV explicitly and works on in-memory
//! buffers. `CipherContext` is a thin stateful wrapper over these.

mod decrypt;
mod encrypt;

pub use decrypt::{decrypt_payload, decrypt_to_vec};
pub use encrypt::{encrypt_payload, encrypt_to_vec};
