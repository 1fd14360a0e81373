// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Secret key should be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("IV should be {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("Secret key is not defined")]
    KeyNotDefined,

    #[error("Encoded payload is manipulated or corrupted: {0}")]
    PayloadCorrupted(String),

    #[error("Cipher operation failed: {0}")]
    CipherOperationFailed(String),

    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Decrypted plaintext is not valid UTF-8")]
    PlaintextNotUtf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CipherError {
    fn from(err: toml::de::Error) -> Self {
        CipherError::Config(err.to_string())
    }
}
