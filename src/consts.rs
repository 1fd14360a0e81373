// src/consts.rs
//! Shared constants: cipher parameters and defaults

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// CBC IV length in bytes (one AES block)
pub const IV_LEN: usize = 16;

/// Length of the Base64 IV segment at the front of every payload
// 16 bytes → 5 full quanta + 1 byte → 24 chars ending in "=="
pub const ENCODED_IV_LEN: usize = 24;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "CBCP_CONFIG";

/// Environment variable overriding the configured secret key
pub const KEY_ENV: &str = "CBCP_KEY";

/// Config file used when `CBCP_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "cbc-payload.toml";
