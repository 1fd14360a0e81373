// src/config/app.rs
use super::defaults::*;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, KEY_ENV};
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSection,
}

#[derive(Clone, Deserialize)]
pub struct CipherSection {
    /// 32-character secret key; absent means "supply per call"
    #[serde(default)]
    pub key: Option<String>,
    /// 16-character IV; absent means "generate per encryption"
    #[serde(default)]
    pub iv: Option<String>,
    #[serde(default = "default_reset_iv")]
    pub reset_iv: bool,
}

impl std::fmt::Debug for CipherSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherSection")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("iv", &self.iv.as_ref().map(|_| "[REDACTED]"))
            .field("reset_iv", &self.reset_iv)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
        }
    }
}

/// Parse a TOML document
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Read a config file, falling back to defaults if missing
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        #[cfg(feature = "logging")]
        tracing::debug!(path = %path.display(), "config file not found, using built-in defaults");
        return Ok(Config::default());
    }
    from_toml_str(&std::fs::read_to_string(path)?)
}

/// Load config from `CBCP_CONFIG` (or the default path), then apply `CBCP_KEY`
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut conf = load_from_path(&config_path)?;

    if let Ok(key) = std::env::var(KEY_ENV) {
        conf.cipher.key = Some(key);
    }

    Ok(conf)
}
