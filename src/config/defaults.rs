// src/config/defaults.rs
use crate::config::app::CipherSection;

/// Fresh IV per encryption unless a config says otherwise
pub const DEFAULT_RESET_IV: bool = true;

pub fn default_reset_iv() -> bool {
    DEFAULT_RESET_IV
}

pub fn default_cipher() -> CipherSection {
    CipherSection {
        key: None,
        iv: None,
        reset_iv: DEFAULT_RESET_IV,
    }
}
