// src/config/mod.rs
//! Configuration system for cbc-payload
//!
//! TOML file + env overrides.

pub use app::{from_toml_str, load, load_from_path, CipherSection, Config};
pub use defaults::DEFAULT_RESET_IV;

mod app;
mod defaults;
