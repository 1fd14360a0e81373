// tests/common.rs
//! Shared test utilities: logging setup and fixtures
#![allow(dead_code)] // each test binary uses a different subset

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a test-writer subscriber that respects RUST_LOG
/// Idempotent, safe to call from every test
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub const KEY_A: &[u8; 32] = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const IV_B: &[u8; 16] = b"bbbbbbbbbbbbbbbb";

/// key = 32×'a', IV = 16×'b', plaintext = "hello world"
pub const HELLO_WORLD_PAYLOAD: &str = "YmJiYmJiYmJiYmJiYmJiYg==9due8hN1Y3j3t6sx/WnryA==";
