// src/aliases.rs
//! Fixed-size secret types
//!
//! These are the canonical key/IV types used throughout cbc-payload.
//! Both zeroize on drop and never print their contents.

use zeroize::{Zeroize, ZeroizeOnDrop};

macro_rules! fixed_secret {
    ($name:ident, $len:expr) => {
        #[derive(Zeroize, ZeroizeOnDrop)]
        pub struct $name([u8; $len]);

        impl $name {
            pub fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes (use with caution)
            pub fn expose_secret(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "([REDACTED])"))
            }
        }
    };
}

fixed_secret!(SecretKey32, 32); // AES-256 key
fixed_secret!(Iv16, 16); // CBC initialization vector
