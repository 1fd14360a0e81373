// tests/core/key.rs
use cbc_payload::error::CipherError;
use cbc_payload::key_ops::{generate_iv, generate_key, iv_from_slice, secret_key_from_slice};

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = generate_key().unwrap();
    let key2 = generate_key().unwrap();
    assert_eq!(key1.expose_secret().len(), 32);
    assert_ne!(
        key1.expose_secret().as_slice(),
        key2.expose_secret().as_slice()
    );
}

#[test]
fn test_generate_iv_is_random_and_16_bytes() {
    let iv1 = generate_iv().unwrap();
    let iv2 = generate_iv().unwrap();
    assert_eq!(iv1.expose_secret().len(), 16);
    assert_ne!(iv1.expose_secret(), iv2.expose_secret());
}

#[test]
fn test_text_key_is_used_as_raw_bytes() {
    let key = secret_key_from_slice("0123456789ABCDEF0123456789abcdef".as_bytes()).unwrap();
    assert_eq!(key.expose_secret()[0], b'0');
    assert_eq!(key.expose_secret()[31], b'f');
}

#[test]
fn test_multibyte_text_key_is_measured_in_bytes() {
    // 32 characters, 33 bytes
    let key = format!("é{}", "a".repeat(31));
    assert!(matches!(
        secret_key_from_slice(key.as_bytes()),
        Err(CipherError::InvalidKeyLength { actual: 33, .. })
    ));
}

#[test]
fn test_iv_length_is_enforced() {
    assert!(iv_from_slice(&[1u8; 16]).is_ok());
    assert!(matches!(
        iv_from_slice(&[1u8; 17]),
        Err(CipherError::InvalidIvLength { expected: 16, actual: 17 })
    ));
}
