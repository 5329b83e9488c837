use sealdoc_crypto::{
    default_cipher, set_default_cipher, CipherKey, CipherService, KeyCipher, PassthroughCipher,
};
use std::sync::Arc;

#[test]
fn key_cipher_roundtrip() {
    let cipher = KeyCipher::new(CipherKey::random());
    let token = cipher.encrypt("top secret").unwrap();
    assert_ne!(token, "top secret");
    assert_eq!(cipher.decrypt(&token).unwrap(), "top secret");
}

#[test]
fn key_cipher_rejects_garbage() {
    let cipher = KeyCipher::new(CipherKey::random());
    assert!(cipher.decrypt("definitely not a token").is_err());
}

#[test]
fn key_ciphers_are_independent() {
    let a = KeyCipher::new(CipherKey::random());
    let b = KeyCipher::new(CipherKey::random());
    let token = a.encrypt("secret").unwrap();
    assert!(b.decrypt(&token).is_err());
}

#[test]
fn passthrough_is_identity() {
    let cipher = PassthroughCipher;
    assert_eq!(cipher.encrypt("plain").unwrap(), "plain");
    assert_eq!(cipher.decrypt("plain").unwrap(), "plain");
}

#[test]
fn default_cipher_registry() {
    // Single test for the process-wide default: registration state is shared
    // across this test binary.
    assert!(default_cipher().is_none());
    assert!(set_default_cipher(Arc::new(PassthroughCipher)));
    assert!(!set_default_cipher(Arc::new(PassthroughCipher)));

    let cipher = default_cipher().expect("default registered above");
    assert_eq!(cipher.encrypt("x").unwrap(), "x");
}
