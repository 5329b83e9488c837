//! Shared test ciphers for the model tests.

#![allow(dead_code)]

use sealdoc_crypto::{CipherError, CipherResult, CipherService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Deterministic fake cipher that counts calls.
///
/// `encrypt` prefixes the plaintext with `enc:`; `decrypt` strips the prefix
/// or fails. Tests can therefore fabricate valid "ciphertexts" directly and
/// assert exact decrypt-call counts.
#[derive(Default)]
pub struct CountingCipher {
    encrypt_calls: AtomicUsize,
    decrypt_calls: AtomicUsize,
}

impl CountingCipher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn encrypt_calls(&self) -> usize {
        self.encrypt_calls.load(Ordering::SeqCst)
    }

    pub fn decrypt_calls(&self) -> usize {
        self.decrypt_calls.load(Ordering::SeqCst)
    }

    /// The ciphertext this cipher would produce for `plaintext`.
    pub fn ciphertext_for(plaintext: &str) -> String {
        format!("enc:{plaintext}")
    }
}

impl CipherService for CountingCipher {
    fn encrypt(&self, plaintext: &str) -> CipherResult<String> {
        self.encrypt_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::ciphertext_for(plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> CipherResult<String> {
        self.decrypt_calls.fetch_add(1, Ordering::SeqCst);
        ciphertext
            .strip_prefix("enc:")
            .map(str::to_string)
            .ok_or_else(|| CipherError::Decryption("missing enc: prefix".to_string()))
    }
}

/// Cipher that fails every call.
pub struct FailingCipher;

impl CipherService for FailingCipher {
    fn encrypt(&self, _plaintext: &str) -> CipherResult<String> {
        Err(CipherError::Encryption("cipher offline".to_string()))
    }

    fn decrypt(&self, _ciphertext: &str) -> CipherResult<String> {
        Err(CipherError::Decryption("cipher offline".to_string()))
    }
}
