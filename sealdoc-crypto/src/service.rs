//! The cipher interface the document model encrypts through.
//!
//! Consumers hold an `Arc<dyn CipherService>` and never see key material.
//! A process-wide default may be registered for convenience; an explicitly
//! injected cipher always takes precedence over it.

use crate::error::CipherResult;
use crate::key::CipherKey;
use crate::sealed::{open_string, seal_string};
use std::sync::{Arc, OnceLock};

/// Synchronous string-to-string encryption provider.
///
/// Both directions may fail with [`crate::CipherError`]; callers propagate
/// the failure rather than retrying. Implementations own their keys.
pub trait CipherService: Send + Sync {
    /// Encrypts plaintext into a storable ciphertext string.
    fn encrypt(&self, plaintext: &str) -> CipherResult<String>;

    /// Decrypts a ciphertext string previously produced by `encrypt`.
    fn decrypt(&self, ciphertext: &str) -> CipherResult<String>;
}

/// Production cipher: ChaCha20-Poly1305 under a fixed key, base64 tokens.
pub struct KeyCipher {
    key: CipherKey,
}

impl KeyCipher {
    /// Creates a cipher over the given key.
    pub fn new(key: CipherKey) -> Self {
        Self { key }
    }
}

impl CipherService for KeyCipher {
    fn encrypt(&self, plaintext: &str) -> CipherResult<String> {
        seal_string(&self.key, plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> CipherResult<String> {
        open_string(&self.key, ciphertext)
    }
}

/// No-op cipher for tests. Data passes through unchanged.
pub struct PassthroughCipher;

impl CipherService for PassthroughCipher {
    fn encrypt(&self, plaintext: &str) -> CipherResult<String> {
        Ok(plaintext.to_string())
    }

    fn decrypt(&self, ciphertext: &str) -> CipherResult<String> {
        Ok(ciphertext.to_string())
    }
}

static DEFAULT_CIPHER: OnceLock<Arc<dyn CipherService>> = OnceLock::new();

/// Registers the process-wide default cipher.
///
/// Returns false if a default was already registered; the first registration
/// wins for the lifetime of the process.
pub fn set_default_cipher(cipher: Arc<dyn CipherService>) -> bool {
    DEFAULT_CIPHER.set(cipher).is_ok()
}

/// Returns the process-wide default cipher, if one was registered.
pub fn default_cipher() -> Option<Arc<dyn CipherService>> {
    DEFAULT_CIPHER.get().cloned()
}
