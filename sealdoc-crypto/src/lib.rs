//! Cipher boundary for SealDoc.
//!
//! Defines the [`CipherService`] trait that the document model encrypts
//! through, plus a production implementation:
//! - [`CipherKey`] / [`derive_key`] — 256-bit keys, Argon2id password derivation
//! - [`seal_string`] / [`open_string`] — ChaCha20-Poly1305 over base64 tokens
//! - [`KeyCipher`] — the trait implementation used in production
//! - [`PassthroughCipher`] — identity cipher for tests
//!
//! The model crate never sees raw key material; it holds an
//! `Arc<dyn CipherService>` and nothing else.

mod error;
mod key;
mod sealed;
mod service;

pub use error::{CipherError, CipherResult};
pub use key::{derive_key, CipherKey, KdfParams, Salt, KEY_SIZE, SALT_SIZE};
pub use sealed::{open, open_string, seal, seal_string, SealedValue, NONCE_SIZE, TAG_SIZE};
pub use service::{default_cipher, set_default_cipher, CipherService, KeyCipher, PassthroughCipher};
