//! Authenticated encryption primitives (ChaCha20-Poly1305).
//!
//! The string forms produce self-contained base64 tokens
//! (`base64(nonce || ciphertext)`) suitable for storing in a text field.

use crate::error::{CipherError, CipherResult};
use crate::key::CipherKey;
use base64::{engine::general_purpose::STANDARD, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Nonce size in bytes (96 bits for ChaCha20-Poly1305).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// The output of [`seal`]: a nonce plus ciphertext (auth tag included).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedValue {
    /// The nonce used for this encryption; unique per call.
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext with trailing auth tag.
    pub ciphertext: Vec<u8>,
}

impl SealedValue {
    /// Total serialized size in bytes.
    pub fn len(&self) -> usize {
        NONCE_SIZE + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Encodes `nonce || ciphertext` as a base64 token.
    pub fn to_token(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        STANDARD.encode(&bytes)
    }

    /// Decodes a base64 token back into a sealed value.
    pub fn from_token(token: &str) -> CipherResult<Self> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|e| CipherError::Decryption(format!("invalid base64: {e}")))?;

        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CipherError::Decryption("token too short".to_string()));
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);

        Ok(Self {
            nonce,
            ciphertext: bytes[NONCE_SIZE..].to_vec(),
        })
    }
}

/// Encrypts `plaintext` under `key` with a fresh random nonce.
pub fn seal(key: &CipherKey, plaintext: &[u8]) -> CipherResult<SealedValue> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CipherError::Encryption(e.to_string()))?;

    Ok(SealedValue {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypts a sealed value. Fails on a wrong key or tampered data.
pub fn open(key: &CipherKey, sealed: &SealedValue) -> CipherResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&sealed.nonce);

    cipher.decrypt(nonce, sealed.ciphertext.as_ref()).map_err(|_| {
        CipherError::Decryption("authentication failed (wrong key or tampered data)".to_string())
    })
}

/// Encrypts a string, returning a base64 token.
pub fn seal_string(key: &CipherKey, plaintext: &str) -> CipherResult<String> {
    Ok(seal(key, plaintext.as_bytes())?.to_token())
}

/// Decrypts a base64 token produced by [`seal_string`].
pub fn open_string(key: &CipherKey, token: &str) -> CipherResult<String> {
    let plaintext = open(key, &SealedValue::from_token(token)?)?;
    String::from_utf8(plaintext)
        .map_err(|e| CipherError::Decryption(format!("invalid UTF-8: {e}")))
}
