//! Error types for the document model.

use crate::field::FieldType;
use sealdoc_crypto::CipherError;
use thiserror::Error;

/// Errors raised while declaring fields on a schema.
///
/// All of these are fatal to loading the model type; none are recoverable
/// at runtime.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// An encrypted field's name neither starts with the naming-convention
    /// prefix nor came with an explicit alias, or the resolved alias is
    /// unusable (empty, equal to the storage name, or already taken).
    #[error("encrypted field configuration error for '{field}': {reason}")]
    Configuration { field: String, reason: String },

    /// An encrypted field was declared with a non-textual type. Decrypted
    /// values are not coerced back to the declared type; only text is
    /// supported end-to-end.
    #[error("encrypted field '{field}' must be declared as text, got {declared:?}")]
    UnsupportedType { field: String, declared: FieldType },

    /// An encrypted field was declared but no cipher was injected and no
    /// process-wide default is registered.
    #[error("encrypted field '{field}' declared without a cipher")]
    MissingCipher { field: String },
}

/// Errors raised by the synthesized accessors at runtime.
#[derive(Debug, Error)]
pub enum AccessError {
    /// No encrypted accessor is installed under this alias.
    #[error("unknown encrypted field alias '{0}'")]
    UnknownAlias(String),

    /// The getter ran before the storage field held a string value.
    #[error("storage field '{0}' holds no ciphertext")]
    MissingCiphertext(String),

    /// The cipher failed; surfaces unmodified to the accessor's caller.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}
