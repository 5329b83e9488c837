//! Document model for SealDoc.
//!
//! Defines the types that carry data through the engine, plus the transparent
//! field-encryption layer:
//! - [`Document`] — the generic data container (id, type, JSON payload, timestamps)
//! - [`DocumentSchema`] / [`SchemaBuilder`] — declares a document type's fields
//! - [`FieldOptions`] / [`FieldDescriptor`] — field declaration inputs and outputs
//! - [`EncryptedFieldSpec`] / [`EncryptedAccessor`] — the encrypted-field pairing:
//!   a storage field holds ciphertext, a runtime-only alias exposes the plaintext
//! - [`DecryptCache`] — per-document memo that keeps decryption off the hot path
//!
//! Declaring a field with `encrypted` set routes it through the interception
//! path: the plaintext alias is resolved (explicit `decrypt_as` or the
//! `encrypted_` naming convention), a getter/setter pair is installed on the
//! schema, and the storage field itself registers with the base declaration
//! mechanism exactly like any other text field. Plaintext never reaches the
//! stored payload; only the ciphertext token does.

mod cache;
mod document;
mod encrypted;
mod error;
mod field;
mod schema;

pub use cache::DecryptCache;
pub use document::Document;
pub use encrypted::{resolve, EncryptedAccessor, EncryptedFieldSpec, ENCRYPTED_PREFIX};
pub use error::{AccessError, SchemaError};
pub use field::{FieldDescriptor, FieldOptions, FieldType};
pub use schema::{DocumentSchema, SchemaBuilder};
