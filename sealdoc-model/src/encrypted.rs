//! Encrypted-field metadata resolution and accessor synthesis.
//!
//! An encrypted declaration pairs two names: the storage field that persists
//! the ciphertext token, and a plaintext alias that exposes the decrypted
//! value at runtime. [`resolve`] fixes that pairing at declaration time;
//! [`EncryptedAccessor`] is the getter/setter pair the schema installs under
//! the alias.

use crate::document::Document;
use crate::error::{AccessError, SchemaError};
use crate::field::{FieldOptions, FieldType};
use sealdoc_crypto::CipherService;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

/// Naming-convention prefix: `encrypted_ssn` exposes the alias `ssn`
/// without an explicit `decrypt_as`.
pub const ENCRYPTED_PREFIX: &str = "encrypted_";

/// Declaration-time metadata for one encrypted field pairing.
///
/// Shared and immutable once the schema is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFieldSpec {
    /// Name of the persisted field holding the ciphertext token.
    pub storage_name: String,
    /// Runtime-only name exposing the decrypted value.
    pub plaintext_alias: String,
    /// The type the caller declared. Recorded but not used to coerce the
    /// decrypted value; only [`FieldType::Text`] is accepted end-to-end.
    pub declared_type: FieldType,
}

/// Resolves the encrypted-field spec for `storage_name`.
///
/// The alias is `options.decrypt_as` when given; otherwise the storage name
/// must start with [`ENCRYPTED_PREFIX`] and the alias is the remainder.
/// Pure and deterministic; all failures are declaration-time errors.
pub fn resolve(storage_name: &str, options: &FieldOptions) -> Result<EncryptedFieldSpec, SchemaError> {
    let plaintext_alias = match &options.decrypt_as {
        Some(alias) if !alias.is_empty() => alias.clone(),
        Some(_) => {
            return Err(SchemaError::Configuration {
                field: storage_name.to_string(),
                reason: "decrypt_as alias is empty".to_string(),
            });
        }
        None => storage_name
            .strip_prefix(ENCRYPTED_PREFIX)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
            .ok_or_else(|| SchemaError::Configuration {
                field: storage_name.to_string(),
                reason: format!(
                    "name does not start with '{ENCRYPTED_PREFIX}' and no decrypt_as alias was given"
                ),
            })?,
    };

    if plaintext_alias == storage_name {
        return Err(SchemaError::Configuration {
            field: storage_name.to_string(),
            reason: "plaintext alias equals the storage field name".to_string(),
        });
    }

    if options.field_type != FieldType::Text {
        return Err(SchemaError::UnsupportedType {
            field: storage_name.to_string(),
            declared: options.field_type,
        });
    }

    Ok(EncryptedFieldSpec {
        storage_name: storage_name.to_string(),
        plaintext_alias,
        declared_type: options.field_type,
    })
}

/// The synthesized getter/setter pair for one encrypted field.
///
/// Installed on the schema keyed by the plaintext alias. Holds the spec and
/// the injected cipher; all document state lives on the document itself.
pub struct EncryptedAccessor {
    spec: Arc<EncryptedFieldSpec>,
    cipher: Arc<dyn CipherService>,
}

impl EncryptedAccessor {
    pub(crate) fn new(spec: EncryptedFieldSpec, cipher: Arc<dyn CipherService>) -> Self {
        Self {
            spec: Arc::new(spec),
            cipher,
        }
    }

    /// The spec this accessor was synthesized from.
    pub fn spec(&self) -> &EncryptedFieldSpec {
        &self.spec
    }

    /// Encrypts `plaintext` and writes the token into the storage field.
    ///
    /// The write goes through the normal storage path, so persistence and
    /// change tracking see an ordinary text-field mutation. On cipher
    /// failure nothing is written and the cache is untouched.
    pub fn set(&self, doc: &mut Document, plaintext: &str) -> Result<(), AccessError> {
        let ciphertext = self.cipher.encrypt(plaintext)?;
        doc.set_raw(&self.spec.storage_name, Value::String(ciphertext.clone()));
        doc.cache
            .borrow_mut()
            .store(&self.spec.plaintext_alias, ciphertext, plaintext.to_string());
        Ok(())
    }

    /// Returns the decrypted value of the storage field.
    ///
    /// Decrypts only when the current ciphertext differs from the one the
    /// cache last saw, however the storage field got its value (setter,
    /// bulk load, or direct mutation).
    pub fn get(&self, doc: &Document) -> Result<String, AccessError> {
        let current = doc
            .get_string(&self.spec.storage_name)
            .ok_or_else(|| AccessError::MissingCiphertext(self.spec.storage_name.clone()))?
            .to_string();

        let cached = doc
            .cache
            .borrow()
            .lookup(&self.spec.plaintext_alias, &current)
            .map(str::to_string);
        if let Some(plaintext) = cached {
            return Ok(plaintext);
        }

        trace!(
            field = %self.spec.storage_name,
            "decrypt cache miss"
        );
        let plaintext = self.cipher.decrypt(&current)?;
        doc.cache
            .borrow_mut()
            .store(&self.spec.plaintext_alias, current, plaintext.clone());
        Ok(plaintext)
    }
}

impl std::fmt::Debug for EncryptedAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedAccessor")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}
