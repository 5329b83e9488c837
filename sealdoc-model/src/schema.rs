use crate::document::Document;
use crate::encrypted::{resolve, EncryptedAccessor};
use crate::error::{AccessError, SchemaError};
use crate::field::{FieldDescriptor, FieldOptions, FieldType};
use sealdoc_crypto::{default_cipher, CipherService};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Describes a document type: its registered fields and the encrypted-field
/// accessors installed on it.
///
/// Built once via [`SchemaBuilder`], then shared and immutable.
#[derive(Debug)]
pub struct DocumentSchema {
    pub doc_type: String,
    pub fields: Vec<FieldDescriptor>,
    accessors: HashMap<String, EncryptedAccessor>,
}

impl DocumentSchema {
    /// Starts declaring a schema for `doc_type`.
    pub fn builder(doc_type: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            doc_type: doc_type.into(),
            cipher: None,
            fields: Vec::new(),
            accessors: HashMap::new(),
        }
    }

    /// Looks up a registered field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up the accessor installed under a plaintext alias.
    pub fn accessor(&self, alias: &str) -> Option<&EncryptedAccessor> {
        self.accessors.get(alias)
    }

    /// Iterates over the installed plaintext aliases.
    pub fn encrypted_aliases(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    /// Getter convenience: decrypted value of the field behind `alias`.
    pub fn get_plaintext(&self, doc: &Document, alias: &str) -> Result<String, AccessError> {
        self.accessors
            .get(alias)
            .ok_or_else(|| AccessError::UnknownAlias(alias.to_string()))?
            .get(doc)
    }

    /// Setter convenience: encrypts `plaintext` into the field behind `alias`.
    pub fn set_plaintext(
        &self,
        doc: &mut Document,
        alias: &str,
        plaintext: &str,
    ) -> Result<(), AccessError> {
        self.accessors
            .get(alias)
            .ok_or_else(|| AccessError::UnknownAlias(alias.to_string()))?
            .set(doc, plaintext)
    }
}

/// Declares fields for a [`DocumentSchema`].
///
/// [`SchemaBuilder::field`] is the entry point every declaration funnels
/// through; it inspects the options and either delegates straight to the
/// base mechanism ([`SchemaBuilder::declare_field`]) or performs the
/// encrypted-field setup first. The base mechanism itself is never patched.
pub struct SchemaBuilder {
    doc_type: String,
    cipher: Option<Arc<dyn CipherService>>,
    fields: Vec<FieldDescriptor>,
    accessors: HashMap<String, EncryptedAccessor>,
}

impl SchemaBuilder {
    /// Injects the cipher used for encrypted fields declared after this
    /// call. Without it, the process-wide default cipher is used.
    pub fn cipher(mut self, cipher: Arc<dyn CipherService>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    /// Base field declaration: registers the field exactly as described.
    ///
    /// No interception happens here. Only `type`, `default`, and `label`
    /// are meaningful to the base mechanism; it ignores the rest.
    pub fn declare_field(mut self, name: &str, options: FieldOptions) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.to_string(),
            field_type: options.field_type,
            default: options.default,
            label: options.label,
        });
        self
    }

    /// Declares a field, routing encrypted declarations through the
    /// encryption setup.
    ///
    /// Plain declarations (no `encrypted`) delegate unchanged to
    /// [`SchemaBuilder::declare_field`]. Encrypted declarations resolve the
    /// field spec, install a getter/setter pair under the plaintext alias,
    /// strip `encrypted`/`decrypt_as`, force the stored type to text, and
    /// then register the storage field through the base mechanism like any
    /// other field.
    pub fn field(mut self, name: &str, mut options: FieldOptions) -> Result<Self, SchemaError> {
        if !options.encrypted {
            return Ok(self.declare_field(name, options));
        }

        let spec = resolve(name, &options)?;

        if self.accessors.contains_key(&spec.plaintext_alias) {
            return Err(SchemaError::Configuration {
                field: name.to_string(),
                reason: format!("alias '{}' is already installed", spec.plaintext_alias),
            });
        }

        let cipher = self
            .cipher
            .clone()
            .or_else(default_cipher)
            .ok_or_else(|| SchemaError::MissingCipher {
                field: name.to_string(),
            })?;

        debug!(
            doc_type = %self.doc_type,
            storage = %spec.storage_name,
            alias = %spec.plaintext_alias,
            "installing encrypted field accessors"
        );
        let alias = spec.plaintext_alias.clone();
        self.accessors
            .insert(alias, EncryptedAccessor::new(spec, cipher));

        options.encrypted = false;
        options.decrypt_as = None;
        options.field_type = FieldType::Text;
        Ok(self.declare_field(name, options))
    }

    /// Finishes declaration.
    pub fn build(self) -> DocumentSchema {
        DocumentSchema {
            doc_type: self.doc_type,
            fields: self.fields,
            accessors: self.accessors,
        }
    }
}
