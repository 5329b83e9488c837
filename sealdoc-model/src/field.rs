use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The semantic type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Bool,
    DateTime,
    Tag,
    Json,
}

/// Options accepted by field declaration.
///
/// `encrypted` and `decrypt_as` are consumed by the interception path and
/// never reach the base declaration mechanism; everything else passes
/// through unchanged.
#[derive(Debug, Clone)]
pub struct FieldOptions {
    pub field_type: FieldType,
    pub encrypted: bool,
    /// Plaintext alias for an encrypted field. Optional when the field name
    /// follows the `encrypted_` naming convention.
    pub decrypt_as: Option<String>,
    pub default: Option<Value>,
    pub label: Option<String>,
}

impl FieldOptions {
    /// Options for a field of the given type, everything else unset.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            encrypted: false,
            decrypt_as: None,
            default: None,
            label: None,
        }
    }

    /// Shorthand for a text field.
    pub fn text() -> Self {
        Self::new(FieldType::Text)
    }

    /// Shorthand for a numeric field.
    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    /// Shorthand for a boolean field.
    pub fn bool() -> Self {
        Self::new(FieldType::Bool)
    }

    /// Shorthand for a DateTime field.
    pub fn datetime() -> Self {
        Self::new(FieldType::DateTime)
    }

    /// Marks the field as encrypted.
    pub fn encrypted(mut self) -> Self {
        self.encrypted = true;
        self
    }

    /// Sets the plaintext alias explicitly instead of relying on the
    /// naming convention.
    pub fn decrypt_as(mut self, alias: impl Into<String>) -> Self {
        self.decrypt_as = Some(alias.into());
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A registered field, as recorded by the base declaration mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
