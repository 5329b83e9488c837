use crate::cache::DecryptCache;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::RefCell;
use uuid::Uuid;

/// A generic document in the SealDoc engine.
///
/// The `data` object holds the stored fields, keyed by field name. For an
/// encrypted field only the storage field (ciphertext token) appears here;
/// the plaintext alias is a runtime-only view served by the schema's
/// accessors and is never written into `data`.
///
/// Documents are single-threaded: the decrypt cache sits behind a `RefCell`
/// and is not synchronized. Share a document across threads only with
/// external synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub doc_type: String,
    pub data: Value,
    pub created_at: i64,
    pub modified_at: i64,
    #[serde(skip)]
    pub(crate) cache: RefCell<DecryptCache>,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl Document {
    /// Creates an empty document with a fresh UUID v7 id.
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), doc_type)
    }

    /// Creates an empty document with the given id.
    pub fn with_id(id: impl Into<String>, doc_type: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: id.into(),
            doc_type: doc_type.into(),
            data: Value::Object(Map::new()),
            created_at: now,
            modified_at: now,
            cache: RefCell::new(DecryptCache::new()),
        }
    }

    /// Reads a stored field's raw value.
    pub fn get_raw(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Reads a stored field as a string.
    pub fn get_string(&self, field: &str) -> Option<&str> {
        self.get_raw(field).and_then(|v| v.as_str())
    }

    /// Writes a stored field and bumps `modified_at`.
    ///
    /// This is the normal storage write path; the synthesized setter funnels
    /// through here so change tracking behaves exactly as for plain fields.
    pub fn set_raw(&mut self, field: &str, value: Value) {
        if !self.data.is_object() {
            self.data = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.data {
            map.insert(field.to_string(), value);
        }
        self.modified_at = now_millis();
    }

    /// Read-only view of the decrypt cache, for inspection in tests.
    pub fn decrypt_cache(&self) -> std::cell::Ref<'_, DecryptCache> {
        self.cache.borrow()
    }
}
