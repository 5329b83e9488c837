mod common;

use common::CountingCipher;
use pretty_assertions::assert_eq;
use sealdoc_model::{Document, DocumentSchema, FieldOptions};
use serde_json::{json, Value};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_documents_get_distinct_ids() {
    let d1 = Document::new("note");
    let d2 = Document::new("note");
    assert_ne!(d1.id, d2.id);
    assert_eq!(d1.doc_type, "note");
}

#[test]
fn with_id_keeps_given_id() {
    let doc = Document::with_id("doc-1", "note");
    assert_eq!(doc.id, "doc-1");
}

#[test]
fn new_document_starts_empty() {
    let doc = Document::new("note");
    assert_eq!(doc.data, json!({}));
    assert!(doc.decrypt_cache().is_empty());
    assert_eq!(doc.created_at, doc.modified_at);
}

// ── Raw field access ─────────────────────────────────────────────

#[test]
fn set_raw_then_get_raw() {
    let mut doc = Document::new("note");
    doc.set_raw("title", json!("Hello"));
    assert_eq!(doc.get_raw("title"), Some(&json!("Hello")));
    assert_eq!(doc.get_string("title"), Some("Hello"));
}

#[test]
fn get_string_rejects_non_strings() {
    let mut doc = Document::new("note");
    doc.set_raw("count", json!(42));
    assert_eq!(doc.get_string("count"), None);
}

#[test]
fn set_raw_bumps_modified_at() {
    let mut doc = Document::new("note");
    doc.modified_at = 0;
    doc.set_raw("title", json!("x"));
    assert!(doc.modified_at > 0);
}

#[test]
fn set_raw_heals_non_object_data() {
    let mut doc = Document::new("note");
    doc.data = Value::Null;
    doc.set_raw("title", json!("x"));
    assert_eq!(doc.get_string("title"), Some("x"));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_roundtrip_preserves_stored_fields() {
    let mut doc = Document::with_id("doc-1", "note");
    doc.set_raw("title", json!("Hello"));

    let serialized = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored.id, doc.id);
    assert_eq!(restored.doc_type, doc.doc_type);
    assert_eq!(restored.data, doc.data);
}

#[test]
fn decrypt_cache_is_never_serialized() {
    let cipher = CountingCipher::new();
    let schema = DocumentSchema::builder("person")
        .cipher(cipher)
        .field("encrypted_ssn", FieldOptions::text().encrypted())
        .unwrap()
        .build();

    let mut doc = Document::new("person");
    schema.set_plaintext(&mut doc, "ssn", "123-45-6789").unwrap();
    assert!(!doc.decrypt_cache().is_empty());

    let serialized = serde_json::to_string(&doc).unwrap();
    // plaintext appears nowhere in the persisted form
    assert!(!serialized.contains("123-45-6789"));

    let restored: Document = serde_json::from_str(&serialized).unwrap();
    assert!(restored.decrypt_cache().is_empty());
    // ciphertext survived; getter decrypts fresh on the restored copy
    assert_eq!(schema.get_plaintext(&restored, "ssn").unwrap(), "123-45-6789");
}

#[test]
fn clone_carries_cache_state() {
    let cipher = CountingCipher::new();
    let schema = DocumentSchema::builder("person")
        .cipher(cipher.clone())
        .field("encrypted_ssn", FieldOptions::text().encrypted())
        .unwrap()
        .build();

    let mut doc = Document::new("person");
    schema.set_plaintext(&mut doc, "ssn", "secret").unwrap();

    let copy = doc.clone();
    assert_eq!(schema.get_plaintext(&copy, "ssn").unwrap(), "secret");
    assert_eq!(cipher.decrypt_calls(), 0);
}
