use std::collections::HashMap;

/// Per-document memo of decrypted values.
///
/// Keyed by plaintext alias; each entry remembers the last ciphertext
/// observed in the storage field and the plaintext it decrypted to. The
/// getter consults [`DecryptCache::lookup`] before calling the cipher, so
/// decryption runs at most once per distinct observed ciphertext.
///
/// There is no explicit invalidation: a write to the storage field through
/// any path (setter, bulk load, direct mutation) changes the ciphertext the
/// getter reads, the equality check misses, and the entry is overwritten.
/// The cache is never persisted; it lives only as long as its document.
#[derive(Debug, Clone, Default)]
pub struct DecryptCache {
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    ciphertext: String,
    plaintext: String,
}

impl DecryptCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached plaintext for `alias` if the entry exists and was
    /// produced from exactly `current` ciphertext.
    pub fn lookup(&self, alias: &str, current: &str) -> Option<&str> {
        self.entries
            .get(alias)
            .filter(|entry| entry.ciphertext == current)
            .map(|entry| entry.plaintext.as_str())
    }

    /// Records the (ciphertext, plaintext) pair for `alias`, replacing any
    /// previous entry.
    pub fn store(&mut self, alias: &str, ciphertext: String, plaintext: String) {
        self.entries.insert(
            alias.to_string(),
            CacheEntry {
                ciphertext,
                plaintext,
            },
        );
    }

    /// Number of cached aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
