//! Backing key-value store for parameter values
//!
//! Values are addressed by (namespace, key). The byte format is owned by
//! the subspace; a store only moves bytes.

use std::collections::BTreeMap;

/// Synchronous key-value store addressed by (namespace, key)
pub trait ParamStore {
    fn get(&self, namespace: &str, key: &str) -> Option<Vec<u8>>;

    fn set(&mut self, namespace: &str, key: &str, value: Vec<u8>);

    fn has(&self, namespace: &str, key: &str) -> bool {
        self.get(namespace, key).is_some()
    }
}

/// In-memory store, ordered by (namespace, key)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<(String, String), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored keys of one namespace in key order.
    pub fn keys<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .keys()
            .filter(move |(ns, _)| ns == namespace)
            .map(|(_, key)| key.as_str())
    }
}

impl ParamStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Option<Vec<u8>> {
        self.entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: Vec<u8>) {
        self.entries
            .insert((namespace.to_string(), key.to_string()), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_are_isolated() {
        let mut store = MemoryStore::new();
        store.set("tax", "FeeRate", b"1".to_vec());
        store.set("bank", "FeeRate", b"2".to_vec());

        assert_eq!(store.get("tax", "FeeRate"), Some(b"1".to_vec()));
        assert_eq!(store.get("bank", "FeeRate"), Some(b"2".to_vec()));
        assert!(!store.has("auth", "FeeRate"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_overwrite_and_keys() {
        let mut store = MemoryStore::new();
        store.set("tax", "FeeRate", b"1".to_vec());
        store.set("tax", "BaseDenom", b"x".to_vec());
        store.set("tax", "FeeRate", b"3".to_vec());

        assert_eq!(store.get("tax", "FeeRate"), Some(b"3".to_vec()));
        let keys: Vec<_> = store.keys("tax").collect();
        assert_eq!(keys, vec!["BaseDenom", "FeeRate"]);
    }
}
