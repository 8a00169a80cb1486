use std::collections::BTreeMap;

use super::data::ReactionCounts;
use super::storage::Storage;
use crate::error::StorageError;

/// Persists like/dislike counters through an injected `Storage` backend.
///
/// Each counter type lives under its own fixed key as a JSON object
/// mapping item id to count, e.g. `fox-likes` → `{"2":1,"7":4}`.
pub struct ReactionStore<S: Storage> {
    storage: S,
    likes_key: String,
    dislikes_key: String,
}

impl<S: Storage> ReactionStore<S> {
    /// Create a store whose keys are namespaced by `prefix` ("fox", "roo")
    pub fn new(storage: S, prefix: &str) -> Self {
        Self {
            storage,
            likes_key: format!("{prefix}-likes"),
            dislikes_key: format!("{prefix}-dislikes"),
        }
    }

    /// Read both counter maps.
    /// Missing or unparseable values are treated as "no prior data".
    pub fn load(&self) -> ReactionCounts {
        ReactionCounts {
            likes: self.load_map(&self.likes_key),
            dislikes: self.load_map(&self.dislikes_key),
        }
    }

    /// Write both counter maps back to storage
    pub fn save(&mut self, counts: &ReactionCounts) -> Result<(), StorageError> {
        let likes = serde_json::to_string(&counts.likes)?;
        let dislikes = serde_json::to_string(&counts.dislikes)?;
        self.storage.set(&self.likes_key, &likes)?;
        self.storage.set(&self.dislikes_key, &dislikes)?;
        Ok(())
    }

    fn load_map(&self, key: &str) -> BTreeMap<u32, u64> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("⚠️  Could not read {key}: {e}");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("⚠️  Ignoring malformed {key}: {e}");
            BTreeMap::new()
        })
    }

    /// Access the underlying storage backend
    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ReactionKind;
    use crate::state::storage::MemoryStorage;

    #[test]
    fn test_load_empty_storage() {
        let store = ReactionStore::new(MemoryStorage::new(), "fox");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = ReactionStore::new(MemoryStorage::new(), "fox");
        let mut counts = ReactionCounts::default();
        counts.increment(2, ReactionKind::Dislike);
        counts.increment(2, ReactionKind::Dislike);
        counts.increment(9, ReactionKind::Like);

        store.save(&counts).unwrap();

        assert_eq!(store.load(), counts);
        assert_eq!(
            store.storage().get("fox-dislikes").unwrap().as_deref(),
            Some("{\"2\":2}")
        );
    }

    #[test]
    fn test_malformed_value_is_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set("roo-likes", "not json").unwrap();
        storage.set("roo-dislikes", "{\"3\":5}").unwrap();

        let store = ReactionStore::new(storage, "roo");
        let counts = store.load();

        assert!(counts.likes.is_empty());
        assert_eq!(counts.get(3).dislikes, 5);
    }

    #[test]
    fn test_wrong_shape_is_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set("fox-likes", "[1, 2, 3]").unwrap();
        storage.set("fox-dislikes", "{\"1\":-4}").unwrap();

        let store = ReactionStore::new(storage, "fox");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_prefixes_do_not_collide() {
        let mut fox = ReactionStore::new(MemoryStorage::new(), "fox");
        let mut counts = ReactionCounts::default();
        counts.increment(1, ReactionKind::Like);
        fox.save(&counts).unwrap();

        let roo = ReactionStore::new(fox.storage().clone(), "roo");
        assert!(roo.load().is_empty());
    }
}
