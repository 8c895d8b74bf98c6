mod key;

pub use key::CacheKey;

use crate::engine::Label;
use dashmap::DashMap;

/// Concurrent memo of content-addressed inference results.
///
/// Entries never expire. Two writers racing on one key both succeed and the
/// later one is kept.
#[derive(Debug, Default)]
pub struct InferenceCache {
    entries: DashMap<CacheKey, Label>,
}

impl InferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Label> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: CacheKey, label: Label) {
        self.entries.insert(key, label);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
