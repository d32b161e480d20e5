use std::collections::HashMap;
use std::sync::Mutex;

use super::Cache;

/// In-process cache backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Cache for MemoryCache {
    fn fetch(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }
}
