//! Pluggable response caches.
//!
//! A cache stores raw response bodies keyed by `"<uri>|<credential>"` so
//! repeated GET requests skip the network. TTL, eviction, and invalidation
//! are entirely the provider's business; this layer only fetches and stores.

pub mod file;
pub mod memory;

use std::sync::{Arc, RwLock};

pub use file::FileCache;
pub use memory::MemoryCache;

/// Key/value store consulted before GET requests.
pub trait Cache: Send + Sync {
    /// Look up a previously stored response body. `None` means miss.
    fn fetch(&self, key: &str) -> Option<String>;

    /// Record a response body under the key.
    fn store(&self, key: &str, value: &str);
}

impl<C: Cache + ?Sized> Cache for Arc<C> {
    fn fetch(&self, key: &str) -> Option<String> {
        (**self).fetch(key)
    }

    fn store(&self, key: &str, value: &str) {
        (**self).store(key, value)
    }
}

/// No-op cache: every lookup misses, every store is discarded.
///
/// This is the process-wide default provider until [`set_default_cache`]
/// installs another one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl Cache for NullCache {
    fn fetch(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&self, _key: &str, _value: &str) {}
}

/// Constructor for the cache provider new clients default to.
pub type CacheFactory = fn() -> Box<dyn Cache>;

fn null_cache() -> Box<dyn Cache> {
    Box::new(NullCache)
}

static DEFAULT_CACHE: RwLock<CacheFactory> = RwLock::new(null_cache);

/// Install the cache provider used by clients constructed from now on.
///
/// Already-constructed clients keep the provider they captured at
/// construction time.
pub fn set_default_cache(factory: CacheFactory) {
    let mut guard = DEFAULT_CACHE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = factory;
}

/// Build a cache instance from the current default provider.
pub fn default_cache() -> Box<dyn Cache> {
    let factory = *DEFAULT_CACHE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    factory()
}

/// Restore the initial no-op default provider.
pub fn reset_default_cache() {
    set_default_cache(null_cache);
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
