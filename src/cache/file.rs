use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

use super::Cache;

/// On-disk cache contents
#[derive(Debug, Serialize, Deserialize, Default)]
struct FileCacheData {
    /// Map of "uri|credential" to raw response body
    entries: HashMap<String, String>,
}

/// Persistent cache that writes entries through to a JSON file.
///
/// The file is loaded once on open; every store rewrites it. A save failure
/// is logged and never fails the request path.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    data: Mutex<FileCacheData>,
}

impl FileCache {
    /// Get the default cache file path
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("imgur_client")
            .join("response_cache.json")
    }

    /// Open a cache at the given path, loading prior entries if the file
    /// exists. A corrupt or unreadable file starts fresh.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load(&path);
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    /// Open a cache at the platform default location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    fn load(path: &Path) -> FileCacheData {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<FileCacheData>(&content) {
                    Ok(data) => {
                        log::info!("Loaded response cache with {} entries", data.entries.len());
                        return data;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse cache file, starting fresh: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read cache file, starting fresh: {}", e);
                }
            }
        }
        FileCacheData::default()
    }

    fn save(&self, data: &FileCacheData) -> ApiResult<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, content)?;

        log::debug!("Saved response cache with {} entries", data.entries.len());
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FileCacheData> {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Cache for FileCache {
    fn fetch(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        let mut data = self.lock();
        data.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save(&data) {
            log::warn!("Failed to save cache: {}", e);
        }
    }
}
