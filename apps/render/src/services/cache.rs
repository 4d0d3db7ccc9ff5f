// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Disk-based figure cache using cacache.

use crate::error::{RenderError, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use volmap_core::Settings;
use volmap_scene::ViewTab;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Content-addressable disk cache with age-based eviction.
#[derive(Debug, Clone)]
pub struct DiskCache {
    cache_dir: PathBuf,
    max_age: Duration,
}

impl DiskCache {
    /// Create a new cache in the specified directory.
    pub fn new(cache_dir: &Path, max_age_days: u64) -> Self {
        Self::with_max_age(cache_dir, Duration::from_secs(max_age_days * SECS_PER_DAY))
    }

    pub fn with_max_age(cache_dir: &Path, max_age: Duration) -> Self {
        if let Err(e) = std::fs::create_dir_all(cache_dir) {
            tracing::warn!(
                error = %e,
                path = %cache_dir.display(),
                "Failed to create cache directory"
            );
        }

        Self {
            cache_dir: cache_dir.to_path_buf(),
            max_age,
        }
    }

    /// Generate a cache key from content (SHA256 hash).
    pub fn generate_key(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hex::encode(hasher.finalize())
    }

    /// Key of one rendered figure: block, tab and the canonical settings JSON.
    pub fn figure_key(block: &str, tab: ViewTab, settings: &Settings) -> Result<String> {
        let mut data = Vec::new();
        data.extend_from_slice(block.as_bytes());
        data.push(0);
        data.extend_from_slice(tab.id().as_bytes());
        data.push(0);
        serde_json::to_writer(&mut data, settings)?;
        Ok(Self::generate_key(&data))
    }

    /// Get raw bytes from cache. Entries older than the max age are removed
    /// and reported as a miss.
    pub fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let Some(metadata) = cacache::metadata_sync(&self.cache_dir, key)? else {
            return Ok(None);
        };
        if self.is_expired(metadata.time) {
            tracing::debug!(key = %key, "Evicting stale cache entry");
            self.remove(key)?;
            return Ok(None);
        }
        match cacache::read_sync(&self.cache_dir, key) {
            Ok(data) => Ok(Some(data)),
            Err(cacache::Error::EntryNotFound(_, _)) => Ok(None),
            Err(e) => Err(RenderError::Cache(e.to_string())),
        }
    }

    /// Set raw bytes in cache.
    pub fn set_bytes(&self, key: &str, data: &[u8]) -> Result<()> {
        cacache::write_sync(&self.cache_dir, key, data)?;
        tracing::debug!(key = %key, size = data.len(), "Cached figure");
        Ok(())
    }

    /// Check if a fresh entry exists for `key`.
    #[allow(dead_code)]
    pub fn has(&self, key: &str) -> bool {
        matches!(
            cacache::metadata_sync(&self.cache_dir, key),
            Ok(Some(metadata)) if !self.is_expired(metadata.time)
        )
    }

    /// Remove a cached entry.
    pub fn remove(&self, key: &str) -> Result<()> {
        cacache::remove_sync(&self.cache_dir, key)?;
        Ok(())
    }

    /// Clear all cached entries.
    pub fn clear(&self) -> Result<()> {
        cacache::clear_sync(&self.cache_dir)?;
        tracing::info!(path = %self.cache_dir.display(), "Cleared render cache");
        Ok(())
    }

    /// `written_ms` is the entry's write time in milliseconds since the epoch.
    fn is_expired(&self, written_ms: u128) -> bool {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        now_ms.saturating_sub(written_ms) > self.max_age.as_millis()
    }
}
