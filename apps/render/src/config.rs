// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Renderer configuration loaded from environment variables.

use std::path::{Path, PathBuf};

/// Default configuration directory of a dashboard deployment.
pub const DEFAULT_CONFIG_DIR: &str = "/app/assets/config";

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the published configuration tables.
    pub config_dir: PathBuf,
    /// Directory for cache storage.
    pub cache_dir: PathBuf,
    /// Maximum cache age in days.
    pub cache_max_age_days: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            config_dir: std::env::var("VOLMAP_CONFIG_DIR")
                .unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into())
                .into(),
            cache_dir: std::env::var("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    // Docker images create /app/cache; local runs cache next to the working directory
                    if Path::new("/.dockerenv").exists() {
                        PathBuf::from("/app/cache")
                    } else {
                        std::env::current_dir()
                            .map(|dir| dir.join(".cache"))
                            .unwrap_or_else(|_| PathBuf::from("./.cache"))
                    }
                }),
            cache_max_age_days: std::env::var("CACHE_MAX_AGE_DAYS")
                .unwrap_or_else(|_| "7".into())
                .parse()
                .unwrap_or(7),
        }
    }

    /// Configuration rooted at `config_dir` with the default cache policy.
    #[cfg(test)]
    pub fn with_dirs(config_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            cache_dir: cache_dir.into(),
            cache_max_age_days: 7,
        }
    }

    /// `volumetric-map/`: one directory per block plus `downloads.csv`.
    pub fn volumetric_dir(&self) -> PathBuf {
        self.config_dir.join("volumetric-map")
    }

    /// `image-layers/`: `images.csv`, `colorscales.csv` and per-block arrays.
    pub fn image_layer_dir(&self) -> PathBuf {
        self.config_dir.join("image-layers")
    }

    /// `obj/`: `obj-files.csv` and the `volumes/` mesh directory.
    pub fn obj_dir(&self) -> PathBuf {
        self.config_dir.join("obj")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
