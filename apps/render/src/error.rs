// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and the notice printed when a command fails.

use serde::Serialize;
use thiserror::Error;

/// Message shown whenever a required table or file is absent.
pub const CONFIGURATION_MISSING_MESSAGE: &str =
    "Missing required configuration, please contact an administrator to resolve the issue.";

/// Renderer error types.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] volmap_core::Error),

    #[error(transparent)]
    Scene(#[from] volmap_scene::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Notice body written to stdout on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorNotice {
    pub error: &'static str,
    pub message: String,
    pub code: &'static str,
}

impl RenderError {
    pub fn is_configuration_missing(&self) -> bool {
        match self {
            RenderError::Core(e) => e.is_configuration_missing(),
            RenderError::Scene(e) => e.is_configuration_missing(),
            _ => false,
        }
    }

    pub fn is_validation(&self) -> bool {
        match self {
            RenderError::Core(e) => e.is_validation(),
            RenderError::Scene(e) => e.is_validation(),
            RenderError::InvalidSettings(_) => true,
            _ => false,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        if self.is_configuration_missing() {
            "CONFIGURATION_MISSING"
        } else if self.is_validation() {
            "VALIDATION_ERROR"
        } else {
            match self {
                RenderError::Core(_) => "CONFIGURATION_ERROR",
                RenderError::Cache(_) => "CACHE_ERROR",
                _ => "INTERNAL_ERROR",
            }
        }
    }

    pub fn notice(&self) -> ErrorNotice {
        if self.is_configuration_missing() {
            ErrorNotice {
                error: "Cannot load page",
                message: CONFIGURATION_MISSING_MESSAGE.to_string(),
                code: self.code(),
            }
        } else if self.is_validation() {
            ErrorNotice {
                error: "Invalid request",
                message: self.to_string(),
                code: self.code(),
            }
        } else {
            ErrorNotice {
                error: "Cannot render figure",
                message: self.to_string(),
                code: self.code(),
            }
        }
    }
}

impl From<cacache::Error> for RenderError {
    fn from(err: cacache::Error) -> Self {
        RenderError::Cache(err.to_string())
    }
}
