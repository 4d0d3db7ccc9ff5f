// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for figure assembly
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a figure
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown view tab: {0}")]
    UnknownTab(String),

    #[error("Image layer {index} out of range (block has {available} image layers)")]
    ImageLayerOutOfRange { index: usize, available: usize },

    #[error("Block has no image layers")]
    NoImageLayers,

    #[error("Invalid image layer {}: {message}", path.display())]
    InvalidImage { path: PathBuf, message: String },

    #[error("Table error: {0}")]
    Core(#[from] volmap_core::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] volmap_geometry::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A required table or file is absent.
    pub fn is_configuration_missing(&self) -> bool {
        match self {
            Error::NoImageLayers => true,
            Error::Core(e) => e.is_configuration_missing(),
            Error::Geometry(volmap_geometry::Error::CoreError(e)) => e.is_configuration_missing(),
            Error::Geometry(volmap_geometry::Error::Io(e)) | Error::Io(e) => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            Error::Csv(e) => {
                matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
            }
            _ => false,
        }
    }

    /// An out-of-domain UI parameter.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::UnknownTab(_) | Error::ImageLayerOutOfRange { .. } => true,
            Error::Core(e) => e.is_validation(),
            Error::Geometry(volmap_geometry::Error::CoreError(e)) => e.is_validation(),
            _ => false,
        }
    }
}
