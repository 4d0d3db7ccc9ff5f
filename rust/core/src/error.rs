// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for table and selection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading block tables or applying UI selections
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration file: {}", path.display())]
    ConfigurationMissing { path: PathBuf },

    #[error("Invalid configuration in {table}: {message}")]
    Configuration { table: &'static str, message: String },

    #[error("Missing column '{column}' in {table}")]
    MissingColumn { table: &'static str, column: String },

    #[error("Invalid number '{value}' in {table}, column '{column}' (row {row})")]
    InvalidNumber {
        table: &'static str,
        column: String,
        row: usize,
        value: String,
    },

    #[error("Opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f64),

    #[error("Unknown layer selection: {0}")]
    UnknownLayer(String),

    #[error("Layer {layer} out of range (block has {available} layers)")]
    LayerOutOfRange { layer: usize, available: usize },

    #[error("Unknown category option: {0}")]
    UnknownCategory(String),

    #[error("Unknown quantity: {0}")]
    UnknownQuantity(String),

    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a configuration error for `table`
    pub fn configuration(table: &'static str, message: impl Into<String>) -> Self {
        Error::Configuration {
            table,
            message: message.into(),
        }
    }

    /// A required table or file is absent.
    pub fn is_configuration_missing(&self) -> bool {
        match self {
            Error::ConfigurationMissing { .. } => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Error::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound),
            _ => false,
        }
    }

    /// An out-of-domain parameter that should only come from a broken UI.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidOpacity(_)
                | Error::UnknownLayer(_)
                | Error::LayerOutOfRange { .. }
                | Error::UnknownCategory(_)
                | Error::UnknownQuantity(_)
                | Error::UnknownColorScheme(_)
        )
    }
}
