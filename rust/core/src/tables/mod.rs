// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed readers for the published configuration tables.
//!
//! Every table is a CSV file with a header row. Fixed-layout tables are
//! deserialized through serde; the value-range and measurement tables carry
//! one column per measured quantity and are read column by column.

mod block;
mod colorscales;
mod measurements;
mod ranges;

pub use block::{BlockMeta, CategoryLabels, DownloadEntry, Downloads, ImageLayerEntry, ImageLayerIndex, OrganTrace, OrganTraces};
pub use colorscales::{ColorscaleCatalog, ColorscaleEntry};
pub use measurements::{AxisBounds, CubeId, MeasurementRow, MeasurementTable, QuantityIndex, VolumeBounds};
pub use ranges::{QuantityRange, ValueRange, ValueRanges};

use crate::error::{Error, Result};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A configuration table that can be read from CSV.
pub trait Table: Sized {
    /// Table name used in error messages.
    const NAME: &'static str;

    /// Parse the table from any reader.
    fn from_reader<R: Read>(rdr: R) -> Result<Self>;

    /// Parse the table from a file, reporting a missing file as
    /// [`Error::ConfigurationMissing`].
    fn from_path(path: &Path) -> Result<Self> {
        let file = open(path)?;
        tracing::debug!(table = Self::NAME, path = %path.display(), "Reading table");
        Self::from_reader(file)
    }
}

/// Open a configuration file.
pub fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigurationMissing {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })
}

pub(crate) fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr)
}

/// Deserialize every record of a fixed-layout table.
pub(crate) fn read_records<T: DeserializeOwned, R: Read>(rdr: R) -> Result<Vec<T>> {
    let mut rdr = csv_reader(rdr);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Header lookup for tables read column by column.
pub(crate) struct Columns {
    table: &'static str,
    headers: StringRecord,
}

impl Columns {
    pub(crate) fn new(table: &'static str, headers: StringRecord) -> Self {
        Self { table, headers }
    }

    pub(crate) fn optional(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn required(&self, name: &str) -> Result<usize> {
        self.optional(name).ok_or_else(|| Error::MissingColumn {
            table: self.table,
            column: name.to_string(),
        })
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        self.headers.get(index).unwrap_or_default()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.headers.iter().enumerate()
    }

    /// Parse a required number. Blank cells are an error.
    pub(crate) fn number(&self, record: &StringRecord, index: usize, row: usize) -> Result<f64> {
        let raw = record.get(index).unwrap_or_default();
        raw.parse::<f64>().map_err(|_| self.invalid_number(index, row, raw))
    }

    /// Parse a measured value. Blank and `NaN` cells read as NaN.
    pub(crate) fn measurement(&self, record: &StringRecord, index: usize, row: usize) -> Result<f64> {
        let raw = record.get(index).unwrap_or_default();
        if raw.is_empty() {
            return Ok(f64::NAN);
        }
        raw.parse::<f64>().map_err(|_| self.invalid_number(index, row, raw))
    }

    pub(crate) fn flag(&self, record: &StringRecord, index: usize, row: usize) -> Result<bool> {
        let raw = record.get(index).unwrap_or_default();
        parse_flag(raw).ok_or_else(|| {
            Error::configuration(
                self.table,
                format!(
                    "invalid boolean '{}' in column '{}' (row {})",
                    raw,
                    self.name(index),
                    row
                ),
            )
        })
    }

    fn invalid_number(&self, index: usize, row: usize, raw: &str) -> Error {
        Error::InvalidNumber {
            table: self.table,
            column: self.name(index).to_string(),
            row,
            value: raw.to_string(),
        }
    }
}

/// Accepts the spellings spreadsheet exports produce for booleans.
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" | "yes" => Some(true),
        "false" | "0" | "0.0" | "no" => Some(false),
        _ => None,
    }
}
