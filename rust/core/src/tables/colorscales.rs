// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{read_records, Table};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One stop of a named colorscale (`colorscales.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorscaleEntry {
    #[serde(rename = "Scale Name")]
    pub scale_name: String,
    #[serde(rename = "Entry")]
    pub entry: u32,
    #[serde(rename = "Scale Marker")]
    pub marker: f64,
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

/// Catalog of named colorscales used by image layers.
#[derive(Debug, Clone, Default)]
pub struct ColorscaleCatalog(pub Vec<ColorscaleEntry>);

impl ColorscaleCatalog {
    /// Stops of `name` ordered by entry number, or `None` if the catalog
    /// has no such scale.
    pub fn entries(&self, name: &str) -> Option<Vec<&ColorscaleEntry>> {
        let mut entries: Vec<&ColorscaleEntry> =
            self.0.iter().filter(|e| e.scale_name == name).collect();
        if entries.is_empty() {
            return None;
        }
        entries.sort_by_key(|e| e.entry);
        Some(entries)
    }
}

impl Table for ColorscaleCatalog {
    const NAME: &'static str = "colorscales";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(Self(read_records(rdr)?))
    }
}
