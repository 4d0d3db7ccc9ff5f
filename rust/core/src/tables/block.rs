// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-layout block tables.

use super::{read_records, Table};
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Page information for one block (`meta.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMeta {
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Table for BlockMeta {
    const NAME: &'static str = "meta";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        read_records::<Self, _>(rdr)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::configuration(Self::NAME, "table is empty"))
    }
}

/// The block's categorical attribute and its user-facing labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabels {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Label (Only True)")]
    pub true_label: String,
    #[serde(rename = "Label (Only False)")]
    pub false_label: String,
}

impl CategoryLabels {
    /// Dropdown options: `All` followed by the true and false labels.
    pub fn options(&self) -> Vec<String> {
        vec![
            crate::ALL.to_string(),
            self.true_label.clone(),
            self.false_label.clone(),
        ]
    }
}

impl Table for CategoryLabels {
    const NAME: &'static str = "category_labels";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        read_records::<Self, _>(rdr)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::configuration(Self::NAME, "table is empty"))
    }
}

/// A downloadable source-data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Desc")]
    pub description: String,
    #[serde(rename = "Block")]
    pub block: String,
}

/// All download entries (`downloads.csv`), shared by every block.
#[derive(Debug, Clone, Default)]
pub struct Downloads(pub Vec<DownloadEntry>);

impl Downloads {
    pub fn for_block<'a>(&'a self, block: &'a str) -> impl Iterator<Item = &'a DownloadEntry> + 'a {
        self.0.iter().filter(move |d| d.block == block)
    }
}

impl Table for Downloads {
    const NAME: &'static str = "downloads";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(Self(read_records(rdr)?))
    }
}

/// A pre-rasterized horizontal slice of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayerEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Z Center")]
    pub z_center: f64,
    #[serde(rename = "Colorscale")]
    pub colorscale: String,
}

impl ImageLayerEntry {
    /// File stem of the source image; the greyscale array shares it.
    pub fn stem(&self) -> &str {
        std::path::Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}

/// Image layer index (`images.csv`), shared by every block.
#[derive(Debug, Clone, Default)]
pub struct ImageLayerIndex(pub Vec<ImageLayerEntry>);

impl ImageLayerIndex {
    /// Entries of one block sorted ascending by Z center. The sort is stable,
    /// so entries sharing a Z center keep their table order.
    pub fn for_block(&self, block: &str) -> Vec<ImageLayerEntry> {
        let mut entries: Vec<ImageLayerEntry> =
            self.0.iter().filter(|e| e.block == block).cloned().collect();
        entries.sort_by(|a, b| a.z_center.total_cmp(&b.z_center));
        entries
    }

    pub fn count_for_block(&self, block: &str) -> usize {
        self.0.iter().filter(|e| e.block == block).count()
    }
}

impl Table for ImageLayerIndex {
    const NAME: &'static str = "images";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(Self(read_records(rdr)?))
    }
}

/// One organ mesh listed in `obj-files.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganTrace {
    #[serde(rename = "Organ")]
    pub organ: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Opacity")]
    pub opacity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct OrganTraces(pub Vec<OrganTrace>);

impl OrganTraces {
    /// Distinct organs in table order.
    pub fn organs(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.0
            .iter()
            .map(|t| t.organ.as_str())
            .filter(|organ| seen.insert(*organ))
            .collect()
    }

    pub fn for_organ<'a>(&'a self, organ: &'a str) -> impl Iterator<Item = &'a OrganTrace> + 'a {
        self.0.iter().filter(move |t| t.organ == organ)
    }
}

impl Table for OrganTraces {
    const NAME: &'static str = "obj-files";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(Self(read_records(rdr)?))
    }
}
