// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image layers: pre-rasterized greyscale slices placed at fixed heights.
//!
//! Each entry of the image layer index points at
//! `<dir>/<block>/layers/<stem>.txt`, a tab-delimited numeric array with
//! one line per image row.

use crate::error::{Error, Result};
use ndarray::Array2;
use std::io::Read;
use std::path::{Path, PathBuf};
use volmap_core::{tables, ImageLayerEntry, ImageLayerIndex, LayerSelection};

/// One image layer and its greyscale array (rows by columns).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    pub entry: ImageLayerEntry,
    pub data: Array2<f64>,
}

/// All image layers of a block, ascending by Z center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageLayerSet {
    layers: Vec<ImageLayer>,
}

impl ImageLayerSet {
    pub fn new(layers: Vec<ImageLayer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[ImageLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Colorscale name of the first layer; it applies to the whole block.
    pub fn colorscale_name(&self) -> Option<&str> {
        self.layers
            .first()
            .map(|l| l.entry.colorscale.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Layers picked by an image dropdown value. `Image N` selects the
    /// N-th layer in Z order.
    pub fn select(&self, selection: LayerSelection) -> Result<Vec<&ImageLayer>> {
        match selection {
            LayerSelection::All => Ok(self.layers.iter().collect()),
            LayerSelection::Layer(n) => n
                .checked_sub(1)
                .and_then(|index| self.layers.get(index))
                .map(|layer| vec![layer])
                .ok_or(Error::ImageLayerOutOfRange {
                    index: n,
                    available: self.layers.len(),
                }),
        }
    }
}

/// Path of the array backing `entry`.
pub fn image_layer_path(dir: &Path, block: &str, entry: &ImageLayerEntry) -> PathBuf {
    dir.join(block).join("layers").join(format!("{}.txt", entry.stem()))
}

/// Load every image layer of `block`, sorted ascending by Z center.
pub fn load_image_layers(dir: &Path, index: &ImageLayerIndex, block: &str) -> Result<ImageLayerSet> {
    let entries = index.for_block(block);
    let mut layers = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = image_layer_path(dir, block, &entry);
        let file = tables::open(&path)?;
        let data = read_array(file).map_err(|e| match e {
            Error::InvalidImage { message, .. } => Error::InvalidImage {
                path: path.clone(),
                message,
            },
            other => other,
        })?;
        tracing::debug!(
            block,
            layer = %entry.name,
            z = entry.z_center,
            rows = data.nrows(),
            cols = data.ncols(),
            "Loaded image layer"
        );
        layers.push(ImageLayer { entry, data });
    }

    Ok(ImageLayerSet::new(layers))
}

/// Parse a tab-delimited numeric array.
pub fn read_array<R: Read>(rdr: R) -> Result<Array2<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut values = Vec::new();
    let mut cols = 0;
    let mut rows = 0;

    for record in rdr.records() {
        let record = record?;
        cols = record.len();
        for field in record.iter() {
            let value: f64 = field.parse().map_err(|_| Error::InvalidImage {
                path: PathBuf::new(),
                message: format!("bad value '{}' on line {}", field, rows + 1),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(Error::InvalidImage {
            path: PathBuf::new(),
            message: "empty array".to_string(),
        });
    }

    Array2::from_shape_vec((rows, cols), values).map_err(|e| Error::InvalidImage {
        path: PathBuf::new(),
        message: e.to_string(),
    })
}
