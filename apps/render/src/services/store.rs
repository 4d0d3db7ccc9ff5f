// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Block tables resolved from the configuration directory.

use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;
use volmap_core::{
    build_axes, Axes, BlockMeta, CategoryLabels, ColorscaleCatalog, DownloadEntry, Downloads, ImageLayerIndex,
    MeasurementTable, Settings, Table, ValueRanges, VolumeBounds,
};
use volmap_scene::{load_image_layers, ImageLayerSet, ViewContext, ViewSource};

/// Table paths of one block.
#[derive(Debug, Clone)]
pub struct BlockStore {
    block: String,
    volumetric_dir: PathBuf,
    image_layer_dir: PathBuf,
}

impl BlockStore {
    pub fn new(config: &Config, block: &str) -> Self {
        Self {
            block: block.to_string(),
            volumetric_dir: config.volumetric_dir(),
            image_layer_dir: config.image_layer_dir(),
        }
    }

    pub fn block(&self) -> &str {
        &self.block
    }

    fn block_dir(&self) -> PathBuf {
        self.volumetric_dir.join(&self.block)
    }

    fn read<T: Table>(&self, name: &str) -> volmap_core::Result<T> {
        T::from_path(&self.block_dir().join(name))
    }

    pub fn meta(&self) -> Result<BlockMeta> {
        Ok(self.read("meta.csv")?)
    }

    pub fn value_ranges(&self) -> Result<ValueRanges> {
        Ok(self.read("value_ranges.csv")?)
    }

    pub fn category_labels(&self) -> Result<CategoryLabels> {
        Ok(self.read("category_labels.csv")?)
    }

    pub fn volume_bounds(&self) -> Result<VolumeBounds> {
        Ok(self.read("vol_measurements.csv")?)
    }

    /// Downloadable files listed for this block.
    pub fn downloads(&self) -> Result<Vec<DownloadEntry>> {
        let downloads = Downloads::from_path(&self.volumetric_dir.join("downloads.csv"))?;
        Ok(downloads.for_block(&self.block).cloned().collect())
    }

    /// Image layer index shared by all blocks.
    pub fn image_layer_index(&self) -> Result<ImageLayerIndex> {
        Ok(ImageLayerIndex::from_path(&self.image_layer_dir.join("images.csv"))?)
    }

    /// Number of image layers of this block. A deployment without an image
    /// layer index has none.
    pub fn image_layer_count(&self) -> Result<usize> {
        match self.image_layer_index() {
            Ok(index) => Ok(index.count_for_block(&self.block)),
            Err(e) if e.is_configuration_missing() => {
                tracing::debug!(block = %self.block, "No image layer index");
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }
}

impl ViewSource for BlockStore {
    fn cube_table(&self) -> volmap_scene::Result<MeasurementTable> {
        Ok(self.read("cube_data.csv")?)
    }

    fn point_table(&self) -> volmap_scene::Result<MeasurementTable> {
        Ok(self.read("points_data.csv")?)
    }

    fn image_layers(&self) -> volmap_scene::Result<ImageLayerSet> {
        let index = ImageLayerIndex::from_path(&self.image_layer_dir.join("images.csv"))?;
        load_image_layers(&self.image_layer_dir, &index, &self.block)
    }

    fn colorscales(&self) -> volmap_scene::Result<ColorscaleCatalog> {
        Ok(ColorscaleCatalog::from_path(&self.image_layer_dir.join("colorscales.csv"))?)
    }
}

/// Block-level tables every view needs.
#[derive(Debug, Clone)]
pub struct BlockTables {
    pub axes: Axes,
    pub ranges: ValueRanges,
    pub labels: CategoryLabels,
}

impl BlockTables {
    pub fn load(store: &BlockStore) -> Result<Self> {
        Ok(Self {
            axes: build_axes(&store.volume_bounds()?)?,
            ranges: store.value_ranges()?,
            labels: store.category_labels()?,
        })
    }

    pub fn context<'a>(&'a self, settings: &'a Settings) -> ViewContext<'a> {
        ViewContext {
            axes: &self.axes,
            ranges: &self.ranges,
            labels: &self.labels,
            settings,
        }
    }
}
