// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Volmap Core
//!
//! Typed access to the tables behind a block's volumetric map, and the
//! pure selection logic applied before any figure is assembled.
//!
//! ## Overview
//!
//! - **Tables**: readers for block metadata, value ranges, category labels,
//!   measurement tables, downloads, image layer index, colorscale catalog
//!   and organ traces
//! - **Axes**: tick positions derived from `(min, max, step)` bounds, plus
//!   the layer and image layer dropdown options
//! - **Selection**: half-open Z-slab filtering and category filtering
//! - **Settings**: explicit render settings reconciled with partial UI updates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use volmap_core::{build_axes, select_layer, LayerSelection, MeasurementTable, Table, VolumeBounds};
//!
//! let bounds = VolumeBounds::from_path(&dir.join("vol_measurements.csv"))?;
//! let axes = build_axes(&bounds)?;
//! let points = MeasurementTable::from_path(&dir.join("points_data.csv"))?;
//!
//! let layer: LayerSelection = "Layer 2".parse()?;
//! let rows = select_layer(layer, points.rows(), &axes.z)?;
//! ```

pub mod axes;
pub mod error;
pub mod selection;
pub mod settings;
pub mod tables;

/// Dropdown value selecting every layer, image or category.
pub const ALL: &str = "All";
/// Prefix of Z-slab dropdown values (`Layer 1`, `Layer 2`, ...).
pub const LAYER_PREFIX: &str = "Layer ";
/// Prefix of image layer dropdown values (`Image 1`, `Image 2`, ...).
pub const IMAGE_PREFIX: &str = "Image ";

pub use axes::{build_axes, build_axis, build_layers, image_layer_options, Axes};
pub use error::{Error, Result};
pub use selection::{layer_bounds, select_category, select_layer, CategorySelection, LayerSelection};
pub use settings::{Defaults, Opacity, Settings, SettingsUpdate, COLOR_SCHEMES};
pub use tables::{
    AxisBounds, BlockMeta, CategoryLabels, ColorscaleCatalog, ColorscaleEntry, CubeId, DownloadEntry, Downloads,
    ImageLayerEntry, ImageLayerIndex, MeasurementRow, MeasurementTable, OrganTrace, OrganTraces, QuantityIndex,
    QuantityRange, Table, ValueRange, ValueRanges, VolumeBounds,
};
