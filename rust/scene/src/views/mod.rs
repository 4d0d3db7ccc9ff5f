// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View tabs and the assemblers behind them.
//!
//! Each tab maps to one assembler. Assemblers are pure functions of the
//! block tables and the reconciled [`Settings`]; the tables are pulled from
//! a [`ViewSource`] only when the active tab needs them.

mod cube;
mod image_layer;
mod layer;
mod organ;
mod point;
mod sphere;

pub use cube::{cube_figure, cube_image_figure, cube_trace};
pub use image_layer::{image_layer_figure, image_surface};
pub use layer::layer_figure;
pub use organ::{organ_figure, organ_models, organ_trace, OrganModel, NO_MODELS};
pub use point::point_figure;
pub use sphere::{sphere_figure, sphere_trace};

use crate::colorscale::Colorscale;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::image_layers::ImageLayerSet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use volmap_core::{
    Axes, CategoryLabels, CategorySelection, ColorscaleCatalog, LayerSelection, MeasurementTable, QuantityIndex,
    Settings, ValueRange, ValueRanges,
};

/// The volumetric map tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ViewTab {
    Cube,
    CubeImage,
    Point,
    Layer,
    ImageLayer,
    Sphere,
}

impl ViewTab {
    pub const ALL: [ViewTab; 6] = [
        ViewTab::Cube,
        ViewTab::CubeImage,
        ViewTab::Point,
        ViewTab::Layer,
        ViewTab::ImageLayer,
        ViewTab::Sphere,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ViewTab::Cube => "cube-tab",
            ViewTab::CubeImage => "cube-image-tab",
            ViewTab::Point => "point-tab",
            ViewTab::Layer => "layer-tab",
            ViewTab::ImageLayer => "image-layer-tab",
            ViewTab::Sphere => "sphere-tab",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Cube => "Cube View",
            ViewTab::CubeImage => "Cube View with Images",
            ViewTab::Point => "Point View",
            ViewTab::Layer => "Layer View",
            ViewTab::ImageLayer => "Image Layer View",
            ViewTab::Sphere => "Sphere View",
        }
    }

    /// Tabs that draw image layers.
    pub fn needs_images(self) -> bool {
        matches!(self, ViewTab::CubeImage | ViewTab::ImageLayer)
    }
}

impl From<ViewTab> for &'static str {
    fn from(tab: ViewTab) -> Self {
        tab.id()
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ViewTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}

/// Tabs offered for a block. Image tabs are dropped when the block has no
/// image layers.
pub fn available_tabs(image_layer_count: usize) -> Vec<ViewTab> {
    ViewTab::ALL
        .into_iter()
        .filter(|tab| image_layer_count > 0 || !tab.needs_images())
        .collect()
}

/// Block data a view may need, loaded on demand.
pub trait ViewSource {
    /// Cuboid corner table (`cube_data.csv`).
    fn cube_table(&self) -> Result<MeasurementTable>;

    /// Point table (`points_data.csv`).
    fn point_table(&self) -> Result<MeasurementTable>;

    /// Image layers of the block, ascending by Z.
    fn image_layers(&self) -> Result<ImageLayerSet>;

    /// Named colorscale catalog.
    fn colorscales(&self) -> Result<ColorscaleCatalog>;
}

/// Block-level inputs shared by every assembler.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub axes: &'a Axes,
    pub ranges: &'a ValueRanges,
    pub labels: &'a CategoryLabels,
    pub settings: &'a Settings,
}

impl<'a> ViewContext<'a> {
    /// Color bounds of the selected quantity.
    pub fn range(&self) -> Result<ValueRange> {
        Ok(self.ranges.get(&self.settings.quantity)?)
    }

    pub fn layer(&self) -> Result<LayerSelection> {
        Ok(self.settings.layer.parse()?)
    }

    pub fn image_layer(&self) -> Result<LayerSelection> {
        Ok(LayerSelection::parse_image(&self.settings.image_layer)?)
    }

    pub fn category(&self) -> Result<CategorySelection> {
        Ok(CategorySelection::resolve(&self.settings.category, self.labels)?)
    }

    pub fn colorscale(&self) -> Colorscale {
        Colorscale::named(self.settings.color_scheme.as_str())
    }

    /// Column of the selected quantity in `table`.
    pub fn quantity(&self, table: &MeasurementTable) -> Result<QuantityIndex> {
        Ok(table.quantity(&self.settings.quantity)?)
    }
}

/// Assemble the figure for `tab`.
pub fn render_view<S: ViewSource + ?Sized>(tab: ViewTab, ctx: &ViewContext<'_>, source: &S) -> Result<Figure> {
    tracing::debug!(
        tab = %tab,
        quantity = %ctx.settings.quantity,
        layer = %ctx.settings.layer,
        category = %ctx.settings.category,
        "Assembling view"
    );

    match tab {
        ViewTab::Cube => cube_figure(ctx, &source.cube_table()?),
        ViewTab::CubeImage => {
            let images = source.image_layers()?;
            let catalog = source.colorscales()?;
            cube_image_figure(ctx, &source.cube_table()?, &images, &catalog)
        }
        ViewTab::Point => point_figure(ctx, &source.point_table()?),
        ViewTab::Layer => layer_figure(ctx, &source.point_table()?),
        ViewTab::ImageLayer => {
            let images = source.image_layers()?;
            let catalog = source.colorscales()?;
            image_layer_figure(ctx, &images, &catalog)
        }
        ViewTab::Sphere => sphere_figure(ctx, &source.point_table()?),
    }
}
