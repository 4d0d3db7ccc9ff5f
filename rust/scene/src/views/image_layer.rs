// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ViewContext;
use crate::colorscale::{image_colorscale, Colorscale};
use crate::error::{Error, Result};
use crate::figure::{Figure, Surface, SurfaceAxis, Trace};
use crate::image_layers::{ImageLayer, ImageLayerSet};
use crate::layout::Layout;
use volmap_core::{Axes, ColorscaleCatalog};

/// A flat textured surface at the layer's Z center. Pixel `(row, col)` sits
/// at `(x0 + col, y0 + row)` where `(x0, y0)` is the block origin.
pub fn image_surface(layer: &ImageLayer, axes: &Axes, colorscale: &Colorscale, showscale: bool, opacity: f64) -> Surface {
    let (rows, cols) = layer.data.dim();
    let x0 = axes.x.first().copied().unwrap_or_default();
    let y0 = axes.y.first().copied().unwrap_or_default();

    Surface {
        x: SurfaceAxis::Vector((0..cols).map(|c| x0 + c as f64).collect()),
        y: SurfaceAxis::Vector((0..rows).map(|r| y0 + r as f64).collect()),
        z: vec![vec![layer.entry.z_center; cols]; rows],
        surfacecolor: layer.data.outer_iter().map(|row| row.to_vec()).collect(),
        colorscale: colorscale.clone(),
        cmin: None,
        cmax: None,
        showscale: Some(showscale),
        opacity,
        name: None,
    }
}

/// Image layers on their own, each with a visible scale, in data aspect.
pub fn image_layer_figure(ctx: &ViewContext<'_>, images: &ImageLayerSet, catalog: &ColorscaleCatalog) -> Result<Figure> {
    if images.is_empty() {
        return Err(Error::NoImageLayers);
    }

    let colorscale = image_colorscale(catalog, images.colorscale_name());
    let opacity = ctx.settings.image_opacity.get();
    let data: Vec<Trace> = images
        .select(ctx.image_layer()?)?
        .into_iter()
        .map(|layer| image_surface(layer, ctx.axes, &colorscale, true, opacity).into())
        .collect();

    Ok(Figure::new(data, Layout::data_aspect()))
}
