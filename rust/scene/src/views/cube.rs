// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::image_layer::image_surface;
use super::ViewContext;
use crate::colorscale::image_colorscale;
use crate::error::Result;
use crate::figure::{Figure, Mesh3d, Trace};
use crate::image_layers::ImageLayerSet;
use crate::layout::Layout;
use volmap_core::{ColorscaleCatalog, MeasurementTable};
use volmap_geometry::{group_cuboids, select_cuboids, CubeMesh};

/// The cuboid mesh after layer and category filtering.
pub fn cube_trace(ctx: &ViewContext<'_>, table: &MeasurementTable) -> Result<Mesh3d> {
    let quantity = ctx.quantity(table)?;
    let range = ctx.range()?;
    let cuboids = group_cuboids(table.rows())?;
    let selected = select_cuboids(&cuboids, ctx.layer()?, ctx.category()?, &ctx.axes.z)?;
    tracing::debug!(total = cuboids.len(), selected = selected.len(), "Selected cuboids");

    let mesh = CubeMesh::from_cuboids(&selected, quantity);
    Ok(Mesh3d {
        x: mesh.x,
        y: mesh.y,
        z: mesh.z,
        i: mesh.faces.i,
        j: mesh.faces.j,
        k: mesh.faces.k,
        intensity: Some(mesh.intensity),
        colorscale: Some(ctx.colorscale()),
        cmin: Some(range.min),
        cmax: Some(range.max),
        opacity: ctx.settings.cube_opacity.get(),
        ..Default::default()
    })
}

pub fn cube_figure(ctx: &ViewContext<'_>, table: &MeasurementTable) -> Result<Figure> {
    let mesh = cube_trace(ctx, table)?;
    Ok(Figure::new(vec![mesh.into()], Layout::volume(ctx.axes)))
}

/// Cube mesh with image layers drawn underneath, without their own scale.
pub fn cube_image_figure(
    ctx: &ViewContext<'_>,
    table: &MeasurementTable,
    images: &ImageLayerSet,
    catalog: &ColorscaleCatalog,
) -> Result<Figure> {
    let mut data: Vec<Trace> = vec![cube_trace(ctx, table)?.into()];

    let colorscale = image_colorscale(catalog, images.colorscale_name());
    for layer in images.select(ctx.image_layer()?)? {
        data.push(image_surface(layer, ctx.axes, &colorscale, false, 1.0).into());
    }

    Ok(Figure::new(data, Layout::volume(ctx.axes)))
}
