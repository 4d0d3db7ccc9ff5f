// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ViewContext;
use crate::colorscale::Colorscale;
use crate::error::Result;
use crate::figure::{Figure, Surface, SurfaceAxis, Trace};
use crate::layout::Layout;
use volmap_core::{select_layer, MeasurementRow, MeasurementTable, ValueRange};
use volmap_geometry::{marker, Point3};

/// A sphere marker for one measurement, colored uniformly by `value`.
pub fn sphere_trace(
    row: &MeasurementRow,
    value: f64,
    range: ValueRange,
    colorscale: &Colorscale,
    showscale: bool,
) -> Surface {
    let grid = marker(Point3::new(row.x, row.y, row.z));
    let surfacecolor = grid.uniform(value);
    Surface {
        x: SurfaceAxis::Grid(grid.x),
        y: SurfaceAxis::Grid(grid.y),
        z: grid.z,
        surfacecolor,
        colorscale: colorscale.clone(),
        cmin: Some(range.min),
        cmax: Some(range.max),
        showscale: if showscale { None } else { Some(false) },
        opacity: 1.0,
        name: Some(format!("val:\n{:?}", value)),
    }
}

/// One sphere per measurement in the selected layer and category. Rows
/// without a value are skipped; the first sphere in table order carries the
/// color scale.
pub fn sphere_figure(ctx: &ViewContext<'_>, table: &MeasurementTable) -> Result<Figure> {
    let quantity = ctx.quantity(table)?;
    let range = ctx.range()?;
    let category = ctx.category()?;
    let colorscale = ctx.colorscale();

    let rows = select_layer(ctx.layer()?, table.rows(), &ctx.axes.z)?;
    let mut data: Vec<Trace> = Vec::new();
    let mut skipped = 0usize;

    for row in rows.into_iter().filter(|row| category.matches(row)) {
        let value = row.value(quantity);
        if value.is_nan() {
            skipped += 1;
            continue;
        }
        let showscale = data.is_empty();
        data.push(sphere_trace(row, value, range, &colorscale, showscale).into());
    }

    tracing::debug!(spheres = data.len(), skipped, "Built sphere markers");
    Ok(Figure::new(data, Layout::volume(ctx.axes)))
}
