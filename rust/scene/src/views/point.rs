// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ViewContext;
use crate::error::Result;
use crate::figure::{Figure, Volume};
use crate::layout::Layout;
use volmap_core::{select_layer, MeasurementTable};

const SURFACE_COUNT: u32 = 21;
const NAME: &str = "Point View";

/// Point measurements of the selected layer as an iso-surface volume.
/// Category filtering does not apply to this view.
pub fn point_figure(ctx: &ViewContext<'_>, table: &MeasurementTable) -> Result<Figure> {
    let quantity = ctx.quantity(table)?;
    let range = ctx.range()?;
    let rows = select_layer(ctx.layer()?, table.rows(), &ctx.axes.z)?;

    let mut volume = Volume {
        isomin: range.min,
        isomax: range.max,
        opacity: ctx.settings.point_opacity.get(),
        colorscale: ctx.colorscale(),
        surface_count: SURFACE_COUNT,
        name: Some(NAME.to_string()),
        ..Default::default()
    };
    for row in rows {
        volume.x.push(row.x);
        volume.y.push(row.y);
        volume.z.push(row.z);
        volume.value.push(row.value(quantity));
    }

    Ok(Figure::new(vec![volume.into()], Layout::volume(ctx.axes)))
}
