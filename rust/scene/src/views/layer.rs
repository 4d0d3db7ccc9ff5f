// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ViewContext;
use crate::error::Result;
use crate::figure::{Figure, Surface, SurfaceAxis, Trace};
use crate::layout::Layout;
use volmap_core::{select_layer, LayerSelection, MeasurementTable};
use volmap_geometry::layer_grid;

/// One flat surface per Z-slab colored by Y band. Only the first surface
/// carries a color scale; empty slabs are skipped.
pub fn layer_figure(ctx: &ViewContext<'_>, table: &MeasurementTable) -> Result<Figure> {
    let quantity = ctx.quantity(table)?;
    let range = ctx.range()?;

    let layers: Vec<usize> = match ctx.layer()? {
        LayerSelection::All => (1..=ctx.axes.num_layers()).collect(),
        LayerSelection::Layer(n) => vec![n],
    };

    let mut data: Vec<Trace> = Vec::with_capacity(layers.len());
    for n in layers {
        let selection = LayerSelection::Layer(n);
        let rows = select_layer(selection, table.rows(), &ctx.axes.z)?;
        let Some(grid) = layer_grid(&rows, quantity, &ctx.axes.y) else {
            tracing::debug!(layer = n, "Skipping empty layer");
            continue;
        };

        let showscale = if data.is_empty() { None } else { Some(false) };
        data.push(
            Surface {
                x: SurfaceAxis::Vector(grid.x),
                y: SurfaceAxis::Vector(grid.y),
                z: grid.z,
                surfacecolor: grid.colors,
                colorscale: ctx.colorscale(),
                cmin: Some(range.min),
                cmax: Some(range.max),
                showscale,
                opacity: 1.0,
                name: Some(selection.to_string()),
            }
            .into(),
        );
    }

    Ok(Figure::new(data, Layout::volume(ctx.axes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::{block, point_table};

    fn surfaces(fig: &Figure) -> Vec<&Surface> {
        fig.data
            .iter()
            .map(|t| match t {
                Trace::Surface(s) => s,
                other => panic!("expected surface, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_all_layers() {
        let block = block();
        let fig = layer_figure(&block.ctx(), &point_table()).unwrap();
        let surfaces = surfaces(&fig);
        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].name.as_deref(), Some("Layer 1"));
        assert_eq!(surfaces[0].showscale, None);
        assert_eq!(surfaces[1].showscale, Some(false));

        assert_eq!(surfaces[0].x, SurfaceAxis::Vector(vec![0.0, 1.0]));
        assert_eq!(surfaces[0].z, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert_eq!(surfaces[0].surfacecolor, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_single_layer() {
        let mut block = block();
        block.settings.layer = "Layer 2".into();
        let fig = layer_figure(&block.ctx(), &point_table()).unwrap();
        let surfaces = surfaces(&fig);
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].name.as_deref(), Some("Layer 2"));
        assert_eq!(surfaces[0].showscale, None);
        assert_eq!(surfaces[0].z, vec![vec![1.0, 1.0]]);
    }

    #[test]
    fn test_empty_layers_emit_nothing() {
        let block = block();
        let empty = volmap_core::MeasurementTable::new(vec!["CYB5A".into()], Vec::new());
        let fig = layer_figure(&block.ctx(), &empty).unwrap();
        assert!(fig.data.is_empty());
    }
}
