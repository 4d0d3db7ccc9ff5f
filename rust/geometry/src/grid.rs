// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat surface grids for one Z-slab of point measurements.

use rustc_hash::FxHashSet;
use volmap_core::{MeasurementRow, QuantityIndex};

/// A horizontal surface through one slab.
///
/// `x` and `y` hold the distinct centers present in the slab, in order of
/// first appearance. `z` is a `y.len()` by `x.len()` grid at the slab's
/// height. `colors` has one row per Y band of the block axis, each listing
/// the quantity values of the rows inside that band.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colors: Vec<Vec<f64>>,
}

/// Distinct values in order of first appearance. Values are compared by bit
/// pattern, so `0.0` and `-0.0` are distinct.
pub fn unique_in_order<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut seen = FxHashSet::default();
    values.into_iter().filter(|v| seen.insert(v.to_bits())).collect()
}

/// Quantity values bucketed into half-open Y bands `[y_i, y_{i+1})`.
pub fn band_colors(rows: &[&MeasurementRow], quantity: QuantityIndex, y_axis: &[f64]) -> Vec<Vec<f64>> {
    y_axis
        .windows(2)
        .map(|band| {
            rows.iter()
                .filter(|row| row.y >= band[0] && row.y < band[1])
                .map(|row| row.value(quantity))
                .collect()
        })
        .collect()
}

/// Build the surface for a slab's rows. Returns `None` for an empty slab.
pub fn layer_grid(rows: &[&MeasurementRow], quantity: QuantityIndex, y_axis: &[f64]) -> Option<LayerGrid> {
    let z_val = rows.first()?.z;
    let x = unique_in_order(rows.iter().map(|row| row.x));
    let y = unique_in_order(rows.iter().map(|row| row.y));
    let z = vec![vec![z_val; x.len()]; y.len()];
    let colors = band_colors(rows, quantity, y_axis);
    Some(LayerGrid { x, y, z, colors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use volmap_core::{CubeId, MeasurementTable};

    fn table() -> MeasurementTable {
        let rows = vec![
            MeasurementRow::new(CubeId(0), [0.0, 0.0, 5.0], true, vec![1.0]),
            MeasurementRow::new(CubeId(0), [10.0, 0.0, 5.0], true, vec![2.0]),
            MeasurementRow::new(CubeId(0), [0.0, 10.0, 5.0], false, vec![3.0]),
            MeasurementRow::new(CubeId(0), [10.0, 10.0, 5.0], false, vec![4.0]),
        ];
        MeasurementTable::new(vec!["CYB5A".into()], rows)
    }

    #[test]
    fn test_layer_grid() {
        let table = table();
        let quantity = table.quantity("CYB5A").unwrap();
        let rows: Vec<&MeasurementRow> = table.rows().iter().collect();
        let grid = layer_grid(&rows, quantity, &[0.0, 10.0, 20.0]).unwrap();

        assert_eq!(grid.x, vec![0.0, 10.0]);
        assert_eq!(grid.y, vec![0.0, 10.0]);
        assert_eq!(grid.z, vec![vec![5.0, 5.0], vec![5.0, 5.0]]);
        assert_eq!(grid.colors, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_band_upper_edge_excluded() {
        let table = table();
        let quantity = table.quantity("CYB5A").unwrap();
        let rows: Vec<&MeasurementRow> = table.rows().iter().collect();
        // y = 10 falls outside [0, 10)
        let colors = band_colors(&rows, quantity, &[0.0, 10.0]);
        assert_eq!(colors, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn test_empty_slab() {
        let table = table();
        let quantity = table.quantity("CYB5A").unwrap();
        assert!(layer_grid(&[], quantity, &[0.0, 10.0]).is_none());
    }

    #[test]
    fn test_unique_in_order() {
        assert_eq!(unique_in_order([3.0, 1.0, 3.0, 2.0, 1.0]), vec![3.0, 1.0, 2.0]);
    }
}
