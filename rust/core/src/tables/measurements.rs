// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volumetric measurement tables.
//!
//! `vol_measurements.csv` carries the grid bounds of a block.
//! `cube_data.csv` and `points_data.csv` carry one sampled location per row
//! with a category flag and one column per measured quantity.

use super::{csv_reader, read_records, Columns, Table};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

pub const X_CENTER: &str = "X Center";
pub const Y_CENTER: &str = "Y Center";
pub const Z_CENTER: &str = "Z Center";
pub const CATEGORY: &str = "Category";
pub const CUBE_ID: &str = "Cube ID";

/// Rows per cuboid when ids are assigned positionally.
pub const CORNERS_PER_CUBE: usize = 8;

/// Min, max and step of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Grid bounds of a block, read from the first row of `vol_measurements.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub z: AxisBounds,
}

#[derive(Debug, Deserialize)]
struct VolumeBoundsRecord {
    #[serde(rename = "X Min")]
    x_min: f64,
    #[serde(rename = "X Max")]
    x_max: f64,
    #[serde(rename = "X Size")]
    x_size: f64,
    #[serde(rename = "Y Min")]
    y_min: f64,
    #[serde(rename = "Y Max")]
    y_max: f64,
    #[serde(rename = "Y Size")]
    y_size: f64,
    #[serde(rename = "Z Min")]
    z_min: f64,
    #[serde(rename = "Z Max")]
    z_max: f64,
    #[serde(rename = "Z Size")]
    z_size: f64,
}

impl Table for VolumeBounds {
    const NAME: &'static str = "vol_measurements";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let record: VolumeBoundsRecord = read_records::<VolumeBoundsRecord, _>(rdr)
            .map_err(|e| match e {
                Error::Csv(csv) => Error::configuration(Self::NAME, csv.to_string()),
                other => other,
            })?
            .into_iter()
            .next()
            .ok_or_else(|| Error::configuration(Self::NAME, "table is empty"))?;

        Ok(Self {
            x: AxisBounds {
                min: record.x_min,
                max: record.x_max,
                step: record.x_size,
            },
            y: AxisBounds {
                min: record.y_min,
                max: record.y_max,
                step: record.y_size,
            },
            z: AxisBounds {
                min: record.z_min,
                max: record.z_max,
                step: record.z_size,
            },
        })
    }
}

/// Identifies the cuboid a corner row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CubeId(pub u32);

/// Column position of a measured quantity within a [`MeasurementTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityIndex(usize);

/// One sampled 3D location.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub cube_id: CubeId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub category: bool,
    values: Vec<f64>,
}

impl MeasurementRow {
    pub fn new(cube_id: CubeId, center: [f64; 3], category: bool, values: Vec<f64>) -> Self {
        Self {
            cube_id,
            x: center[0],
            y: center[1],
            z: center[2],
            category,
            values,
        }
    }

    /// Value of a quantity; NaN where the cell was blank.
    #[inline]
    pub fn value(&self, quantity: QuantityIndex) -> f64 {
        self.values.get(quantity.0).copied().unwrap_or(f64::NAN)
    }

    #[inline]
    pub fn center(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A point or cube-corner table in file order.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    quantities: Vec<String>,
    rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    pub fn new(quantities: Vec<String>, rows: Vec<MeasurementRow>) -> Self {
        Self { quantities, rows }
    }

    pub fn quantities(&self) -> &[String] {
        &self.quantities
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a quantity name to its column.
    pub fn quantity(&self, name: &str) -> Result<QuantityIndex> {
        self.quantities
            .iter()
            .position(|q| q == name)
            .map(QuantityIndex)
            .ok_or_else(|| Error::UnknownQuantity(name.to_string()))
    }
}

impl Table for MeasurementTable {
    const NAME: &'static str = "measurements";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv_reader(rdr);
        let columns = Columns::new(Self::NAME, rdr.headers()?.clone());

        let x_col = columns.required(X_CENTER)?;
        let y_col = columns.required(Y_CENTER)?;
        let z_col = columns.required(Z_CENTER)?;
        let category_col = columns.required(CATEGORY)?;
        let cube_col = columns.optional(CUBE_ID);

        let reserved = [Some(x_col), Some(y_col), Some(z_col), Some(category_col), cube_col];
        let quantity_cols: Vec<usize> = columns
            .iter()
            .filter(|(i, name)| !name.is_empty() && !reserved.contains(&Some(*i)))
            .map(|(i, _)| i)
            .collect();
        let quantities = quantity_cols
            .iter()
            .map(|&c| columns.name(c).to_string())
            .collect();

        let mut rows = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let cube_id = match cube_col {
                Some(c) => {
                    let id = columns.number(&record, c, row)?;
                    if id < 0.0 || id.fract() != 0.0 || id > u32::MAX as f64 {
                        return Err(Error::InvalidNumber {
                            table: Self::NAME,
                            column: CUBE_ID.to_string(),
                            row,
                            value: record.get(c).unwrap_or_default().to_string(),
                        });
                    }
                    CubeId(id as u32)
                }
                None => u32::try_from(row / CORNERS_PER_CUBE)
                    .map(CubeId)
                    .map_err(|_| Error::configuration(Self::NAME, "too many rows for positional cube ids"))?,
            };
            let values = quantity_cols
                .iter()
                .map(|&c| columns.measurement(&record, c, row))
                .collect::<Result<Vec<_>>>()?;

            rows.push(MeasurementRow {
                cube_id,
                x: columns.number(&record, x_col, row)?,
                y: columns.number(&record, y_col, row)?,
                z: columns.number(&record, z_col, row)?,
                category: columns.flag(&record, category_col, row)?,
                values,
            });
        }

        tracing::debug!(
            rows = rows.len(),
            quantities = quantity_cols.len(),
            explicit_cube_ids = cube_col.is_some(),
            "Read measurement table"
        );

        Ok(Self { quantities, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_bounds() {
        let csv = "X Min,X Max,X Size,Y Min,Y Max,Y Size,Z Min,Z Max,Z Size\n0,450,50,0,250,50,0,200,50\n";
        let bounds = VolumeBounds::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(bounds.x, AxisBounds { min: 0.0, max: 450.0, step: 50.0 });
        assert_eq!(bounds.z.max, 200.0);
    }

    #[test]
    fn test_volume_bounds_empty() {
        let csv = "X Min,X Max,X Size,Y Min,Y Max,Y Size,Z Min,Z Max,Z Size\n";
        assert!(matches!(
            VolumeBounds::from_reader(csv.as_bytes()),
            Err(Error::Configuration { table: "vol_measurements", .. })
        ));
    }

    #[test]
    fn test_volume_bounds_missing_column() {
        let csv = "X Min,X Max\n0,3\n";
        assert!(matches!(
            VolumeBounds::from_reader(csv.as_bytes()),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_positional_cube_ids() {
        let mut csv = String::from("X Center,Y Center,Z Center,Category,CYB5A\n");
        for i in 0..16 {
            csv.push_str(&format!("{},0,0,True,{}\n", i, i as f64 * 0.1));
        }
        let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 16);
        assert_eq!(table.rows()[7].cube_id, CubeId(0));
        assert_eq!(table.rows()[8].cube_id, CubeId(1));
    }

    #[test]
    fn test_explicit_cube_ids_and_blank_values() {
        let csv = "Cube ID,X Center,Y Center,Z Center,Category,CYB5A,ALB\n\
                   4,25,25,25,False,0.5,\n";
        let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.quantities(), &["CYB5A".to_string(), "ALB".to_string()]);
        let row = &table.rows()[0];
        assert_eq!(row.cube_id, CubeId(4));
        assert!(!row.category);
        assert_eq!(row.value(table.quantity("CYB5A").unwrap()), 0.5);
        assert!(row.value(table.quantity("ALB").unwrap()).is_nan());
    }

    #[test]
    fn test_cube_id_beyond_u32_is_rejected() {
        let csv = "Cube ID,X Center,Y Center,Z Center,Category,CYB5A\n\
                   4294967295,0,0,0,True,1\n\
                   4294967296,0,0,0,True,1\n";
        match MeasurementTable::from_reader(csv.as_bytes()) {
            Err(Error::InvalidNumber { column, row, value, .. }) => {
                assert_eq!(column, "Cube ID");
                assert_eq!(row, 1);
                assert_eq!(value, "4294967296");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let csv = "Cube ID,X Center,Y Center,Z Center,Category,CYB5A\n4294967295,0,0,0,True,1\n";
        let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].cube_id, CubeId(u32::MAX));
    }

    #[test]
    fn test_negative_or_fractional_cube_id_is_rejected() {
        for id in ["-1", "2.5"] {
            let csv = format!("Cube ID,X Center,Y Center,Z Center,Category,CYB5A\n{},0,0,0,True,1\n", id);
            assert!(matches!(
                MeasurementTable::from_reader(csv.as_bytes()),
                Err(Error::InvalidNumber { .. })
            ));
        }
    }

    #[test]
    fn test_bad_number_names_column() {
        let csv = "X Center,Y Center,Z Center,Category,CYB5A\n1,2,three,True,0\n";
        match MeasurementTable::from_reader(csv.as_bytes()) {
            Err(Error::InvalidNumber { column, row, .. }) => {
                assert_eq!(column, "Z Center");
                assert_eq!(row, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_center_column() {
        let csv = "X Center,Y Center,Category\n1,2,True\n";
        assert!(matches!(
            MeasurementTable::from_reader(csv.as_bytes()),
            Err(Error::MissingColumn { .. })
        ));
    }
}
