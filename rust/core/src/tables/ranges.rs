// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-quantity value ranges (`value_ranges.csv`).
//!
//! The table is transposed relative to the others: the first column holds
//! the row labels `Min`, `Max` and `Default`, and every further column is
//! one measured quantity.

use super::{csv_reader, Columns, Table};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

const ROW_LABEL: &str = "Row Label";

/// Bounds used to normalize the color mapping of one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(rename = "Min")]
    pub min: f64,
    #[serde(rename = "Max")]
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityRange {
    pub quantity: String,
    pub range: ValueRange,
    pub default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ValueRanges {
    entries: Vec<QuantityRange>,
}

impl ValueRanges {
    pub fn new(entries: Vec<QuantityRange>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[QuantityRange] {
        &self.entries
    }

    /// Quantity names in column order.
    pub fn quantities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.quantity.as_str())
    }

    pub fn get(&self, quantity: &str) -> Result<ValueRange> {
        self.entries
            .iter()
            .find(|e| e.quantity == quantity)
            .map(|e| e.range)
            .ok_or_else(|| Error::UnknownQuantity(quantity.to_string()))
    }

    /// The quantity displayed initially. The first flagged column wins.
    pub fn default_quantity(&self) -> Result<&str> {
        let mut flagged = self.entries.iter().filter(|e| e.default);
        let first = flagged
            .next()
            .ok_or_else(|| Error::configuration(Self::NAME, "no quantity carries the default flag"))?;
        let extra = flagged.count();
        if extra > 0 {
            tracing::warn!(
                quantity = %first.quantity,
                extra,
                "Several quantities flagged as default, using the first"
            );
        }
        Ok(&first.quantity)
    }
}

impl Table for ValueRanges {
    const NAME: &'static str = "value_ranges";

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv_reader(rdr);
        let columns = Columns::new(Self::NAME, rdr.headers()?.clone());
        let label_col = columns.required(ROW_LABEL)?;

        let quantity_cols: Vec<usize> = columns
            .iter()
            .filter(|(i, name)| *i != label_col && !name.is_empty())
            .map(|(i, _)| i)
            .collect();

        let mut mins = None;
        let mut maxes = None;
        let mut defaults = None;

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            match record.get(label_col).unwrap_or_default() {
                "Min" => {
                    mins = Some(
                        quantity_cols
                            .iter()
                            .map(|&c| columns.number(&record, c, row))
                            .collect::<Result<Vec<_>>>()?,
                    )
                }
                "Max" => {
                    maxes = Some(
                        quantity_cols
                            .iter()
                            .map(|&c| columns.number(&record, c, row))
                            .collect::<Result<Vec<_>>>()?,
                    )
                }
                "Default" => {
                    defaults = Some(
                        quantity_cols
                            .iter()
                            .map(|&c| columns.flag(&record, c, row))
                            .collect::<Result<Vec<_>>>()?,
                    )
                }
                other => tracing::debug!(label = other, "Ignoring value range row"),
            }
        }

        let missing = |label: &str| Error::configuration(Self::NAME, format!("missing '{}' row", label));
        let mins = mins.ok_or_else(|| missing("Min"))?;
        let maxes = maxes.ok_or_else(|| missing("Max"))?;
        let defaults = defaults.ok_or_else(|| missing("Default"))?;

        let entries = quantity_cols
            .iter()
            .enumerate()
            .map(|(n, &c)| QuantityRange {
                quantity: columns.name(c).to_string(),
                range: ValueRange::new(mins[n], maxes[n]),
                default: defaults[n],
            })
            .collect();

        Ok(Self { entries })
    }
}
