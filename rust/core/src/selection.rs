// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer and category selectors.

use crate::error::{Error, Result};
use crate::tables::{CategoryLabels, MeasurementRow};
use std::fmt;
use std::str::FromStr;

/// A dropdown choice of either every slab or one 1-indexed slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSelection {
    All,
    Layer(usize),
}

impl LayerSelection {
    /// Zero-based index of the selected slab. `None` for `All` and for the
    /// out-of-range `Layer(0)`.
    pub fn index(&self) -> Option<usize> {
        match self {
            LayerSelection::All => None,
            LayerSelection::Layer(n) => n.checked_sub(1),
        }
    }

    /// Parse an image layer choice. Image dropdowns label entries
    /// `Image N`; `Layer N` is accepted as well.
    pub fn parse_image(value: &str) -> Result<Self> {
        if let Some(n) = value.strip_prefix(crate::IMAGE_PREFIX) {
            return parse_number(value, n);
        }
        value.parse()
    }
}

impl FromStr for LayerSelection {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        if value == crate::ALL {
            return Ok(LayerSelection::All);
        }
        match value.strip_prefix(crate::LAYER_PREFIX) {
            Some(n) => parse_number(value, n),
            None => Err(Error::UnknownLayer(value.to_string())),
        }
    }
}

fn parse_number(value: &str, digits: &str) -> Result<LayerSelection> {
    match digits.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(LayerSelection::Layer(n)),
        _ => Err(Error::UnknownLayer(value.to_string())),
    }
}

impl fmt::Display for LayerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSelection::All => f.write_str(crate::ALL),
            LayerSelection::Layer(n) => write!(f, "{}{}", crate::LAYER_PREFIX, n),
        }
    }
}

/// Z bounds `[lower, upper)` of 1-indexed slab `layer`.
pub fn layer_bounds(layer: usize, z_axis: &[f64]) -> Result<(f64, f64)> {
    let available = z_axis.len().saturating_sub(1);
    if layer == 0 || layer > available {
        return Err(Error::LayerOutOfRange { layer, available });
    }
    Ok((z_axis[layer - 1], z_axis[layer]))
}

/// Rows inside the selected slab. A row sitting exactly on a slab's upper
/// bound belongs to the next slab.
pub fn select_layer<'a, I>(selection: LayerSelection, rows: I, z_axis: &[f64]) -> Result<Vec<&'a MeasurementRow>>
where
    I: IntoIterator<Item = &'a MeasurementRow>,
{
    match selection {
        LayerSelection::All => Ok(rows.into_iter().collect()),
        LayerSelection::Layer(n) => {
            let (lower, upper) = layer_bounds(n, z_axis)?;
            Ok(rows
                .into_iter()
                .filter(|row| row.z >= lower && row.z < upper)
                .collect())
        }
    }
}

/// A category dropdown choice resolved against the block's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(bool),
}

impl CategorySelection {
    /// Resolve a dropdown label. Labels matching neither `All` nor the
    /// true/false labels are rejected.
    pub fn resolve(option: &str, labels: &CategoryLabels) -> Result<Self> {
        if option == crate::ALL {
            Ok(CategorySelection::All)
        } else if option == labels.true_label {
            Ok(CategorySelection::Only(true))
        } else if option == labels.false_label {
            Ok(CategorySelection::Only(false))
        } else {
            Err(Error::UnknownCategory(option.to_string()))
        }
    }

    #[inline]
    pub fn matches(&self, row: &MeasurementRow) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(flag) => row.category == *flag,
        }
    }
}

/// Rows matching the category dropdown choice `option`.
pub fn select_category<'a, I>(option: &str, labels: &CategoryLabels, rows: I) -> Result<Vec<&'a MeasurementRow>>
where
    I: IntoIterator<Item = &'a MeasurementRow>,
{
    let selection = CategorySelection::resolve(option, labels)?;
    Ok(rows.into_iter().filter(|row| selection.matches(row)).collect())
}
