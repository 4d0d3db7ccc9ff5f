// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis model: tick positions of a block's 3D grid.

use crate::error::{Error, Result};
use crate::tables::{AxisBounds, VolumeBounds};
use serde::{Deserialize, Serialize};

/// Tolerance when checking that an axis span is a whole number of steps.
const STEP_EPSILON: f64 = 1e-9;

/// Tick positions along X, Y and Z, inclusive of both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Axes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Axes {
    /// Number of Z slabs.
    pub fn num_layers(&self) -> usize {
        self.z.len().saturating_sub(1)
    }
}

/// Build the tick sequences of all three axes.
pub fn build_axes(bounds: &VolumeBounds) -> Result<Axes> {
    Ok(Axes {
        x: build_axis("X", &bounds.x)?,
        y: build_axis("Y", &bounds.y)?,
        z: build_axis("Z", &bounds.z)?,
    })
}

/// `min, min+step, ..., max`.
pub fn build_axis(label: &str, bounds: &AxisBounds) -> Result<Vec<f64>> {
    let AxisBounds { min, max, step } = *bounds;
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || max < min {
        return Err(Error::configuration(
            "vol_measurements",
            format!("invalid {} axis bounds (min {}, max {}, step {})", label, min, max, step),
        ));
    }

    let steps = (max - min) / step;
    let whole = steps.round();
    if (steps - whole).abs() > STEP_EPSILON * whole.max(1.0) {
        return Err(Error::configuration(
            "vol_measurements",
            format!("{} axis span {} is not a multiple of step {}", label, max - min, step),
        ));
    }

    let count = whole as usize + 1;
    let mut ticks: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
    // Pin the last tick so accumulated error never moves the upper bound.
    if let Some(last) = ticks.last_mut() {
        *last = max;
    }
    Ok(ticks)
}

/// `["All", "Layer 1", ..., "Layer k"]` with `k = z_axis.len() - 1`.
pub fn build_layers(z_axis: &[f64]) -> Vec<String> {
    let num_layers = z_axis.len().saturating_sub(1);
    std::iter::once(crate::ALL.to_string())
        .chain((1..=num_layers).map(|n| format!("{}{}", crate::LAYER_PREFIX, n)))
        .collect()
}

/// `["All", "Image 1", ..., "Image n"]` for a block with `n` image layers.
pub fn image_layer_options(count: usize) -> Vec<String> {
    std::iter::once(crate::ALL.to_string())
        .chain((1..=count).map(|n| format!("{}{}", crate::IMAGE_PREFIX, n)))
        .collect()
}
