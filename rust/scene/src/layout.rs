// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Figure layout: scene axes, aspect and camera.

use serde::Serialize;
use volmap_core::Axes;

/// Plain `{x, y, z}` triple used for aspect ratios, camera eyes and light
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspectmode: Option<AspectMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspectratio: Option<Xyz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nticks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl AxisLayout {
    /// Axis spanning the first to last tick.
    fn spanning(ticks: &[f64], nticks: u32) -> Self {
        let range = match (ticks.first(), ticks.last()) {
            (Some(&lo), Some(&hi)) => Some([lo, hi]),
            _ => None,
        };
        Self {
            nticks: Some(nticks),
            range,
            visible: None,
        }
    }

    fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Manual,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub eye: Xyz,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

const X_TICKS: u32 = 10;
const Y_TICKS: u32 = 6;
const Z_TICKS: u32 = 5;
const ASPECT_RATIO: Xyz = Xyz::new(0.9, 0.5, 0.4);
const CAMERA_EYE: Xyz = Xyz::new(0.7, 0.7, 0.7);

const ORGAN_HEIGHT: u32 = 500;
const ORGAN_MARGIN: u32 = 20;

impl Layout {
    /// Layout shared by the volumetric views: axes pinned to the block
    /// extent, a flattened manual aspect and a fixed camera.
    pub fn volume(axes: &Axes) -> Self {
        Self {
            scene: Some(SceneLayout {
                xaxis: Some(AxisLayout::spanning(&axes.x, X_TICKS)),
                yaxis: Some(AxisLayout::spanning(&axes.y, Y_TICKS)),
                zaxis: Some(AxisLayout::spanning(&axes.z, Z_TICKS)),
                aspectmode: Some(AspectMode::Manual),
                aspectratio: Some(ASPECT_RATIO),
                camera: Some(Camera { eye: CAMERA_EYE }),
            }),
            ..Default::default()
        }
    }

    /// Proportional aspect, used when image surfaces define their own extent.
    pub fn data_aspect() -> Self {
        Self {
            scene: Some(SceneLayout {
                aspectmode: Some(AspectMode::Data),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Organ model layout with hidden axes.
    pub fn organ() -> Self {
        Self {
            height: Some(ORGAN_HEIGHT),
            scene: Some(SceneLayout {
                xaxis: Some(AxisLayout::hidden()),
                yaxis: Some(AxisLayout::hidden()),
                zaxis: Some(AxisLayout::hidden()),
                ..Default::default()
            }),
            margin: Some(Margin {
                l: ORGAN_MARGIN,
                r: ORGAN_MARGIN,
                t: ORGAN_MARGIN,
                b: ORGAN_MARGIN,
            }),
        }
    }
}
