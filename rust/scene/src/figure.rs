// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Figure and trace types.
//!
//! A [`Figure`] is a list of typed traces plus a layout, serialized in the
//! JSON shape the browser plotting layer consumes. Optional fields are left
//! out of the output when unset so the renderer applies its own defaults.

use crate::colorscale::Colorscale;
use crate::layout::{Layout, Xyz};
use serde::Serialize;

/// A complete scene description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    pub fn trace_count(&self) -> usize {
        self.data.len()
    }
}

/// One primitive of a figure, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Mesh3d(Mesh3d),
    Volume(Volume),
    Surface(Surface),
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Mesh3d(t) => t.name.as_deref(),
            Trace::Volume(t) => t.name.as_deref(),
            Trace::Surface(t) => t.name.as_deref(),
        }
    }
}

impl From<Mesh3d> for Trace {
    fn from(t: Mesh3d) -> Self {
        Trace::Mesh3d(t)
    }
}

impl From<Volume> for Trace {
    fn from(t: Volume) -> Self {
        Trace::Volume(t)
    }
}

impl From<Surface> for Trace {
    fn from(t: Surface) -> Self {
        Trace::Surface(t)
    }
}

/// Indexed triangle mesh with either per-vertex intensity or a flat color.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh3d {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<Colorscale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatshading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<Lighting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightposition: Option<Xyz>,
}

/// Sparse scalar field rendered as nested iso-surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Volume {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub value: Vec<f64>,
    pub isomin: f64,
    pub isomax: f64,
    pub opacity: f64,
    pub colorscale: Colorscale,
    pub surface_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Surface coordinates: either one value per column/row or a full grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SurfaceAxis {
    Vector(Vec<f64>),
    Grid(Vec<Vec<f64>>),
}

impl Default for SurfaceAxis {
    fn default() -> Self {
        SurfaceAxis::Vector(Vec::new())
    }
}

/// Colored surface over a rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surface {
    pub x: SurfaceAxis,
    pub y: SurfaceAxis,
    pub z: Vec<Vec<f64>>,
    pub surfacecolor: Vec<Vec<f64>>,
    pub colorscale: Colorscale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Mesh lighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lighting {
    pub ambient: f64,
    pub diffuse: f64,
    pub fresnel: f64,
    pub specular: f64,
    pub roughness: f64,
    pub facenormalsepsilon: f64,
    pub vertexnormalsepsilon: f64,
}

impl Lighting {
    /// Lighting used for organ models.
    pub const ORGAN: Lighting = Lighting {
        ambient: 0.18,
        diffuse: 1.0,
        fresnel: 0.1,
        specular: 1.0,
        roughness: 0.1,
        facenormalsepsilon: 1e-6,
        vertexnormalsepsilon: 1e-12,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_tag() {
        let trace: Trace = Volume {
            surface_count: 21,
            name: Some("Point View".into()),
            ..Default::default()
        }
        .into();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "volume");
        assert_eq!(json["surface_count"], 21);
        assert_eq!(trace.name(), Some("Point View"));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let trace: Trace = Surface {
            x: SurfaceAxis::Vector(vec![0.0, 1.0]),
            y: SurfaceAxis::Grid(vec![vec![0.0], vec![1.0]]),
            opacity: 1.0,
            ..Default::default()
        }
        .into();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "surface");
        assert_eq!(json["x"], json!([0.0, 1.0]));
        assert_eq!(json["y"], json!([[0.0], [1.0]]));
        assert!(json.get("showscale").is_none());
        assert!(json.get("cmin").is_none());
        assert_eq!(json["colorscale"], "greys");
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let mesh = Mesh3d {
            intensity: Some(vec![f64::NAN, 1.0]),
            ..Default::default()
        };
        let json = serde_json::to_value(&mesh).unwrap();
        assert_eq!(json["intensity"], json!([null, 1.0]));
    }
}
