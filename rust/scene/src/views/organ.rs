// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Organ models: one lit mesh per listed OBJ file.

use crate::error::Result;
use crate::figure::{Figure, Lighting, Mesh3d, Trace};
use crate::layout::{Layout, Xyz};
use serde::Serialize;
use std::path::Path;
use volmap_core::{OrganTrace, OrganTraces};
use volmap_geometry::{read_obj, Mesh};

/// Shown in place of a figure when no model of an organ could be read.
pub const NO_MODELS: &str = "No models could be loaded for this organ";

const LIGHT_POSITION: Xyz = Xyz::new(100.0, 200.0, 0.0);

/// The model figure of one organ, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganModel {
    pub organ: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub fn organ_trace(trace: &OrganTrace, mesh: &Mesh) -> Mesh3d {
    let [x, y, z] = mesh.coordinate_columns();
    Mesh3d {
        x,
        y,
        z,
        i: mesh.faces.i.clone(),
        j: mesh.faces.j.clone(),
        k: mesh.faces.k.clone(),
        color: Some(trace.color.clone()),
        opacity: trace.opacity,
        name: Some(trace.name.clone()),
        flatshading: Some(false),
        lighting: Some(Lighting::ORGAN),
        lightposition: Some(LIGHT_POSITION),
        ..Default::default()
    }
}

/// Build an organ's figure from its traces. A trace whose OBJ file is
/// missing is skipped; `None` means no trace could be loaded.
pub fn organ_figure<'a, I>(traces: I, volumes: &Path) -> Result<Option<Figure>>
where
    I: IntoIterator<Item = &'a OrganTrace>,
{
    let mut data: Vec<Trace> = Vec::new();

    for trace in traces {
        let path = volumes.join(&trace.file);
        let mesh = match read_obj(&path) {
            Ok(mesh) => mesh,
            Err(volmap_geometry::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(organ = %trace.organ, file = %path.display(), "Model file missing, skipping trace");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(organ = %trace.organ, name = %trace.name, "Added organ trace");
        data.push(organ_trace(trace, &mesh).into());
    }

    if data.is_empty() {
        return Ok(None);
    }
    Ok(Some(Figure::new(data, Layout::organ())))
}

/// One model per distinct organ, in table order.
pub fn organ_models(traces: &OrganTraces, volumes: &Path) -> Result<Vec<OrganModel>> {
    traces
        .organs()
        .into_iter()
        .map(|organ| {
            let figure = organ_figure(traces.for_organ(organ), volumes)?;
            let message = figure.is_none().then_some(NO_MODELS);
            Ok(OrganModel {
                organ: organ.to_string(),
                figure,
                message,
            })
        })
        .collect()
}
