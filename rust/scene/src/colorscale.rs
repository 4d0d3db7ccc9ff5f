// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colorscales: named built-ins and catalog-defined stop lists.

use serde::Serialize;
use volmap_core::ColorscaleCatalog;

/// Built-in scale used when an image layer names no catalog scale.
pub const FALLBACK_COLORSCALE: &str = "greys";

/// One `[position, "rgb(r,g,b)"]` stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop(pub f64, pub String);

/// Either a renderer built-in referenced by name or an explicit stop list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colorscale {
    Named(String),
    Stops(Vec<ColorStop>),
}

impl Colorscale {
    pub fn named(name: impl Into<String>) -> Self {
        Colorscale::Named(name.into())
    }
}

impl Default for Colorscale {
    fn default() -> Self {
        Colorscale::named(FALLBACK_COLORSCALE)
    }
}

/// Stops of a catalog scale, ordered by entry number. `None` when the
/// catalog does not define `name`.
pub fn resolve_colorscale(catalog: &ColorscaleCatalog, name: &str) -> Option<Vec<ColorStop>> {
    let entries = catalog.entries(name)?;
    Some(
        entries
            .into_iter()
            .map(|e| ColorStop(e.marker, format!("rgb({},{},{})", e.r, e.g, e.b)))
            .collect(),
    )
}

/// Colorscale for image surfaces, falling back to [`FALLBACK_COLORSCALE`].
pub fn image_colorscale(catalog: &ColorscaleCatalog, name: Option<&str>) -> Colorscale {
    match name.and_then(|n| resolve_colorscale(catalog, n)) {
        Some(stops) => Colorscale::Stops(stops),
        None => {
            tracing::debug!(scale = ?name, "Colorscale not in catalog, using {}", FALLBACK_COLORSCALE);
            Colorscale::default()
        }
    }
}
