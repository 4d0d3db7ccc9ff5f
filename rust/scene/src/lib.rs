// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Volmap Scene
//!
//! Turns filtered block tables into declarative 3D figures: a list of
//! `mesh3d`, `volume` and `surface` traces plus a scene layout, serialized
//! as JSON for the browser plotting layer.
//!
//! ## Views
//!
//! | Tab               | Traces                                         |
//! |-------------------|------------------------------------------------|
//! | `cube-tab`        | one cuboid mesh                                |
//! | `cube-image-tab`  | cuboid mesh plus image layer surfaces          |
//! | `point-tab`       | one iso-surface volume                         |
//! | `layer-tab`       | one flat surface per Z-slab                    |
//! | `image-layer-tab` | image layer surfaces                           |
//! | `sphere-tab`      | one sphere marker per valued measurement       |
//!
//! Organ models are assembled separately by [`organ_models`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use volmap_scene::{render_view, ViewContext, ViewTab};
//!
//! let ctx = ViewContext { axes: &axes, ranges: &ranges, labels: &labels, settings: &settings };
//! let figure = render_view(ViewTab::Sphere, &ctx, &store)?;
//! println!("{}", serde_json::to_string(&figure)?);
//! ```

pub mod colorscale;
pub mod error;
pub mod figure;
pub mod image_layers;
pub mod layout;
pub mod views;

pub use colorscale::{image_colorscale, resolve_colorscale, ColorStop, Colorscale, FALLBACK_COLORSCALE};
pub use error::{Error, Result};
pub use figure::{Figure, Lighting, Mesh3d, Surface, SurfaceAxis, Trace, Volume};
pub use image_layers::{image_layer_path, load_image_layers, read_array, ImageLayer, ImageLayerSet};
pub use layout::{AspectMode, AxisLayout, Camera, Layout, Margin, SceneLayout, Xyz};
pub use views::{
    available_tabs, cube_figure, cube_image_figure, image_layer_figure, layer_figure, organ_figure, organ_models,
    point_figure, render_view, sphere_figure, OrganModel, ViewContext, ViewSource, ViewTab, NO_MODELS,
};
