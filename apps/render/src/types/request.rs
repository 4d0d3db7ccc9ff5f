// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for figure rendering.

use crate::error::{RenderError, Result};
use volmap_core::SettingsUpdate;
use volmap_scene::ViewTab;

/// One figure to render.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureRequest {
    pub block: String,
    pub tab: ViewTab,
    /// Latest UI control values; absent controls keep their defaults.
    pub settings: SettingsUpdate,
    /// Skip cache lookup if true.
    pub skip_cache: bool,
}

impl FigureRequest {
    /// Build a request from raw command line values.
    pub fn parse(block: &str, tab: &str, settings: Option<&str>, skip_cache: bool) -> Result<Self> {
        let settings = match settings {
            Some(json) => serde_json::from_str(json).map_err(RenderError::InvalidSettings)?,
            None => SettingsUpdate::default(),
        };
        Ok(Self {
            block: block.to_string(),
            tab: tab.parse()?,
            settings,
            skip_cache,
        })
    }
}
