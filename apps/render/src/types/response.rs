// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the volumetric map page.

use serde::Serialize;
use volmap_core::{Axes, BlockMeta, Defaults, DownloadEntry, QuantityRange};
use volmap_scene::ViewTab;

/// Everything the page needs before its first render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    /// Title and description of the block.
    pub info: BlockMeta,
    /// Initial dropdown values.
    pub defaults: Defaults,
    /// Layer dropdown options (`All`, `Layer 1`, ...).
    pub layers: Vec<String>,
    /// Image layer dropdown options (`All`, `Image 1`, ...).
    pub image_layers: Vec<String>,
    /// Name of the block's categorical attribute.
    pub category: String,
    /// Category dropdown options (`All`, true label, false label).
    pub category_options: Vec<String>,
    /// Color bounds per quantity, in table order.
    pub value_ranges: Vec<QuantityRange>,
    pub axes: Axes,
    pub downloads: Vec<DownloadEntry>,
    /// Tabs shown for this block.
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabInfo {
    pub id: ViewTab,
    pub label: &'static str,
}

impl From<ViewTab> for TabInfo {
    fn from(tab: ViewTab) -> Self {
        Self {
            id: tab,
            label: tab.label(),
        }
    }
}
