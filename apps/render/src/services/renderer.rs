// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page assembly and cached figure rendering.

use super::cache::DiskCache;
use super::store::{BlockStore, BlockTables};
use crate::config::Config;
use crate::error::Result;
use crate::types::{FigureRequest, PageData, TabInfo};
use std::time::Instant;
use volmap_core::{build_layers, image_layer_options, Defaults, OrganTraces, Settings, Table};
use volmap_scene::{available_tabs, organ_models, render_view, OrganModel};

/// Assemble the page data of `store`'s block.
pub fn load_page(store: &BlockStore) -> Result<PageData> {
    let tables = BlockTables::load(store)?;
    let image_layer_count = store.image_layer_count()?;

    let page = PageData {
        info: store.meta()?,
        defaults: Defaults::for_block(&tables.ranges)?,
        layers: build_layers(&tables.axes.z),
        image_layers: image_layer_options(image_layer_count),
        category: tables.labels.category.clone(),
        category_options: tables.labels.options(),
        value_ranges: tables.ranges.entries().to_vec(),
        downloads: store.downloads()?,
        tabs: available_tabs(image_layer_count).into_iter().map(TabInfo::from).collect(),
        axes: tables.axes,
    };

    tracing::info!(
        block = %store.block(),
        layers = page.layers.len() - 1,
        image_layers = image_layer_count,
        "Loaded page data"
    );
    Ok(page)
}

/// Render one figure as JSON, reading and filling `cache` when present.
pub fn render_figure(store: &BlockStore, cache: Option<&DiskCache>, request: FigureRequest) -> Result<Vec<u8>> {
    let start = Instant::now();
    let tables = BlockTables::load(store)?;
    let settings = Settings::for_block(&tables.ranges)?.reconcile(request.settings)?;

    let cache = cache.filter(|_| !request.skip_cache);
    let key = DiskCache::figure_key(store.block(), request.tab, &settings)?;
    if let Some(cache) = cache {
        if let Some(bytes) = cache.get_bytes(&key)? {
            tracing::debug!(key = %key, tab = %request.tab, "Cache hit");
            return Ok(bytes);
        }
    }

    let figure = render_view(request.tab, &tables.context(&settings), store)?;
    let bytes = serde_json::to_vec(&figure)?;

    if let Some(cache) = cache {
        if let Err(e) = cache.set_bytes(&key, &bytes) {
            tracing::warn!(error = %e, key = %key, "Failed to cache figure");
        }
    }

    tracing::info!(
        block = %store.block(),
        tab = %request.tab,
        traces = figure.data.len(),
        bytes = bytes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered figure"
    );
    Ok(bytes)
}

/// Model figures of every organ listed in `obj/obj-files.csv`.
pub fn load_organ_models(config: &Config) -> Result<Vec<OrganModel>> {
    let obj_dir = config.obj_dir();
    let traces = OrganTraces::from_path(&obj_dir.join("obj-files.csv"))?;
    Ok(organ_models(&traces, &obj_dir.join("volumes"))?)
}
