// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service modules for table access, rendering and caching.

pub mod cache;
pub mod renderer;
pub mod store;

pub use cache::DiskCache;
pub use renderer::{load_organ_models, load_page, render_figure};
pub use store::BlockStore;
