// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volmap Render - volumetric map figures from the command line.
//!
//! Reads a block's published tables from the configuration directory and
//! prints JSON on stdout. Logs go to stderr.
//!
//! # Commands
//!
//! - `page --block <id>` - Page data (info, defaults, dropdown options, axes, tabs)
//! - `figure --block <id> --tab <tab> [--settings <json>] [--no-cache]` - One figure
//! - `organs` - Organ model figures
//! - `cache clear` - Wipe the render cache
//!
//! On failure a notice `{"error", "message", "code"}` is printed instead and
//! the process exits non-zero.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod error;
mod services;
mod types;

use config::Config;
use error::{ErrorNotice, RenderError};
use services::{BlockStore, DiskCache};
use types::FigureRequest;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write JSON to this file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Page data of a block
    Page {
        /// Block ID
        #[arg(short, long)]
        block: String,
    },
    /// Render one view of a block
    Figure {
        /// Block ID
        #[arg(short, long)]
        block: String,
        /// View tab (cube-tab, cube-image-tab, point-tab, layer-tab, image-layer-tab, sphere-tab)
        #[arg(short, long)]
        tab: String,
        /// Latest UI control values as JSON; absent controls keep their defaults
        #[arg(short, long, value_name = "JSON")]
        settings: Option<String>,
        /// Recompute even when a cached figure exists
        #[arg(long)]
        no_cache: bool,
    },
    /// Model figures of every organ
    Organs,
    /// Manage the render cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove every cached figure
    Clear,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info,volmap_render=debug".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    tracing::debug!(
        config_dir = %config.config_dir.display(),
        cache_dir = %config.cache_dir.display(),
        cache_max_age_days = config.cache_max_age_days,
        "Starting Volmap Render"
    );

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "Command failed");
            let notice = notice_for(&err);
            if let Ok(body) = serde_json::to_string(&notice) {
                println!("{}", body);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Command::Page { block } => {
            let page = services::load_page(&BlockStore::new(config, block))?;
            emit(cli.output.as_deref(), &serde_json::to_vec(&page)?)
        }
        Command::Figure {
            block,
            tab,
            settings,
            no_cache,
        } => {
            let request = FigureRequest::parse(block, tab, settings.as_deref(), *no_cache)?;
            let store = BlockStore::new(config, &request.block);
            let cache = DiskCache::new(&config.cache_dir, config.cache_max_age_days);
            let figure = services::render_figure(&store, Some(&cache), request)?;
            emit(cli.output.as_deref(), &figure)
        }
        Command::Organs => {
            let models = services::load_organ_models(config)?;
            emit(cli.output.as_deref(), &serde_json::to_vec(&models)?)
        }
        Command::Cache {
            action: CacheAction::Clear,
        } => {
            DiskCache::new(&config.cache_dir, config.cache_max_age_days).clear()?;
            Ok(())
        }
    }
}

/// Write `json` to `output`, or stdout when unset.
fn emit(output: Option<&Path>, json: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), size = json.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn notice_for(err: &anyhow::Error) -> ErrorNotice {
    match err.downcast_ref::<RenderError>() {
        Some(err) => err.notice(),
        None => ErrorNotice {
            error: "Cannot render figure",
            message: format!("{:#}", err),
            code: "INTERNAL_ERROR",
        },
    }
}
