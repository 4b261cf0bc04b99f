//! pmn - interactive terminal process viewer
//!
//! Shows live processes either as a flat list searchable by command line
//! or as a collapsible parent/child tree.
//!
//! Controls:
//! - i/↑, k/↓: Previous/next process
//! - g, G: Jump to first/last process
//! - t: Switch between list and tree
//! - /: Search command lines (list)
//! - c: Clear search (list), collapse/expand (tree)
//! - r: Refresh (list)
//! - q, Esc: Quit

mod app;
mod config;
mod constants;
#[cfg(windows)]
mod ffi;
mod logging;
mod system;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;

use app::{ActiveView, App, Args, ViewContext};
use config::Config;
use constants::{APP_NAME, APP_VERSION};
use system::SysinfoSource;
use ui::CrosstermScreen;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("could not load configuration")?;

    let mut logging = config.logging.clone();
    if args.no_log_file {
        logging.file = false;
    }
    let _log_guard = logging::init(&logging, args.log_level.as_deref())?;

    tracing::info!(
        version = APP_VERSION,
        config = ?config.source,
        "{APP_NAME} starting"
    );

    let start_view = if args.tree {
        ActiveView::Tree
    } else {
        config.start_view
    };

    let ctx = ViewContext {
        source: Box::new(SysinfoSource::new()),
        palette: config.palette,
        layout: config.layout,
    };
    let mut app = App::new(ctx, start_view, args.filter);

    let result = {
        // dropped before returning so the terminal is restored first
        let mut screen = CrosstermScreen::new().context("could not set up the terminal")?;
        app.run(&mut screen)
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    result.context("terminal error")
}
