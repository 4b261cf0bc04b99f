//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::constants::APP_VERSION;

/// Interactive process viewer with a searchable list and a collapsible tree
#[derive(Debug, Parser)]
#[command(name = "pmn")]
#[command(version = APP_VERSION)]
#[command(long_about = None)]
#[command(after_help = "CONTROLS:
    i/Up, k/Down   Previous/next process
    g, G           First/last process
    t              Switch between list and tree
    /              Search command lines (list)
    c              Clear search (list), collapse/expand (tree)
    r              Refresh (list)
    q, Esc         Quit")]
pub struct Args {
    /// Start in tree view
    #[arg(short, long)]
    pub tree: bool,

    /// Start the list filtered to command lines containing QUERY
    #[arg(short, long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Config file [default: ~/.config/pmn/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (PMN_LOG overrides)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log_file: bool,
}
