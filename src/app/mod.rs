//! Application state and logic
//!
//! - `viewport` - Selection and scrolling shared by both views
//! - `search` - Incremental search state machine
//! - `tree` - Process tree arena
//! - `list_view`, `tree_view` - The two presentations
//! - `state` - Outer event loop switching between them
//! - `input` - Key bindings
//! - `cli` - Command-line arguments

pub mod cli;
mod input;
mod list_view;
mod search;
mod state;
mod tree;
mod tree_view;
mod view_mode;
mod viewport;

pub use cli::Args;
pub use state::{App, ViewContext};
pub use tree::{NodeId, ProcessTree};
pub use view_mode::ActiveView;
