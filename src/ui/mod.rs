//! User interface rendering
//!
//! This module provides all terminal UI rendering functionality:
//! - `layout` - Column sizing model
//! - `row` - Row formatter writing into a `pad`
//! - `process_list`, `process_tree` - Row layouts of the two views
//! - `components` - Status line and search bar
//! - `terminal` - The `Screen` the views draw on
//! - `render` - Frame output through crossterm
//! - `utils` - Shared utilities

mod components;
mod layout;
mod pad;
mod palette;
mod process_list;
mod process_tree;
mod render;
mod row;
#[cfg(test)]
mod scripted;
mod terminal;
mod utils;

pub use components::{position_text, search_cursor, status_line};
pub use pad::{Line, Pad};
pub use palette::{parse_color, ColorPair, Palette};
pub use process_list::list_fields;
pub use process_tree::tree_fields;
pub use row::render_row;
#[cfg(test)]
pub use scripted::ScriptedScreen;
pub use terminal::{CrosstermScreen, Frame, Key, Screen};
