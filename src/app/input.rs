//! Keyboard handling
//!
//! Maps keys to view actions. Both views share the navigation keys:
//! - `i`/Up, `k`/Down: previous/next row
//! - `g`, `G`: first/last row
//! - `t`: switch view
//! - `q`, Esc, Ctrl+C: quit
//!
//! The list adds `/` (search), `c` (clear search) and `r` (refresh); the
//! tree uses `c` to toggle collapse on the selected node.

use crate::ui::Key;

/// What a key asks the active view to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Prev,
    Next,
    First,
    Last,
    /// Enter the search loop (list only)
    Search,
    /// Drop the applied search query (list only)
    ClearSearch,
    /// Collapse or expand the selected node (tree only)
    ToggleCollapse,
    /// Re-query the process source (list only)
    Refresh,
    /// Terminal is now `rows` tall
    Resize { rows: usize },
    SwitchView,
    Quit,
    /// Unbound key
    Ignore,
}

fn common_action(key: Key) -> Action {
    match key {
        Key::Char('i') | Key::Up => Action::Prev,
        Key::Char('k') | Key::Down => Action::Next,
        Key::Char('g') => Action::First,
        Key::Char('G') => Action::Last,
        Key::Char('t') => Action::SwitchView,
        Key::Char('q') | Key::Esc | Key::Interrupt => Action::Quit,
        Key::Resize { rows, .. } => Action::Resize { rows },
        _ => Action::Ignore,
    }
}

/// Key binding of the list view.
pub fn list_action(key: Key) -> Action {
    match key {
        Key::Char('/') => Action::Search,
        Key::Char('c') => Action::ClearSearch,
        Key::Char('r') => Action::Refresh,
        _ => common_action(key),
    }
}

/// Key binding of the tree view.
pub fn tree_action(key: Key) -> Action {
    match key {
        Key::Char('c') => Action::ToggleCollapse,
        _ => common_action(key),
    }
}
