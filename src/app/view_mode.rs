//! Which of the two presentations owns the screen
//!
//! Only one view is active at a time; `t` cycles between them.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    /// Flat, searchable process list
    #[default]
    List,
    /// Collapsible parent/child tree
    Tree,
}

impl ActiveView {
    /// The view `t` switches to.
    pub fn next(self) -> Self {
        match self {
            ActiveView::List => ActiveView::Tree,
            ActiveView::Tree => ActiveView::List,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActiveView::List => "list",
            ActiveView::Tree => "tree",
        }
    }
}
