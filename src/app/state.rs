//! Application state and the outer event loop
//!
//! The outer loop hands the screen to the active view. A view keeps the
//! screen until the user switches views or quits.

use std::io;

use crate::config::LayoutConfig;
use crate::system::ProcessSource;
use crate::ui::{Frame, Line, Pad, Palette, Screen};

use super::list_view::ListView;
use super::tree_view::TreeView;
use super::view_mode::ActiveView;
use super::viewport::Viewport;

/// Collaborators shared by both views
pub struct ViewContext {
    pub source: Box<dyn ProcessSource>,
    pub palette: Palette,
    pub layout: LayoutConfig,
}

/// Why a view gave the screen back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewExit {
    SwitchView,
    Quit,
}

/// Cuts the on-screen window out of a fully laid out pad.
pub(crate) fn compose_frame(
    pad: &Pad,
    viewport: &Viewport,
    rows: usize,
    status: Line,
    cursor: Option<usize>,
) -> Frame {
    Frame {
        lines: pad.window(viewport.scroll_offset, rows.saturating_sub(1)),
        status,
        cursor,
    }
}

pub struct App {
    ctx: ViewContext,
    list: ListView,
    tree: TreeView,
    active: ActiveView,
}

impl App {
    pub fn new(ctx: ViewContext, active: ActiveView, initial_query: Option<String>) -> Self {
        Self {
            ctx,
            list: ListView::new(initial_query),
            tree: TreeView::new(),
            active,
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Runs views until one of them quits.
    pub fn run(&mut self, screen: &mut dyn Screen) -> io::Result<()> {
        loop {
            let exit = match self.active {
                ActiveView::List => self.list.run(&mut self.ctx, screen)?,
                ActiveView::Tree => self.tree.run(&mut self.ctx, screen)?,
            };

            match exit {
                ViewExit::Quit => {
                    tracing::info!(view = self.active.name(), "quit");
                    return Ok(());
                }
                ViewExit::SwitchView => {
                    self.active = self.active.next();
                    tracing::debug!(view = self.active.name(), "switched view");
                }
            }
        }
    }
}
