//! Collapsible parent/child tree
//!
//! The tree is rebuilt each time the view takes over the screen. Nodes
//! that were collapsed before keep their state if their pid survived, and
//! the selection follows the previously selected pid when it can.

use std::io;

use crate::system::{snapshot, ProcessSource};
use crate::ui::{position_text, render_row, status_line, tree_fields, Frame, Pad, Screen};

use super::input::{tree_action, Action};
use super::state::{compose_frame, ViewContext, ViewExit};
use super::tree::{NodeId, ProcessTree};
use super::viewport::Viewport;

#[derive(Default)]
pub struct TreeView {
    tree: ProcessTree,
    /// Pre-order node ids, collapsed subtrees skipped
    visible: Vec<NodeId>,
    viewport: Viewport,
    /// Terminal rows, status line included
    height: usize,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn tree(&self) -> &ProcessTree {
        &self.tree
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn selected_node(&self) -> Option<NodeId> {
        self.visible.get(self.viewport.selected_index).copied()
    }

    /// Owns the screen until the user switches views or quits.
    pub fn run(&mut self, ctx: &mut ViewContext, screen: &mut dyn Screen) -> io::Result<ViewExit> {
        self.height = screen.size()?.0;
        self.rebuild(ctx.source.as_mut());

        loop {
            self.show(ctx, screen)?;

            let len = self.visible.len();
            match tree_action(screen.read_key()?) {
                Action::Prev => self.viewport.prev(len),
                Action::Next => self.viewport.next(len, self.height),
                Action::First => self.viewport.first(),
                Action::Last => self.viewport.last(len, self.height),
                Action::ToggleCollapse => self.toggle_collapse_current(),
                Action::Resize { rows } => {
                    self.viewport.resize(len, self.height, rows);
                    self.height = rows;
                }
                Action::SwitchView => return Ok(ViewExit::SwitchView),
                Action::Quit => return Ok(ViewExit::Quit),
                Action::Search | Action::ClearSearch | Action::Refresh | Action::Ignore => {}
            }
        }
    }

    /// Builds a fresh tree from the source.
    pub fn rebuild(&mut self, source: &mut dyn ProcessSource) {
        let collapsed = self.tree.collapsed_pids();
        let selected_pid = self
            .selected_node()
            .map(|id| self.tree.node(id).process.pid);

        self.tree = ProcessTree::build(snapshot(source));
        for pid in collapsed {
            if let Some(id) = self.tree.find(pid) {
                self.tree.collapse(id);
            }
        }
        self.visible = self.tree.visible();

        if let Some(index) = selected_pid.and_then(|pid| {
            self.visible
                .iter()
                .position(|&id| self.tree.node(id).process.pid == pid)
        }) {
            self.viewport.selected_index = index;
        }
        self.viewport.clamp(self.visible.len(), self.height);

        tracing::debug!(
            processes = self.tree.len(),
            roots = self.tree.roots().len(),
            "tree rebuilt"
        );
    }

    /// Collapses or expands the selected node.
    pub fn toggle_collapse_current(&mut self) {
        let Some(id) = self.selected_node() else {
            return;
        };
        self.tree.toggle(id);
        self.visible = self.tree.visible();
        self.viewport.clamp(self.visible.len(), self.height);

        tracing::debug!(
            pid = self.tree.node(id).process.pid,
            collapsed = self.tree.node(id).collapsed,
            "toggled collapse"
        );
    }

    fn show(&self, ctx: &mut ViewContext, screen: &mut dyn Screen) -> io::Result<()> {
        let cols = screen.size()?.1;
        screen.draw(&self.frame(ctx, self.height, cols))
    }

    fn frame(&self, ctx: &mut ViewContext, rows: usize, cols: usize) -> Frame {
        let mut pad = Pad::new(self.visible.len().max(1));
        let selected = self.viewport.selected_index;

        for row in self.viewport.window(self.visible.len(), rows) {
            let id = self.visible[row];
            if !ctx.source.is_running(self.tree.node(id).process.pid) {
                continue;
            }
            let fields = tree_fields(&self.tree, id, &ctx.layout);
            render_row(&fields, cols, row, selected, &ctx.palette, &mut pad);
        }

        let position = position_text(selected, self.visible.len());
        let status = status_line(cols, &position, None, &ctx.palette);

        compose_frame(&pad, &self.viewport, rows, status, None)
    }
}
