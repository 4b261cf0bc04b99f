//! Process tree row layout
//!
//! `  pid name           │ ├──command line...`
//!
//! The branch prefix and the marker are drawn in the branch color pairs.

use crate::app::{NodeId, ProcessTree};
use crate::config::LayoutConfig;

use super::layout::{Align, ColumnSpec};
use super::palette::Pair;
use super::row::Field;

const BRANCH: ColumnSpec = ColumnSpec::inherit().pairs(Pair::BranchSelected, Pair::Branch);

/// Fields of the tree row for `id`.
pub fn tree_fields(tree: &ProcessTree, id: NodeId, layout: &LayoutConfig) -> Vec<Field> {
    let process = &tree.node(id).process;
    vec![
        Field::new(
            process.pid.to_string(),
            ColumnSpec::fit(layout.pid_width).align(Align::Right),
        ),
        Field::gap(),
        Field::new(process.name.as_str(), ColumnSpec::fit(layout.name_width)),
        Field::gap(),
        Field::new(tree.prefix(id), BRANCH),
        Field::new(tree.marker(id), BRANCH),
        Field::new(process.joined_command_line(), ColumnSpec::available()),
    ]
}
