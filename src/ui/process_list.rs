//! Process list row layout
//!
//! `  pid name           command line...`

use crate::config::LayoutConfig;
use crate::system::ProcessRecord;

use super::layout::{Align, ColumnSpec};
use super::row::Field;

/// Fields of one list row: pid, name, then the command line taking the
/// rest of the width.
pub fn list_fields(process: &ProcessRecord, layout: &LayoutConfig) -> Vec<Field> {
    vec![
        Field::new(
            process.pid.to_string(),
            ColumnSpec::fit(layout.pid_width).align(Align::Right),
        ),
        Field::gap(),
        Field::new(process.name.as_str(), ColumnSpec::fit(layout.name_width)),
        Field::gap(),
        Field::new(process.joined_command_line(), ColumnSpec::available()),
    ]
}
