//! Status line with the optional search bar

use super::layout::{Align, ColumnSpec};
use super::pad::{Line, Pad};
use super::palette::Palette;
use super::row::{render_row, Field};
use super::utils::display_width;

/// Position indicator, `0/0` when nothing is visible.
pub fn position_text(selected_index: usize, visible: usize) -> String {
    if visible == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", selected_index + 1, visible)
    }
}

/// Builds the bottom row: the search bar on the left when a query is
/// present, the position indicator on the right.
pub fn status_line(width: usize, position: &str, query: Option<&str>, palette: &Palette) -> Line {
    let search = query.map(|q| format!("/{q}")).unwrap_or_default();
    let fields = [
        Field::new(search, ColumnSpec::available()),
        Field::gap(),
        Field::new(position, ColumnSpec::fit(0).align(Align::Right)),
    ];

    let mut pad = Pad::new(1);
    // status bar is drawn in the selected pair
    render_row(&fields, width, 0, 0, palette, &mut pad);
    pad.row(0).map(<[_]>::to_vec).unwrap_or_default()
}

/// Cursor column while the query is being edited.
pub fn search_cursor(query: &str, width: usize) -> usize {
    (1 + display_width(query)).min(width.saturating_sub(1))
}
