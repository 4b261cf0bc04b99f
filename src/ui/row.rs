//! Row formatter
//!
//! Turns an ordered list of [`Field`]s into one line of exactly sized
//! cells and writes it into a [`Pad`].

use super::layout::{resolve, ColumnSpec};
use super::pad::{Line, Pad, Span};
use super::palette::{Pair, Palette};
use super::utils::{fit, sanitize};

/// Text plus the descriptor that sizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub spec: ColumnSpec,
}

impl Field {
    pub fn new(text: impl Into<String>, spec: ColumnSpec) -> Self {
        Self {
            text: text.into(),
            spec,
        }
    }

    /// A single-space separator sized to itself.
    pub fn gap() -> Self {
        Self::new(" ", ColumnSpec::inherit())
    }
}

/// Lays out `fields` across `total_width` columns and returns the cell text
/// of each field, in order. The widths of the returned strings sum to at
/// most `total_width`.
pub fn layout_fields(fields: &[Field], total_width: usize) -> Vec<String> {
    let texts: Vec<String> = fields.iter().map(|f| sanitize(&f.text)).collect();
    let specs: Vec<ColumnSpec> = fields.iter().map(|f| f.spec).collect();
    let contents: Vec<&str> = texts.iter().map(String::as_str).collect();
    let widths = resolve(&specs, &contents, total_width);

    texts
        .iter()
        .zip(&specs)
        .zip(widths)
        .map(|((text, spec), width)| fit(text, width, spec.align))
        .collect()
}

/// Renders one row into `target` at `row_index`.
///
/// The row is drawn with the selected color pair when `row_index` equals
/// `selected_index`. No other row of `target` is touched.
pub fn render_row(
    fields: &[Field],
    total_width: usize,
    row_index: usize,
    selected_index: usize,
    palette: &Palette,
    target: &mut Pad,
) {
    let selected = row_index == selected_index;
    let line: Line = layout_fields(fields, total_width)
        .into_iter()
        .zip(fields)
        .filter(|(cell, _)| !cell.is_empty())
        .map(|(cell, field)| {
            let (on_selected, on_normal) =
                field.spec.pairs.unwrap_or((Pair::Selected, Pair::Normal));
            let pair = if selected { on_selected } else { on_normal };
            Span {
                text: cell,
                colors: palette.get(pair),
            }
        })
        .collect();

    target.write_row(row_index, line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::Align;
    use crate::ui::utils::display_width;

    fn sample_fields() -> Vec<Field> {
        vec![
            Field::new("123", ColumnSpec::fit(4).align(Align::Right)),
            Field::new("hello world this is long", ColumnSpec::available()),
        ]
    }

    #[test]
    fn test_fit_and_available_columns() {
        let mut pad = Pad::new(1);
        render_row(&sample_fields(), 30, 0, 5, &Palette::default(), &mut pad);

        let line = pad.line_text(0);
        assert_eq!(line, " 123hello world this is long  ");
        assert_eq!(display_width(&line), 30);
    }

    #[test]
    fn test_available_column_truncated() {
        let mut pad = Pad::new(1);
        render_row(&sample_fields(), 20, 0, 5, &Palette::default(), &mut pad);
        assert_eq!(pad.line_text(0), " 123hello world this");
    }

    #[test]
    fn test_selected_row_uses_selected_pair() {
        let palette = Palette::default();
        let mut pad = Pad::new(2);
        render_row(&sample_fields(), 30, 0, 1, &palette, &mut pad);
        render_row(&sample_fields(), 30, 1, 1, &palette, &mut pad);

        assert!(pad.row(0).unwrap().iter().all(|s| s.colors == palette.normal));
        assert!(pad.row(1).unwrap().iter().all(|s| s.colors == palette.selected));
    }

    #[test]
    fn test_pair_override() {
        let palette = Palette::default();
        let fields = vec![
            Field::new("├─", ColumnSpec::inherit().pairs(Pair::BranchSelected, Pair::Branch)),
            Field::new("cmd", ColumnSpec::available()),
        ];
        let mut pad = Pad::new(1);
        render_row(&fields, 10, 0, 9, &palette, &mut pad);

        let row = pad.row(0).unwrap();
        assert_eq!(row[0].colors, palette.branch);
        assert_eq!(row[1].colors, palette.normal);
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = Palette::default();
        let mut first = Pad::new(1);
        let mut second = Pad::new(1);
        render_row(&sample_fields(), 25, 0, 0, &palette, &mut first);
        render_row(&sample_fields(), 25, 0, 0, &palette, &mut second);
        assert_eq!(first.row(0), second.row(0));
    }

    #[test]
    fn test_other_rows_untouched() {
        let palette = Palette::default();
        let mut pad = Pad::new(3);
        render_row(&sample_fields(), 30, 0, 0, &palette, &mut pad);
        let before = pad.row(0).unwrap().to_vec();
        render_row(&[Field::new("x", ColumnSpec::available())], 30, 2, 0, &palette, &mut pad);

        assert_eq!(pad.row(0).unwrap(), before.as_slice());
        assert_eq!(pad.line_text(1), "");
    }
}
