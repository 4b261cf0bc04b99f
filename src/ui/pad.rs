//! Off-screen row buffer
//!
//! A pad holds one line per row of the visible sequence, which can be far
//! taller than the terminal. Only the window starting at the scroll offset
//! is ever presented.

use super::palette::ColorPair;

/// A run of text drawn with one color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub colors: ColorPair,
}

/// A line of spans, left to right. Empty means "nothing drawn".
pub type Line = Vec<Span>;

#[derive(Debug, Clone, Default)]
pub struct Pad {
    rows: Vec<Line>,
}

impl Pad {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![Vec::new(); rows],
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Replaces one row. Writes past the end are dropped.
    pub fn write_row(&mut self, index: usize, line: Line) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = line;
        }
    }

    pub fn row(&self, index: usize) -> Option<&[Span]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[cfg(test)]
    /// Plain text of a row, colors dropped.
    pub fn line_text(&self, index: usize) -> String {
        self.row(index)
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Copies out `height` rows starting at `offset`.
    pub fn window(&self, offset: usize, height: usize) -> Vec<Line> {
        self.rows.iter().skip(offset).take(height).cloned().collect()
    }
}
