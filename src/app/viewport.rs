//! Selection and scrolling shared by both views
//!
//! The viewport keeps two coupled integers: the selected index into the
//! visible sequence and the index of the first row on screen. The last
//! terminal row is the status line, so `height` rows of terminal leave
//! `height - 1` rows of data.
//!
//! After every operation:
//! `scroll_offset <= selected_index <= scroll_offset + height - 2`.

/// Selection state over a visible sequence of `len` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Index of the highlighted row
    pub selected_index: usize,
    /// Index of the first row drawn at the top of the screen
    pub scroll_offset: usize,
}

/// Rows available for data on a terminal `height` rows tall.
pub fn data_rows(height: usize) -> usize {
    height.saturating_sub(1).max(1)
}

impl Viewport {
    /// Moves the selection down one row, scrolling when it would land on
    /// the status line.
    pub fn next(&mut self, len: usize, height: usize) {
        if len == 0 || self.selected_index + 1 >= len {
            return;
        }
        self.selected_index += 1;
        let rows = data_rows(height);
        if self.selected_index >= self.scroll_offset + rows {
            self.scroll_offset = self.selected_index + 1 - rows;
        }
    }

    /// Moves the selection up one row, scrolling when it would leave the
    /// top of the screen.
    pub fn prev(&mut self, len: usize) {
        if len == 0 || self.selected_index == 0 {
            return;
        }
        self.selected_index -= 1;
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
    }

    /// Jumps to the first row. On an empty sequence this just parks at 0.
    pub fn first(&mut self) {
        self.scroll_offset = 0;
        self.selected_index = 0;
    }

    /// Jumps to the last row, leaving it directly above the status line.
    pub fn last(&mut self, len: usize, height: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = len - 1;
        self.scroll_offset = (self.selected_index + 1).saturating_sub(data_rows(height));
    }

    /// Follows a terminal resize from `old_height` to `new_height` rows.
    ///
    /// A selection in the lower half of the old screen keeps its distance
    /// to the bottom edge; one in the upper half keeps the offset.
    pub fn resize(&mut self, len: usize, old_height: usize, new_height: usize) {
        if len == 0 {
            return;
        }
        let relative = self.selected_index.saturating_sub(self.scroll_offset) + 1;
        if relative * 2 > old_height {
            let shifted = self.scroll_offset as isize + old_height as isize - new_height as isize;
            self.scroll_offset = shifted.max(0) as usize;
        }
        self.clamp(len, new_height);
    }

    /// Pulls selection and offset back into range after the visible
    /// sequence changed length.
    pub fn clamp(&mut self, len: usize, height: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.min(len - 1);
        let rows = data_rows(height);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + rows {
            self.scroll_offset = self.selected_index + 1 - rows;
        }
    }

    /// Range of visible-sequence indices currently on screen.
    pub fn window(&self, len: usize, height: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (self.scroll_offset + height.saturating_sub(1)).min(len);
        start..end
    }
}
