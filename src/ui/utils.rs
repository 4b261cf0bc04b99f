//! Utility functions for UI rendering
//!
//! Widths here are terminal display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::layout::Align;

/// Display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Replaces control characters (tabs, newlines, escapes) with spaces so a
/// command line can never move the cursor.
#[must_use]
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Keeps the leftmost characters that fit in `width` columns.
#[must_use]
pub fn take_left(s: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Keeps the rightmost characters that fit in `width` columns.
#[must_use]
pub fn take_right(s: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept = Vec::new();
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

/// Truncates or pads `s` to exactly `width` columns.
///
/// Left alignment truncates and pads on the right; right alignment
/// truncates and pads on the left.
#[must_use]
pub fn fit(s: &str, width: usize, align: Align) -> String {
    let kept = match align {
        Align::Left => take_left(s, width),
        Align::Right => take_right(s, width),
    };
    let padding = " ".repeat(width.saturating_sub(display_width(&kept)));
    match align {
        Align::Left => kept + &padding,
        Align::Right => padding + &kept,
    }
}
