//! Terminal rendering logic

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::pad::Span;
use super::terminal::Frame;

/// Draws a frame on a terminal that is `rows` tall.
///
/// Data rows fill the screen from the top; the last row holds the status
/// line. Rows beyond the terminal height are dropped.
pub fn draw_frame<W: Write>(out: &mut W, frame: &Frame, rows: usize) -> io::Result<()> {
    queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;

    let data_rows = rows.saturating_sub(1);
    for (i, line) in frame.lines.iter().take(data_rows).enumerate() {
        queue!(out, MoveTo(0, i as u16))?;
        print_spans(out, line)?;
    }

    if rows > 0 {
        let status_row = (rows - 1) as u16;
        queue!(out, MoveTo(0, status_row))?;
        print_spans(out, &frame.status)?;

        if let Some(col) = frame.cursor {
            queue!(out, MoveTo(col as u16, status_row), Show)?;
        }
    }

    out.flush()
}

fn print_spans<W: Write>(out: &mut W, spans: &[Span]) -> io::Result<()> {
    for span in spans {
        queue!(
            out,
            SetForegroundColor(span.colors.fg),
            SetBackgroundColor(span.colors.bg),
            Print(&span.text),
        )?;
    }
    queue!(out, ResetColor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::palette::Palette;

    fn span(text: &str) -> Span {
        Span {
            text: text.to_string(),
            colors: Palette::default().normal,
        }
    }

    #[test]
    fn test_draws_rows_and_status() {
        let frame = Frame {
            lines: vec![vec![span("first")], vec![span("second")]],
            status: vec![span("1/2")],
            cursor: None,
        };
        let mut out = Vec::new();
        draw_frame(&mut out, &frame, 5).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("first"));
        assert!(text.contains("second"));
        assert!(text.contains("1/2"));
    }

    #[test]
    fn test_rows_past_terminal_height_dropped() {
        let frame = Frame {
            lines: vec![vec![span("keep")], vec![span("drop")]],
            status: vec![span("status")],
            cursor: None,
        };
        let mut out = Vec::new();
        draw_frame(&mut out, &frame, 2).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("keep"));
        assert!(!text.contains("drop"));
    }
}
