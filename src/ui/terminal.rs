//! Terminal collaborator
//!
//! Views talk to the terminal only through the [`Screen`] trait: block for
//! a key, ask for the geometry, hand over a finished [`Frame`].

use std::io;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use super::pad::Line;
use super::render::draw_frame;

/// A key press, reduced to what the views react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Backspace,
    Esc,
    /// Ctrl+C
    Interrupt,
    /// The terminal changed size
    Resize { rows: usize, cols: usize },
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        }
    }
}

/// Everything one redraw puts on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Data rows, top to bottom
    pub lines: Vec<Line>,
    /// Bottom row
    pub status: Line,
    /// Column of a visible cursor on the status row
    pub cursor: Option<usize>,
}

impl Frame {
    #[cfg(test)]
    /// Plain text of every data row.
    pub fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    #[cfg(test)]
    pub fn status_text(&self) -> String {
        self.status.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Terminal surface owned by the active view.
pub trait Screen {
    /// Current geometry as `(rows, cols)`.
    fn size(&self) -> io::Result<(usize, usize)>;

    /// Blocks until the next key press or resize.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Replaces the whole screen with `frame`.
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Raw-mode alternate screen on stdout. The terminal is restored on drop.
pub struct CrosstermScreen {
    stdout: io::Stdout,
}

impl CrosstermScreen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout, EnterAlternateScreen, DisableLineWrap, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, Show, EnableLineWrap, LeaveAlternateScreen) {
            tracing::error!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!(error = %e, "failed to disable raw mode");
        }
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> io::Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows as usize, cols as usize))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                // Only handle key PRESS events, ignore Release and Repeat
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(Key::from(key_event));
                }
                Event::Resize(cols, rows) => {
                    return Ok(Key::Resize {
                        rows: rows as usize,
                        cols: cols as usize,
                    });
                }
                _ => {}
            }
        }
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (rows, _) = self.size()?;
        draw_frame(&mut self.stdout, frame, rows)
    }
}
