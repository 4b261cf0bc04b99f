//! In-memory screen for driving views from tests

use std::collections::VecDeque;
use std::io;

use super::terminal::{Frame, Key, Screen};

/// Replays a fixed key script and records every frame drawn.
///
/// A `Key::Resize` in the script changes the reported size before it is
/// handed to the view. Running out of keys is an `UnexpectedEof` error so a
/// view that never exits fails the test instead of hanging.
pub struct ScriptedScreen {
    rows: usize,
    cols: usize,
    keys: VecDeque<Key>,
    pub frames: Vec<Frame>,
}

impl ScriptedScreen {
    pub fn new(rows: usize, cols: usize, keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            rows,
            cols,
            keys: keys.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("no frame drawn")
    }
}

impl Screen for ScriptedScreen {
    fn size(&self) -> io::Result<(usize, usize)> {
        Ok((self.rows, self.cols))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))?;
        if let Key::Resize { rows, cols } = key {
            self.rows = rows;
            self.cols = cols;
        }
        Ok(key)
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
