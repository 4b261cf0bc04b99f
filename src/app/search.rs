//! Incremental search over the process list
//!
//! Search is a small state machine driven by one key at a time:
//!
//! ```text
//! Inactive --begin--> Editing(query)
//! Editing  --char-->      Editing(query + char)
//! Editing  --backspace--> Editing(query minus last char)
//! Editing  --enter-->     Inactive, query kept (filter stays applied)
//! Editing  --escape-->    Inactive, query absent
//! ```
//!
//! An absent query means no filter and no search bar. An empty query
//! shows the bar and matches every process.

use crate::system::ProcessRecord;
use crate::ui::Key;

/// Whether keys are currently feeding the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Inactive,
    Editing,
}

/// Outcome of feeding one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// Still editing
    Continue,
    /// Enter: leave editing, keep the filter
    Commit,
    /// Escape: leave editing, drop the filter
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: Option<String>,
    mode: SearchMode,
}

impl SearchState {
    /// Starts with an already applied query, e.g. from the command line.
    pub fn with_query(query: Option<String>) -> Self {
        Self {
            query,
            mode: SearchMode::Inactive,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[cfg(test)]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SearchMode::Editing
    }

    /// Enters editing. An absent query becomes empty; an applied query is
    /// kept so it can be refined.
    pub fn begin(&mut self) {
        self.query.get_or_insert_with(String::new);
        self.mode = SearchMode::Editing;
    }

    /// Drops the query and leaves editing.
    pub fn clear(&mut self) {
        self.query = None;
        self.mode = SearchMode::Inactive;
    }

    /// Applies one key while editing.
    pub fn feed(&mut self, key: Key) -> SearchStep {
        if !self.is_editing() {
            return SearchStep::Commit;
        }

        match key {
            Key::Enter => {
                self.mode = SearchMode::Inactive;
                SearchStep::Commit
            }
            Key::Esc | Key::Interrupt => {
                self.clear();
                SearchStep::Cancel
            }
            Key::Backspace => {
                if let Some(query) = self.query.as_mut() {
                    query.pop();
                }
                SearchStep::Continue
            }
            Key::Char(c) if !c.is_control() => {
                self.query.get_or_insert_with(String::new).push(c);
                SearchStep::Continue
            }
            _ => SearchStep::Continue,
        }
    }

    /// Case-sensitive substring match against the joined command line.
    pub fn matches(&self, process: &ProcessRecord) -> bool {
        match self.query.as_deref() {
            None | Some("") => true,
            Some(query) => process.joined_command_line().contains(query),
        }
    }

    /// Indices of the processes that pass the filter, in order.
    pub fn filter(&self, processes: &[ProcessRecord]) -> Vec<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(i, _)| i)
            .collect()
    }
}
