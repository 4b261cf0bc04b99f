//! Flat, searchable process list
//!
//! The snapshot is taken again before every redraw, so the list follows
//! processes as they come and go without an explicit refresh.

use std::io;

use crate::system::{snapshot, ProcessRecord, ProcessSource};
use crate::ui::{
    list_fields, position_text, render_row, search_cursor, status_line, Key, Pad, Screen,
};

use super::input::{list_action, Action};
use super::search::{SearchState, SearchStep};
use super::state::{compose_frame, ViewContext, ViewExit};
use super::viewport::Viewport;

pub struct ListView {
    /// Last snapshot, processes without a command line dropped
    processes: Vec<ProcessRecord>,
    /// Indices into `processes` that pass the search filter
    visible: Vec<usize>,
    search: SearchState,
    viewport: Viewport,
    /// Terminal rows, status line included
    height: usize,
}

impl ListView {
    pub fn new(initial_query: Option<String>) -> Self {
        Self {
            processes: Vec::new(),
            visible: Vec::new(),
            search: SearchState::with_query(initial_query),
            viewport: Viewport::default(),
            height: 0,
        }
    }

    #[cfg(test)]
    /// Processes currently shown, in order.
    pub fn visible(&self) -> impl Iterator<Item = &ProcessRecord> + '_ {
        self.visible.iter().map(|&i| &self.processes[i])
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Owns the screen until the user switches views or quits.
    pub fn run(&mut self, ctx: &mut ViewContext, screen: &mut dyn Screen) -> io::Result<ViewExit> {
        self.height = screen.size()?.0;

        loop {
            self.show(ctx, screen)?;

            let len = self.visible.len();
            match list_action(screen.read_key()?) {
                Action::Prev => self.viewport.prev(len),
                Action::Next => self.viewport.next(len, self.height),
                Action::First => self.viewport.first(),
                Action::Last => self.viewport.last(len, self.height),
                Action::Search => self.search_loop(ctx, screen)?,
                Action::ClearSearch => {
                    if self.search.query().is_some() {
                        self.clear_search();
                    }
                }
                Action::Refresh => self.refresh(ctx.source.as_mut()),
                Action::Resize { rows } => self.resize(rows),
                Action::SwitchView => return Ok(ViewExit::SwitchView),
                Action::Quit => return Ok(ViewExit::Quit),
                Action::ToggleCollapse | Action::Ignore => {}
            }
        }
    }

    /// Re-queries the source and re-applies the filter.
    pub fn refresh(&mut self, source: &mut dyn ProcessSource) {
        self.processes = snapshot(source)
            .into_iter()
            .filter(|p| !p.command_line.is_empty())
            .collect();
        self.apply_filter();

        // selection was past the end of the whole list
        if self.viewport.selected_index > self.processes.len() {
            self.viewport.last(self.visible.len(), self.height);
        }
        self.viewport.clamp(self.visible.len(), self.height);

        tracing::debug!(
            processes = self.processes.len(),
            visible = self.visible.len(),
            "list refreshed"
        );
    }

    fn apply_filter(&mut self) {
        self.visible = self.search.filter(&self.processes);
    }

    /// Drops the query and jumps back to the top.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.viewport.first();
        self.apply_filter();
        tracing::trace!("search cleared");
    }

    /// Feeds keys into the search bar until Enter or Escape. The selection
    /// resets to the first row on every key.
    fn search_loop(&mut self, ctx: &mut ViewContext, screen: &mut dyn Screen) -> io::Result<()> {
        self.search.begin();
        tracing::trace!(query = self.search.query(), "search started");

        loop {
            self.viewport.first();
            self.show(ctx, screen)?;

            let key = screen.read_key()?;
            if let Key::Resize { rows, .. } = key {
                self.height = rows;
            }

            match self.search.feed(key) {
                SearchStep::Continue => self.apply_filter(),
                SearchStep::Commit => {
                    self.apply_filter();
                    tracing::trace!(query = self.search.query(), "search committed");
                    return Ok(());
                }
                SearchStep::Cancel => {
                    self.clear_search();
                    return Ok(());
                }
            }
        }
    }

    fn resize(&mut self, rows: usize) {
        self.viewport.resize(self.visible.len(), self.height, rows);
        self.height = rows;
    }

    fn show(&mut self, ctx: &mut ViewContext, screen: &mut dyn Screen) -> io::Result<()> {
        self.refresh(ctx.source.as_mut());
        // rows follow `height` until the resize key arrives
        let cols = screen.size()?.1;
        screen.draw(&self.frame(ctx, self.height, cols))
    }

    fn frame(&self, ctx: &mut ViewContext, rows: usize, cols: usize) -> crate::ui::Frame {
        let mut pad = Pad::new(self.visible.len().max(1));
        let selected = self.viewport.selected_index;

        for row in self.viewport.window(self.visible.len(), rows) {
            let process = &self.processes[self.visible[row]];
            // exited since the snapshot: leave the row blank
            if !ctx.source.is_running(process.pid) {
                continue;
            }
            let fields = list_fields(process, &ctx.layout);
            render_row(&fields, cols, row, selected, &ctx.palette, &mut pad);
        }

        let position = position_text(selected, self.visible.len());
        let query = self.search.query();
        let status = status_line(cols, &position, query, &ctx.palette);
        let cursor = query
            .filter(|_| self.search.is_editing())
            .map(|q| search_cursor(q, cols));

        compose_frame(&pad, &self.viewport, rows, status, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::system::mock::MockSource;
    use crate::ui::{Palette, ScriptedScreen};

    fn context(source: MockSource) -> ViewContext {
        ViewContext {
            source: Box::new(source),
            palette: Palette::default(),
            layout: LayoutConfig::default(),
        }
    }

    fn sample() -> MockSource {
        MockSource::new()
            .with_process(1, None, "init", &["/sbin/init", "splash"])
            .with_process(2, Some(1), "kthreadd", &[])
            .with_process(10, Some(1), "ssh-agent", &["/usr/bin/ssh-agent", "-D"])
            .with_process(11, Some(1), "sshd", &["sshd:", "user@pts/0"])
            .with_process(12, Some(11), "vim", &["vim", "Cargo.toml"])
    }

    fn pids(view: &ListView) -> Vec<u32> {
        view.visible().map(|p| p.pid).collect()
    }

    fn keys(s: &str) -> Vec<Key> {
        s.chars().map(Key::Char).collect()
    }

    fn run(
        view: &mut ListView,
        source: MockSource,
        rows: usize,
        script: Vec<Key>,
    ) -> (ViewExit, ScriptedScreen) {
        let mut ctx = context(source);
        let mut screen = ScriptedScreen::new(rows, 60, script);
        let exit = view.run(&mut ctx, &mut screen).unwrap();
        (exit, screen)
    }

    #[test]
    fn test_processes_without_command_line_dropped() {
        let mut view = ListView::new(None);
        view.refresh(&mut sample());
        assert_eq!(pids(&view), vec![1, 10, 11, 12]);
    }

    #[test]
    fn test_vanished_processes_dropped() {
        let mut view = ListView::new(None);
        view.refresh(&mut sample().vanished(11));
        assert_eq!(pids(&view), vec![1, 10, 12]);
    }

    #[test]
    fn test_refresh_follows_source() {
        let mut source = sample();
        let mut view = ListView::new(None);
        view.refresh(&mut source);

        source.remove(10);
        source.insert(20, Some(1), "top", &["top", "-d", "1"]);
        view.refresh(&mut source);
        assert_eq!(pids(&view), vec![1, 11, 12, 20]);
    }

    #[test]
    fn test_navigation_and_status() {
        let mut view = ListView::new(None);
        let mut script = vec![Key::Down, Key::Char('k'), Key::Char('G'), Key::Up, Key::Char('g')];
        script.push(Key::Char('q'));
        let (exit, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(exit, ViewExit::Quit);
        let positions: Vec<String> = screen
            .frames
            .iter()
            .map(|f| f.status_text().trim().to_string())
            .collect();
        assert_eq!(positions, vec!["1/4", "2/4", "3/4", "4/4", "3/4", "1/4"]);
    }

    #[test]
    fn test_selected_row_highlighted() {
        let mut view = ListView::new(None);
        let (_, screen) = run(&mut view, sample(), 10, vec![Key::Down, Key::Char('q')]);
        let frame = screen.last_frame();
        let palette = Palette::default();

        assert!(frame.lines[1].iter().all(|s| s.colors == palette.selected));
        assert!(frame.lines[0].iter().all(|s| s.colors == palette.normal));
    }

    #[test]
    fn test_search_narrows_and_commits() {
        let mut view = ListView::new(None);
        let mut script = vec![Key::Char('k'), Key::Char('/')];
        script.extend(keys("ssh"));
        script.push(Key::Enter);
        script.push(Key::Char('q'));
        let (_, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(pids(&view), vec![10, 11]);
        assert_eq!(view.search().query(), Some("ssh"));
        assert!(!view.search().is_editing());
        assert_eq!(view.viewport().selected_index, 0);

        let last = screen.last_frame();
        assert!(last.status_text().starts_with("/ssh"));
        assert!(last.status_text().trim_end().ends_with("1/2"));
        assert_eq!(last.cursor, None);
    }

    #[test]
    fn test_search_bar_shows_cursor_while_editing() {
        let mut view = ListView::new(None);
        let mut script = vec![Key::Char('/')];
        script.extend(keys("vi"));
        script.push(Key::Esc);
        script.push(Key::Char('q'));
        let (_, screen) = run(&mut view, sample(), 10, script);

        // frames: list, "/", "/v", "/vi", list after escape
        assert_eq!(screen.frames.len(), 5);
        assert_eq!(screen.frames[1].cursor, Some(1));
        assert_eq!(screen.frames[3].cursor, Some(3));
        assert!(screen.frames[3].status_text().starts_with("/vi "));
        assert_eq!(screen.frames[3].text()[0].split_whitespace().next(), Some("12"));
    }

    #[test]
    fn test_empty_query_shows_bar_and_everything() {
        let mut view = ListView::new(None);
        let script = vec![Key::Char('/'), Key::Enter, Key::Char('q')];
        let (_, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(view.search().query(), Some(""));
        assert_eq!(pids(&view).len(), 4);
        assert!(screen.last_frame().status_text().starts_with('/'));
    }

    #[test]
    fn test_escape_clears_search() {
        let mut view = ListView::new(None);
        let mut script = vec![Key::Char('/')];
        script.extend(keys("vim"));
        script.push(Key::Esc);
        script.push(Key::Char('q'));
        let (_, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(view.search().query(), None);
        assert_eq!(pids(&view).len(), 4);
        assert!(!screen.last_frame().status_text().starts_with('/'));
    }

    #[test]
    fn test_c_clears_applied_query() {
        let mut view = ListView::new(Some("Cargo".to_string()));
        let (_, screen) = run(&mut view, sample(), 10, vec![Key::Char('c'), Key::Char('q')]);

        assert_eq!(screen.frames[0].status_text().split_whitespace().next(), Some("/Cargo"));
        assert_eq!(screen.frames[0].text()[0].split_whitespace().next(), Some("12"));
        assert_eq!(view.search().query(), None);
        assert_eq!(pids(&view).len(), 4);
    }

    #[test]
    fn test_c_clears_empty_query() {
        let mut view = ListView::new(None);
        let script = vec![Key::Char('/'), Key::Enter, Key::Char('c'), Key::Char('q')];
        let (_, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(view.search().query(), None);
        assert!(!screen.last_frame().status_text().starts_with('/'));
    }

    #[test]
    fn test_c_without_query_keeps_selection() {
        let mut view = ListView::new(None);
        let script = vec![Key::Char('G'), Key::Char('c'), Key::Char('q')];
        let (_, screen) = run(&mut view, sample(), 10, script);

        assert_eq!(view.search().query(), None);
        assert_eq!(view.viewport().selected_index, 3);
        assert!(screen.last_frame().status_text().trim_end().ends_with("4/4"));
    }

    #[test]
    fn test_no_match_is_empty_with_zero_position() {
        let mut view = ListView::new(Some("nothing-matches".to_string()));
        let script = vec![Key::Down, Key::Char('G'), Key::Char('q')];
        let (_, screen) = run(&mut view, sample(), 10, script);

        let frame = screen.last_frame();
        assert!(frame.status_text().trim_end().ends_with("0/0"));
        assert!(frame.text().iter().all(|line| line.is_empty()));
        assert_eq!(view.viewport(), Viewport::default());
    }

    #[test]
    fn test_exited_process_row_left_blank() {
        let mut view = ListView::new(None);
        let (_, screen) = run(&mut view, sample().exited(10), 10, vec![Key::Char('q')]);

        let text = screen.last_frame().text();
        assert!(text[0].contains("/sbin/init splash"));
        assert_eq!(text[1], "");
        assert!(text[2].contains("sshd: user@pts/0"));
    }

    #[test]
    fn test_scrolls_with_selection() {
        let source = MockSource::new().with_many(100, 50, None);
        let mut view = ListView::new(None);
        let (_, screen) = run(&mut view, source, 10, vec![Key::Char('G'), Key::Char('q')]);

        assert_eq!(view.viewport(), Viewport { selected_index: 49, scroll_offset: 41 });
        let frame = screen.last_frame();
        assert_eq!(frame.lines.len(), 9);
        assert!(frame.text()[0].starts_with(" 141 "));
        assert!(frame.text()[8].starts_with(" 149 "));
        assert!(frame.status_text().trim_end().ends_with("50/50"));
    }

    #[test]
    fn test_refresh_after_shrink_jumps_to_last() {
        let mut source = MockSource::new().with_many(100, 50, None);
        let mut view = ListView::new(None);
        view.height = 10;
        view.refresh(&mut source);
        view.viewport.last(50, 10);

        for pid in 110..150 {
            source.remove(pid);
        }
        view.refresh(&mut source);
        assert_eq!(view.viewport(), Viewport { selected_index: 9, scroll_offset: 1 });
    }

    #[test]
    fn test_resize_keeps_selection_near_bottom() {
        let source = MockSource::new().with_many(100, 50, None);
        let mut view = ListView::new(None);
        let mut script = vec![Key::Char('k'); 8];
        script.push(Key::Resize { rows: 6, cols: 60 });
        script.push(Key::Char('q'));
        let (_, screen) = run(&mut view, source, 10, script);

        assert_eq!(view.viewport(), Viewport { selected_index: 8, scroll_offset: 4 });
        assert_eq!(screen.last_frame().lines.len(), 5);
    }

    /// Reports a shorter terminal after the first draw, before the resize
    /// key is delivered.
    struct ShrinkingScreen {
        inner: ScriptedScreen,
        rows_after_first_draw: usize,
    }

    impl Screen for ShrinkingScreen {
        fn size(&self) -> io::Result<(usize, usize)> {
            let (rows, cols) = self.inner.size()?;
            if self.inner.frames.is_empty() {
                Ok((rows, cols))
            } else {
                Ok((rows.min(self.rows_after_first_draw), cols))
            }
        }

        fn read_key(&mut self) -> io::Result<Key> {
            self.inner.read_key()
        }

        fn draw(&mut self, frame: &crate::ui::Frame) -> io::Result<()> {
            self.inner.draw(frame)
        }
    }

    #[test]
    fn test_selection_stays_visible_until_resize_key() {
        let mut ctx = context(MockSource::new().with_many(100, 50, None));
        let script = vec![Key::Char('G'), Key::Resize { rows: 6, cols: 60 }, Key::Char('q')];
        let mut screen = ShrinkingScreen {
            inner: ScriptedScreen::new(10, 60, script),
            rows_after_first_draw: 6,
        };
        let mut view = ListView::new(None);
        view.run(&mut ctx, &mut screen).unwrap();

        let frames = &screen.inner.frames;
        assert_eq!(frames[1].lines.len(), 9);
        assert!(frames[1].text()[8].starts_with(" 149 "));

        let last = frames[2].text();
        assert_eq!(last.len(), 5);
        assert!(last.iter().any(|line| line.starts_with(" 149 ")));
    }

    #[test]
    fn test_switch_view_exit() {
        let mut view = ListView::new(None);
        let (exit, _) = run(&mut view, sample(), 10, vec![Key::Char('t')]);
        assert_eq!(exit, ViewExit::SwitchView);
    }
}
