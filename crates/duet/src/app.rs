//! Application state for the interactive viewer

use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent};
use duet_core::{Comparison, Navigator, Session};

pub struct App {
    pub session: Session,
    pub comparison: Comparison,
    pub navigator: Navigator,
    pub left_name: String,
    pub right_name: String,
    /// First visible row index
    pub scroll: usize,
    /// Height of the row viewport, updated on every draw
    pub viewport_height: usize,
    pub line_numbers: bool,
    pub marker: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, left_name: String, right_name: String, config: &Config) -> Self {
        let comparison = session.compare();
        let navigator = Navigator::new(comparison.total_diffs);
        let mut app = Self {
            session,
            comparison,
            navigator,
            left_name,
            right_name,
            scroll: 0,
            viewport_height: 0,
            line_numbers: config.ui.line_numbers,
            marker: config.ui.marker.clone(),
            should_quit: false,
        };
        app.center_current();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char(']') => {
                self.navigator.next();
                self.center_current();
            }
            KeyCode::Char('p') | KeyCode::Char('[') => {
                self.navigator.prev();
                self.center_current();
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(self.viewport_height as isize),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height as isize)),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Char('s') => self.swap_sides(),
            _ => {}
        }
    }

    /// Exchange the two sides and re-compare, keeping the diff cursor.
    /// The diff count is symmetric, so the position stays meaningful.
    fn swap_sides(&mut self) {
        self.session.swap();
        std::mem::swap(&mut self.left_name, &mut self.right_name);

        let position = self.navigator.current();
        self.comparison = self.session.compare();
        self.navigator = Navigator::new(self.comparison.total_diffs);
        self.navigator.goto(position);
        self.center_current();
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn max_scroll(&self) -> usize {
        self.comparison
            .rows
            .len()
            .saturating_sub(self.viewport_height.max(1))
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Scroll so the first row of the current diff sits mid-viewport.
    pub fn center_current(&mut self) {
        let current = self.navigator.current();
        if current == 0 {
            return;
        }
        if let Some(row) = self
            .comparison
            .rows
            .iter()
            .position(|r| r.diff_index == Some(current))
        {
            self.scroll = row
                .saturating_sub(self.viewport_height / 2)
                .min(self.max_scroll());
        }
    }
}
