use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen frame shared by every route
pub struct AppLayout {
    pub header_area: Rect,
    pub main_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Header: top row (title and navigation keys)
    /// - Main: everything in between
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { header_area: chunks[0], main_area: chunks[1], status_area: chunks[2] }
    }

    /// Side-by-side panes: 60% content on the left, 40% on the right
    pub fn split_main(&self) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(self.main_area);
        (chunks[0], chunks[1])
    }

    /// A fixed-height band above the rest of `area`
    pub fn band(area: Rect, height: u16) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }
}
