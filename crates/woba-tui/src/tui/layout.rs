// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Min PA control (3 rows)                           |
// +--------------------------------------------------+
// | Leaderboard / notice (fill)                       |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Data file in use and its date.
    pub status_bar: Rect,
    /// Minimum plate-appearance gauge.
    pub threshold: Rect,
    /// wOBA table, or the notice when there is nothing to show.
    pub main_panel: Rect,
    /// Keyboard shortcut hints.
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // threshold
            Constraint::Min(5),    // main panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        threshold: vertical[1],
        main_panel: vertical[2],
        help_bar: vertical[3],
    }
}
