// Dashboard widgets. Each module exposes a `render(frame, area, ...)` entry
// point.

pub mod help_bar;
pub mod leaderboard;
pub mod notice;
pub mod status_bar;
pub mod threshold;
