// Library root: dashboard state and the terminal UI, exposed for tests.

pub mod app;
pub mod tui;
