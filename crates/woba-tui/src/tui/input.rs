// Keyboard input handling.
//
// Threshold and scroll keys mutate the `Dashboard` directly. Keys that need
// the event loop (quit, reload) come back as a `UserCommand`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Dashboard, MinPaFilter};

/// Large threshold step for PageUp/PageDown.
pub const PAGE_STEP: u32 = 10;

/// Commands the event loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
    Reload,
}

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the event loop must act, `None` when the
/// key was handled locally (or ignored).
pub fn handle_key(key_event: KeyEvent, dashboard: &mut Dashboard) -> Option<UserCommand> {
    // On Windows crossterm emits both Press and Release events.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Char('r') => Some(UserCommand::Reload),

        // Minimum PA threshold
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            dashboard.adjust_min_pa(|f| f.raise(1));
            None
        }
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
            dashboard.adjust_min_pa(|f| f.lower(1));
            None
        }
        KeyCode::PageUp => {
            dashboard.adjust_min_pa(|f| f.raise(PAGE_STEP));
            None
        }
        KeyCode::PageDown => {
            dashboard.adjust_min_pa(|f| f.lower(PAGE_STEP));
            None
        }
        KeyCode::Home => {
            dashboard.adjust_min_pa(MinPaFilter::to_min);
            None
        }
        KeyCode::End => {
            dashboard.adjust_min_pa(MinPaFilter::to_max);
            None
        }

        // Table scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            dashboard.scroll_up(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dashboard.scroll_down(1);
            None
        }

        _ => None,
    }
}
