// TUI dashboard: layout, input handling, and widget rendering.
//
// The loop owns the `Dashboard`. Key presses mutate it directly or come back
// as a `UserCommand`; a render tick redraws at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::info;

use crate::app::Dashboard;
use input::UserCommand;
use layout::build_layout;

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, dashboard: &Dashboard) {
    let layout = build_layout(frame.area());
    let dataset = dashboard.dataset();

    widgets::status_bar::render(frame, layout.status_bar, dataset);
    widgets::threshold::render(frame, layout.threshold, dashboard.min_pa());

    match (dataset.table(), widgets::notice::notice_for(dataset)) {
        (_, Some((severity, message))) => {
            widgets::notice::render(frame, layout.main_panel, severity, &message);
        }
        (Some(table), None) => {
            widgets::leaderboard::render(
                frame,
                layout.main_panel,
                &dashboard.visible_rows(),
                table.len(),
                dashboard.scroll_offset(),
            );
        }
        (None, None) => {}
    }

    widgets::help_bar::render(frame, layout.help_bar);
}

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over keyboard input and the render tick until the user quits.
/// 4. Restores the terminal.
pub async fn run(mut dashboard: Dashboard) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut dashboard) {
                            Some(UserCommand::Quit) => break Ok(()),
                            Some(UserCommand::Reload) => {
                                info!("reloading latest data file");
                                dashboard.reload();
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => break Err(anyhow::Error::from(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &dashboard)) {
                    break Err(anyhow::Error::from(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();

    result
}
