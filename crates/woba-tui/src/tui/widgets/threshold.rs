// Minimum plate-appearance control, drawn as a gauge over [1, max PA].

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::MinPaFilter;

pub fn render(frame: &mut Frame, area: Rect, filter: Option<&MinPaFilter>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Minimum plate appearances");

    let Some(filter) = filter else {
        let paragraph = Paragraph::new("--")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(filter.ratio())
        .label(gauge_label(filter));
    frame.render_widget(gauge, area);
}

/// E.g. "PA >= 10  (1-45)".
pub fn gauge_label(filter: &MinPaFilter) -> String {
    format!("PA >= {}  (1-{})", filter.value(), filter.max())
}
