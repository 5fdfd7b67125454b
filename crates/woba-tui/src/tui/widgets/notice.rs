// Notice widget: shown in place of the table when there is nothing to rank.
//
// "No data files" and "no plate appearances" are different conditions and
// get different messages and colors.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Message for datasets that have no table, `None` for `Ready`.
pub fn notice_for(dataset: &Dataset) -> Option<(Severity, String)> {
    match dataset {
        Dataset::NoDataFiles { dir } => Some((
            Severity::Error,
            format!("No data files available in the '{dir}' directory."),
        )),
        Dataset::LoadFailed { message } => Some((
            Severity::Error,
            format!("Could not load data: {message}"),
        )),
        Dataset::NoPlateAppearances { .. } => Some((
            Severity::Warning,
            "No plate appearance events found in the dataset.".to_string(),
        )),
        Dataset::Ready { .. } => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, severity: Severity, message: &str) {
    let (label, color) = match severity {
        Severity::Error => ("Error", Color::Red),
        Severity::Warning => ("Warning", Color::Yellow),
    };

    let lines = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to reload.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title("wOBA Leaders"),
        );
    frame.render_widget(paragraph, area);
}
