// Status bar widget: data file in use, its date and the batter count.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Dataset;

pub fn render(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let paragraph = Paragraph::new(Line::from(status_spans(dataset)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn status_spans(dataset: &Dataset) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        " wOBA Dashboard ",
        Style::default().fg(Color::Black).bg(Color::White),
    )];

    let Some(file) = dataset.file() else {
        spans.push(Span::styled(
            " no data file",
            Style::default().fg(Color::Gray),
        ));
        return spans;
    };

    spans.push(Span::styled(
        format!(" Using data file: {}", file.file_name),
        Style::default().fg(Color::White),
    ));
    if let Some(date) = file.date {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            date.format("%a %b %-d, %Y").to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(table) = dataset.table() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("{} batters", table.len()),
            Style::default().fg(Color::White),
        ));
    }
    spans
}
