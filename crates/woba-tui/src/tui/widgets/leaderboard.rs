// Leaderboard widget: qualifying batters sorted by wOBA.
//
// Columns: rank, player, PA, wOBA (3 decimals). Rows arrive already filtered
// and sorted; the widget only applies the scroll offset.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use woba_core::metrics::PlayerAggregate;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[&PlayerAggregate],
    total: usize,
    scroll_offset: usize,
) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player"),
        Cell::from("PA"),
        Cell::from("wOBA"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .map(|(i, p)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(p.player_name.clone()),
                Cell::from(p.pa.to_string()),
                Cell::from(format_woba(p.woba)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(5),
        Constraint::Length(woba_width(rows)),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(build_title(rows.len(), total)),
        );

    frame.render_widget(table, area);
}

/// wOBA to three decimals, e.g. `0.445`.
pub fn format_woba(woba: f64) -> String {
    format!("{woba:.3}")
}

/// Width of the wOBA column: the widest formatted value across all rows, so
/// the column does not change while scrolling. At least 6.
fn woba_width(rows: &[&PlayerAggregate]) -> u16 {
    let widest = rows
        .iter()
        .map(|p| format_woba(p.woba).len())
        .max()
        .unwrap_or(0)
        .max(6);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

fn build_title(shown: usize, total: usize) -> String {
    format!("wOBA Leaders ({shown} of {total})")
}
