//! # Widget: Recent Samples Table
//!
//! ## Responsibility
//! Renders the last ten samples, most recent first: one timestamp column
//! plus one column per series. The header is rebuilt from the current
//! frame every draw, so a changed upstream series set shows up
//! immediately and always matches the chart legend.
//!
//! ## Guarantees
//! - Ratatui composes the whole table into its buffer before the
//!   terminal sees it, so no partial rows are ever visible
//! - Missing values render as the placeholder glyph, never as zero
//! - Renders an empty body (header only) before the first tick

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

use crate::tui::app::App;

/// Width of the local-timestamp column ("YYYY-MM-DD HH:MM:SS").
const TIME_COL_WIDTH: u16 = 19;

/// Renders the table surface. Timestamps are local time, converted from
/// the UTC wire values; the title says so to avoid confusing the viewer.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" SAMPLES (local time) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let (header_cells, rows, column_count) = match &app.frame {
        Some(frame) => {
            let mut header = Vec::with_capacity(frame.series.len() + 1);
            header.push("time".to_string());
            header.extend(frame.series.iter().cloned());

            let rows: Vec<Row> = frame
                .table_rows
                .iter()
                .map(|r| {
                    let mut cells = Vec::with_capacity(r.cells.len() + 1);
                    cells.push(r.time.clone());
                    cells.extend(r.cells.iter().cloned());
                    Row::new(cells)
                })
                .collect();

            let columns = frame.series.len() + 1;
            (header, rows, columns)
        }
        None => (vec!["time".to_string()], Vec::new(), 1),
    };

    let mut widths = Vec::with_capacity(column_count);
    widths.push(Constraint::Length(TIME_COL_WIDTH));
    widths.extend(std::iter::repeat(Constraint::Min(10)).take(column_count - 1));

    let table = Table::new(rows, widths)
        .header(
            Row::new(header_cells).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shape;
    use crate::snapshot::parse_snapshot;
    use std::time::Duration;

    #[test]
    fn test_header_tracks_current_series() {
        let mut app = App::new("mock", Duration::from_secs(1));
        let snap = parse_snapshot(
            r#"[{"ts":"2024-01-01T00:00:00Z","prices":{"ETH-USD":1,"BTC-USD":2}}]"#,
        )
        .expect("valid snapshot");
        app.apply_frame(shape(&snap));

        let frame = app.frame.as_ref().expect("frame");
        assert_eq!(frame.series, vec!["ETH-USD", "BTC-USD"]);
        // One column per series plus the time column.
        assert_eq!(frame.table_rows[0].cells.len(), frame.series.len());
    }

    #[test]
    fn test_time_col_width_fits_long_label() {
        assert_eq!(usize::from(TIME_COL_WIDTH), "2024-01-01 00:00:00".len());
    }
}
