//! # Widget: Price Chart
//!
//! ## Responsibility
//! Renders the time-series line chart, one dataset per series, from the
//! chart slot maintained by `App`. Gap samples were already omitted from
//! the point buffers, so Ratatui draws a line that spans them.
//!
//! ## Guarantees
//! - Shows a waiting placeholder until the first successful tick
//! - Y-axis bounds come from the chart slot and cover every series
//! - Never panics on any data range, including a single point

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

/// Dataset colors, cycled when there are more series than entries.
const PALETTE: [Color; 5] = [
    Color::Green,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
];

/// Returns the palette color for a series index.
pub fn series_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Renders the chart surface.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " PRICES ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(chart_state) = &app.chart else {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new("  Waiting for data\u{2026}")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    let datasets: Vec<Dataset> = chart_state
        .points
        .iter()
        .enumerate()
        .map(|(i, points)| {
            let name = chart_state
                .series_names
                .get(i)
                .map(String::as_str)
                .unwrap_or("?");
            Dataset::default()
                .name(name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(i)))
                .data(points)
        })
        .collect();

    let x_labels: Vec<Span> = chart_state
        .x_labels
        .iter()
        .map(|l| Span::styled(l.clone(), Style::default().fg(Color::DarkGray)))
        .collect();

    let [y_min, y_max] = chart_state.y_bounds;
    let y_labels = vec![
        Span::styled(format!("{y_min:.2}"), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2}", (y_min + y_max) / 2.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{y_max:.2}"), Style::default().fg(Color::DarkGray)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, chart_state.x_max])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(chart, area);
}
