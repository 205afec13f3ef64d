//! # Widget: Gauges & Status
//!
//! ## Responsibility
//! Renders the first-series min/max gauges, the sample count, and the
//! overall status text. Each line is an independent text update; the
//! status is `on` after a successful cycle and `error` after a failed
//! one, with nothing in between surfaced to the viewer.
//!
//! ## Guarantees
//! - Placeholder glyphs render before the first tick and whenever the
//!   first series has no defined values
//! - The error status is styled distinctly so a stale frame is obvious

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shape::PLACEHOLDER;
use crate::tui::app::{App, Status};

/// Returns the style for a status value.
fn status_style(status: Status) -> Style {
    match status {
        Status::On => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Status::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Status::Pending => Style::default().fg(Color::DarkGray),
    }
}

/// Renders the gauge/status surface.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" GAUGES ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (min, max, count) = match &app.frame {
        Some(frame) => (
            frame.gauge_min.clone(),
            frame.gauge_max.clone(),
            frame.sample_count.to_string(),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            "0".to_string(),
        ),
    };

    let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::White));
    let value = |s: String| Span::styled(s, Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(vec![label("MIN     "), value(min)]),
        Line::from(vec![label("MAX     "), value(max)]),
        Line::from(vec![label("SAMPLES "), value(count)]),
        Line::from(vec![
            label("STATUS  "),
            Span::styled(app.status.label(), status_style(app.status)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_style_on_is_green() {
        assert_eq!(status_style(Status::On).fg, Some(Color::Green));
    }

    #[test]
    fn test_status_style_error_is_red() {
        assert_eq!(status_style(Status::Error).fg, Some(Color::Red));
    }

    #[test]
    fn test_status_style_pending_is_dim() {
        assert_eq!(status_style(Status::Pending).fg, Some(Color::DarkGray));
    }
}
