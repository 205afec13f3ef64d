//! # Widget: Diagnostic Log Tail
//!
//! ## Responsibility
//! Renders the newest diagnostic entries (refresh failures, feed
//! milestones), newest at the bottom, trimmed to the available height.
//!
//! ## Guarantees
//! - Shows the most recent entries when there are more than fit
//! - Level-coded colors; never panics on any entry content

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, LogLevel};

/// Returns the color for a log level.
fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

/// Renders the log tail.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" EVENTS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = usize::from(inner.height);
    let skip = app.log_entries.len().saturating_sub(visible);

    let lines: Vec<Line> = app
        .log_entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", entry.level.label()),
                    Style::default().fg(level_color(entry.level)),
                ),
                Span::styled(
                    format!("{} ", entry.message),
                    Style::default().fg(Color::White),
                ),
                Span::styled(entry.fields.clone(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_colors() {
        assert_eq!(level_color(LogLevel::Info), Color::Green);
        assert_eq!(level_color(LogLevel::Warn), Color::Yellow);
        assert_eq!(level_color(LogLevel::Error), Color::Red);
    }

    #[test]
    fn test_tail_skip_arithmetic() {
        // 50 entries, 8 visible rows: skip the oldest 42.
        assert_eq!(50usize.saturating_sub(8), 42);
        // Fewer entries than rows: skip nothing.
        assert_eq!(3usize.saturating_sub(8), 0);
    }
}
