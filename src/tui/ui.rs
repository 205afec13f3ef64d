//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Orchestrates the overall dashboard layout by dividing the terminal
//! into regions and delegating to individual widget renderers. Handles
//! the minimum size guard and the help overlay.
//!
//! ## Guarantees
//! - Minimum size guard displays a centered message if the terminal is
//!   too small
//! - No panics during rendering regardless of terminal dimensions
//! - Every surface is drawn from the same `App` state, so one draw call
//!   is internally consistent

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, MIN_COLS, MIN_ROWS};
use super::widgets;

/// Renders the complete dashboard UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    // Help overlay
    if app.show_help {
        draw_help_overlay(f, size);
        return;
    }

    let clock = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let title = format!(
        " pricewatch [{}] {clock:>width$} ",
        app.source,
        width = (size.width as usize).saturating_sub(app.source.len() + 16),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let footer = Line::from(vec![
        Span::styled(
            " [q]uit  [p]ause  [h]elp ",
            Style::default().fg(Color::DarkGray),
        ),
        if app.paused {
            Span::styled(
                " PAUSED ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        },
    ]);

    let footer_block = Block::default().title_bottom(footer).borders(Borders::NONE);

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);
    f.render_widget(footer_block, size);

    // Main layout: chart on top, table and side column below
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),    // Chart
            Constraint::Length(13), // Table + gauges/events
        ])
        .split(inner);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Samples table
            Constraint::Percentage(40), // Gauges + events
        ])
        .split(main_chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Gauges
            Constraint::Min(4),    // Event tail
        ])
        .split(bottom_chunks[1]);

    widgets::chart::render(f, main_chunks[0], app);
    widgets::table::render(f, bottom_chunks[0], app);
    widgets::gauges::render(f, side_chunks[0], app);
    widgets::log::render(f, side_chunks[1], app);
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small \u{2014} resize to at least {}x{}",
        MIN_COLS, MIN_ROWS
    );
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_width = 48.min(area.width.saturating_sub(4));
    let popup_height = 14.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  pricewatch",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Keybindings:",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "    [q] Quit              [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [Ctrl+C] Force quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [p] Pause / Resume",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [h] Toggle this help",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  --mock            Synthetic feed (no network)",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  --url <URL>       Snapshot endpoint",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  --period-ms <N>   Refresh period",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  Press h to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_detection_width() {
        let area = Rect::new(0, 0, MIN_COLS - 1, 50);
        assert!(area.width < MIN_COLS);
    }

    #[test]
    fn test_too_small_detection_height() {
        let area = Rect::new(0, 0, 120, MIN_ROWS - 1);
        assert!(area.height < MIN_ROWS);
    }

    #[test]
    fn test_exactly_minimum_size_is_adequate() {
        let area = Rect::new(0, 0, MIN_COLS, MIN_ROWS);
        assert!(area.width >= MIN_COLS && area.height >= MIN_ROWS);
    }

    #[test]
    fn test_popup_centering_calculation() {
        let area_width: u16 = 120;
        let area_height: u16 = 50;
        let popup_width = 48.min(area_width.saturating_sub(4));
        let popup_height = 14.min(area_height.saturating_sub(4));
        let popup_x = (area_width.saturating_sub(popup_width)) / 2;
        let popup_y = (area_height.saturating_sub(popup_height)) / 2;

        assert_eq!(popup_width, 48);
        assert_eq!(popup_height, 14);
        assert_eq!(popup_x, 36);
        assert_eq!(popup_y, 18);
    }

    #[test]
    fn test_popup_clamps_to_small_terminal() {
        let area_width: u16 = 40;
        let popup_width = 48.min(area_width.saturating_sub(4));
        assert_eq!(popup_width, 36);
    }
}
