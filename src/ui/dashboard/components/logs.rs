//! Dashboard logs panel component
//!
//! Newest activity first; events of the focused card are highlighted

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_widget_color};
use crate::api::Endpoint;
use crate::events::{Event, EventType};
use crate::logging::{LogLevel, get_rust_log_level};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_icon(event: &Event) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "⚠️",
        (EventType::Error, LogLevel::Info) => "🔍",
        (EventType::Error, _) => "❌",
        (EventType::Request, _) => "⏳",
        (EventType::Stale, _) => "·",
    }
}

fn log_line(event: &Event, focus: Endpoint) -> Line<'static> {
    let mut style = Style::default().fg(get_widget_color(&event.widget));
    if event.widget == focus {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::raw(format!("{} ", status_icon(event))),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}: {}", event.widget, event.msg), style),
    ])
}

/// Render logs panel.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Account for borders and padding
    let log_count = (area.height.saturating_sub(3) as usize).max(1);
    let threshold = get_rust_log_level();

    let shown: Vec<&Event> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display_at(threshold))
        .collect();
    let log_lines: Vec<Line> = shown
        .iter()
        .rev()
        .take(log_count)
        .map(|event| log_line(event, state.focus))
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title(format!("ACTIVITY LOG ({})", shown.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_card_events_are_bold() {
        let event = Event::success(Endpoint::Iss, "10.00, 20.00".to_string());

        let focused = log_line(&event, Endpoint::Iss);
        let other = log_line(&event, Endpoint::Weather);

        let message = |line: &Line| line.spans[2].style.add_modifier;
        assert!(message(&focused).contains(Modifier::BOLD));
        assert!(!message(&other).contains(Modifier::BOLD));
        assert_eq!(focused.spans[2].content, "ISS: 10.00, 20.00");
    }

    #[test]
    fn test_not_found_uses_lookup_icon() {
        let event = Event::error_with_level(
            Endpoint::Weather,
            "City not found".to_string(),
            LogLevel::Info,
        );
        assert_eq!(status_icon(&event), "🔍");
    }
}
