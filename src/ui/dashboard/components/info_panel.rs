//! Dashboard info panel component
//!
//! Renders connection and session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };

    let info_lines = vec![
        Line::from(vec![Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(env_color),
        )]),
        Line::from(vec![Span::styled(
            format!("API: {}", state.api_url),
            Style::default().fg(Color::LightBlue),
        )]),
        Line::from(vec![Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::styled(
            format!("Uptime: {}", format_uptime(state.start_time.elapsed().as_secs())),
            Style::default().fg(Color::LightGreen),
        )]),
        Line::from(vec![Span::styled(
            format!("Focus: {}", state.focus),
            Style::default().fg(Color::LightYellow),
        )]),
    ];

    let info_block = Block::default()
        .title("SESSION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
