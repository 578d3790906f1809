//! Dashboard main renderer

use super::components::{cards, footer, header, info_panel, logs};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Below this many rows the activity log is dropped to keep the cards readable.
const MIN_HEIGHT_FOR_LOGS: u16 = 24;

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub info: Rect,
    pub cards: Rect,
    pub logs: Option<Rect>,
    pub footer: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardAreas {
    let show_logs = area.height >= MIN_HEIGHT_FOR_LOGS;
    let logs_constraint = if show_logs {
        Constraint::Percentage(30)
    } else {
        Constraint::Length(0)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            logs_constraint,
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(22), Constraint::Percentage(78)])
        .split(rows[1]);

    DashboardAreas {
        header: rows[0],
        info: content[0],
        cards: content[1],
        logs: show_logs.then_some(rows[2]),
        footer: rows[3],
    }
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let areas = dashboard_layout(f.area());
    header::render_header(f, areas.header, state);
    info_panel::render_info_panel(f, areas.info, state);
    cards::render_cards(f, areas.cards, state);
    if let Some(logs_area) = areas.logs {
        logs::render_logs_panel(f, logs_area, state);
    }
    footer::render_footer(f, areas.footer);
}
