//! Dashboard cards component
//!
//! Renders one panel per widget from its current state

use super::super::state::DashboardState;
use super::super::utils::{get_widget_color, spinner};
use crate::api::Endpoint;
use crate::api::types::{ApodData, AstroInfo, IssLocation, SolarInfo, WeatherData};
use crate::widgets::WidgetState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render all cards in a two-row grid.
pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let widgets = &state.widgets;
    render_card(f, top[0], state, Endpoint::Weather, widgets.weather.state(), weather_lines);
    render_card(f, top[1], state, Endpoint::Solar, widgets.solar.state(), solar_lines);
    render_card(f, top[2], state, Endpoint::Apod, widgets.apod.state(), apod_lines);
    render_card(f, bottom[0], state, Endpoint::Iss, widgets.iss.state(), iss_lines);
    render_card(f, bottom[1], state, Endpoint::Astro, widgets.astro.state(), astro_lines);
}

fn render_card<T>(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    endpoint: Endpoint,
    widget_state: &WidgetState<T>,
    data_lines: fn(&T) -> Vec<Line<'static>>,
) {
    let focused = state.focus == endpoint;
    let mut lines = Vec::new();

    if let Some(input) = state.widgets.input(endpoint) {
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}{}", input, cursor),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.extend(state_lines(endpoint, widget_state, state.tick, data_lines));

    let border_color = if focused {
        Color::White
    } else {
        get_widget_color(&endpoint)
    };
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .title(format!("{} [{}]", card_title(endpoint), widget_state.label()))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Body of a card below its input line.
fn state_lines<T>(
    endpoint: Endpoint,
    widget_state: &WidgetState<T>,
    tick: usize,
    data_lines: fn(&T) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    if let Some(data) = widget_state.data() {
        return data_lines(data);
    }
    if let Some(reason) = widget_state.error() {
        return vec![Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::LightRed),
        ))];
    }
    let line = if widget_state.is_loading() {
        Span::styled(
            format!("{} Loading...", spinner(tick)),
            Style::default().fg(Color::LightYellow),
        )
    } else {
        Span::styled(idle_hint(endpoint), Style::default().fg(Color::DarkGray))
    };
    vec![Line::from(line)]
}

fn card_title(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Weather => "WEATHER",
        Endpoint::Solar => "SOLAR SYSTEM",
        Endpoint::Iss => "ISS POSITION",
        Endpoint::Astro => "PEOPLE IN SPACE",
        Endpoint::Apod => "PICTURE OF THE DAY",
    }
}

fn idle_hint(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Weather => "Type a city and press Enter",
        Endpoint::Solar => "Type a planet or moon and press Enter",
        Endpoint::Apod => "Edit the date (YYYY-MM-DD) and press Enter",
        Endpoint::Iss | Endpoint::Astro => "Press R to load",
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn weather_lines(weather: &WeatherData) -> Vec<Line<'static>> {
    vec![
        field("City", weather.city.clone()),
        field("Temperature", format!("{:.1} °C", weather.temperature)),
        field("Humidity", format!("{}%", weather.humidity)),
        field("Wind", format!("{} m/s", weather.wind)),
        field("Rain", format!("{} mm", weather.rain)),
    ]
}

fn solar_lines(info: &SolarInfo) -> Vec<Line<'static>> {
    vec![
        field("Name", info.english_name.clone()),
        field("Planet", if info.is_planet { "yes" } else { "no" }.to_string()),
        field("Gravity", format!("{} m/s²", info.gravity)),
        field("Mean radius", format!("{} km", info.mean_radius)),
        field("Avg temp", format!("{} K", info.avg_temp)),
    ]
}

fn iss_lines(location: &IssLocation) -> Vec<Line<'static>> {
    vec![
        field("Latitude", format!("{:.4}", location.latitude)),
        field("Longitude", format!("{:.4}", location.longitude)),
    ]
}

fn astro_lines(info: &AstroInfo) -> Vec<Line<'static>> {
    let mut lines = vec![field("In space", info.number.to_string())];
    lines.extend(
        info.people
            .iter()
            .map(|person| {
                field(
                    person.craft.as_deref().unwrap_or("Aboard"),
                    person.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                )
            }),
    );
    lines
}

fn apod_lines(apod: &ApodData) -> Vec<Line<'static>> {
    let mut lines = vec![field("Title", apod.title().unwrap_or("Untitled").to_string())];
    if let Some(date) = apod.date() {
        lines.push(field("Date", date.to_string()));
    }
    if let Some(url) = apod.url() {
        lines.push(field("URL", url.to_string()));
    }
    if let Some(explanation) = apod.explanation() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            explanation.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}
