//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::api::Endpoint;
use ratatui::prelude::Color;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Get a ratatui color for a card's log lines
pub fn get_widget_color(widget: &Endpoint) -> Color {
    match widget {
        Endpoint::Weather => Color::LightBlue,
        Endpoint::Solar => Color::Yellow,
        Endpoint::Iss => Color::Cyan,
        Endpoint::Astro => Color::Magenta,
        Endpoint::Apod => Color::Green,
    }
}

/// Spinner frame for the given animation tick
pub fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Format an uptime duration for the info panel
pub fn format_uptime(secs: u64) -> String {
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
