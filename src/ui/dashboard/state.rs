//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::api::Endpoint;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WidgetEvent;
use crate::ui::app::UIConfig;
use crate::widgets::Widgets;

use std::collections::VecDeque;
use std::time::Instant;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Dashboard state: the cards plus everything needed to draw them.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Base URL requests are sent to.
    pub api_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The five dashboard cards.
    pub widgets: Widgets,
    /// Card receiving key input.
    pub focus: Endpoint,
    /// Activity logs for display
    pub activity_logs: VecDeque<WidgetEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(widgets: Widgets, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment: ui_config.environment,
            api_url: ui_config.api_url,
            start_time,
            widgets,
            focus: Endpoint::Weather,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WidgetEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Number of cards with a request in flight.
    pub fn loading_count(&self) -> usize {
        use strum::IntoEnumIterator;
        Endpoint::iter()
            .filter(|endpoint| self.widgets.is_loading(*endpoint))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;

    fn state() -> DashboardState {
        DashboardState::new(
            Widgets::default(),
            Instant::now(),
            UIConfig::new(false, Environment::Local, "http://localhost:3000/api".to_string()),
        )
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(Event::success(Endpoint::Iss, format!("update {i}")));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            state.activity_logs.front().map(|e| e.msg.as_str()),
            Some("update 5")
        );
    }

    #[test]
    fn test_nothing_loading_initially() {
        let state = state();
        assert_eq!(state.loading_count(), 0);
        assert_eq!(state.focus, Endpoint::Weather);
    }
}
