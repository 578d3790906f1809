//! Console messages printed around a session

use crate::api::Endpoint;
use crate::widgets::Widgets;
use strum::IntoEnumIterator;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Success => "SUCCESS",
            Tone::Warning => "WARN",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;36m",
            Tone::Success => "\x1b[1;32m",
            Tone::Warning => "\x1b[1;33m",
        }
    }
}

/// A tagged line printed to the console outside the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMessage {
    tone: Tone,
    text: String,
}

impl SessionMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Warning,
            text: text.into(),
        }
    }

    /// Uncolored form, e.g. `[INFO] Shutting down...`.
    pub fn plain(&self) -> String {
        format!("[{}] {}", self.tone.tag(), self.text)
    }

    pub fn print(&self) {
        println!(
            "{}[{}]{} {}",
            self.tone.color(),
            self.tone.tag(),
            RESET,
            self.text
        );
    }
}

pub fn session_starting(mode: &str, api_url: &str) -> SessionMessage {
    SessionMessage::info(format!("Starting {} mode against {}", mode, api_url))
}

pub fn cards_mounted(endpoints: &[Endpoint]) -> SessionMessage {
    let names: Vec<String> = endpoints.iter().map(ToString::to_string).collect();
    SessionMessage::info(format!("Loading on start: {}", names.join(", ")))
}

/// One line per card with the state it ended in.
pub fn card_summary(widgets: &Widgets) -> Vec<SessionMessage> {
    Endpoint::iter()
        .map(|endpoint| match widgets.status(endpoint) {
            (label, Some(reason)) => SessionMessage::warning(format!("{endpoint}: {label} ({reason})")),
            ("Success", None) => SessionMessage::success(format!("{endpoint}: Success")),
            (label, None) => SessionMessage::info(format!("{endpoint}: {label}")),
        })
        .collect()
}

pub fn session_shutdown() -> SessionMessage {
    SessionMessage::info("Shutting down...")
}

pub fn session_exit_success() -> SessionMessage {
    SessionMessage::success("Astro Dash exited successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::error::FetchError;
    use crate::api::types::IssLocation;
    use crate::widgets::{Dispatcher, WidgetInputs};
    use std::sync::Arc;

    #[test]
    fn test_mounted_cards_are_listed_in_order() {
        let message = cards_mounted(&[Endpoint::Iss, Endpoint::Astro, Endpoint::Weather]);
        assert_eq!(message.plain(), "[INFO] Loading on start: ISS, Astro, Weather");
    }

    #[tokio::test]
    async fn test_summary_reports_each_card() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_iss().returning(|| {
            Ok(IssLocation {
                latitude: 1.0,
                longitude: 2.0,
            })
        });
        api.expect_fetch_astro().returning(|| Err(FetchError::Unknown));
        let (dispatcher, mut receiver) = Dispatcher::channel(Arc::new(api));

        let mut widgets = Widgets::new(WidgetInputs::default());
        widgets.mount(&dispatcher);
        for _ in 0..2 {
            let update = receiver.recv().await.unwrap();
            widgets.apply(update);
        }

        let lines: Vec<String> = card_summary(&widgets).iter().map(SessionMessage::plain).collect();
        assert_eq!(
            lines,
            vec![
                "[INFO] Weather: Idle",
                "[INFO] Solar: Idle",
                "[SUCCESS] ISS: Success",
                "[WARN] Astro: Failure (An unknown error occurred)",
                "[INFO] APOD: Idle",
            ]
        );
    }
}
