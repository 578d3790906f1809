//! Event System
//!
//! Activity-log events produced as widgets request and receive data

use crate::api::Endpoint;
use crate::logging::{LogLevel, get_rust_log_level};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Request,
    Success,
    Error,
    /// A response that arrived after a newer request was issued.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub widget: Endpoint,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(widget: Endpoint, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            widget,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn request(widget: Endpoint, msg: String) -> Self {
        Self::new(widget, msg, EventType::Request, LogLevel::Info)
    }

    pub fn success(widget: Endpoint, msg: String) -> Self {
        Self::new(widget, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error_with_level(widget: Endpoint, msg: String, log_level: LogLevel) -> Self {
        Self::new(widget, msg, EventType::Error, log_level)
    }

    pub fn stale(widget: Endpoint) -> Self {
        Self::new(
            widget,
            "Discarded a response superseded by a newer request".to_string(),
            EventType::Stale,
            LogLevel::Debug,
        )
    }

    /// Whether the event passes the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    /// Success events always show; everything else must reach `threshold`.
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Success || self.log_level >= threshold
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.widget, self.msg
        )
    }
}
