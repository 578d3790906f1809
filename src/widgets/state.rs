//! Per-widget request state

/// Lifecycle of one widget's data.
///
/// `Success` and `Failure` are not terminal; a new request moves either back
/// to `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WidgetState<T> {
    /// No request issued yet.
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> WidgetState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            WidgetState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WidgetState::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WidgetState::Idle => "Idle",
            WidgetState::Loading => "Loading",
            WidgetState::Success(_) => "Success",
            WidgetState::Failure(_) => "Failure",
        }
    }
}
