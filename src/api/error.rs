//! Failure reasons surfaced by the endpoint clients.
//!
//! Every variant renders to the literal message a widget shows to the user.

use crate::api::endpoint::Endpoint;
use crate::transport::error::TransportError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered 404 for the requested resource.
    #[error("{}", .endpoint.not_found_message())]
    NotFound { endpoint: Endpoint },

    /// Any other non-success status or a network failure.
    #[error("{}", transport_message(.endpoint, .detail.as_deref()))]
    Transport {
        endpoint: Endpoint,
        detail: Option<String>,
    },

    /// A successful response without the expected key path, or with a
    /// payload that does not match the entity.
    #[error("{}", .endpoint.missing_data_message())]
    MissingData { endpoint: Endpoint },

    /// Anything not recognized as a transport failure.
    #[error("An unknown error occurred")]
    Unknown,
}

fn transport_message(endpoint: &Endpoint, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(
            "An error occurred while fetching {}: {}",
            endpoint.label(),
            detail
        ),
        _ => format!("An error occurred while fetching {}", endpoint.label()),
    }
}

impl FetchError {
    pub fn from_transport(endpoint: Endpoint, error: TransportError) -> Self {
        match error {
            TransportError::NotFound => FetchError::NotFound { endpoint },
            TransportError::Http { .. } | TransportError::Reqwest(_) => FetchError::Transport {
                endpoint,
                detail: Some(error.to_string()),
            },
            TransportError::Decode(_) => FetchError::Unknown,
        }
    }

    pub fn missing(endpoint: Endpoint) -> Self {
        FetchError::MissingData { endpoint }
    }
}
