//! Error handling for the transport module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend answered with HTTP 404.
    #[error("Resource not found")]
    NotFound,

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Any other non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body of a successful response was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub async fn from_response(response: reqwest::Response) -> TransportError {
        let status = response.status().as_u16();
        if status == 404 {
            return TransportError::NotFound;
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        TransportError::Http { status, message }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::NotFound => Some(404),
            TransportError::Http { status, .. } => Some(*status),
            TransportError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            TransportError::Decode(_) => None,
        }
    }
}
