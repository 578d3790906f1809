use crate::transport::error::TransportError;

pub(crate) mod client;
pub use client::{HttpTransport, TransportConfig};
pub mod error;

#[cfg(test)]
use mockall::automock;

/// A GET request relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET and return the decoded JSON body, unvalidated.
    async fn get(&self, request: &ApiRequest) -> Result<serde_json::Value, TransportError>;
}
