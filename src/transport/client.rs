//! HTTP transport
//!
//! Thin wrapper around reqwest that issues GET requests against the dashboard API.

use crate::consts::cli_consts::network;
use crate::transport::error::TransportError;
use crate::transport::{ApiRequest, Transport};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("astro-dash/", env!("CARGO_PKG_VERSION"));

/// Settings the transport is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: network::connect_timeout(),
            timeout: network::request_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, TransportError> {
        if !response.status().is_success() {
            return Err(TransportError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &ApiRequest) -> Result<serde_json::Value, TransportError> {
        let url = self.build_url(&request.path);
        debug!("GET {} {:?}", url, request.query);

        let mut builder = self.client.get(&url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        let response = builder.send().await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
