//! Dashboard API client
//!
//! Endpoint clients for the weather, solar, ISS, astro and APOD routes. Each
//! builds its request, calls the transport and validates the expected key path
//! before building a domain entity.

use crate::api::DashboardApi;
use crate::api::endpoint::Endpoint;
use crate::api::error::FetchError;
use crate::api::types::{
    ApodData, AstroInfo, IssLocation, Person, SolarInfo, WeatherData, WeatherReading,
};
use crate::error_classifier::ErrorClassifier;
use crate::transport::{ApiRequest, Transport};
use log::{debug, log};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    classifier: ErrorClassifier,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            classifier: ErrorClassifier::new(),
        }
    }

    async fn request(&self, endpoint: Endpoint, request: ApiRequest) -> Result<Value, FetchError> {
        debug!("Fetching {} ({})", endpoint.label(), request.path);
        self.transport
            .get(&request)
            .await
            .map_err(|e| {
                if let Some(status) = e.status() {
                    debug!("{} answered with status {}", request.path, status);
                }
                self.report(FetchError::from_transport(endpoint, e))
            })
    }

    fn report(&self, error: FetchError) -> FetchError {
        let level: log::Level = self.classifier.classify_fetch_error(&error).into();
        log!(level, "{}", error);
        error
    }

    /// Deserialize the value found at a key path; absent or null is missing data.
    fn extract<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        value: Option<&Value>,
    ) -> Result<T, FetchError> {
        let value = match value {
            Some(value) if !value.is_null() => value,
            _ => return Err(self.report(FetchError::missing(endpoint))),
        };
        T::deserialize(value).map_err(|e| {
            debug!("Malformed {} payload: {}", endpoint.label(), e);
            self.report(FetchError::missing(endpoint))
        })
    }
}

fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherData, FetchError> {
        let endpoint = Endpoint::Weather;
        let request = ApiRequest::new(format!("weather/{}", path_segment(city)));
        let body = self.request(endpoint, request).await?;

        let reading: WeatherReading = self.extract(endpoint, Some(&body))?;
        Ok(reading.into_weather(city))
    }

    async fn fetch_solar(&self, body_name: &str) -> Result<SolarInfo, FetchError> {
        let endpoint = Endpoint::Solar;
        let request = ApiRequest::new(format!("solar/{}", path_segment(body_name)));
        let body = self.request(endpoint, request).await?;

        self.extract(endpoint, body.get("solarData"))
    }

    async fn fetch_iss(&self) -> Result<IssLocation, FetchError> {
        let endpoint = Endpoint::Iss;
        let body = self.request(endpoint, ApiRequest::new("iss")).await?;

        self.extract(endpoint, body.pointer("/issData/iss_position"))
    }

    async fn fetch_astro(&self) -> Result<AstroInfo, FetchError> {
        let endpoint = Endpoint::Astro;
        let body = self.request(endpoint, ApiRequest::new("astro")).await?;

        let people: Vec<Person> = self.extract(endpoint, body.get("astroData"))?;
        Ok(AstroInfo::from_people(people))
    }

    async fn fetch_apod(&self, date: &str) -> Result<ApodData, FetchError> {
        let endpoint = Endpoint::Apod;
        let request = ApiRequest::new("apod").with_query("date", date);
        let body = self.request(endpoint, request).await?;

        match body {
            Value::Object(fields) => Ok(ApodData(fields)),
            _ => Err(self.report(FetchError::missing(endpoint))),
        }
    }
}
