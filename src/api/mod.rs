use crate::api::error::FetchError;
use crate::api::types::{ApodData, AstroInfo, IssLocation, SolarInfo, WeatherData};

pub(crate) mod client;
pub use client::ApiClient;
pub mod endpoint;
pub mod error;
pub mod types;

pub use endpoint::Endpoint;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Current weather for a city. The name is passed through unvalidated.
    async fn fetch_weather(&self, city: &str) -> Result<WeatherData, FetchError>;

    /// Facts about a solar system body.
    async fn fetch_solar(&self, body_name: &str) -> Result<SolarInfo, FetchError>;

    /// Current position of the ISS.
    async fn fetch_iss(&self) -> Result<IssLocation, FetchError>;

    /// People currently in space.
    async fn fetch_astro(&self) -> Result<AstroInfo, FetchError>;

    /// Astronomy picture of the day for a date, as the provider returns it.
    async fn fetch_apod(&self, date: &str) -> Result<ApodData, FetchError>;
}
