//! One controller per dashboard card
//!
//! Each card owns its input (if any) and a [`WidgetController`] for its data
//! domain. Cards can either await a request inline (`search`/`load`) or hand
//! it to the [`Dispatcher`] and be resolved later with the returned update.

use super::controller::{Ticket, WidgetController};
use super::dispatcher::Dispatcher;
use super::state::WidgetState;
use crate::api::DashboardApi;
use crate::api::error::FetchError;
use crate::api::types::{ApodData, AstroInfo, IssLocation, SolarInfo, WeatherData};

#[derive(Debug, Default)]
pub struct WeatherCard {
    /// City typed by the user.
    pub city: String,
    controller: WidgetController<WeatherData>,
}

impl WeatherCard {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            controller: WidgetController::new(),
        }
    }

    pub fn state(&self) -> &WidgetState<WeatherData> {
        self.controller.state()
    }

    pub async fn search(&mut self, api: &dyn DashboardApi) -> &WidgetState<WeatherData> {
        let city = self.city.clone();
        self.controller.load(api.fetch_weather(&city)).await
    }

    pub fn request(&mut self, dispatcher: &Dispatcher) -> Ticket {
        let ticket = self.controller.begin();
        dispatcher.fetch_weather(ticket, self.city.clone());
        ticket
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<WeatherData, FetchError>) -> bool {
        self.controller.resolve(ticket, outcome)
    }
}

#[derive(Debug, Default)]
pub struct SolarCard {
    /// Name of the celestial body typed by the user.
    pub body_name: String,
    controller: WidgetController<SolarInfo>,
}

impl SolarCard {
    pub fn new(body_name: impl Into<String>) -> Self {
        Self {
            body_name: body_name.into(),
            controller: WidgetController::new(),
        }
    }

    pub fn state(&self) -> &WidgetState<SolarInfo> {
        self.controller.state()
    }

    pub async fn search(&mut self, api: &dyn DashboardApi) -> &WidgetState<SolarInfo> {
        let body_name = self.body_name.clone();
        self.controller.load(api.fetch_solar(&body_name)).await
    }

    pub fn request(&mut self, dispatcher: &Dispatcher) -> Ticket {
        let ticket = self.controller.begin();
        dispatcher.fetch_solar(ticket, self.body_name.clone());
        ticket
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<SolarInfo, FetchError>) -> bool {
        self.controller.resolve(ticket, outcome)
    }
}

/// Current ISS position; requested on mount and on refresh.
#[derive(Debug, Default)]
pub struct IssCard {
    controller: WidgetController<IssLocation>,
}

impl IssCard {
    pub fn state(&self) -> &WidgetState<IssLocation> {
        self.controller.state()
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) -> &WidgetState<IssLocation> {
        self.controller.load(api.fetch_iss()).await
    }

    pub fn request(&mut self, dispatcher: &Dispatcher) -> Ticket {
        let ticket = self.controller.begin();
        dispatcher.fetch_iss(ticket);
        ticket
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<IssLocation, FetchError>) -> bool {
        self.controller.resolve(ticket, outcome)
    }
}

/// People in space; requested on mount and on refresh.
#[derive(Debug, Default)]
pub struct AstroCard {
    controller: WidgetController<AstroInfo>,
}

impl AstroCard {
    pub fn state(&self) -> &WidgetState<AstroInfo> {
        self.controller.state()
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) -> &WidgetState<AstroInfo> {
        self.controller.load(api.fetch_astro()).await
    }

    pub fn request(&mut self, dispatcher: &Dispatcher) -> Ticket {
        let ticket = self.controller.begin();
        dispatcher.fetch_astro(ticket);
        ticket
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<AstroInfo, FetchError>) -> bool {
        self.controller.resolve(ticket, outcome)
    }
}

#[derive(Debug, Default)]
pub struct ApodCard {
    /// Date in the provider's format, e.g. `2024-03-01`.
    pub date: String,
    controller: WidgetController<ApodData>,
}

impl ApodCard {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            controller: WidgetController::new(),
        }
    }

    pub fn state(&self) -> &WidgetState<ApodData> {
        self.controller.state()
    }

    pub async fn search(&mut self, api: &dyn DashboardApi) -> &WidgetState<ApodData> {
        let date = self.date.clone();
        self.controller.load(api.fetch_apod(&date)).await
    }

    pub fn request(&mut self, dispatcher: &Dispatcher) -> Ticket {
        let ticket = self.controller.begin();
        dispatcher.fetch_apod(ticket, self.date.clone());
        ticket
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<ApodData, FetchError>) -> bool {
        self.controller.resolve(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MockDashboardApi};
    use mockall::predicate::eq;

    fn earth() -> SolarInfo {
        SolarInfo {
            english_name: "Earth".to_string(),
            is_planet: true,
            gravity: 9.8,
            mean_radius: 6371.0,
            avg_temp: 15.0,
        }
    }

    #[tokio::test]
    async fn test_solar_card_earth_scenario() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_solar()
            .with(eq("Earth"))
            .times(1)
            .returning(|_| Ok(earth()));

        let mut card = SolarCard::new("Earth");
        let state = card.search(&api).await;

        assert_eq!(state.data().map(|d| d.english_name.as_str()), Some("Earth"));
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_solar_card_not_found_scenario() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_solar()
            .with(eq("Pluto2"))
            .returning(|_| Err(FetchError::NotFound { endpoint: Endpoint::Solar }));

        let mut card = SolarCard::new("Pluto2");
        let state = card.search(&api).await;

        assert_eq!(state.error(), Some("Solar body not found"));
        assert!(state.data().is_none());
    }

    #[tokio::test]
    async fn test_weather_card_new_search_replaces_error() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_weather()
            .with(eq("Atlantis"))
            .returning(|_| Err(FetchError::NotFound { endpoint: Endpoint::Weather }));
        api.expect_fetch_weather()
            .with(eq("Lima"))
            .returning(|city| {
                Ok(WeatherData {
                    city: city.to_string(),
                    temperature: 19.0,
                    humidity: 77.0,
                    wind: 3.1,
                    rain: 0.0,
                })
            });

        let mut card = WeatherCard::new("Atlantis");
        assert_eq!(card.search(&api).await.error(), Some("City not found"));

        card.city = "Lima".to_string();
        let state = card.search(&api).await;
        assert_eq!(state.data().map(|w| w.city.as_str()), Some("Lima"));
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_astro_card_failure_reason_is_literal() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_astro()
            .returning(|| Err(FetchError::MissingData { endpoint: Endpoint::Astro }));

        let mut card = AstroCard::default();
        let state = card.load(&api).await;
        assert_eq!(state.error(), Some("Astro data not found in the response"));
    }

    #[tokio::test]
    async fn test_every_resolved_card_holds_exactly_one_outcome() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_iss().returning(|| {
            Ok(IssLocation {
                latitude: 0.0,
                longitude: 0.0,
            })
        });
        api.expect_fetch_apod()
            .returning(|_| Err(FetchError::Transport { endpoint: Endpoint::Apod, detail: None }));

        let mut iss = IssCard::default();
        let state = iss.load(&api).await;
        assert!(state.data().is_some() ^ state.error().is_some());
        assert!(!state.is_loading());

        let mut apod = ApodCard::new("2024-03-01");
        let state = apod.search(&api).await;
        assert!(state.data().is_some() ^ state.error().is_some());
        assert!(!state.is_loading());
    }
}
