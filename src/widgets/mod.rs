//! Widget controllers
//!
//! The five dashboard cards and the glue that turns their request outcomes
//! into activity-log events.

pub mod cards;
pub mod controller;
pub mod dispatcher;
pub mod state;

pub use cards::{ApodCard, AstroCard, IssCard, SolarCard, WeatherCard};
pub use dispatcher::{Dispatcher, WidgetUpdate};
pub use state::WidgetState;

use crate::api::Endpoint;
use crate::api::error::FetchError;
use crate::api::types::{ApodData, AstroInfo, IssLocation, SolarInfo, WeatherData};
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use strum::IntoEnumIterator;

/// Initial inputs for the cards that take parameters.
#[derive(Debug, Clone, Default)]
pub struct WidgetInputs {
    pub city: Option<String>,
    pub body_name: Option<String>,
    pub date: Option<String>,
}

/// Today's local date in the form the APOD route accepts.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// All cards on the dashboard.
#[derive(Debug, Default)]
pub struct Widgets {
    pub weather: WeatherCard,
    pub solar: SolarCard,
    pub iss: IssCard,
    pub astro: AstroCard,
    pub apod: ApodCard,
    /// Cards requested on mount.
    mount_endpoints: Vec<Endpoint>,
    classifier: ErrorClassifier,
}

impl Widgets {
    pub fn new(inputs: WidgetInputs) -> Self {
        let mut mount_endpoints = vec![Endpoint::Iss, Endpoint::Astro];
        if inputs.city.is_some() {
            mount_endpoints.push(Endpoint::Weather);
        }
        if inputs.body_name.is_some() {
            mount_endpoints.push(Endpoint::Solar);
        }
        if inputs.date.is_some() {
            mount_endpoints.push(Endpoint::Apod);
        }

        Self {
            weather: WeatherCard::new(inputs.city.unwrap_or_default()),
            solar: SolarCard::new(inputs.body_name.unwrap_or_default()),
            iss: IssCard::default(),
            astro: AstroCard::default(),
            apod: ApodCard::new(inputs.date.unwrap_or_else(today)),
            mount_endpoints,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Requests issued when the dashboard first shows: the parameter-less
    /// cards always, the others only if their input was given up front.
    pub fn mount(&mut self, dispatcher: &Dispatcher) -> Vec<Event> {
        self.mount_endpoints
            .clone()
            .into_iter()
            .map(|endpoint| self.request(endpoint, dispatcher))
            .collect()
    }

    /// Issue a request for one card with its current input.
    pub fn request(&mut self, endpoint: Endpoint, dispatcher: &Dispatcher) -> Event {
        let msg = match endpoint {
            Endpoint::Weather => {
                self.weather.request(dispatcher);
                format!("Requesting weather for '{}'", self.weather.city)
            }
            Endpoint::Solar => {
                self.solar.request(dispatcher);
                format!("Requesting solar data for '{}'", self.solar.body_name)
            }
            Endpoint::Iss => {
                self.iss.request(dispatcher);
                "Requesting current ISS position".to_string()
            }
            Endpoint::Astro => {
                self.astro.request(dispatcher);
                "Requesting people in space".to_string()
            }
            Endpoint::Apod => {
                self.apod.request(dispatcher);
                format!("Requesting picture of the day for {}", self.apod.date)
            }
        };
        Event::request(endpoint, msg)
    }

    /// Apply a request outcome to its card.
    pub fn apply(&mut self, update: WidgetUpdate) -> Event {
        let endpoint = update.endpoint();
        let (applied, outcome) = match update {
            WidgetUpdate::Weather(ticket, outcome) => {
                let summary = summarize(&outcome, weather_summary);
                (self.weather.resolve(ticket, outcome), summary)
            }
            WidgetUpdate::Solar(ticket, outcome) => {
                let summary = summarize(&outcome, solar_summary);
                (self.solar.resolve(ticket, outcome), summary)
            }
            WidgetUpdate::Iss(ticket, outcome) => {
                let summary = summarize(&outcome, iss_summary);
                (self.iss.resolve(ticket, outcome), summary)
            }
            WidgetUpdate::Astro(ticket, outcome) => {
                let summary = summarize(&outcome, astro_summary);
                (self.astro.resolve(ticket, outcome), summary)
            }
            WidgetUpdate::Apod(ticket, outcome) => {
                let summary = summarize(&outcome, apod_summary);
                (self.apod.resolve(ticket, outcome), summary)
            }
        };

        if !applied {
            return Event::stale(endpoint);
        }
        match outcome {
            Ok(msg) => Event::success(endpoint, msg),
            Err(error) => {
                let level = self.classifier.classify_fetch_error(&error);
                Event::error_with_level(endpoint, error.to_string(), level)
            }
        }
    }

    /// The editable input of a card, if it takes one.
    pub fn input(&self, endpoint: Endpoint) -> Option<&str> {
        match endpoint {
            Endpoint::Weather => Some(&self.weather.city),
            Endpoint::Solar => Some(&self.solar.body_name),
            Endpoint::Apod => Some(&self.apod.date),
            Endpoint::Iss | Endpoint::Astro => None,
        }
    }

    pub fn input_mut(&mut self, endpoint: Endpoint) -> Option<&mut String> {
        match endpoint {
            Endpoint::Weather => Some(&mut self.weather.city),
            Endpoint::Solar => Some(&mut self.solar.body_name),
            Endpoint::Apod => Some(&mut self.apod.date),
            Endpoint::Iss | Endpoint::Astro => None,
        }
    }

    pub fn is_loading(&self, endpoint: Endpoint) -> bool {
        match endpoint {
            Endpoint::Weather => self.weather.state().is_loading(),
            Endpoint::Solar => self.solar.state().is_loading(),
            Endpoint::Iss => self.iss.state().is_loading(),
            Endpoint::Astro => self.astro.state().is_loading(),
            Endpoint::Apod => self.apod.state().is_loading(),
        }
    }

    pub fn any_loading(&self) -> bool {
        Endpoint::iter().any(|endpoint| self.is_loading(endpoint))
    }

    /// Cards requested on mount, in request order.
    pub fn mounted(&self) -> &[Endpoint] {
        &self.mount_endpoints
    }

    /// State label of a card and its failure reason, if it failed.
    pub fn status(&self, endpoint: Endpoint) -> (&'static str, Option<&str>) {
        match endpoint {
            Endpoint::Weather => status_of(self.weather.state()),
            Endpoint::Solar => status_of(self.solar.state()),
            Endpoint::Iss => status_of(self.iss.state()),
            Endpoint::Astro => status_of(self.astro.state()),
            Endpoint::Apod => status_of(self.apod.state()),
        }
    }
}

fn status_of<T>(state: &WidgetState<T>) -> (&'static str, Option<&str>) {
    (state.label(), state.error())
}

fn summarize<T>(outcome: &Result<T, FetchError>, f: fn(&T) -> String) -> Result<String, FetchError> {
    match outcome {
        Ok(data) => Ok(f(data)),
        Err(error) => Err(error.clone()),
    }
}

fn weather_summary(weather: &WeatherData) -> String {
    format!(
        "{}: {:.1}°C, humidity {}%, wind {} m/s, rain {} mm",
        weather.city, weather.temperature, weather.humidity, weather.wind, weather.rain
    )
}

fn solar_summary(info: &SolarInfo) -> String {
    let kind = if info.is_planet { "planet" } else { "not a planet" };
    format!("{} ({}), gravity {} m/s²", info.english_name, kind, info.gravity)
}

fn iss_summary(location: &IssLocation) -> String {
    format!("lat {:.4}, lon {:.4}", location.latitude, location.longitude)
}

fn astro_summary(info: &AstroInfo) -> String {
    format!("{} people currently in space", info.number)
}

fn apod_summary(apod: &ApodData) -> String {
    apod.title().unwrap_or("Untitled").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::events::EventType;
    use std::sync::Arc;

    fn dispatcher_with(api: MockDashboardApi) -> (Dispatcher, tokio::sync::mpsc::Receiver<WidgetUpdate>) {
        Dispatcher::channel(Arc::new(api))
    }

    #[tokio::test]
    async fn test_mount_requests_parameterless_cards_only() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_iss().times(1).returning(|| {
            Ok(IssLocation {
                latitude: 1.0,
                longitude: 1.0,
            })
        });
        api.expect_fetch_astro()
            .times(1)
            .returning(|| Ok(AstroInfo::from_people(Vec::new())));
        let (dispatcher, mut receiver) = dispatcher_with(api);

        let mut widgets = Widgets::new(WidgetInputs::default());
        let events = widgets.mount(&dispatcher);
        assert_eq!(events.len(), 2);
        assert!(widgets.iss.state().is_loading());
        assert!(widgets.astro.state().is_loading());
        assert_eq!(widgets.weather.state(), &WidgetState::Idle);
        assert_eq!(widgets.apod.date, today());

        for _ in 0..2 {
            let update = receiver.recv().await.unwrap();
            let event = widgets.apply(update);
            assert_eq!(event.event_type, EventType::Success);
        }
        assert!(!widgets.any_loading());
        assert_eq!(widgets.astro.state().data().map(|a| a.number), Some(0));
        assert_eq!(widgets.mounted(), &[Endpoint::Iss, Endpoint::Astro]);
        assert_eq!(widgets.status(Endpoint::Iss), ("Success", None));
        assert_eq!(widgets.status(Endpoint::Weather), ("Idle", None));
    }

    #[tokio::test]
    async fn test_failure_event_carries_reason() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_weather()
            .returning(|_| Err(FetchError::NotFound { endpoint: Endpoint::Weather }));
        let (dispatcher, mut receiver) = dispatcher_with(api);

        let mut widgets = Widgets::new(WidgetInputs {
            city: Some("Atlantis".to_string()),
            ..WidgetInputs::default()
        });
        widgets.request(Endpoint::Weather, &dispatcher);

        let event = widgets.apply(receiver.recv().await.unwrap());
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.msg, "City not found");
        assert_eq!(widgets.weather.state().error(), Some("City not found"));
        assert_eq!(
            widgets.status(Endpoint::Weather),
            ("Failure", Some("City not found"))
        );
    }

    #[tokio::test]
    async fn test_superseded_response_is_reported_stale() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_iss().returning(|| Err(FetchError::Unknown));
        let (dispatcher, _receiver) = dispatcher_with(api);

        let mut widgets = Widgets::default();
        let stale = widgets.iss.request(&dispatcher);
        widgets.iss.request(&dispatcher);

        let event = widgets.apply(WidgetUpdate::Iss(
            stale,
            Ok(IssLocation {
                latitude: 0.0,
                longitude: 0.0,
            }),
        ));
        assert_eq!(event.event_type, EventType::Stale);
        assert!(widgets.iss.state().is_loading());
    }
}
