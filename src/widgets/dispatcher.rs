//! Request dispatching
//!
//! Runs endpoint calls on the tokio runtime and sends each outcome back to the
//! UI loop as a [`WidgetUpdate`].

use super::controller::Ticket;
use crate::api::error::FetchError;
use crate::api::types::{ApodData, AstroInfo, IssLocation, SolarInfo, WeatherData};
use crate::api::{DashboardApi, Endpoint};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Outcome of one request, tagged with the ticket it was issued under.
#[derive(Debug, Clone)]
pub enum WidgetUpdate {
    Weather(Ticket, Result<WeatherData, FetchError>),
    Solar(Ticket, Result<SolarInfo, FetchError>),
    Iss(Ticket, Result<IssLocation, FetchError>),
    Astro(Ticket, Result<AstroInfo, FetchError>),
    Apod(Ticket, Result<ApodData, FetchError>),
}

impl WidgetUpdate {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            WidgetUpdate::Weather(..) => Endpoint::Weather,
            WidgetUpdate::Solar(..) => Endpoint::Solar,
            WidgetUpdate::Iss(..) => Endpoint::Iss,
            WidgetUpdate::Astro(..) => Endpoint::Astro,
            WidgetUpdate::Apod(..) => Endpoint::Apod,
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn DashboardApi>,
    sender: mpsc::Sender<WidgetUpdate>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn DashboardApi>, sender: mpsc::Sender<WidgetUpdate>) -> Self {
        Self { api, sender }
    }

    /// Create a dispatcher along with the receiving end of its update channel.
    pub fn channel(api: Arc<dyn DashboardApi>) -> (Self, mpsc::Receiver<WidgetUpdate>) {
        let (sender, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        (Self::new(api, sender), receiver)
    }

    pub fn fetch_weather(&self, ticket: Ticket, city: String) -> JoinHandle<()> {
        let api = self.api.clone();
        self.spawn(async move { WidgetUpdate::Weather(ticket, api.fetch_weather(&city).await) })
    }

    pub fn fetch_solar(&self, ticket: Ticket, body_name: String) -> JoinHandle<()> {
        let api = self.api.clone();
        self.spawn(async move { WidgetUpdate::Solar(ticket, api.fetch_solar(&body_name).await) })
    }

    pub fn fetch_iss(&self, ticket: Ticket) -> JoinHandle<()> {
        let api = self.api.clone();
        self.spawn(async move { WidgetUpdate::Iss(ticket, api.fetch_iss().await) })
    }

    pub fn fetch_astro(&self, ticket: Ticket) -> JoinHandle<()> {
        let api = self.api.clone();
        self.spawn(async move { WidgetUpdate::Astro(ticket, api.fetch_astro().await) })
    }

    pub fn fetch_apod(&self, ticket: Ticket, date: String) -> JoinHandle<()> {
        let api = self.api.clone();
        self.spawn(async move { WidgetUpdate::Apod(ticket, api.fetch_apod(&date).await) })
    }

    fn spawn<F>(&self, request: F) -> JoinHandle<()>
    where
        F: Future<Output = WidgetUpdate> + Send + 'static,
    {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let update = request.await;
            // The receiver is gone only once the UI has shut down.
            let _ = sender.send(update).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::widgets::controller::WidgetController;

    #[tokio::test]
    async fn test_outcome_is_delivered_with_its_ticket() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_iss().times(1).returning(|| {
            Ok(IssLocation {
                latitude: 1.0,
                longitude: 2.0,
            })
        });
        let (dispatcher, mut receiver) = Dispatcher::channel(Arc::new(api));

        let mut controller: WidgetController<IssLocation> = WidgetController::new();
        let ticket = controller.begin();
        dispatcher.fetch_iss(ticket).await.unwrap();

        match receiver.recv().await {
            Some(WidgetUpdate::Iss(received, Ok(location))) => {
                assert_eq!(received, ticket);
                assert_eq!(location.longitude, 2.0);
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_is_delivered_as_update() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_solar()
            .withf(|name| name == "Pluto2")
            .returning(|_| Err(FetchError::NotFound { endpoint: Endpoint::Solar }));
        let (dispatcher, mut receiver) = Dispatcher::channel(Arc::new(api));

        let mut controller: WidgetController<SolarInfo> = WidgetController::new();
        let ticket = controller.begin();
        dispatcher
            .fetch_solar(ticket, "Pluto2".to_string())
            .await
            .unwrap();

        let update = receiver.recv().await.unwrap();
        assert_eq!(update.endpoint(), Endpoint::Solar);
        let WidgetUpdate::Solar(ticket, outcome) = update else {
            panic!("expected a solar update");
        };
        controller.resolve(ticket, outcome);
        assert_eq!(controller.state().error(), Some("Solar body not found"));
    }
}
