//! Generic widget controller
//!
//! Drives a [`WidgetState`] from the outcome of endpoint calls. Every request
//! is issued under a [`Ticket`]; only the ticket of the most recent request
//! may resolve the state, so a slow stale response never overwrites a newer
//! one.

use super::state::WidgetState;
use crate::api::error::FetchError;
use std::future::Future;

/// Generation a request was issued under.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct WidgetController<T> {
    state: WidgetState<T>,
    generation: u64,
}

impl<T> Default for WidgetController<T> {
    fn default() -> Self {
        Self {
            state: WidgetState::Idle,
            generation: 0,
        }
    }
}

impl<T> WidgetController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WidgetState<T> {
        &self.state
    }

    /// Move to `Loading` and hand out the ticket for the new request.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = WidgetState::Loading;
        Ticket(self.generation)
    }

    /// Apply a request's outcome. Returns `false` if the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(data) => WidgetState::Success(data),
            Err(error) => WidgetState::Failure(error.to_string()),
        };
        true
    }

    /// Run a request to completion inline.
    pub async fn load<F>(&mut self, request: F) -> &WidgetState<T>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();
        let outcome = request.await;
        self.resolve(ticket, outcome);
        &self.state
    }
}
