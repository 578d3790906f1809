//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from key presses and
//! request outcomes

use super::state::{DashboardState, KeyAction};
use crate::api::Endpoint;
use crate::consts::cli_consts::ui::MAX_INPUT_LEN;
use crate::widgets::{Dispatcher, WidgetUpdate};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;

impl DashboardState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Issue the requests made when the dashboard first appears.
    pub fn mount(&mut self, dispatcher: &Dispatcher) {
        for event in self.widgets.mount(dispatcher) {
            self.add_to_activity_log(event);
        }
    }

    /// Apply a request outcome and log it.
    pub fn apply(&mut self, update: WidgetUpdate) {
        let event = self.widgets.apply(update);
        self.add_to_activity_log(event);
    }

    /// Issue a request for one card with its input exactly as typed.
    pub fn submit(&mut self, endpoint: Endpoint, dispatcher: &Dispatcher) {
        let event = self.widgets.request(endpoint, dispatcher);
        self.add_to_activity_log(event);
    }

    /// Refresh the cards that take no input.
    pub fn refresh(&mut self, dispatcher: &Dispatcher) {
        self.submit(Endpoint::Iss, dispatcher);
        self.submit(Endpoint::Astro, dispatcher);
    }

    pub fn focus_next(&mut self) {
        let endpoints: Vec<Endpoint> = Endpoint::iter().collect();
        let index = endpoints.iter().position(|e| *e == self.focus).unwrap_or(0);
        self.focus = endpoints[(index + 1) % endpoints.len()];
    }

    pub fn focus_previous(&mut self) {
        let endpoints: Vec<Endpoint> = Endpoint::iter().collect();
        let index = endpoints.iter().position(|e| *e == self.focus).unwrap_or(0);
        self.focus = endpoints[(index + endpoints.len() - 1) % endpoints.len()];
    }

    /// Handle one key press on the dashboard.
    ///
    /// Characters go to the focused card's input when it has one; otherwise
    /// `r` refreshes and `q` quits.
    pub fn handle_key(&mut self, code: KeyCode, dispatcher: &Dispatcher) -> KeyAction {
        match code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Enter => self.submit(self.focus, dispatcher),
            KeyCode::Backspace => {
                if let Some(input) = self.widgets.input_mut(self.focus) {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                let focus = self.focus;
                match self.widgets.input_mut(focus) {
                    Some(input) => {
                        if input.chars().count() < MAX_INPUT_LEN {
                            input.push(c);
                        }
                    }
                    None => match c {
                        'q' => return KeyAction::Quit,
                        'r' => self.refresh(dispatcher),
                        _ => {}
                    },
                }
            }
            _ => {}
        }
        KeyAction::Continue
    }
}
