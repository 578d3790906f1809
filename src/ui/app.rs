//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{key_poll_interval, splash_duration};
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::ui::splash::render_splash;
use crate::widgets::{Dispatcher, WidgetUpdate, Widgets};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub environment: Environment,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, environment: Environment, api_url: String) -> Self {
        Self {
            with_background_color,
            environment,
            api_url,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the cards and activity log.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Cards waiting for the dashboard to be shown.
    pending_widgets: Option<Widgets>,

    /// Spawns requests on behalf of the cards.
    dispatcher: Dispatcher,

    /// Receives request outcomes.
    update_receiver: mpsc::Receiver<WidgetUpdate>,

    /// Broadcasts the shutdown signal.
    shutdown_sender: broadcast::Sender<()>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        widgets: Widgets,
        dispatcher: Dispatcher,
        update_receiver: mpsc::Receiver<WidgetUpdate>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            pending_widgets: Some(widgets),
            dispatcher,
            update_receiver,
            shutdown_sender,
            ui_config,
        }
    }

    /// Leaves the splash screen and mounts the cards.
    fn show_dashboard(&mut self) {
        let widgets = self.pending_widgets.take().unwrap_or_default();
        let mut state = DashboardState::new(widgets, self.start_time, self.ui_config.clone());
        state.mount(&self.dispatcher);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    // UI event loop
    loop {
        // Shutdown requested from outside the UI (Ctrl+C)
        if shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(update) = app.update_receiver.try_recv() {
                state.apply(update);
            }
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration() {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(key_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    if state.handle_key(key.code, &app.dispatcher) == KeyAction::Quit {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }
                // Any other key skips the splash screen
                app.show_dashboard();
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
