//! Session setup and initialization

use crate::api::ApiClient;
use crate::environment::Environment;
use crate::transport::{HttpTransport, TransportConfig};
use crate::widgets::{Dispatcher, WidgetInputs, WidgetUpdate, Widgets};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Spawns requests for the cards
    pub dispatcher: Dispatcher,
    /// Receives request outcomes
    pub update_receiver: mpsc::Receiver<WidgetUpdate>,
    /// The dashboard cards, not yet mounted
    pub widgets: Widgets,
    /// Shutdown sender to stop the session
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment the base URL was resolved against
    pub environment: Environment,
    /// Base URL requests are sent to
    pub api_url: String,
}

/// Builds the HTTP stack and the cards shared by both modes.
///
/// # Arguments
/// * `transport_config` - Resolved transport settings
/// * `environment` - Environment preset in effect
/// * `inputs` - Initial card inputs from the command line
pub fn setup_session(
    transport_config: &TransportConfig,
    environment: Environment,
    inputs: WidgetInputs,
) -> Result<SessionData, Box<dyn Error>> {
    let transport = HttpTransport::new(transport_config)?;
    let api_url = transport.base_url().to_string();
    let client = ApiClient::new(Arc::new(transport));
    let (dispatcher, update_receiver) = Dispatcher::channel(Arc::new(client));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        dispatcher,
        update_receiver,
        widgets: Widgets::new(inputs),
        shutdown_sender,
        environment,
        api_url,
    })
}
