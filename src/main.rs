mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod transport;
mod ui;
mod widgets;

use crate::api::error::FetchError;
use crate::api::ApiClient;
use crate::config::{API_URL_ENV, Config, ENVIRONMENT_ENV, get_config_path, get_log_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::transport::{HttpTransport, TransportConfig};
use crate::widgets::{
    ApodCard, AstroCard, IssCard, SolarCard, WeatherCard, WidgetInputs, WidgetState, today,
};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the dashboard API, e.g. http://localhost:3000/api
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// City to look up the weather for on startup
        #[arg(long, value_name = "CITY")]
        city: Option<String>,

        /// Planet or moon to look up on startup
        #[arg(long, value_name = "BODY")]
        body: Option<String>,

        /// Date of the picture of the day to load on startup
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Print activity to the console instead of running the terminal UI
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors
        #[arg(long, action = ArgAction::SetTrue)]
        with_background: bool,
    },
    #[command(flatten)]
    Fetch(FetchCommand),
    /// Manage the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// One-shot requests that print their result as JSON.
#[derive(Subcommand)]
enum FetchCommand {
    /// Current weather for a city
    Weather {
        #[arg(value_name = "CITY")]
        city: String,
    },
    /// Facts about a planet or moon
    Solar {
        #[arg(value_name = "BODY")]
        body: String,
    },
    /// Current position of the ISS
    Iss,
    /// People currently in space
    Astro,
    /// Astronomy picture of the day
    Apod {
        /// Defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Store the API base URL in the config file
    SetApiUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Show the config file location and the settings in effect
    Show,
    /// Delete the config file
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    // The dashboard owns the terminal, so its records go to a file
    match &args.command {
        Command::Start {
            headless: false, ..
        } => logging::init_file(&get_log_path(&config_path))?,
        _ => logging::init_stderr()?,
    }

    let environment = std::env::var(ENVIRONMENT_ENV)
        .unwrap_or_default()
        .parse::<Environment>()
        .unwrap_or_default();
    let config = Config::load_or_default(&config_path);
    let env_url = std::env::var(API_URL_ENV).ok();
    let transport_config =
        config.transport_config(args.api_url.as_deref(), env_url.as_deref(), &environment);

    match args.command {
        Command::Start {
            city,
            body,
            date,
            headless,
            with_background,
        } => {
            let inputs = WidgetInputs {
                city,
                body_name: body,
                date,
            };
            let session = setup_session(&transport_config, environment, inputs)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background, &get_log_path(&config_path)).await
            }
        }
        Command::Fetch(command) => fetch_once(&transport_config, command).await,
        Command::Config { action } => match action {
            ConfigCommand::SetApiUrl { url } => {
                let Ok(target) = url.parse::<Environment>() else {
                    let err_msg = format!(
                        "Invalid API URL: {}. It should start with http:// or https://",
                        url
                    );
                    return Err(Box::from(err_msg));
                };
                let updated = config.with_api_url(target.api_url());
                updated
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                print_cmd_success!("API URL saved", "{}", target.api_url());
                Ok(())
            }
            ConfigCommand::Show => {
                print_cmd_info!("Config file", "{}", config_path.display());
                print_cmd_info!("Environment", "{:?}", environment);
                print_cmd_info!("API URL", "{}", transport_config.base_url);
                print_cmd_info!("Request timeout", "{}s", transport_config.timeout.as_secs());
                Ok(())
            }
            ConfigCommand::Clear => {
                Config::clear(&config_path)?;
                print_cmd_success!("Configuration cleared", "{}", config_path.display());
                Ok(())
            }
        },
    }
}

/// Runs a single request through its card and prints the entity as pretty JSON.
///
/// On failure the reason is printed and the process exits with status 1.
async fn fetch_once(
    transport_config: &TransportConfig,
    command: FetchCommand,
) -> Result<(), Box<dyn Error>> {
    let api = ApiClient::new(Arc::new(HttpTransport::new(transport_config)?));

    let outcome = match command {
        FetchCommand::Weather { city } => to_json(WeatherCard::new(city).search(&api).await),
        FetchCommand::Solar { body } => to_json(SolarCard::new(body).search(&api).await),
        FetchCommand::Iss => to_json(IssCard::default().load(&api).await),
        FetchCommand::Astro => to_json(AstroCard::default().load(&api).await),
        FetchCommand::Apod { date } => {
            let mut card = ApodCard::new(date.unwrap_or_else(today));
            to_json(card.search(&api).await)
        }
    };

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(reason) => {
            print_cmd_error!(&reason);
            std::process::exit(1);
        }
    }
}

fn to_json<T: Serialize>(state: &WidgetState<T>) -> Result<serde_json::Value, String> {
    if let Some(entity) = state.data() {
        return serde_json::to_value(entity).map_err(|e| e.to_string());
    }
    Err(state
        .error()
        .map(str::to_string)
        .unwrap_or_else(|| FetchError::Unknown.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::IssLocation;

    #[test]
    fn test_to_json_uses_entity_or_reason() {
        let success = WidgetState::Success(IssLocation {
            latitude: 1.5,
            longitude: -2.0,
        });
        let value = to_json(&success).unwrap();
        assert_eq!(value["latitude"], 1.5);

        let failure: WidgetState<IssLocation> = WidgetState::Failure("Network error".to_string());
        assert_eq!(to_json(&failure).unwrap_err(), "Network error");

        let idle: WidgetState<IssLocation> = WidgetState::Idle;
        assert_eq!(to_json(&idle).unwrap_err(), "An unknown error occurred");
    }
}
