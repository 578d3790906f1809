use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".astro-dash").join("config.json")
}

const BINARY_NAME: &str = "astro-dash";

/// Command isolated from the caller's home directory and environment.
fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("ASTRO_DASH_API_URL")
        .env_remove("ASTRO_DASH_ENVIRONMENT");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home_dir();
    command(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("start"))
        .stdout(contains("config"));
}

#[test]
/// Help is printed before the home directory is looked up.
fn cli_help_works_without_home() {
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .env_remove("HOME")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"));
}

#[test]
/// Setting the API URL should write it to the config file.
fn config_set_api_url_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    command(&tmp)
        .args(["config", "set-api-url", "https://dash.example.com/api"])
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("https://dash.example.com/api"));

    command(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("https://dash.example.com/api"));
}

#[test]
/// A URL without an http(s) scheme should be rejected.
fn config_set_api_url_rejects_invalid_url() {
    let tmp = temp_home_dir();

    command(&tmp)
        .args(["config", "set-api-url", "ftp://dash.example.com"])
        .assert()
        .failure();

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// The --api-url flag should take precedence over the config file.
fn config_show_prefers_flag_over_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"api_url": "http://file.example/api"}"#).unwrap();

    command(&tmp)
        .args(["config", "show", "--api-url", "http://flag.example/api"])
        .assert()
        .success()
        .stdout(contains("http://flag.example/api"));
}

#[test]
/// Clearing the config should delete an existing config file.
fn config_clear_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    command(&tmp)
        .args(["config", "clear"])
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
/// A one-shot solar lookup should print the entity as JSON.
async fn solar_command_prints_entity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/solar/Earth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solarData": {
                "englishName": "Earth",
                "isPlanet": true,
                "gravity": 9.8,
                "meanRadius": 6371.0,
                "avgTemp": 288.0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    command(&tmp)
        .args(["solar", "Earth", "--api-url"])
        .arg(format!("{}/api", server.uri()))
        .assert()
        .success()
        .stdout(contains("\"englishName\": \"Earth\""));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
/// A 404 from the backend should print the reason and exit non-zero.
async fn weather_command_reports_unknown_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    command(&tmp)
        .args(["weather", "Atlantis"])
        .env("ASTRO_DASH_API_URL", format!("{}/api", server.uri()))
        .assert()
        .code(1)
        .stderr(contains("City not found"))
        .stdout(contains("City not found").not());
}
