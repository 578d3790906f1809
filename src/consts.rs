pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying widget updates back to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod network {
        use std::time::Duration;

        /// Base URL used when nothing else is configured.
        pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

        /// Connect timeout for API requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Total request timeout for API requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard mounts.
        pub const SPLASH_DURATION_MS: u64 = 1500;

        /// Poll interval for terminal key events.
        pub const KEY_POLL_INTERVAL_MS: u64 = 100;

        /// Maximum length of a card's text input.
        pub const MAX_INPUT_LEN: usize = 64;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn key_poll_interval() -> Duration {
            Duration::from_millis(KEY_POLL_INTERVAL_MS)
        }
    }
}
