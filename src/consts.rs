pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying store events to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // CONFIGURATION SOURCES
    // =============================================================================

    /// Environment variable overriding the API base URL.
    pub const API_URL_ENV: &str = "FOOD_API_URL";

    /// Environment variable selecting a named backend environment.
    pub const ENVIRONMENT_ENV: &str = "FOOD_ENVIRONMENT";

    /// Directory under the user's home holding the config file.
    pub const CONFIG_DIR: &str = ".food-dashboard";

    /// Config file name.
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts
    pub mod http {
        use std::time::Duration;

        /// Maximum time to establish a connection to the backend.
        pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

        /// Maximum time for a whole request/response round trip.
        pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed.
        pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

        /// Key event poll interval; also bounds the redraw rate.
        pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
    }
}
