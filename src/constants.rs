//! Application-wide constants and configuration values
//!
//! Default endpoints, thresholds and retry tuning live here so that the
//! config layer and the fetch code agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default base URL of the NHL stats REST API (skater summaries, game logs)
pub const DEFAULT_STATS_API_DOMAIN: &str = "https://api.nhle.com/stats/rest/en";

/// Default base URL of the NHL schedule API (seasons, schedules)
pub const DEFAULT_SCHEDULE_API_DOMAIN: &str = "https://statsapi.web.nhl.com/api/v1";

/// Minimum previous-season goals for a player to be tracked
pub const DEFAULT_MIN_GOALS: u32 = 40;

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "nhl_due";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nhl_due.log";

/// Regular season game type in the stats API's cayenne expressions
pub const REGULAR_SEASON_GAME_TYPE: u8 = 2;

/// Environment variable names
pub mod env_vars {
    /// Override for the stats API base URL
    pub const STATS_API: &str = "NHL_DUE_STATS_API";

    /// Override for the schedule API base URL
    pub const SCHEDULE_API: &str = "NHL_DUE_SCHEDULE_API";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NHL_DUE_HTTP_TIMEOUT";

    /// Override for the previous-season goal threshold
    pub const MIN_GOALS: &str = "NHL_DUE_MIN_GOALS";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NHL_DUE_LOG_FILE";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of attempts per request, the first one included
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 1000;

    /// Maximum delay between retries (seconds)
    pub const MAX_DELAY_SECONDS: u64 = 30;
}

/// Report output strings
pub mod messages {
    /// Printed when nobody in the tracked set is past due
    pub const NO_PAST_DUE_PLAYERS: &str =
        "No players are past due based on last season's scoring rate.";

    /// Header line above the past-due table
    pub const PAST_DUE_HEADER: &str = "Past due goal scorers with games today:";
}
