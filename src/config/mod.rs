use crate::constants::{self, env_vars};
use crate::data_fetcher::api::RetryPolicy;
use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_log_file_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Every field has a default, so a run needs no config file at all. Values are
/// layered: defaults, then the optional TOML file, then environment variables,
/// then command line flags (applied by the caller).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the stats REST API (skater summaries and game logs).
    pub stats_api_domain: String,
    /// Base URL of the schedule API (seasons and schedules).
    pub schedule_api_domain: String,
    /// Path to the log file. If not specified, logs go to the default location.
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Minimum previous-season goals for a player to be tracked.
    pub min_goals: u32,
    /// Attempts per request before giving up, the first one included.
    pub max_attempts: u32,
    /// Base delay of the exponential retry backoff in milliseconds.
    pub retry_base_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_api_domain: constants::DEFAULT_STATS_API_DOMAIN.to_string(),
            schedule_api_domain: constants::DEFAULT_SCHEDULE_API_DOMAIN.to_string(),
            log_file_path: None,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            min_goals: constants::DEFAULT_MIN_GOALS,
            max_attempts: constants::retry::MAX_ATTEMPTS,
            retry_base_delay_ms: constants::retry::BASE_DELAY_MS,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, if present.
    /// A missing file is not an error and nothing is written to disk.
    ///
    /// # Environment Variables
    /// - `NHL_DUE_STATS_API` - Override stats API base URL
    /// - `NHL_DUE_SCHEDULE_API` - Override schedule API base URL
    /// - `NHL_DUE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `NHL_DUE_MIN_GOALS` - Override the previous-season goal threshold
    /// - `NHL_DUE_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(domain) = std::env::var(env_vars::STATS_API) {
            self.stats_api_domain = domain;
        }

        if let Ok(domain) = std::env::var(env_vars::SCHEDULE_API) {
            self.schedule_api_domain = domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = timeout.parse().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a whole number of seconds (got '{timeout}')",
                    env_vars::HTTP_TIMEOUT
                ))
            })?;
        }

        if let Ok(min_goals) = std::env::var(env_vars::MIN_GOALS) {
            self.min_goals = min_goals.parse().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a whole number (got '{min_goals}')",
                    env_vars::MIN_GOALS
                ))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Strips trailing slashes so URL builders can join paths with `/`.
    fn normalize(&mut self) {
        self.stats_api_domain = self.stats_api_domain.trim_end_matches('/').to_string();
        self.schedule_api_domain = self.schedule_api_domain.trim_end_matches('/').to_string();
    }

    /// Retry policy for the HTTP fetch loop.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let file_note = if Path::new(&config_path).exists() {
            ""
        } else {
            " (not present, using defaults)"
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}{file_note}");
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", self.stats_api_domain);
        println!("Schedule API:");
        println!("{}", self.schedule_api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("Retries:");
        println!(
            "{} attempts, {} ms base backoff",
            self.max_attempts, self.retry_base_delay_ms
        );
        println!("────────────────────────────────────");
        println!("Goal Threshold:");
        println!("{} goals last season", self.min_goals);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}", get_default_log_file_path());
            println!("(Default location)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe {
            for name in [
                env_vars::STATS_API,
                env_vars::SCHEDULE_API,
                env_vars::HTTP_TIMEOUT,
                env_vars::MIN_GOALS,
                env_vars::LOG_FILE,
            ] {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stats_api_domain, "https://api.nhle.com/stats/rest/en");
        assert_eq!(config.schedule_api_domain, "https://statsapi.web.nhl.com/api/v1");
        assert_eq!(config.min_goals, 40);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
stats_api_domain = "https://stats.example.com/"
min_goals = 35
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.stats_api_domain, "https://stats.example.com");
        assert_eq!(config.min_goals, 35);
        assert_eq!(
            config.schedule_api_domain,
            constants::DEFAULT_SCHEDULE_API_DOMAIN
        );
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "min_goals = [1, 2, \"unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_load_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let result = Config::load_from_path(&missing.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: serialized with the other environment tests
        unsafe {
            std::env::set_var(env_vars::STATS_API, "http://127.0.0.1:9000");
            std::env::set_var(env_vars::MIN_GOALS, "45");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let mut config = Config::default();
        config.apply_env_overrides().unwrap();
        clear_env();

        assert_eq!(config.stats_api_domain, "http://127.0.0.1:9000");
        assert_eq!(config.min_goals, 45);
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(
            config.schedule_api_domain,
            constants::DEFAULT_SCHEDULE_API_DOMAIN
        );
    }

    #[test]
    #[serial]
    fn test_env_override_rejects_non_numeric_threshold() {
        clear_env();
        // SAFETY: serialized with the other environment tests
        unsafe {
            std::env::set_var(env_vars::MIN_GOALS, "forty");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = Config {
            max_attempts: 5,
            retry_base_delay_ms: 10,
            ..Config::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(10));
    }
}
