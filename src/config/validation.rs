use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domains cannot be empty and must look like a URL or domain name
/// - HTTP timeout and attempt count must be positive
/// - Goal threshold must be at least one
/// - If log file path is provided, it cannot be empty or name a directory
///
/// Validation never touches the filesystem beyond reading it.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_domain("stats_api_domain", &config.stats_api_domain)?;
    validate_domain("schedule_api_domain", &config.schedule_api_domain)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if config.max_attempts == 0 {
        return Err(AppError::config_error("max_attempts must be at least 1"));
    }

    if config.min_goals == 0 {
        return Err(AppError::config_error("min_goals must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if Path::new(log_path).is_dir() {
            return Err(AppError::config_error(format!(
                "Log file path '{log_path}' is a directory"
            )));
        }
    }

    Ok(())
}

fn validate_domain(field: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https:// (got '{domain}')"
        )));
    }

    Ok(())
}
