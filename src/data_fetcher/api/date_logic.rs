//! Report date determination and API date parsing

use crate::error::AppError;
use chrono::{DateTime, Local, NaiveDate};
use tracing::info;

/// Determines the date the report is for.
///
/// A custom `YYYY-MM-DD` date wins; otherwise today's local calendar date is used,
/// so late-evening runs are not shifted to the next UTC day.
pub fn determine_report_date(custom_date: Option<&str>) -> Result<NaiveDate, AppError> {
    determine_report_date_with_time(custom_date, Local::now())
}

/// Internal helper for determining the report date with injected time.
/// This allows for deterministic testing by accepting a specific time instead of using the current time.
pub fn determine_report_date_with_time(
    custom_date: Option<&str>,
    now_local: DateTime<Local>,
) -> Result<NaiveDate, AppError> {
    match custom_date {
        Some(date) => {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "Invalid date '{date}', expected YYYY-MM-DD: {e}"
                ))
            })?;
            info!("Using custom report date: {parsed}");
            Ok(parsed)
        }
        None => {
            let today = now_local.date_naive();
            info!("Using today's date: {today}");
            Ok(today)
        }
    }
}

/// Parses a date as the NHL APIs send it.
///
/// Accepts plain `YYYY-MM-DD` as well as longer values that start with one,
/// such as `2024-10-12T00:00:00`.
pub fn parse_api_date(raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Unrecognized API date '{raw}': {e}"))
    })
}
