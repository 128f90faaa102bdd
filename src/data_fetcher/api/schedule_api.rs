//! Day and team schedules from the schedule endpoint

use crate::config::Config;
use crate::data_fetcher::models::ScheduleResponse;
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::date_logic::parse_api_date;
use super::fetch_utils::fetch;
use super::urls::{build_day_schedule_url, build_team_schedule_url};

/// Fetches every game scheduled on the given date.
#[instrument(skip(client, config))]
pub async fn fetch_schedule_for_day(
    client: &Client,
    config: &Config,
    date: NaiveDate,
) -> Result<ScheduleResponse, AppError> {
    let url = build_day_schedule_url(&config.schedule_api_domain, date);
    let schedule: ScheduleResponse = fetch(client, &url, &config.retry_policy()).await?;
    info!("{} teams play on {date}", schedule.teams_playing().len());
    Ok(schedule)
}

/// Fetches the dates a team is scheduled to play between `start` and `end`.
///
/// A start after the end (report date before the regular season) yields no
/// dates without a request.
#[instrument(skip(client, config))]
pub async fn fetch_team_schedule_dates(
    client: &Client,
    config: &Config,
    team_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NaiveDate>, AppError> {
    if start > end {
        debug!("Schedule window {start}..{end} is empty for team {team_id}");
        return Ok(Vec::new());
    }

    let url = build_team_schedule_url(&config.schedule_api_domain, team_id, start, end);
    let schedule: ScheduleResponse = fetch(client, &url, &config.retry_policy()).await?;

    schedule
        .date_strings()
        .into_iter()
        .map(parse_api_date)
        .collect()
}
