//! Season resolution against the seasons endpoint

use crate::config::Config;
use crate::data_fetcher::models::{Season, SeasonId, SeasonRecord, SeasonsResponse};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::date_logic::parse_api_date;
use super::fetch_utils::fetch;
use super::urls::{build_current_season_url, build_season_url};

fn first_season(response: SeasonsResponse, url: &str) -> Result<SeasonRecord, AppError> {
    response
        .seasons
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data("Seasons list is empty", url))
}

/// Fetches the current season's id from the seasons endpoint.
#[instrument(skip(client, config))]
pub async fn fetch_current_season_id(client: &Client, config: &Config) -> Result<SeasonId, AppError> {
    let url = build_current_season_url(&config.schedule_api_domain);
    let response: SeasonsResponse = fetch(client, &url, &config.retry_policy()).await?;
    let record = first_season(response, &url)?;
    record.season_id.parse()
}

/// Resolves the current and previous season and the current regular season start.
#[instrument(skip(client, config))]
pub async fn fetch_season(client: &Client, config: &Config) -> Result<Season, AppError> {
    let current = fetch_current_season_id(client, config).await?;
    let previous = current.previous();

    let url = build_season_url(&config.schedule_api_domain, current);
    let response: SeasonsResponse = fetch(client, &url, &config.retry_policy()).await?;
    let record = first_season(response, &url)?;

    let start = record.regular_season_start_date.as_deref().ok_or_else(|| {
        AppError::api_unexpected_structure("missing field `regularSeasonStartDate`", &url)
    })?;
    let regular_season_start = parse_api_date(start)?;

    info!("Current season {current}, previous season {previous}, regular season started {regular_season_start}");

    Ok(Season {
        current,
        previous,
        regular_season_start,
    })
}
