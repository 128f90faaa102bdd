//! Season leaders and per-player game logs from the stats REST API

use crate::config::Config;
use crate::data_fetcher::models::{
    GameLogEntry, GameLogResponse, PlayerBaseline, SeasonId, SkaterSummaryResponse,
};
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::date_logic::parse_api_date;
use super::fetch_utils::fetch;
use super::urls::{build_player_game_log_url, build_skater_summary_url};

/// Keeps skaters at or above the goal threshold, in API order.
/// Applied on top of the server-side `goals>=` clause.
pub fn filter_goal_scorers(
    response: SkaterSummaryResponse,
    min_goals: u32,
) -> Vec<PlayerBaseline> {
    response
        .data
        .into_iter()
        .filter(|skater| skater.goals >= min_goals)
        .map(PlayerBaseline::from)
        .collect()
}

/// Fetches a season's regular-season skater totals and keeps the high-volume scorers.
#[instrument(skip(client, config))]
pub async fn fetch_top_goal_scorers(
    client: &Client,
    config: &Config,
    season: SeasonId,
    min_goals: u32,
) -> Result<Vec<PlayerBaseline>, AppError> {
    let url = build_skater_summary_url(&config.stats_api_domain, season, min_goals);
    let response: SkaterSummaryResponse = fetch(client, &url, &config.retry_policy()).await?;
    let total = response.data.len();

    let players = filter_goal_scorers(response, min_goals);
    info!(
        "{} of {} skaters scored {}+ goals in {}",
        players.len(),
        total,
        min_goals,
        season
    );
    Ok(players)
}

/// Fetches a player's game log for a season.
#[instrument(skip(client, config))]
pub async fn fetch_player_game_log(
    client: &Client,
    config: &Config,
    player_id: i64,
    season: SeasonId,
) -> Result<Vec<GameLogEntry>, AppError> {
    let url = build_player_game_log_url(&config.stats_api_domain, player_id, season);
    let response: GameLogResponse = fetch(client, &url, &config.retry_policy()).await?;

    let entries = response
        .data
        .into_iter()
        .map(|record| {
            Ok(GameLogEntry {
                date: parse_api_date(&record.game_date)?,
                goals: record.goals,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    debug!("Player {player_id} has {} games logged in {season}", entries.len());
    Ok(entries)
}
