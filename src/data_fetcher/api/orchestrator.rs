// src/data_fetcher/api/orchestrator.rs - Sequential fetch, assess and filter pipeline

use crate::config::Config;
use crate::data_fetcher::processors::{DueAssessment, assess_player};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::http_client::create_http_client_with_timeout;
use super::schedule_api::{fetch_schedule_for_day, fetch_team_schedule_dates};
use super::season_api::fetch_season;
use super::skater_api::{fetch_player_game_log, fetch_top_goal_scorers};

/// Outcome of a run, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum DueReport {
    /// Nobody reached the goal threshold last season
    NoQualifyingPlayers { min_goals: u32 },
    /// Past-due players with a game on the report date, in leader order
    PastDue(Vec<DueAssessment>),
}

/// Main entry point: builds the HTTP client and runs the pipeline for `today`.
///
/// # Example
/// ```rust,no_run
/// use nhl_due::config::Config;
/// use nhl_due::data_fetcher::api::evaluate_due_players;
///
/// #[tokio::main]
/// async fn main() -> Result<(), nhl_due::AppError> {
///     let config = Config::default();
///     let today = chrono::Local::now().date_naive();
///     let report = evaluate_due_players(&config, today).await?;
///     println!("{}", nhl_due::report::format_due_report(&report));
///     Ok(())
/// }
/// ```
pub async fn evaluate_due_players(config: &Config, today: NaiveDate) -> Result<DueReport, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    evaluate_due_players_with_client(&client, config, today).await
}

/// Runs the pipeline with a caller-provided client.
///
/// Requests are issued strictly one after another. Any fetch error aborts the
/// run; players that cannot be assessed from their data are skipped.
#[instrument(skip(client, config))]
pub async fn evaluate_due_players_with_client(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Result<DueReport, AppError> {
    info!("Evaluating due goal scorers for {today}");

    let season = fetch_season(client, config).await?;
    let schedule_today = fetch_schedule_for_day(client, config, today).await?;
    let teams_playing = schedule_today.teams_playing();

    let leaders =
        fetch_top_goal_scorers(client, config, season.previous, config.min_goals).await?;
    if leaders.is_empty() {
        info!("No skater reached {} goals in {}", config.min_goals, season.previous);
        return Ok(DueReport::NoQualifyingPlayers {
            min_goals: config.min_goals,
        });
    }

    let mut past_due = Vec::new();
    for player in leaders {
        if !teams_playing.contains(&player.team_id) {
            info!("Skipping {}: no game on {today}", player.name);
            continue;
        }
        if player.goals_per_game().is_none() {
            warn!("Skipping {}: no games played last season", player.name);
            continue;
        }

        let game_log =
            fetch_player_game_log(client, config, player.player_id, season.current).await?;
        let schedule_dates = fetch_team_schedule_dates(
            client,
            config,
            player.team_id,
            season.regular_season_start,
            today,
        )
        .await?;

        let today_game = schedule_today.game_for_team(player.team_id);
        match assess_player(&player, &game_log, &schedule_dates, today, today_game) {
            Ok(assessment) => {
                info!(
                    "{}: {} days since last goal, expected every {:.1} days",
                    player.name,
                    assessment.days_since_last_goal,
                    assessment.expected_days_between_goals
                );
                if assessment.is_past_due() {
                    past_due.push(assessment);
                }
            }
            Err(reason) => warn!("Skipping {}: {reason}", player.name),
        }
    }

    info!("{} player(s) past due", past_due.len());
    Ok(DueReport::PastDue(past_due))
}
