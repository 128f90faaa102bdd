//! URL building utilities for API endpoints

use crate::constants::REGULAR_SEASON_GAME_TYPE;
use crate::data_fetcher::models::SeasonId;
use chrono::NaiveDate;

/// Builds the URL of the current season lookup.
///
/// # Example
/// ```
/// use nhl_due::data_fetcher::api::build_current_season_url;
///
/// let url = build_current_season_url("https://statsapi.web.nhl.com/api/v1");
/// assert_eq!(url, "https://statsapi.web.nhl.com/api/v1/seasons/current");
/// ```
pub fn build_current_season_url(schedule_domain: &str) -> String {
    format!("{schedule_domain}/seasons/current")
}

/// Builds the URL of a specific season's metadata (regular season dates).
///
/// # Example
/// ```
/// use nhl_due::data_fetcher::api::build_season_url;
/// use nhl_due::data_fetcher::models::SeasonId;
///
/// let url = build_season_url("https://api.example.com", SeasonId::from_start_year(2024));
/// assert_eq!(url, "https://api.example.com/seasons/20242025");
/// ```
pub fn build_season_url(schedule_domain: &str, season: SeasonId) -> String {
    format!("{schedule_domain}/seasons/{season}")
}

/// Builds the URL of every game scheduled on a single date.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_due::data_fetcher::api::build_day_schedule_url;
///
/// let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
/// let url = build_day_schedule_url("https://api.example.com", date);
/// assert_eq!(url, "https://api.example.com/schedule?date=2024-11-05");
/// ```
pub fn build_day_schedule_url(schedule_domain: &str, date: NaiveDate) -> String {
    format!("{schedule_domain}/schedule?date={}", date.format("%Y-%m-%d"))
}

/// Builds the URL of one team's schedule over an inclusive date range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_due::data_fetcher::api::build_team_schedule_url;
///
/// let start = NaiveDate::from_ymd_opt(2024, 10, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
/// let url = build_team_schedule_url("https://api.example.com", 22, start, end);
/// assert_eq!(
///     url,
///     "https://api.example.com/schedule?teamId=22&startDate=2024-10-04&endDate=2024-11-05"
/// );
/// ```
pub fn build_team_schedule_url(
    schedule_domain: &str,
    team_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    format!(
        "{schedule_domain}/schedule?teamId={team_id}&startDate={}&endDate={}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

/// Builds the URL of the regular-season skater summary report for a season.
///
/// The report is unpaged (`limit=-1`) and the server applies the goal
/// threshold, so no qualifying skater falls off a default page.
///
/// # Example
/// ```
/// use nhl_due::data_fetcher::api::build_skater_summary_url;
/// use nhl_due::data_fetcher::models::SeasonId;
///
/// let url = build_skater_summary_url("https://api.example.com", SeasonId::from_start_year(2023), 40);
/// assert!(url.starts_with("https://api.example.com/skater/summary?"));
/// assert!(url.contains("&limit=-1&"));
/// assert!(url.ends_with("cayenneExp=seasonId=20232024 and gameTypeId=2 and goals>=40"));
/// ```
pub fn build_skater_summary_url(stats_domain: &str, season: SeasonId, min_goals: u32) -> String {
    format!(
        "{stats_domain}/skater/summary?isAggregate=false&isGame=false&reportName=skatersummary\
         &limit=-1&cayenneExp=seasonId={season} and gameTypeId={REGULAR_SEASON_GAME_TYPE} \
         and goals>={min_goals}"
    )
}

/// Builds the URL of a player's per-game log for a season.
///
/// # Example
/// ```
/// use nhl_due::data_fetcher::api::build_player_game_log_url;
/// use nhl_due::data_fetcher::models::SeasonId;
///
/// let url = build_player_game_log_url("https://api.example.com", 8478402, SeasonId::from_start_year(2024));
/// assert!(url.starts_with("https://api.example.com/player/summary?"));
/// assert!(url.ends_with("cayenneExp=playerId=8478402 and seasonId=20242025"));
/// ```
pub fn build_player_game_log_url(stats_domain: &str, player_id: i64, season: SeasonId) -> String {
    format!(
        "{stats_domain}/player/summary?isAggregate=false&isGame=true&reportName=playergamelog\
         &cayenneExp=playerId={player_id} and seasonId={season}"
    )
}
