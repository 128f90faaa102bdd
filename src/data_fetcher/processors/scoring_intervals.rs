//! Pure date arithmetic behind the expected scoring interval

use crate::data_fetcher::models::GameLogEntry;
use chrono::NaiveDate;

/// Mean number of days between consecutive games.
///
/// Dates are sorted first. Fewer than two dates gives `0.0`, which callers
/// treat as "not enough games to estimate spacing".
pub fn average_days_between_games(dates: &[NaiveDate]) -> f64 {
    if dates.len() < 2 {
        return 0.0;
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable();

    let total_days: i64 = sorted
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .sum();

    total_days as f64 / (sorted.len() - 1) as f64
}

/// Latest game in the log where the player scored at least once.
pub fn last_goal_date(game_log: &[GameLogEntry]) -> Option<NaiveDate> {
    game_log
        .iter()
        .filter(|entry| entry.scored())
        .map(|entry| entry.date)
        .max()
}

/// Dates of every game in the log, in log order.
pub fn games_played_dates(game_log: &[GameLogEntry]) -> Vec<NaiveDate> {
    game_log.iter().map(|entry| entry.date).collect()
}

/// Whole calendar days from `since` to `today`.
pub fn days_since(since: NaiveDate, today: NaiveDate) -> i64 {
    (today - since).num_days()
}

/// Days a player is expected to need per goal: game spacing divided by goals per game.
///
/// Returns `None` when either input is not positive.
pub fn expected_days_between_goals(average_days_between_games: f64, goals_per_game: f64) -> Option<f64> {
    if average_days_between_games <= 0.0 || goals_per_game <= 0.0 {
        return None;
    }
    Some(average_days_between_games / goals_per_game)
}
