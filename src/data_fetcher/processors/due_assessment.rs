//! Past-due evaluation for a single player
//!
//! Everything here works on already-fetched records, so the whole heuristic
//! can be exercised without a network.

use super::scoring_intervals::{
    average_days_between_games, days_since, expected_days_between_goals, games_played_dates,
    last_goal_date,
};
use crate::data_fetcher::models::{GameLogEntry, PlayerBaseline, TodayGame};
use chrono::NaiveDate;
use std::fmt;

/// Why a tracked player could not be assessed. None of these abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Previous-season games played is zero or missing
    NoGamesPlayed,
    /// No goal in the current season's game log
    NoGoalThisSeason,
    /// Fewer than two games to measure spacing from
    NotEnoughGames,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NoGamesPlayed => "no games played last season",
            SkipReason::NoGoalThisSeason => "no goal scored this season",
            SkipReason::NotEnoughGames => "not enough games to measure spacing",
        };
        f.write_str(text)
    }
}

/// Result of comparing a player's scoring drought against their expected interval
#[derive(Debug, Clone, PartialEq)]
pub struct DueAssessment {
    pub player: PlayerBaseline,
    pub last_goal_date: NaiveDate,
    pub days_since_last_goal: i64,
    pub expected_days_between_goals: f64,
    pub today_game: Option<TodayGame>,
}

impl DueAssessment {
    pub fn has_game_today(&self) -> bool {
        self.today_game.is_some()
    }

    /// Drought longer than the expected interval, with a game to break it today.
    pub fn is_past_due(&self) -> bool {
        self.has_game_today() && self.days_since_last_goal as f64 > self.expected_days_between_goals
    }
}

/// Builds the assessment for one player.
///
/// Game spacing comes from the team's schedule; when the schedule has no dates
/// the player's own game log stands in for it. Games and schedule dates after
/// `today` are ignored, so a past report date sees the season as it stood then.
pub fn assess_player(
    player: &PlayerBaseline,
    game_log: &[GameLogEntry],
    schedule_dates: &[NaiveDate],
    today: NaiveDate,
    today_game: Option<TodayGame>,
) -> Result<DueAssessment, SkipReason> {
    let goals_per_game = player.goals_per_game().ok_or(SkipReason::NoGamesPlayed)?;

    let played: Vec<GameLogEntry> = game_log
        .iter()
        .copied()
        .filter(|entry| entry.date <= today)
        .collect();
    let scheduled: Vec<NaiveDate> = schedule_dates
        .iter()
        .copied()
        .filter(|date| *date <= today)
        .collect();

    let last_goal = last_goal_date(&played).ok_or(SkipReason::NoGoalThisSeason)?;

    let average_days = if scheduled.is_empty() {
        average_days_between_games(&games_played_dates(&played))
    } else {
        average_days_between_games(&scheduled)
    };

    let expected = expected_days_between_goals(average_days, goals_per_game)
        .ok_or(SkipReason::NotEnoughGames)?;

    Ok(DueAssessment {
        player: player.clone(),
        last_goal_date: last_goal,
        days_since_last_goal: days_since(last_goal, today),
        expected_days_between_goals: expected,
        today_game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn forty_goal_scorer() -> PlayerBaseline {
        PlayerBaseline {
            player_id: 8479318,
            name: "Auston Matthews".to_string(),
            team_id: 10,
            team_abbrev: "TOR".to_string(),
            goals: 40,
            games_played: Some(82),
        }
    }

    fn tonight() -> Option<TodayGame> {
        Some(TodayGame {
            opponent: "Boston Bruins".to_string(),
            start_time: "2024-11-06T00:00:00Z".to_string(),
        })
    }

    /// Games every other day ending on `last_goal`, the player scoring only there.
    fn log_with_goal_on(last_goal: NaiveDate) -> Vec<GameLogEntry> {
        (0..5)
            .map(|i| GameLogEntry {
                date: last_goal - chrono::Duration::days(2 * (4 - i)),
                goals: u32::from(i == 4),
            })
            .collect()
    }

    fn every_other_day(start: NaiveDate, count: i64) -> Vec<NaiveDate> {
        (0..count).map(|i| start + chrono::Duration::days(2 * i)).collect()
    }

    #[test]
    fn test_five_day_drought_is_past_due() {
        let today = date(2024, 11, 5);
        let log = log_with_goal_on(date(2024, 10, 31));
        let schedule = every_other_day(date(2024, 10, 10), 12);

        let assessment =
            assess_player(&forty_goal_scorer(), &log, &schedule, today, tonight()).unwrap();

        assert_eq!(assessment.days_since_last_goal, 5);
        assert!((assessment.expected_days_between_goals - 4.1).abs() < 0.01);
        assert!(assessment.is_past_due());
    }

    #[test]
    fn test_three_day_drought_is_not_past_due() {
        let today = date(2024, 11, 5);
        let log = log_with_goal_on(date(2024, 11, 2));
        let schedule = every_other_day(date(2024, 10, 10), 12);

        let assessment =
            assess_player(&forty_goal_scorer(), &log, &schedule, today, tonight()).unwrap();

        assert_eq!(assessment.days_since_last_goal, 3);
        assert!(!assessment.is_past_due());
    }

    #[test]
    fn test_no_game_today_is_never_past_due() {
        let today = date(2024, 11, 5);
        let log = log_with_goal_on(date(2024, 10, 20));
        let schedule = every_other_day(date(2024, 10, 10), 12);

        let assessment =
            assess_player(&forty_goal_scorer(), &log, &schedule, today, None).unwrap();

        assert!(assessment.days_since_last_goal as f64 > assessment.expected_days_between_goals);
        assert!(!assessment.has_game_today());
        assert!(!assessment.is_past_due());
    }

    #[test]
    fn test_zero_games_played_is_skipped() {
        let player = PlayerBaseline {
            games_played: Some(0),
            ..forty_goal_scorer()
        };
        let log = log_with_goal_on(date(2024, 10, 31));
        let result = assess_player(&player, &log, &[], date(2024, 11, 5), tonight());
        assert_eq!(result, Err(SkipReason::NoGamesPlayed));
    }

    #[test]
    fn test_missing_games_played_is_skipped() {
        let player = PlayerBaseline {
            games_played: None,
            ..forty_goal_scorer()
        };
        let result = assess_player(&player, &[], &[], date(2024, 11, 5), tonight());
        assert_eq!(result, Err(SkipReason::NoGamesPlayed));
    }

    #[test]
    fn test_goalless_season_is_skipped() {
        let log = vec![GameLogEntry { date: date(2024, 10, 10), goals: 0 }];
        let result = assess_player(&forty_goal_scorer(), &log, &[], date(2024, 11, 5), tonight());
        assert_eq!(result, Err(SkipReason::NoGoalThisSeason));
    }

    #[test]
    fn test_falls_back_to_game_log_spacing() {
        let today = date(2024, 11, 5);
        let log = log_with_goal_on(date(2024, 10, 31));

        let assessment = assess_player(&forty_goal_scorer(), &log, &[], today, tonight()).unwrap();

        // Log games are two days apart, same as the schedule case
        assert!((assessment.expected_days_between_goals - 4.1).abs() < 0.01);
    }

    #[test]
    fn test_single_game_cannot_be_assessed() {
        let log = vec![GameLogEntry { date: date(2024, 10, 10), goals: 1 }];
        let result = assess_player(&forty_goal_scorer(), &log, &[], date(2024, 11, 5), tonight());
        assert_eq!(result, Err(SkipReason::NotEnoughGames));
    }

    #[test]
    fn test_games_after_report_date_are_ignored() {
        let today = date(2024, 11, 5);
        let mut log = log_with_goal_on(date(2024, 10, 21));
        log.push(GameLogEntry { date: date(2024, 12, 1), goals: 2 });
        let schedule = every_other_day(date(2024, 10, 5), 30);

        let assessment =
            assess_player(&forty_goal_scorer(), &log, &schedule, today, tonight()).unwrap();

        assert_eq!(assessment.last_goal_date, date(2024, 10, 21));
        assert_eq!(assessment.days_since_last_goal, 15);
        assert!((assessment.expected_days_between_goals - 4.1).abs() < 0.01);
        assert!(assessment.is_past_due());
    }

    #[test]
    fn test_only_goal_after_report_date_counts_as_goalless() {
        let log = vec![
            GameLogEntry { date: date(2024, 10, 30), goals: 0 },
            GameLogEntry { date: date(2024, 11, 1), goals: 0 },
            GameLogEntry { date: date(2024, 11, 9), goals: 1 },
        ];
        let result = assess_player(&forty_goal_scorer(), &log, &[], date(2024, 11, 5), tonight());
        assert_eq!(result, Err(SkipReason::NoGoalThisSeason));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::NoGamesPlayed.to_string(),
            "no games played last season"
        );
    }
}
