pub mod due_assessment;
pub mod scoring_intervals;

pub use due_assessment::{DueAssessment, SkipReason, assess_player};
pub use scoring_intervals::{
    average_days_between_games, days_since, expected_days_between_goals, games_played_dates,
    last_goal_date,
};
