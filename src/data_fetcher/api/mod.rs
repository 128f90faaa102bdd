pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod schedule_api;
pub mod season_api;
pub mod skater_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use date_logic::{determine_report_date, parse_api_date};
pub use fetch_utils::{RetryPolicy, fetch};
pub use orchestrator::{DueReport, evaluate_due_players, evaluate_due_players_with_client};
pub use schedule_api::{fetch_schedule_for_day, fetch_team_schedule_dates};
pub use season_api::{fetch_current_season_id, fetch_season};
pub use skater_api::{fetch_player_game_log, fetch_top_goal_scorers, filter_goal_scorers};
