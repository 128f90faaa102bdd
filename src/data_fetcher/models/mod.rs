pub mod game_log;
pub mod schedule;
pub mod season;
pub mod skater;

pub use game_log::{GameLogEntry, GameLogRecord, GameLogResponse};
pub use schedule::{ScheduleResponse, TodayGame};
pub use season::{Season, SeasonId, SeasonRecord, SeasonsResponse};
pub use skater::{PlayerBaseline, SkaterSummary, SkaterSummaryResponse};
