use chrono::NaiveDate;
use serde::Deserialize;

/// Response of the `player/summary` game log report
#[derive(Debug, Clone, Deserialize)]
pub struct GameLogResponse {
    pub data: Vec<GameLogRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameLogRecord {
    #[serde(rename = "gameDate")]
    pub game_date: String,
    pub goals: u32,
}

/// One game a player appeared in this season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLogEntry {
    pub date: NaiveDate,
    pub goals: u32,
}

impl GameLogEntry {
    pub fn scored(&self) -> bool {
        self.goals > 0
    }
}
