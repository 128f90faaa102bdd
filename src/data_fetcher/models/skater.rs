use serde::Deserialize;

/// Response of the `skater/summary` report
#[derive(Debug, Clone, Deserialize)]
pub struct SkaterSummaryResponse {
    pub data: Vec<SkaterSummary>,
}

/// One skater's season totals as the stats API reports them
#[derive(Debug, Clone, Deserialize)]
pub struct SkaterSummary {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "playerName", alias = "skaterFullName")]
    pub player_name: String,
    #[serde(rename = "teamId")]
    pub team_id: i64,
    #[serde(rename = "teamAbbrevs", default)]
    pub team_abbrevs: String,
    pub goals: u32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: Option<u32>,
}

/// Previous-season baseline for a tracked player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBaseline {
    pub player_id: i64,
    pub name: String,
    pub team_id: i64,
    pub team_abbrev: String,
    pub goals: u32,
    pub games_played: Option<u32>,
}

impl PlayerBaseline {
    /// Goals per game last season, or `None` when games played is zero or unknown.
    pub fn goals_per_game(&self) -> Option<f64> {
        match self.games_played {
            Some(games) if games > 0 => Some(f64::from(self.goals) / f64::from(games)),
            _ => None,
        }
    }
}

impl From<SkaterSummary> for PlayerBaseline {
    fn from(summary: SkaterSummary) -> Self {
        PlayerBaseline {
            player_id: summary.player_id,
            name: summary.player_name,
            team_id: summary.team_id,
            team_abbrev: summary.team_abbrevs,
            goals: summary.goals,
            games_played: summary.games_played,
        }
    }
}
