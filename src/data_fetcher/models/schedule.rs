use serde::Deserialize;
use std::collections::HashSet;

/// Response of the `schedule` endpoint, for a single day or a team date range
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleGame {
    /// Scheduled start as an RFC 3339 timestamp
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    pub teams: ScheduleTeams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTeams {
    pub home: ScheduleSide,
    pub away: ScheduleSide,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSide {
    pub team: ScheduleTeam,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTeam {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A team's game on the report date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayGame {
    pub opponent: String,
    pub start_time: String,
}

impl ScheduleResponse {
    fn games(&self) -> impl Iterator<Item = &ScheduleGame> {
        self.dates.iter().flat_map(|d| d.games.iter())
    }

    /// Ids of every team appearing on either side of a scheduled game.
    pub fn teams_playing(&self) -> HashSet<i64> {
        self.games()
            .flat_map(|g| [g.teams.home.team.id, g.teams.away.team.id])
            .collect()
    }

    /// The first game the team plays in this schedule, seen from that team's side.
    pub fn game_for_team(&self, team_id: i64) -> Option<TodayGame> {
        self.games().find_map(|game| {
            let (home, away) = (&game.teams.home.team, &game.teams.away.team);
            let opponent = if home.id == team_id {
                away
            } else if away.id == team_id {
                home
            } else {
                return None;
            };
            Some(TodayGame {
                opponent: opponent.name.clone(),
                start_time: game.game_date.clone(),
            })
        })
    }

    /// Raw date strings of all schedule blocks that carry one.
    pub fn date_strings(&self) -> Vec<&str> {
        self.dates.iter().filter_map(|d| d.date.as_deref()).collect()
    }
}
