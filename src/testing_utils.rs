use chrono::NaiveDate;
use serde_json::{Value, json};

/// A row of the skater summary report
pub struct SkaterRow<'a> {
    pub player_id: i64,
    pub name: &'a str,
    pub team_id: i64,
    pub team_abbrev: &'a str,
    pub goals: u32,
    pub games_played: Option<u32>,
}

/// A game on the day schedule
pub struct ScheduledGame<'a> {
    pub home_id: i64,
    pub home_name: &'a str,
    pub away_id: i64,
    pub away_name: &'a str,
    pub start: &'a str,
}

/// Test utilities for building API payloads shaped like the NHL endpoints
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Body of `seasons/current`
    pub fn current_season(season_id: &str) -> Value {
        json!({ "seasons": [{ "seasonId": season_id }] })
    }

    /// Body of `seasons/{id}` with regular season dates
    pub fn season_detail(season_id: &str, start: &str, end: &str) -> Value {
        json!({
            "seasons": [{
                "seasonId": season_id,
                "regularSeasonStartDate": start,
                "regularSeasonEndDate": end,
                "numberOfGames": 82
            }]
        })
    }

    /// Body of `schedule?date=...`
    pub fn day_schedule(date: &str, games: &[ScheduledGame]) -> Value {
        let games: Vec<Value> = games
            .iter()
            .map(|g| {
                json!({
                    "gameDate": g.start,
                    "teams": {
                        "home": { "team": { "id": g.home_id, "name": g.home_name } },
                        "away": { "team": { "id": g.away_id, "name": g.away_name } }
                    }
                })
            })
            .collect();
        json!({
            "totalGames": games.len(),
            "dates": [{ "date": date, "games": games }]
        })
    }

    /// Body of `schedule?teamId=...` with one block per game date
    pub fn team_schedule(dates: &[NaiveDate]) -> Value {
        let blocks: Vec<Value> = dates
            .iter()
            .map(|d| json!({ "date": d.format("%Y-%m-%d").to_string(), "games": [] }))
            .collect();
        json!({ "totalGames": blocks.len(), "dates": blocks })
    }

    /// Body of the skater summary report
    pub fn skater_summary(rows: &[SkaterRow]) -> Value {
        let data: Vec<Value> = rows
            .iter()
            .map(|r| {
                let mut row = json!({
                    "playerId": r.player_id,
                    "playerName": r.name,
                    "teamId": r.team_id,
                    "teamAbbrevs": r.team_abbrev,
                    "goals": r.goals
                });
                if let Some(games) = r.games_played {
                    row["gamesPlayed"] = json!(games);
                }
                row
            })
            .collect();
        json!({ "data": data, "total": rows.len() })
    }

    /// Body of a player's game log report from `(date, goals)` pairs
    pub fn game_log(games: &[(NaiveDate, u32)]) -> Value {
        let data: Vec<Value> = games
            .iter()
            .map(|(date, goals)| {
                json!({ "gameDate": date.format("%Y-%m-%d").to_string(), "goals": goals })
            })
            .collect();
        json!({ "data": data, "total": games.len() })
    }

    /// `count` dates spaced `step` days apart starting at `start`
    pub fn spaced_dates(start: NaiveDate, count: i64, step: i64) -> Vec<NaiveDate> {
        (0..count)
            .map(|i| start + chrono::Duration::days(i * step))
            .collect()
    }

    /// A game log every `step` days ending on `last_game`, with one goal on `goal_on` only
    pub fn log_with_single_goal(
        last_game: NaiveDate,
        count: i64,
        step: i64,
        goal_on: NaiveDate,
    ) -> Vec<(NaiveDate, u32)> {
        let first = last_game - chrono::Duration::days((count - 1) * step);
        Self::spaced_dates(first, count, step)
            .into_iter()
            .map(|d| (d, u32::from(d == goal_on)))
            .collect()
    }
}
