//! Plain-text rendering of a run's outcome

use crate::constants::messages::{NO_PAST_DUE_PLAYERS, PAST_DUE_HEADER};
use crate::data_fetcher::api::DueReport;
use crate::data_fetcher::processors::DueAssessment;
use chrono::{DateTime, Local};

const COLUMNS: [&str; 6] = [
    "Player",
    "Team",
    "Days Since Last Goal",
    "Expected Days",
    "Opponent",
    "Game Time",
];

/// Renders the whole report: the "no qualifying players" line, the
/// "no past-due players" line, or the past-due table.
pub fn format_due_report(report: &DueReport) -> String {
    match report {
        DueReport::NoQualifyingPlayers { min_goals } => no_qualifying_players_message(*min_goals),
        DueReport::PastDue(players) => format_due_players(players),
    }
}

/// Message for a previous season without any player at the goal threshold.
pub fn no_qualifying_players_message(min_goals: u32) -> String {
    format!("No players meet the criteria: nobody scored {min_goals} or more goals last season.")
}

/// Renders past-due players as an aligned table, or the fixed no-results line when empty.
pub fn format_due_players(players: &[DueAssessment]) -> String {
    if players.is_empty() {
        return NO_PAST_DUE_PLAYERS.to_string();
    }

    let rows: Vec<[String; 6]> = players.iter().map(table_row).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = COLUMNS.map(str::to_string);
    let separator = widths.map(|w| "-".repeat(w));

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(PAST_DUE_HEADER.to_string());
    lines.push(join_row(&header, &widths));
    lines.push(join_row(&separator, &widths));
    lines.extend(rows.iter().map(|row| join_row(row, &widths)));
    lines.join("\n")
}

fn table_row(assessment: &DueAssessment) -> [String; 6] {
    let (opponent, game_time) = match &assessment.today_game {
        Some(game) => (game.opponent.clone(), format_game_time(&game.start_time)),
        None => ("-".to_string(), "-".to_string()),
    };
    [
        assessment.player.name.clone(),
        assessment.player.team_abbrev.clone(),
        assessment.days_since_last_goal.to_string(),
        format!("{:.1}", assessment.expected_days_between_goals),
        opponent,
        game_time,
    ]
}

fn join_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Converts an RFC 3339 start time to local `HH:MM`; anything else is shown as given.
pub fn format_game_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
