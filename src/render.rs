use chrono::{DateTime, Utc};
use chrono_tz::Europe::London;
use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::leaders::Leaderboard;
use crate::model::team::Team;
use crate::prediction::{CorrectnessReport, Prediction};

const RULE: &str = "===============================================";

/// One table line as handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub position: usize,
    pub short_name: String,
    pub played: u32,
    pub goal_difference: i64,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

pub fn table_rows(table: &[&Team]) -> Vec<TableRow> {
    table
        .iter()
        .enumerate()
        .map(|(i, team)| TableRow {
            position: i + 1,
            short_name: team.short_name.clone(),
            played: team.played,
            goal_difference: team.goal_difference(),
            goals_for: team.goals_for,
            goals_against: team.goals_against,
            points: team.points,
        })
        .collect()
}

/// Tab separated table with a header and a rule above and below the rows.
pub fn format_table(rows: &[TableRow]) -> String {
    let mut out = String::with_capacity(64 + rows.len() * 32);
    out.push_str("TEAM\tP\tGD\tGF\tGA\tPOINTS\n");
    out.push_str(RULE);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            row.short_name, row.played, row.goal_difference, row.goals_for, row.goals_against, row.points
        ));
    }
    out.push_str(RULE);
    out
}

pub fn format_top_scorers(board: &Leaderboard) -> String {
    format_board(&format!("Top goal scorer(s) with {} goal(s):", board.count), board)
}

pub fn format_top_assisters(board: &Leaderboard) -> String {
    format_board(&format!("Top assister(s) with {} assist(s):", board.count), board)
}

pub fn format_top_keepers(board: &Leaderboard) -> String {
    format_board(
        &format!("Keeper(s) with the most clean sheets with {} clean sheet(s):", board.count),
        board,
    )
}

fn format_board(heading: &str, board: &Leaderboard) -> String {
    let mut out = heading.to_string();
    for name in &board.players {
        out.push_str("\n\t");
        out.push_str(name);
    }
    out
}

/// Serialisable form of a correctness report. A fact that could not be computed is null and
/// its error text is listed in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectnessSummary {
    pub teams_in_correct_position: Option<usize>,
    pub is_top_scorer_correct: Option<bool>,
    pub is_top_assister_correct: Option<bool>,
    pub is_top_keeper_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<&CorrectnessReport> for CorrectnessSummary {
    fn from(report: &CorrectnessReport) -> Self {
        let mut errors = Vec::new();
        let mut keep = |fact: &Result<bool, LeagueError>| match fact {
            Ok(correct) => Some(*correct),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };
        let is_top_scorer_correct = keep(&report.is_top_scorer_correct);
        let is_top_assister_correct = keep(&report.is_top_assister_correct);
        let is_top_keeper_correct = keep(&report.is_top_keeper_correct);
        let teams_in_correct_position = match &report.teams_in_correct_position {
            Ok(count) => Some(*count),
            Err(e) => {
                errors.insert(0, e.to_string());
                None
            }
        };
        CorrectnessSummary {
            teams_in_correct_position,
            is_top_scorer_correct,
            is_top_assister_correct,
            is_top_keeper_correct,
            errors,
        }
    }
}

fn answer(fact: &Result<bool, LeagueError>) -> String {
    match fact {
        Ok(true) => "Yes".to_string(),
        Ok(false) => "No".to_string(),
        Err(e) => format!("Unknown ({})", e),
    }
}

pub fn format_correctness(prediction: &Prediction, report: &CorrectnessReport) -> String {
    let positions = match &report.teams_in_correct_position {
        Ok(count) => count.to_string(),
        Err(e) => format!("unknown ({})", e),
    };
    format!(
        "Number of teams in correct position: {}\nIs {} top scorer? {}\nDoes {} have the most assists? {}\nDoes {} have the most clean sheets? {}",
        positions,
        prediction.top_scorer.name(),
        answer(&report.is_top_scorer_correct),
        prediction.top_assister.name(),
        answer(&report.is_top_assister_correct),
        prediction.top_keeper.name(),
        answer(&report.is_top_keeper_correct),
    )
}

/// Evaluation time in league local time, e.g. "Sat Oct 17, 2026 3:00 PM".
pub fn format_as_of(as_of: DateTime<Utc>) -> String {
    as_of.with_timezone(&London).format("%a %b %e, %Y %-I:%M %p").to_string()
}
