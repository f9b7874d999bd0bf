use std::env;

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::LeagueError;
use crate::fpl::{DEFAULT_BASE_URL, PremierLeagueApi};
use crate::leaders::Leaderboard;
use crate::render;
use crate::render::{CorrectnessSummary, TableRow};
use crate::standings::League;
use crate::validator::{PredictionRequest, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Table,
    TopScorer,
    TopAssister,
    TopKeeper,
    Score,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub prediction: Option<PredictionRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<TableRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaders: Option<Leaderboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<CorrectnessSummary>,
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;
    let api = PremierLeagueApi::new(&base_url(payload.base_url.as_deref()));
    let now = Utc::now();

    // ureq is blocking; the task must own the client.
    let snapshot = tokio::task::spawn_blocking(move || api.fetch_snapshot()).await??;
    let league = snapshot.into_league(now)?;

    let response = respond(&payload, &league)?;
    info!(command = ?payload.command, "Prepared response");
    Ok(response)
}

/// Provider base URL: the request wins, then `FPL_BASE_URL`, then the public API. Blank
/// values are skipped.
pub fn base_url(from_request: Option<&str>) -> String {
    let non_empty = |url: &String| !url.trim().is_empty();
    from_request
        .map(str::to_string)
        .filter(non_empty)
        .or_else(|| env::var("FPL_BASE_URL").ok().filter(non_empty))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Answer `request` from an already aggregated league.
pub fn respond(request: &Request, league: &League) -> Result<Response, LeagueError> {
    let players = league.players();
    let response = match request.command {
        Command::Table => {
            let rows = render::table_rows(&league.table());
            Response {
                message: with_as_of(league.as_of(), &render::format_table(&rows)),
                table: Some(rows),
                ..Response::default()
            }
        }
        Command::TopScorer => {
            let board = players.top_scorers_board();
            Response {
                message: with_as_of(league.as_of(), &render::format_top_scorers(&board)),
                leaders: Some(board),
                ..Response::default()
            }
        }
        Command::TopAssister => {
            let board = players.top_assisters_board();
            Response {
                message: with_as_of(league.as_of(), &render::format_top_assisters(&board)),
                leaders: Some(board),
                ..Response::default()
            }
        }
        Command::TopKeeper => {
            let board = players.top_keepers_board();
            Response {
                message: with_as_of(league.as_of(), &render::format_top_keepers(&board)),
                leaders: Some(board),
                ..Response::default()
            }
        }
        Command::Score => {
            let typed = request
                .prediction
                .as_ref()
                .ok_or_else(|| LeagueError::MissingPrediction("score".to_string()))?;
            let prediction = Validator::new(league).resolve(typed)?;
            let report = prediction.score(league);
            Response {
                message: with_as_of(league.as_of(), &render::format_correctness(&prediction, &report)),
                report: Some(CorrectnessSummary::from(&report)),
                ..Response::default()
            }
        }
    };
    Ok(response)
}

fn with_as_of(as_of: DateTime<Utc>, body: &str) -> String {
    format!("As of {}\n{}", render::format_as_of(as_of), body)
}
