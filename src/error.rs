use thiserror::Error;

/// Failures surfaced by the standings engine, the prediction scorer and the data provider.
///
/// A fixture without scores is deliberately absent from this list: it is skipped during
/// aggregation, not reported.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("fixture {fixture_id} references unknown team {team_id}")]
    UnknownTeamReference { fixture_id: u32, team_id: u32 },

    #[error("prediction references team {team_id} which is not in the league")]
    UnknownPredictedTeam { team_id: u32 },

    #[error("prediction references player {player_id} who is not in the league")]
    UnknownPredictedPlayer { player_id: u32 },

    #[error("team {team_id} appears more than once in the predicted table")]
    DuplicateTeam { team_id: u32 },

    #[error("predicted table has {found} teams, expected {expected}")]
    WrongTableLength { expected: usize, found: usize },

    #[error("no team named {name:?}{}", did_you_mean(.suggestions))]
    UnknownTeamName { name: String, suggestions: Vec<String> },

    #[error("no {} named {name:?}{}", player_kind(.keepers_only), did_you_mean(.suggestions))]
    UnknownPlayerName {
        name: String,
        keepers_only: bool,
        suggestions: Vec<String>,
    },

    #[error("command {0:?} requires a prediction in the request")]
    MissingPrediction(String),

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn player_kind(keepers_only: &bool) -> &'static str {
    if *keepers_only { "keeper" } else { "player" }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        ", no matches found".to_string()
    } else {
        format!(", did you mean: {}", suggestions.join(", "))
    }
}
