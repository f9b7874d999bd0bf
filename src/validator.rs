use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::LeagueError;
use crate::model::player::Player;
use crate::model::team::Team;
use crate::prediction::Prediction;
use crate::standings::League;

/// A prediction as typed by a user: team names in predicted finishing order and three
/// player full names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub table: Vec<String>,
    pub top_scorer: String,
    pub top_assister: String,
    pub top_keeper: String,
}

/// Resolves user-typed names against one league snapshot.
///
/// Names must match exactly. A miss carries every known name containing the input,
/// case-insensitively, so the caller can ask "did you mean ...".
#[derive(Debug)]
pub struct Validator<'a> {
    league: &'a League,
}

impl<'a> Validator<'a> {
    pub fn new(league: &'a League) -> Self {
        Self { league }
    }

    pub fn team_with_name(&self, name: &str) -> Result<&'a Team, LeagueError> {
        let teams = self.league.teams();
        teams.iter().find(|t| t.name == name).ok_or_else(|| {
            let suggestions = close_matches(name, teams.iter().map(|t| t.name.clone()));
            warn!(name, suggestions = suggestions.len(), "Unknown team name");
            LeagueError::UnknownTeamName { name: name.to_string(), suggestions }
        })
    }

    /// Look up a player by full name, optionally among keepers only.
    pub fn player_with_name(&self, name: &str, keepers_only: bool) -> Result<&'a Player, LeagueError> {
        let candidates: Vec<&'a Player> = self
            .league
            .players()
            .all()
            .iter()
            .filter(|p| !keepers_only || p.is_keeper())
            .collect();
        candidates.iter().copied().find(|p| p.name() == name).ok_or_else(|| {
            let suggestions = close_matches(name, candidates.iter().map(|p| p.name()));
            warn!(name, keepers_only, suggestions = suggestions.len(), "Unknown player name");
            LeagueError::UnknownPlayerName { name: name.to_string(), keepers_only, suggestions }
        })
    }

    /// Turn typed names into a prediction. The table must name every team in the league
    /// exactly once.
    #[instrument(level = "info", skip_all)]
    pub fn resolve(&self, request: &PredictionRequest) -> Result<Prediction, LeagueError> {
        let expected = self.league.teams().len();
        if request.table.len() != expected {
            return Err(LeagueError::WrongTableLength { expected, found: request.table.len() });
        }

        let mut seen = HashSet::with_capacity(expected);
        let mut table = Vec::with_capacity(expected);
        for name in &request.table {
            let team = self.team_with_name(name)?;
            if !seen.insert(team.id) {
                return Err(LeagueError::DuplicateTeam { team_id: team.id });
            }
            table.push(team.clone());
        }

        Prediction::new(
            table,
            self.player_with_name(&request.top_scorer, false)?.clone(),
            self.player_with_name(&request.top_assister, false)?.clone(),
            self.player_with_name(&request.top_keeper, true)?.clone(),
        )
    }
}

fn close_matches(input: &str, names: impl Iterator<Item = String>) -> Vec<String> {
    let needle = input.to_lowercase();
    names.filter(|n| n.to_lowercase().contains(&needle)).collect()
}
