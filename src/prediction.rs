use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::LeagueError;
use crate::model::player::Player;
use crate::model::team::Team;
use crate::standings::League;

/// A guess at the final state of the league: the whole table plus three award winners.
///
/// Teams and players are held as the snapshots they were resolved from; every comparison
/// against a league uses ids only, since stats differ between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub table: Vec<Team>,
    pub top_scorer: Player,
    pub top_assister: Player,
    pub top_keeper: Player,
}

/// How a prediction fared against one league snapshot.
///
/// Each fact is computed on its own: a pick the snapshot does not know spoils only the fact
/// it belongs to.
#[derive(Debug)]
pub struct CorrectnessReport {
    pub teams_in_correct_position: Result<usize, LeagueError>,
    pub is_top_scorer_correct: Result<bool, LeagueError>,
    pub is_top_assister_correct: Result<bool, LeagueError>,
    pub is_top_keeper_correct: Result<bool, LeagueError>,
}

impl Prediction {
    /// Build a prediction, rejecting a table that names the same team twice.
    pub fn new(table: Vec<Team>, top_scorer: Player, top_assister: Player, top_keeper: Player) -> Result<Self, LeagueError> {
        let mut seen = HashSet::with_capacity(table.len());
        if let Some(dup) = table.iter().find(|t| !seen.insert(t.id)) {
            return Err(LeagueError::DuplicateTeam { team_id: dup.id });
        }
        Ok(Prediction { table, top_scorer, top_assister, top_keeper })
    }

    /// Positions where the predicted team is the team actually sitting there. Fails if any
    /// predicted team is missing from the snapshot.
    pub fn teams_in_correct_position(&self, league: &League) -> Result<usize, LeagueError> {
        if let Some(team) = self.table.iter().find(|t| league.team_with_id(t.id).is_none()) {
            return Err(LeagueError::UnknownPredictedTeam { team_id: team.id });
        }
        Ok(self
            .table
            .iter()
            .zip(league.table())
            .filter(|(predicted, actual)| predicted.id == actual.id)
            .count())
    }

    /// Any joint leader counts.
    pub fn is_top_scorer_correct(&self, league: &League) -> Result<bool, LeagueError> {
        is_leader(league, &league.players().top_scorers(), &self.top_scorer)
    }

    pub fn is_top_assister_correct(&self, league: &League) -> Result<bool, LeagueError> {
        is_leader(league, &league.players().top_assisters(), &self.top_assister)
    }

    pub fn is_top_keeper_correct(&self, league: &League) -> Result<bool, LeagueError> {
        is_leader(league, &league.players().keepers_with_most_clean_sheets(), &self.top_keeper)
    }

    /// Score every fact against `league`.
    #[instrument(level = "info", skip_all, fields(predicted_teams = self.table.len()))]
    pub fn score(&self, league: &League) -> CorrectnessReport {
        let report = CorrectnessReport {
            teams_in_correct_position: self.teams_in_correct_position(league),
            is_top_scorer_correct: self.is_top_scorer_correct(league),
            is_top_assister_correct: self.is_top_assister_correct(league),
            is_top_keeper_correct: self.is_top_keeper_correct(league),
        };
        info!(
            teams_in_correct_position = ?report.teams_in_correct_position.as_ref().ok(),
            top_scorer = ?report.is_top_scorer_correct.as_ref().ok(),
            top_assister = ?report.is_top_assister_correct.as_ref().ok(),
            top_keeper = ?report.is_top_keeper_correct.as_ref().ok(),
            "Scored prediction"
        );
        report
    }
}

// The pick must exist in the snapshot before membership means anything.
fn is_leader(league: &League, leaders: &[&Player], player: &Player) -> Result<bool, LeagueError> {
    if league.players().with_id(player.id).is_none() {
        return Err(LeagueError::UnknownPredictedPlayer { player_id: player.id });
    }
    Ok(leaders.iter().any(|p| p.id == player.id))
}
