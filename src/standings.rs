use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::error::LeagueError;
use crate::leaders::Players;
use crate::model::fixture::Fixture;
use crate::model::team::Team;

/// Fold fixture results into fresh per-team totals.
///
/// Works on a private copy of `teams`: stats are reset, then every fixture with both scores
/// is applied. The caller's collection is never touched, so this can be called repeatedly on
/// the same snapshot. Any fixture naming an unknown team, scored or not, aborts the whole
/// aggregation.
#[instrument(level = "debug", skip_all, fields(teams = teams.len(), fixtures = fixtures.len()))]
pub fn aggregate(teams: &[Team], fixtures: &[Fixture], now: DateTime<Utc>) -> Result<Vec<Team>, LeagueError> {
    let mut working: Vec<Team> = teams.to_vec();
    working.iter_mut().for_each(Team::reset_stats);

    let index: HashMap<u32, usize> = working.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
    let lookup = |fixture: &Fixture, team_id: u32| {
        index
            .get(&team_id)
            .copied()
            .ok_or(LeagueError::UnknownTeamReference { fixture_id: fixture.id, team_id })
    };

    let mut applied = 0usize;
    for fixture in fixtures {
        // Resolve both sides first: a bad reference is fatal even for an unplayed fixture,
        // and nothing has been touched yet.
        let home = lookup(fixture, fixture.team_h)?;
        let away = lookup(fixture, fixture.team_a)?;
        let Some((home_score, away_score)) = fixture.score() else {
            continue;
        };

        if fixture.has_kicked_off(now) {
            working[home].played += 1;
            working[away].played += 1;
        }

        working[home].goals_for += home_score;
        working[home].goals_against += away_score;
        working[away].goals_for += away_score;
        working[away].goals_against += home_score;

        match home_score.cmp(&away_score) {
            Ordering::Greater => working[home].points += 3,
            Ordering::Less => working[away].points += 3,
            Ordering::Equal => {
                working[home].points += 1;
                working[away].points += 1;
            }
        }
        applied += 1;
    }

    debug!(applied, "Aggregated fixture results");
    Ok(working)
}

/// League ordering: points, goal difference, goals for (all descending), goals against
/// (ascending), then name. Team id settles the theoretical case of two identical names.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.goals_against.cmp(&b.goals_against))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort teams into table order without copying them.
pub fn rank(teams: &[Team]) -> Vec<&Team> {
    let mut table: Vec<&Team> = teams.iter().collect();
    table.sort_by(|a, b| compare(a, b));
    table
}

/// One snapshot of the league: aggregated teams, the fixtures they came from and all players.
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    players: Players,
    as_of: DateTime<Utc>,
}

impl League {
    /// Aggregate `fixtures` into `teams` as of `now`.
    pub fn new(teams: Vec<Team>, fixtures: Vec<Fixture>, players: Players, now: DateTime<Utc>) -> Result<Self, LeagueError> {
        let teams = aggregate(&teams, &fixtures, now)?;
        Ok(League { teams, fixtures, players, as_of: now })
    }

    /// The current table. Sorted on every call.
    pub fn table(&self) -> Vec<&Team> {
        rank(&self.teams)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Evaluation time the stats were aggregated at.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn team_with_id(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}
