use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, instrument};

use crate::error::LeagueError;
use crate::leaders::Players;
use crate::model::fixture::Fixture;
use crate::model::player::Player;
use crate::model::team::Team;
use crate::standings::League;

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// The parts of `bootstrap-static` we use. Everything else in the document is ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct BootstrapDocument {
    pub teams: Vec<Team>,
    pub elements: Vec<Player>,
}

/// Raw records from one fetch. Nothing in here is mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    pub players: Players,
}

impl Snapshot {
    /// Build a snapshot from raw `bootstrap-static` and `fixtures` bodies (no network).
    pub fn from_json(bootstrap_body: &str, fixtures_body: &str) -> Result<Self, LeagueError> {
        let bootstrap = deserialize_bootstrap(bootstrap_body)?;
        let fixtures = deserialize_fixtures(fixtures_body)?;
        Ok(Snapshot {
            teams: bootstrap.teams,
            fixtures,
            players: Players::new(bootstrap.elements),
        })
    }

    /// Aggregate this snapshot into a league as of `now`.
    pub fn into_league(self, now: DateTime<Utc>) -> Result<League, LeagueError> {
        League::new(self.teams, self.fixtures, self.players, now)
    }
}

/// Client for the Fantasy Premier League API.
#[derive(Debug, Clone)]
pub struct PremierLeagueApi {
    base_url: String,
}

impl PremierLeagueApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch teams, players and fixtures into one snapshot.
    #[instrument(level = "info", skip(self), fields(base_url = %self.base_url))]
    pub fn fetch_snapshot(&self) -> Result<Snapshot, LeagueError> {
        let bootstrap_body = self.get(&format!("{}/bootstrap-static/", self.base_url))?;
        let fixtures_body = self.get(&format!("{}/fixtures/", self.base_url))?;
        let snapshot = Snapshot::from_json(&bootstrap_body, &fixtures_body)?;
        info!(
            teams = snapshot.teams.len(),
            fixtures = snapshot.fixtures.len(),
            players = snapshot.players.len(),
            "Fetched league snapshot"
        );
        Ok(snapshot)
    }

    fn get(&self, url: &str) -> Result<String, LeagueError> {
        let response_result = {
            let _span = info_span!("fpl_fetch", url = %url).entered();
            ureq::get(url).call()
        };
        let response = response_result.map_err(|e| {
            error!(error = %e, url = %url, "Request failed");
            LeagueError::Request { url: url.to_string(), reason: e.to_string() }
        })?;
        let mut body_reader = response.into_body();
        body_reader.read_to_string().map_err(|e| {
            error!(error = %e, url = %url, "Failed to read response body");
            LeagueError::Request { url: url.to_string(), reason: format!("failed to read body: {}", e) }
        })
    }
}

#[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
fn deserialize_bootstrap(body: &str) -> Result<BootstrapDocument, LeagueError> {
    serde_json::from_str(body).map_err(|source| LeagueError::Decode { what: "bootstrap-static document", source })
}

#[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
fn deserialize_fixtures(body: &str) -> Result<Vec<Fixture>, LeagueError> {
    serde_json::from_str(body).map_err(|source| LeagueError::Decode { what: "fixtures list", source })
}
