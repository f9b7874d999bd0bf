use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled or played match from the provider's `fixtures` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub team_h: u32,
    pub team_h_score: Option<u32>,
    pub team_a: u32,
    pub team_a_score: Option<u32>,
    #[serde(default)]
    pub minutes: u32,
    // Null for fixtures the league has not scheduled yet.
    pub kickoff_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
}

impl Fixture {
    /// Both scores, or None while the match has no result.
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.team_h_score?, self.team_a_score?))
    }

    /// True once kickoff is at or before `now`. Unscheduled fixtures never count.
    pub fn has_kicked_off(&self, now: DateTime<Utc>) -> bool {
        self.kickoff_time.is_some_and(|kickoff| kickoff <= now)
    }
}
