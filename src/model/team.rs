use serde::{Deserialize, Serialize};

/// A club as published in the provider's `bootstrap-static` document, plus the running
/// stats the standings engine accumulates for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
}

impl Team {
    /// Build a team with zeroed stats.
    pub fn new(id: u32, name: &str, short_name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            short_name: short_name.to_string(),
            played: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Zero every running stat. The provider ships its own `played`/`points` values which
    /// are not trusted.
    pub fn reset_stats(&mut self) {
        self.played = 0;
        self.points = 0;
        self.goals_for = 0;
        self.goals_against = 0;
    }
}
