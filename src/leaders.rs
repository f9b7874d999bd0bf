use serde::{Deserialize, Serialize};

use crate::model::player::{ElementType, Player};

/// The full player collection of one snapshot, with "most X" queries over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Players {
    players: Vec<Player>,
}

/// A "top X" answer: the leading count and everyone who reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub count: u32,
    pub players: Vec<String>,
}

impl Players {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn with_id(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn by_position(&self, position: ElementType) -> Vec<&Player> {
        self.players.iter().filter(|p| p.element_type == position).collect()
    }

    pub fn keepers(&self) -> Vec<&Player> {
        self.by_position(ElementType::Keeper)
    }

    pub fn defenders(&self) -> Vec<&Player> {
        self.by_position(ElementType::Defender)
    }

    pub fn midfielders(&self) -> Vec<&Player> {
        self.by_position(ElementType::Midfielder)
    }

    pub fn attackers(&self) -> Vec<&Player> {
        self.by_position(ElementType::Attacker)
    }

    /// Full names of `subset`, or of every player when `subset` is None.
    pub fn player_names(&self, subset: Option<&[&Player]>) -> Vec<String> {
        match subset {
            Some(players) => players.iter().map(|p| p.name()).collect(),
            None => self.players.iter().map(Player::name).collect(),
        }
    }

    pub fn top_goals_scored(&self) -> u32 {
        max_of(self.players.iter(), |p| p.goals_scored)
    }

    pub fn top_scorers(&self) -> Vec<&Player> {
        let top = self.top_goals_scored();
        self.players.iter().filter(|p| p.goals_scored == top).collect()
    }

    pub fn top_assists_number(&self) -> u32 {
        max_of(self.players.iter(), |p| p.assists)
    }

    pub fn top_assisters(&self) -> Vec<&Player> {
        let top = self.top_assists_number();
        self.players.iter().filter(|p| p.assists == top).collect()
    }

    /// Most clean sheets kept by a keeper; outfield players are ignored.
    pub fn most_clean_sheets_by_keeper(&self) -> u32 {
        max_of(self.players.iter().filter(|p| p.is_keeper()), |p| p.clean_sheets)
    }

    pub fn keepers_with_most_clean_sheets(&self) -> Vec<&Player> {
        let top = self.most_clean_sheets_by_keeper();
        self.players
            .iter()
            .filter(|p| p.is_keeper() && p.clean_sheets == top)
            .collect()
    }

    pub fn top_scorers_board(&self) -> Leaderboard {
        board(self.top_goals_scored(), &self.top_scorers())
    }

    pub fn top_assisters_board(&self) -> Leaderboard {
        board(self.top_assists_number(), &self.top_assisters())
    }

    pub fn top_keepers_board(&self) -> Leaderboard {
        board(self.most_clean_sheets_by_keeper(), &self.keepers_with_most_clean_sheets())
    }
}

// Maximum of `stat`, 0 for an empty iterator.
fn max_of<'a>(players: impl Iterator<Item = &'a Player>, stat: impl Fn(&Player) -> u32) -> u32 {
    players.map(stat).max().unwrap_or(0)
}

fn board(count: u32, players: &[&Player]) -> Leaderboard {
    Leaderboard {
        count,
        players: players.iter().map(|p| p.name()).collect(),
    }
}
