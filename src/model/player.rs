use serde::{Deserialize, Serialize};

/// The provider's position classification, shipped as `element_type` 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ElementType {
    Keeper,
    Defender,
    Midfielder,
    Attacker,
}

impl TryFrom<u8> for ElementType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ElementType::Keeper),
            2 => Ok(ElementType::Defender),
            3 => Ok(ElementType::Midfielder),
            4 => Ok(ElementType::Attacker),
            other => Err(format!("unknown element_type {}", other)),
        }
    }
}

impl From<ElementType> for u8 {
    fn from(value: ElementType) -> Self {
        match value {
            ElementType::Keeper => 1,
            ElementType::Defender => 2,
            ElementType::Midfielder => 3,
            ElementType::Attacker => 4,
        }
    }
}

/// A player entry (the provider calls these "elements").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub second_name: String,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    pub element_type: ElementType,
}

impl Player {
    /// Full display name, e.g. "Mohamed Salah".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    pub fn is_keeper(&self) -> bool {
        self.element_type == ElementType::Keeper
    }
}
