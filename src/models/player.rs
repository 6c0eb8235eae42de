//! Player reference data: position, house, price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a player (assigned by the player import).
pub type PlayerId = u32;

/// Playing position. Closed set; scoring rules are looked up per position.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "ATT")]
    Attacker,
}

impl Position {
    /// All positions in formation order (GK, DEF, MID, ATT).
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Attacker,
    ];

    /// Short code used in formations and CSV files.
    pub fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Attacker => "ATT",
        }
    }

    /// Goalkeepers and defenders earn clean sheets and lose points for goals conceded.
    pub fn is_defensive(self) -> bool {
        matches!(self, Position::Goalkeeper | Position::Defender)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a position or house string is not recognized.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Position {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "position",
                value: s.to_string(),
            })
    }
}

/// House a player (and each user) belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum House {
    Hyderabad,
    Jaipur,
    Kashmir,
    Oberoi,
    Tata,
}

impl House {
    pub const ALL: [House; 5] = [
        House::Hyderabad,
        House::Jaipur,
        House::Kashmir,
        House::Oberoi,
        House::Tata,
    ];

    pub fn name(self) -> &'static str {
        match self {
            House::Hyderabad => "Hyderabad",
            House::Jaipur => "Jaipur",
            House::Kashmir => "Kashmir",
            House::Oberoi => "Oberoi",
            House::Tata => "Tata",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for House {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        House::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "house",
                value: s.to_string(),
            })
    }
}

/// A selectable player. Immutable during a scoring cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Price in budget units (always positive).
    pub price: u32,
    pub house: House,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        position: Position,
        price: u32,
        house: House,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            price,
            house,
        }
    }
}
