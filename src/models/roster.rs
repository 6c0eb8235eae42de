//! Roster entries, rosters and fantasy teams.

use crate::models::player::{House, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fantasy team.
pub type TeamId = Uuid;

/// Unique identifier for a registered user.
pub type UserId = Uuid;

/// One selected player and whether they captain the team.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub is_captain: bool,
}

impl RosterEntry {
    pub fn player(player_id: PlayerId) -> Self {
        Self {
            player_id,
            is_captain: false,
        }
    }

    pub fn captain(player_id: PlayerId) -> Self {
        Self {
            player_id,
            is_captain: true,
        }
    }
}

/// A full selection: entries plus the formation name they are laid out in.
/// Replaced as a whole, never patched.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub formation: String,
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(formation: impl Into<String>, entries: Vec<RosterEntry>) -> Self {
        Self {
            formation: formation.into(),
            entries,
        }
    }

    /// The first captain entry, if any.
    pub fn captain(&self) -> Option<PlayerId> {
        self.entries
            .iter()
            .find(|e| e.is_captain)
            .map(|e| e.player_id)
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.entries.iter().any(|e| e.player_id == player_id)
    }
}

/// A user's fantasy team. `total_points` is a snapshot written by the totals recompute.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub user_id: UserId,
    pub roster: Roster,
    pub total_points: i64,
}

impl Team {
    pub fn new(name: impl Into<String>, user_id: UserId, roster: Roster) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            user_id,
            roster,
            total_points: 0,
        }
    }
}

/// A registered league member. Each user owns at most one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub house: House,
}

impl User {
    pub fn new(name: impl Into<String>, house: House) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            house,
        }
    }
}
