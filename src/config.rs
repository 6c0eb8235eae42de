//! League configuration: budget, house rules, formation catalog and scoring rules.
//!
//! Loaded once (JSON) and passed by reference into validation and scoring.
//! Every field has a default, so a partial file only overrides what it names.

use crate::models::{House, Position};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Required player count per position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(rename = "GK")]
    pub goalkeepers: u32,
    #[serde(rename = "DEF")]
    pub defenders: u32,
    #[serde(rename = "MID")]
    pub midfielders: u32,
    #[serde(rename = "ATT")]
    pub attackers: u32,
}

impl Formation {
    pub const fn new(goalkeepers: u32, defenders: u32, midfielders: u32, attackers: u32) -> Self {
        Self {
            goalkeepers,
            defenders,
            midfielders,
            attackers,
        }
    }

    pub fn required(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Attacker => self.attackers,
        }
    }

    /// Total squad size.
    pub fn size(&self) -> u32 {
        Position::ALL.into_iter().map(|p| self.required(p)).sum()
    }
}

/// Named formations, e.g. "4-4-2".
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormationCatalog(BTreeMap<String, Formation>);

impl FormationCatalog {
    pub fn new(formations: impl IntoIterator<Item = (String, Formation)>) -> Self {
        Self(formations.into_iter().collect())
    }

    pub fn get(&self, name: &str) -> Option<&Formation> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for FormationCatalog {
    fn default() -> Self {
        Self::new([
            ("4-4-2".to_string(), Formation::new(1, 4, 4, 2)),
            ("4-3-3".to_string(), Formation::new(1, 4, 3, 3)),
            ("3-5-2".to_string(), Formation::new(1, 3, 5, 2)),
            ("3-4-3".to_string(), Formation::new(1, 3, 4, 3)),
        ])
    }
}

/// Position-agnostic scoring rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallRules {
    /// Awarded for playing at least 60 minutes.
    pub game_played: i32,
    /// Per yellow card (negative).
    pub yellow_card: i32,
    /// Per red card (negative).
    pub red_card: i32,
}

impl Default for OverallRules {
    fn default() -> Self {
        Self {
            game_played: 2,
            yellow_card: -1,
            red_card: -3,
        }
    }
}

/// Position-specific scoring rules. Absent keys are neutral (0).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionRules {
    pub goal_scored: i32,
    pub assists: i32,
    /// Only applied to goalkeepers and defenders.
    pub clean_sheet: i32,
    /// Applied once per two goals conceded (goalkeepers and defenders only).
    #[serde(rename = "2_goals_conceded")]
    pub two_goals_conceded: i32,
}

/// Full scoring table: overall rules plus a per-position map.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRuleSet {
    pub overall: OverallRules,
    pub position_based: BTreeMap<Position, PositionRules>,
}

impl ScoringRuleSet {
    /// Rules for `position`; a position with no entry gets all-zero rules.
    pub fn position_rules(&self, position: Position) -> PositionRules {
        self.position_based
            .get(&position)
            .copied()
            .unwrap_or_default()
    }
}

impl Default for ScoringRuleSet {
    fn default() -> Self {
        let defensive = PositionRules {
            goal_scored: 6,
            assists: 3,
            clean_sheet: 4,
            two_goals_conceded: -1,
        };
        let position_based = BTreeMap::from([
            (Position::Goalkeeper, defensive),
            (Position::Defender, defensive),
            (
                Position::Midfielder,
                PositionRules {
                    goal_scored: 5,
                    assists: 3,
                    ..PositionRules::default()
                },
            ),
            (
                Position::Attacker,
                PositionRules {
                    goal_scored: 4,
                    assists: 3,
                    ..PositionRules::default()
                },
            ),
        ]);
        Self {
            overall: OverallRules::default(),
            position_based,
        }
    }
}

/// Everything the validator and scoring engine read. Immutable for the
/// duration of an operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Maximum summed price of a roster.
    pub budget: u32,
    /// Maximum players from a single house.
    pub max_per_house: usize,
    /// Houses that must each be represented at least once.
    pub houses: BTreeSet<House>,
    pub formations: FormationCatalog,
    pub scoring: ScoringRuleSet,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            budget: 100,
            max_per_house: 4,
            houses: House::ALL.into_iter().collect(),
            formations: FormationCatalog::default(),
            scoring: ScoringRuleSet::default(),
        }
    }
}

impl LeagueConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
