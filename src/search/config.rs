//! Per-call search configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Difficulty level selecting depth and candidate radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Plies searched below the root move
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Neighbourhood radius for candidate generation
    pub const fn radius(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium | Difficulty::Hard => 2,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Immutable settings for one top-level search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total plies, root move included
    pub depth: u8,
    pub radius: u8,
    /// Apply renju restrictions to Black
    pub forbidden_rules: bool,
}

impl SearchConfig {
    pub const fn new(difficulty: Difficulty, forbidden_rules: bool) -> Self {
        Self {
            depth: difficulty.depth(),
            radius: difficulty.radius(),
            forbidden_rules,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Difficulty::default(), true)
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty, true)
    }
}
