//! Player and arena configuration.
//!
//! Players are described either by compact strings (`random`, `search`,
//! `search:3`, `search:3:material`) or by TOML tables with the same fields.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use minimax_engine::{EvalPreset, DEFAULT_DEPTH};
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, ArenaResult};

/// Which kind of player to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    #[default]
    Search,
}

/// Everything needed to build one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub strategy: Strategy,
    /// Search depth in plies; ignored by random players
    pub depth: u8,
    /// Evaluator preset; ignored by random players
    pub eval: EvalPreset,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::search(DEFAULT_DEPTH)
    }
}

impl PlayerConfig {
    pub fn random() -> Self {
        Self {
            strategy: Strategy::Random,
            ..Self::search(DEFAULT_DEPTH)
        }
    }

    pub fn search(depth: u8) -> Self {
        Self {
            strategy: Strategy::Search,
            depth,
            eval: EvalPreset::Full,
        }
    }
}

impl FromStr for PlayerConfig {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ArenaError::InvalidPlayer {
            spec: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [kind] if kind.eq_ignore_ascii_case("random") => Ok(Self::random()),
            [kind, rest @ ..] if kind.eq_ignore_ascii_case("search") && rest.len() <= 2 => {
                let mut config = Self::default();
                if let Some(depth) = rest.first() {
                    config.depth = depth
                        .parse()
                        .map_err(|_| invalid(format!("depth `{depth}` is not a number")))?;
                }
                if let Some(eval) = rest.get(1) {
                    config.eval = eval.parse().map_err(invalid)?;
                }
                Ok(config)
            }
            _ => Err(invalid(
                "expected `random`, `search`, `search:<depth>` or `search:<depth>:<eval>`"
                    .to_string(),
            )),
        }
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Random => f.write_str("random"),
            Strategy::Search => write!(f, "search:{}:{}", self.depth, self.eval),
        }
    }
}

/// Match setup, usually loaded from `arena.toml`.
///
/// ```toml
/// games = 10
/// max_plies = 200
/// seed = 7
///
/// [white]
/// strategy = "search"
/// depth = 3
///
/// [black]
/// strategy = "random"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    pub games: u32,
    /// Plies before a game is adjudicated a draw
    pub max_plies: u32,
    pub start_fen: Option<String>,
    pub alternate_colors: bool,
    /// Seed for random players; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            white: PlayerConfig::search(3),
            black: PlayerConfig::random(),
            games: 2,
            max_plies: 200,
            start_fen: None,
            alternate_colors: true,
            seed: None,
        }
    }
}

impl ArenaConfig {
    pub fn load(path: &Path) -> ArenaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ArenaResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
