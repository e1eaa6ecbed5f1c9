//! Match results storage and reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ArenaError, ArenaResult};
use crate::match_runner::{GameRecord, GameResult};

/// Complete match results, from the first player's point of view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub first: String,
    pub second: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl MatchSummary {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            games: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Add a finished game. `first_white` says which side the first player had.
    pub fn record(&mut self, game: GameRecord, first_white: bool) {
        match (game.result, first_white) {
            (GameResult::Draw, _) => self.draws += 1,
            (GameResult::WhiteWins, true) | (GameResult::BlackWins, false) => self.wins += 1,
            (GameResult::WhiteWins, false) | (GameResult::BlackWins, true) => self.losses += 1,
        }
        self.games.push(game);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score for the first player (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> ArenaResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> ArenaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.first, self.second));

        report.push_str(&format!(
            "{:<4} {:<24} {:<24} {:<8} {:>6}  {}\n",
            "#", "White", "Black", "Result", "Plies", "Termination"
        ));
        report.push_str(&"-".repeat(84));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<24} {:<24} {:<8} {:>6}  {:?}\n",
                i + 1,
                game.white,
                game.black,
                game.result.as_str(),
                game.plies,
                game.termination
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws\n",
            self.first, self.wins, self.losses, self.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
