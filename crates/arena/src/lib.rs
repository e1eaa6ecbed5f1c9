//! Arena for ML-chess players
//!
//! This crate provides:
//! - Player selection from compact strings or TOML config
//! - One-off decisions, inline or on a background thread
//! - Full games and matches between two players, with JSON results
//!
//! # Usage
//!
//! ```bash
//! # Ask the search player for a move
//! cargo run -p arena -- choose --fen "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1" --player search:3
//!
//! # Search vs random, 10 games
//! cargo run -p arena -- play --white search:3 --black random --games 10
//! ```

mod config;
mod error;
mod match_runner;
mod player;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use player::*;
pub use results::*;
