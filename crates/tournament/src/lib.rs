//! Match Runner for draughts
//!
//! This crate provides infrastructure for:
//! - Driving single games between two players (validation, retries, updates)
//! - Running multi-game matches, optionally stopping once one side clinches
//! - Aggregating and reporting match records
//!
//! # Usage
//!
//! ```bash
//! # Play 10 games, random baseline vs the hard tree search player
//! cargo run -p tournament -- match random hard --games 10
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
