//! Match record storage and reporting

use std::path::Path;

use draughts_core::{GameOutcome, Team};
use serde::{Deserialize, Serialize};

/// Running totals for a series of games between two fixed sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub games: u32,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
}

impl MatchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Team::One) => self.team1_wins += 1,
            GameOutcome::Win(Team::Two) => self.team2_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Fractional score for `team`: one point per win, half per draw.
    pub fn score(&self, team: Team) -> f64 {
        let wins = match team {
            Team::One => self.team1_wins,
            Team::Two => self.team2_wins,
        };
        wins as f64 + 0.5 * self.draws as f64
    }

    /// The match-result tuple: (score1, score2, wins1, wins2, draws).
    pub fn summary(&self) -> (f64, f64, u32, u32, u32) {
        (
            self.score(Team::One),
            self.score(Team::Two),
            self.team1_wins,
            self.team2_wins,
            self.draws,
        )
    }

    /// True once a side's score has passed half of `total_games` and can no
    /// longer be caught.
    pub fn clinched(&self, total_games: u32) -> bool {
        let majority = total_games as f64 / 2.0;
        self.score(Team::One) > majority || self.score(Team::Two) > majority
    }

    /// Save the record to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report of the final standing.
    pub fn generate_report(&self, name1: &str, name2: &str) -> String {
        let (score1, score2, wins1, wins2, draws) = self.summary();
        let mut report = String::new();
        report.push_str(&format!("=== Result: {} vs {} ===\n", name1, name2));
        report.push_str(&format!("Games played: {}\n", self.games));
        report.push_str(&format!("Team 1 ({}): score {:.1}, wins {}\n", name1, score1, wins1));
        report.push_str(&format!("Team 2 ({}): score {:.1}, wins {}\n", name2, score2, wins2));
        report.push_str(&format!("Draws: {}\n", draws));
        report
    }

    /// Print the report to stdout.
    pub fn print_report(&self, name1: &str, name2: &str) {
        println!("{}", self.generate_report(name1, name2));
    }
}
