//! Match runner for playing games between players

use draughts_core::{GameOutcome, Gamestate, Player, Team};
use serde::{Deserialize, Serialize};

use crate::results::MatchRecord;

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Stop as soon as one side's score clinches a majority of `games`
    pub best_of: bool,
    /// Print the board after every completed full move
    pub show_board: bool,
    /// Print per-game progress lines
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            best_of: false,
            show_board: false,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Runs matches between two players. Player 1 plays Team 1 throughout.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a full match and return the accumulated record.
    pub fn run_match(&self, player1: &mut dyn Player, player2: &mut dyn Player) -> MatchRecord {
        let mut record = MatchRecord::new();

        for game_num in 0..self.config.games {
            let outcome = self.play_game(player1, player2);
            record.record(outcome);

            if self.config.verbose {
                let result = match outcome {
                    GameOutcome::Win(Team::One) => "1-0",
                    GameOutcome::Win(Team::Two) => "0-1",
                    GameOutcome::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} - Score: {:.1}-{:.1}",
                    game_num + 1,
                    self.config.games,
                    result,
                    record.score(Team::One),
                    record.score(Team::Two),
                );
            }

            if self.config.best_of && record.clinched(self.config.games) {
                break;
            }
        }

        record
    }

    /// Play a single game to its terminal outcome.
    ///
    /// An invalid move is reported back to its player and the same side is
    /// asked again; the state is untouched, so interactive implementations
    /// can retry indefinitely.
    pub fn play_game<'a>(&self, player1: &'a mut dyn Player, player2: &'a mut dyn Player) -> GameOutcome {
        let mut state = Gamestate::new();
        player1.new_game();
        player2.new_game();

        loop {
            if let Some(outcome) = state.game_over() {
                return outcome;
            }

            let side = state.turn;
            let last = state.last_full_move.clone();
            let player = match side {
                Team::One => &mut *player1,
                Team::Two => &mut *player2,
            };

            let mv = player.next_move(&state, last.as_ref());
            match state.validate(mv) {
                Ok(()) => {
                    state.update(mv);
                    if self.config.show_board && state.turn != side {
                        println!("{}\n", state);
                    }
                }
                Err(error) => {
                    if self.config.verbose {
                        println!("rejected move from {}: {}", player.name(), error);
                    }
                    player.notify_invalid(&error);
                }
            }
        }
    }
}

/// Quick utility to run a quiet match with default settings
pub fn quick_match(
    player1: &mut dyn Player,
    player2: &mut dyn Player,
    games: u32,
) -> MatchRecord {
    let config = MatchConfig {
        games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(player1, player2)
}
