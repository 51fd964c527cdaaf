//! Tournament CLI
//!
//! Play matches between draughts players from the command line.

use std::env;
use std::path::Path;

use draughts_core::Player;
use minimax_player::{Difficulty, MinimaxPlayer};
use random_player::RandomPlayer;
use tournament::{MatchConfig, MatchRunner};

fn print_usage() {
    println!("Draughts Match Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <player1> <player2> [--games N] [--best-of] [--seed S]");
    println!("                   [--show-board] [--quiet] [--config FILE] [--save FILE]");
    println!();
    println!("Players:");
    println!("  random  - Uniform random over all valid moves");
    println!("  easy    - Tree search, shallow look-ahead");
    println!("  medium  - Tree search, moderate look-ahead");
    println!("  hard    - Tree search, deep look-ahead");
    println!();
    println!("Examples:");
    println!("  tournament match random hard --games 20");
    println!("  tournament match easy medium --games 5 --best-of --seed 7");
}

fn create_player(spec: &str, seed: Option<u64>) -> Box<dyn Player> {
    let difficulty = match spec.to_lowercase().as_str() {
        "random" => {
            return match seed {
                Some(s) => Box::new(RandomPlayer::seeded(s)),
                None => Box::new(RandomPlayer::new()),
            };
        }
        "easy" => Difficulty::easy(),
        "medium" => Difficulty::medium(),
        "hard" => Difficulty::hard(),
        _ => {
            eprintln!("Unknown player: {}, using random", spec);
            return Box::new(RandomPlayer::new());
        }
    };
    match seed {
        Some(s) => Box::new(MinimaxPlayer::seeded(difficulty, s)),
        None => Box::new(MinimaxPlayer::new(difficulty)),
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two player specifications");
        print_usage();
        return;
    }

    let spec1 = &args[0];
    let spec2 = &args[1];

    let mut config = MatchConfig::default();
    let mut seed: Option<u64> = None;
    let mut save_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games = args[i + 1].parse().unwrap_or(config.games);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::load(&args[i + 1]) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--save" => {
                if i + 1 < args.len() {
                    save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--best-of" => config.best_of = true,
            "--show-board" => config.show_board = true,
            "--quiet" | "-q" => config.verbose = false,
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", spec1, spec2);
    println!(
        "Games: {}{}",
        config.games,
        if config.best_of { " (best of)" } else { "" }
    );
    println!();

    let mut player1 = create_player(spec1, seed);
    let mut player2 = create_player(spec2, seed.map(|s| s + 1));

    let runner = MatchRunner::new(config);
    let record = runner.run_match(player1.as_mut(), player2.as_mut());

    println!();
    record.print_report(player1.name(), player2.name());

    if let Some(path) = save_path {
        if let Err(e) = record.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save match record: {}", e);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
