//! Roshambo console game
//!
//! Plays an n-way rock-paper-scissors variant against the computer. Move
//! names come from the command line; the fairness digest is printed before
//! the first round and the HMAC key is revealed after every round so the
//! digest can be rechecked.

use roshambo_core::session::{EXIT_SENTINEL, HELP_SENTINEL};
use roshambo_core::{GameSession, Outcome, Turn};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Human label for a round result
fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Victory!!!",
        Outcome::Lose => "Lose...",
        Outcome::Draw => "Draw :)",
    }
}

/// Print the commitment digest and the numbered move menu
fn print_menu(session: &GameSession) {
    println!("HMAC: {}", session.commitment().digest());
    println!("Available moves:");
    for (i, name) in session.moves().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("{} - exit", EXIT_SENTINEL);
    println!("{} - help", HELP_SENTINEL);
}

fn main() -> ExitCode {
    // Diagnostics go to stderr via RUST_LOG; stdout stays clean for the game.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let names: Vec<String> = std::env::args().skip(1).collect();

    let mut session = match GameSession::new(names) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(session = %session.id(), "starting console game");

    print_menu(&session);
    println!("Enter your move:");

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        match session.handle_line(&line) {
            Turn::Quit => {
                println!("Thanks for playing!");
                return ExitCode::SUCCESS;
            }
            Turn::Table(rows) => {
                println!("Table of wins, loses, and draws:");
                for row in rows {
                    println!("{row}");
                }
                println!("Enter your move:");
            }
            Turn::Invalid { max } => {
                println!(
                    "Please enter a valid move between 1 and {max} \
                     (or '{HELP_SENTINEL}' for the table, '{EXIT_SENTINEL}' to quit):"
                );
            }
            Turn::Round(round) => {
                println!("Your Move: {}", round.player_move);
                println!("Computer Move: {}", round.computer_move);
                println!("Result: {}", outcome_label(round.outcome));
                println!("HMAC key: {}", round.revealed_key);
                println!("Enter your move:");
            }
        }
    }

    ExitCode::SUCCESS
}
