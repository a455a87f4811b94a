//! Round-resolution state machine.
//!
//! One session owns the move set, the outcome table, the fairness
//! commitment, and the computer's move cursor. Each trimmed input line maps
//! to a [`Turn`] value; the caller does all printing, so the machine can be
//! driven from tests with a fixed sequence of strings.

mod types;

pub use types::{RoundOutcome, SessionId, Turn};

use crate::crypto::MoveCommitment;
use crate::game::{ConfigError, MoveSet, OutcomeTable};
use tracing::{debug, info};

/// Exit sentinel accepted on any input line
pub const EXIT_SENTINEL: &str = "0";
/// Help sentinel accepted on any input line
pub const HELP_SENTINEL: &str = "?";

/// A committed game session against the cycling computer opponent
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    table: OutcomeTable,
    commitment: MoveCommitment,
    /// Index of the computer's move for the upcoming round
    cursor: usize,
}

impl GameSession {
    /// Validate the move tokens and set up a committed session.
    ///
    /// The commitment key is generated here; its digest must be shown to
    /// the player before the first round is resolved.
    pub fn new(names: Vec<String>) -> Result<Self, ConfigError> {
        let moves = MoveSet::new(names)?;
        let table = OutcomeTable::generate(moves.len());
        let commitment = MoveCommitment::commit(&moves);
        let id = SessionId::new();

        info!(session = %id, moves = moves.len(), digest = %commitment.digest(), "session committed");

        Ok(Self {
            id,
            moves,
            table,
            commitment,
            cursor: 0,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The move set this session was configured with.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The commitment whose digest is shown before the first round.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Index of the computer's move for the upcoming round.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Render the outcome table for the help display, one symbol row per
    /// move, symbols joined by single spaces.
    pub fn render_table(&self) -> Vec<String> {
        self.table
            .rows()
            .map(|row| {
                row.iter()
                    .map(|outcome| outcome.symbol())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Advance the state machine by one input line.
    ///
    /// Only a round resolution mutates the session; help, exit, and invalid
    /// input leave the cursor untouched.
    pub fn handle_line(&mut self, line: &str) -> Turn {
        let line = line.trim();

        if line == EXIT_SENTINEL {
            info!(session = %self.id, "player quit");
            return Turn::Quit;
        }
        if line == HELP_SENTINEL {
            return Turn::Table(self.render_table());
        }

        match line.parse::<usize>() {
            Ok(m) if (1..=self.moves.len()).contains(&m) => Turn::Round(self.resolve(m - 1)),
            _ => {
                debug!(session = %self.id, input = line, "invalid move");
                Turn::Invalid {
                    max: self.moves.len(),
                }
            }
        }
    }

    /// Resolve one round: look up the outcome, reveal the key, advance the
    /// computer's cursor cyclically.
    fn resolve(&mut self, player: usize) -> RoundOutcome {
        let computer = self.cursor;
        let outcome = self.table.outcome(player, computer);

        debug!(
            session = %self.id,
            player = self.moves.name(player),
            computer = self.moves.name(computer),
            ?outcome,
            "round resolved"
        );

        let report = RoundOutcome {
            player_move: self.moves.name(player).to_string(),
            computer_move: self.moves.name(computer).to_string(),
            outcome,
            revealed_key: self.commitment.reveal().to_string(),
        };

        self.cursor = (self.cursor + 1) % self.moves.len();
        report
    }
}
