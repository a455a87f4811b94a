//! Cyclic outcome table for n-way rock-paper-scissors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one round from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Single-letter symbol used in the help table
    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Win => "V",
            Outcome::Lose => "L",
            Outcome::Draw => "D",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// n x n win/lose/draw relation over the move set, indexed by
/// (player move, computer move)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTable {
    n: usize,
    cells: Vec<Outcome>,
}

impl OutcomeTable {
    /// Build the table for `n` moves using cyclic offsets.
    ///
    /// Each move loses to the floor(n/2) moves that follow it in cyclic
    /// order and beats the (n-1)/2 moves that precede it; the diagonal
    /// stays Draw. For odd `n` this yields a round-robin tournament where
    /// every move beats exactly (n-1)/2 others.
    pub fn generate(n: usize) -> Self {
        debug_assert!(n >= 3 && n % 2 == 1, "move count must be odd and >= 3");

        let mut cells = vec![Outcome::Draw; n * n];
        let num_lose = n / 2;
        let num_win = n - num_lose - 1;

        for i in 0..n {
            for j in 1..=num_lose {
                cells[i * n + (i + j) % n] = Outcome::Lose;
            }
            for j in 1..=num_win {
                cells[i * n + (i + n - j) % n] = Outcome::Win;
            }
        }

        Self { n, cells }
    }

    /// Number of moves the table covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Outcome for the player picking `player` against the computer's
    /// `computer`.
    pub fn outcome(&self, player: usize, computer: usize) -> Outcome {
        self.cells[player * self.n + computer]
    }

    /// Rows in move order, for the help display.
    pub fn rows(&self) -> impl Iterator<Item = &[Outcome]> {
        self.cells.chunks(self.n)
    }
}
