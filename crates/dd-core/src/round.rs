//! Resolution of a single round.

use crate::dice::Face;

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The player rolled higher and gains the difference.
    PlayerWins,
    /// The opponent rolled higher; the player loses the difference.
    OpponentWins,
    /// Equal rolls. Nothing is scored and the round is replayed.
    Tie,
}

/// Both rolls of one round attempt and the signed difference between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The player's face.
    pub player_roll: Face,
    /// The opponent's face.
    pub computer_roll: Face,
    /// `player_roll - computer_roll`, applied to the player's score.
    pub delta: i64,
}

impl RoundOutcome {
    /// Classify the outcome by the sign of the delta.
    pub fn result(&self) -> RoundResult {
        match self.delta {
            1.. => RoundResult::PlayerWins,
            0 => RoundResult::Tie,
            _ => RoundResult::OpponentWins,
        }
    }

    /// Whether the round has to be replayed.
    pub fn is_tie(&self) -> bool {
        self.delta == 0
    }
}

/// Compare two rolls.
pub fn resolve(player_roll: Face, computer_roll: Face) -> RoundOutcome {
    RoundOutcome {
        player_roll,
        computer_roll,
        delta: i64::from(player_roll.value()) - i64::from(computer_roll.value()),
    }
}
