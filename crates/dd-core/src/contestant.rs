//! Contestants: a named score ledger plus a way of rolling.
//!
//! The two sides of a duel share nothing but the ledger, so the rolling
//! behaviour is a [`Roller`] capability plugged into [`Contestant`]:
//! [`Automated`] rolls at once, [`Interactive`] waits for the player to
//! press Enter.

use std::io::{BufRead, Write};

use crate::dice::{Face, RollSource};
use crate::error::{DiceError, DiceResult};

/// Display name of the automated opponent.
pub const COMPUTER_NAME: &str = "Computer";

const ROLL_PROMPT: &str = "Press Enter to roll the dice...";
const ROLL_REMINDER: &str = "Please press Enter to roll the dice.";

/// How a contestant obtains a die face.
pub trait Roller {
    /// Produce one face, possibly waiting on outside input.
    fn roll(&mut self) -> DiceResult<Face>;
}

/// Rolls immediately from its source. Never fails.
#[derive(Debug, Clone)]
pub struct Automated<S> {
    source: S,
}

impl<S: RollSource> Automated<S> {
    /// Wrap a roll source.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: RollSource> Roller for Automated<S> {
    fn roll(&mut self) -> DiceResult<Face> {
        Ok(self.source.roll())
    }
}

/// Rolls once the player confirms with an empty line.
///
/// Any other line prints a reminder and waits again. End of input, or an
/// I/O failure on either stream, is an [`DiceError::InvalidRoll`].
#[derive(Debug)]
pub struct Interactive<S, R, W> {
    source: S,
    input: R,
    output: W,
}

impl<S, R, W> Interactive<S, R, W>
where
    S: RollSource,
    R: BufRead,
    W: Write,
{
    /// Read confirmations from `input`, write prompts to `output`.
    pub fn new(source: S, input: R, output: W) -> Self {
        Self {
            source,
            input,
            output,
        }
    }

    /// Give back the prompt stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn wait_for_confirmation(&mut self) -> std::io::Result<bool> {
        let mut line = String::new();
        loop {
            write!(self.output, "{ROLL_PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            if line.trim_end_matches(['\r', '\n']).is_empty() {
                return Ok(true);
            }
            writeln!(self.output, "{ROLL_REMINDER}")?;
        }
    }
}

impl<S, R, W> Roller for Interactive<S, R, W>
where
    S: RollSource,
    R: BufRead,
    W: Write,
{
    fn roll(&mut self) -> DiceResult<Face> {
        match self.wait_for_confirmation() {
            Ok(true) => Ok(self.source.roll()),
            Ok(false) => Err(DiceError::InvalidRoll("input closed".to_string())),
            Err(e) => Err(DiceError::InvalidRoll(e.to_string())),
        }
    }
}

/// A named participant with a running signed score.
///
/// The score only changes through [`update_score`](Self::update_score) and
/// [`reset_score`](Self::reset_score).
#[derive(Debug, Clone)]
pub struct Contestant<R> {
    name: String,
    score: i64,
    roller: R,
}

impl<R> Contestant<R> {
    /// Create a contestant with a score of zero. The name is trimmed and
    /// must not be empty.
    pub fn new(name: &str, roller: R) -> DiceResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DiceError::InvalidInput("name cannot be empty".to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            score: 0,
            roller,
        })
    }

    /// The automated opponent, named [`COMPUTER_NAME`].
    pub fn computer(roller: R) -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            score: 0,
            roller,
        }
    }

    /// The contestant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The running score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Add `delta` to the score. Negative deltas subtract; nothing is clamped.
    pub fn update_score(&mut self, delta: i64) {
        self.score += delta;
    }

    /// Set the score back to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl<R: Roller> Contestant<R> {
    /// Roll a die the way this contestant rolls.
    pub fn roll(&mut self) -> DiceResult<Face> {
        self.roller.roll()
    }
}
