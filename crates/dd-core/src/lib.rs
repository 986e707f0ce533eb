//! Session engine for Dice Duel, a player-versus-computer dice contest.
//!
//! Provides the six-sided roll source, the two contestant flavours
//! (interactive and automated), round resolution with tie replays, the
//! `Setup → Playing → Finished` session engine and the append-only JSON
//! result log.

pub mod config;
pub mod contestant;
pub mod dice;
pub mod error;
pub mod results;
pub mod round;
pub mod session;

pub use config::{GameSettings, Level};
pub use contestant::{Automated, Contestant, Interactive, Roller};
pub use dice::{DieRoller, Face, RollSource, ScriptedRolls};
pub use error::{DiceError, DiceResult};
pub use results::{ResultStore, SessionSummary};
pub use round::{RoundOutcome, RoundResult, resolve};
pub use session::{
    NoopObserver, Phase, SessionEngine, SessionObserver, SessionReport, SessionSetup, Verdict,
};
