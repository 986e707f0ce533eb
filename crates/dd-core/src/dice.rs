//! Six-sided dice and the sources that roll them.
//!
//! Every roll in a session comes from a [`RollSource`]. Live play uses a
//! [`DieRoller`] backed by `StdRng`; replays and tests use [`ScriptedRolls`],
//! which hands out a fixed sequence of faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DiceError, DiceResult};

/// Lowest face of the die.
pub const MIN_FACE: u8 = 1;
/// Highest face of the die.
pub const MAX_FACE: u8 = 6;

/// The face of a six-sided die, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// Create a face, or `None` if `value` is outside `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_FACE..=MAX_FACE).contains(&value).then_some(Self(value))
    }

    /// The pip count on this face.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that produces uniformly distributed die faces.
pub trait RollSource {
    /// Roll once.
    fn roll(&mut self) -> Face;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll(&mut self) -> Face {
        (**self).roll()
    }
}

/// A fair d6 backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct DieRoller {
    rng: StdRng,
}

impl DieRoller {
    /// Create a roller with a fixed seed for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Derive an independent roller from this one.
    ///
    /// Forks of a seeded roller are reproducible: the same seed and the same
    /// number of forks give the same sequences.
    pub fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::from_rng(&mut self.rng),
        }
    }
}

impl Default for DieRoller {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RollSource for DieRoller {
    fn roll(&mut self) -> Face {
        Face(self.rng.random_range(MIN_FACE..=MAX_FACE))
    }
}

/// Replays a fixed sequence of faces, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    faces: Vec<Face>,
    next: usize,
}

impl ScriptedRolls {
    /// Create a script from already-validated faces.
    pub fn new(faces: Vec<Face>) -> DiceResult<Self> {
        if faces.is_empty() {
            return Err(DiceError::InvalidInput(
                "a roll script needs at least one face".to_string(),
            ));
        }
        Ok(Self { faces, next: 0 })
    }

    /// Create a script from raw pip values, rejecting anything outside `1..=6`.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> DiceResult<Self> {
        let faces = values
            .into_iter()
            .map(|v| {
                Face::new(v).ok_or_else(|| {
                    DiceError::InvalidInput(format!("{v} is not a face of a six-sided die"))
                })
            })
            .collect::<DiceResult<Vec<_>>>()?;
        Self::new(faces)
    }

    /// How many faces have been handed out so far.
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> Face {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}
