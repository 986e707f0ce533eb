//! Game settings: the level table, dice glyphs, where results are kept and
//! how long to pause between rounds.
//!
//! Built once at start-up and handed around by reference.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dice::Face;

/// File name of the result log, placed next to the executable by default.
pub const RESULTS_FILE_NAME: &str = "results.json";

const DICE_GLYPHS: [&str; 6] = [
    "┌─────────┐\n│         │\n│    ●    │\n│         │\n└─────────┘",
    "┌─────────┐\n│ ●       │\n│         │\n│       ● │\n└─────────┘",
    "┌─────────┐\n│ ●       │\n│    ●    │\n│       ● │\n└─────────┘",
    "┌─────────┐\n│ ●     ● │\n│         │\n│ ●     ● │\n└─────────┘",
    "┌─────────┐\n│ ●     ● │\n│    ●    │\n│ ●     ● │\n└─────────┘",
    "┌─────────┐\n│ ●     ● │\n│ ●     ● │\n│ ●     ● │\n└─────────┘",
];

/// A selectable game length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// What the player types to pick this level.
    pub code: String,
    /// Number of scored rounds.
    pub rounds: u32,
    /// Human-readable name ("Short", "Medium", ...).
    pub label: String,
}

impl Level {
    fn new(code: &str, rounds: u32, label: &str) -> Self {
        Self {
            code: code.to_string(),
            rounds,
            label: label.to_string(),
        }
    }
}

/// Settings shared by the engine, the result store and the front end.
#[derive(Debug, Clone)]
pub struct GameSettings {
    levels: Vec<Level>,
    results_file: PathBuf,
    round_pause: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            levels: vec![
                Level::new("1", 5, "Short"),
                Level::new("2", 8, "Medium"),
                Level::new("3", 10, "Long"),
            ],
            results_file: default_results_file(),
            round_pause: Duration::from_secs(1),
        }
    }
}

impl GameSettings {
    /// Store results at `path` instead of next to the executable.
    pub fn with_results_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_file = path.into();
        self
    }

    /// Pause between rounds. `Duration::ZERO` disables pacing.
    pub fn with_round_pause(mut self, pause: Duration) -> Self {
        self.round_pause = pause;
        self
    }

    /// Add a level, or replace the one with the same code.
    pub fn with_level(mut self, code: &str, rounds: u32, label: &str) -> Self {
        let level = Level::new(code.trim(), rounds, label);
        match self.levels.iter_mut().find(|l| l.code == level.code) {
            Some(existing) => *existing = level,
            None => self.levels.push(level),
        }
        self
    }

    /// All levels in menu order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Round count for a level code, ignoring surrounding whitespace.
    pub fn round_count_for(&self, code: &str) -> Option<u32> {
        self.level_by_code(code).map(|l| l.rounds)
    }

    /// Whether `code` names a level.
    pub fn is_valid_level(&self, code: &str) -> bool {
        self.level_by_code(code).is_some()
    }

    /// Whether some level plays exactly `rounds` rounds.
    pub fn is_valid_round_count(&self, rounds: u32) -> bool {
        self.levels.iter().any(|l| l.rounds == rounds)
    }

    /// Label of the level that plays `rounds` rounds.
    pub fn level_label(&self, rounds: u32) -> Option<&str> {
        self.levels
            .iter()
            .find(|l| l.rounds == rounds)
            .map(|l| l.label.as_str())
    }

    /// Box-drawing picture of a die face.
    pub fn dice_glyph(&self, face: Face) -> &'static str {
        DICE_GLYPHS[usize::from(face.value() - 1)]
    }

    /// Where the result log lives.
    pub fn results_file(&self) -> &Path {
        &self.results_file
    }

    /// Pause between rounds.
    pub fn round_pause(&self) -> Duration {
        self.round_pause
    }

    fn level_by_code(&self, code: &str) -> Option<&Level> {
        let code = code.trim();
        self.levels.iter().find(|l| l.code == code)
    }
}

/// `results.json` next to the running executable, or in the working
/// directory if the executable path is unknown.
pub fn default_results_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(RESULTS_FILE_NAME)
}
