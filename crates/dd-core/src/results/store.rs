//! JSON-backed, append-only result log.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::summary::SessionSummary;
use crate::config::GameSettings;
use crate::error::{DiceError, DiceResult};

/// The result log on disk: a single JSON array of [`SessionSummary`].
///
/// Every append rewrites the whole file through a temporary sibling and a
/// rename, so readers see either the old log or the new one.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// A store backed by the file at `path`. Nothing is read until needed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store at the location named by the settings.
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.results_file())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored summary, oldest first.
    ///
    /// A missing, empty or unparseable file reads as an empty log. Any other
    /// read failure is a [`DiceError::FileOperation`].
    pub fn load_all(&self) -> DiceResult<Vec<SessionSummary>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DiceError::file(&self.path, e)),
        };

        if bytes.trim_ascii().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_slice(&bytes) {
            Ok(log) => Ok(log),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "result log is unreadable, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Add `summary` to the end of the log.
    pub fn append(&self, summary: SessionSummary) -> DiceResult<()> {
        let mut log = self.load_all()?;
        log.push(summary);
        self.write_all(&log)?;
        debug!(path = %self.path.display(), entries = log.len(), "result log written");
        Ok(())
    }

    fn write_all(&self, log: &[SessionSummary]) -> DiceResult<()> {
        let io_err = |e: std::io::Error| DiceError::file(&self.path, e);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json =
            serde_json::to_string_pretty(log).map_err(|e| DiceError::file(&self.path, e))?;

        let tmp = self.temp_path();
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
