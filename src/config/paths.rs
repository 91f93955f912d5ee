//! Path resolution for focus-timer data files.
//!
//! All data is stored in `~/.focus-timer/` unless another root is given:
//! - `settings.json` - Persisted settings record
//! - `history.db` - SQLite log of completed periods
//! - `focus-timer.log` - Log output of the terminal UI

use std::path::PathBuf;

use crate::error::TimerError;

/// Paths to focus-timer data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focus-timer/`
    pub root: PathBuf,
    /// Settings record: `~/.focus-timer/settings.json`
    pub settings_file: PathBuf,
    /// History database: `~/.focus-timer/history.db`
    pub history_db: PathBuf,
    /// Log file: `~/.focus-timer/focus-timer.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimerError> {
        let home = std::env::var("HOME")
            .map_err(|_| TimerError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focus-timer")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings.json"),
            history_db: root.join("history.db"),
            log_file: root.join("focus-timer.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TimerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TimerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
