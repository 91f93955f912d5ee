//! Settings persistence.

use std::path::PathBuf;

use tracing::debug;

use crate::config::TimerConfig;
use crate::error::{Result, TimerError};

/// Key-value style store holding the single settings record.
pub trait SettingsStore {
    /// Load the stored record, or `None` if nothing has been saved yet.
    ///
    /// Fields missing from the record are filled with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<TimerConfig>>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, config: &TimerConfig) -> Result<()>;
}

/// Settings record kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store the record at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<TimerConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            TimerError::Config(format!(
                "Failed to read settings file {}: {e}",
                self.path.display()
            ))
        })?;

        let config = TimerConfig::from_json(&contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to parse settings file {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), "loaded settings");
        Ok(Some(config))
    }

    fn save(&self, config: &TimerConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, config.to_json()?).map_err(|e| {
            TimerError::Config(format!(
                "Failed to write settings file {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// In-memory store for tests; clones share the same record.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    saves: std::rc::Rc<std::cell::Cell<usize>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    /// Store pre-seeded with a raw record.
    pub fn with_record(raw: &str) -> Self {
        let store = Self::default();
        *store.record.borrow_mut() = Some(raw.to_string());
        store
    }

    /// Store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    /// The raw stored record.
    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<TimerConfig>> {
        self.record
            .borrow()
            .as_deref()
            .map(TimerConfig::from_json)
            .transpose()
    }

    fn save(&self, config: &TimerConfig) -> Result<()> {
        if self.fail_writes {
            return Err(TimerError::Storage("storage unavailable".to_string()));
        }
        *self.record.borrow_mut() = Some(config.to_json()?);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
