//! Storage layer for focus-timer.
//!
//! This module provides persistence for:
//! - The settings record (one JSON document)
//! - Completed period history (SQLite)

mod database;
mod history;
mod migrations;
mod settings;

pub use database::Database;
pub use history::{HistoryStore, ModeSummary, PeriodRecord};
#[cfg(test)]
pub use settings::MemoryStore;
pub use settings::{JsonFileStore, SettingsStore};
