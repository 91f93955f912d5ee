//! Log of completed periods.
//!
//! Every finished focus or break period is appended with its mode, how long
//! it actually ran, and whether it was skipped.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use serde::Serialize;

use super::Database;
use crate::error::TimerError;
use crate::timer::{Completion, Mode};

/// A stored completed period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    /// Database ID
    pub id: i64,
    /// Mode that finished
    pub mode: Mode,
    /// Seconds the period actually ran
    pub duration_seconds: i64,
    /// Cut short by a skip
    pub skipped: bool,
    /// When it finished
    pub completed_at: DateTime<Utc>,
}

/// Per-mode totals over a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSummary {
    /// Mode being summarised
    pub mode: Mode,
    /// Number of finished periods
    pub periods: i64,
    /// How many of those were skipped
    pub skipped: i64,
    /// Total seconds spent
    pub total_seconds: i64,
}

/// Storage for completed periods.
pub struct HistoryStore {
    db: Database,
}

impl HistoryStore {
    /// Open the history database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(path: &std::path::Path) -> Result<Self, TimerError> {
        Ok(Self {
            db: Database::open_at(path)?,
        })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Append a completion finished at `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record(&self, completion: &Completion, at: DateTime<Utc>) -> Result<i64, TimerError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO completed_periods (mode, duration_seconds, skipped, completed_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                completion.finished.as_str(),
                completion.duration_seconds,
                completion.skipped,
                timestamp(at),
            ],
        )
        .map_err(|e| TimerError::Storage(format!("Failed to record period: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Most recent periods, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<PeriodRecord>, TimerError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, mode, duration_seconds, skipped, completed_at
                  FROM completed_periods
                  ORDER BY completed_at DESC, id DESC
                  LIMIT ?1",
            )
            .map_err(|e| TimerError::Storage(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([i64::try_from(limit).unwrap_or(i64::MAX)], row_to_record)
            .map_err(|e| TimerError::Storage(format!("Failed to query periods: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    /// Totals per mode for periods finished at or after `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn summary_since(&self, start: DateTime<Utc>) -> Result<Vec<ModeSummary>, TimerError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT mode, COUNT(*), COALESCE(SUM(skipped), 0), COALESCE(SUM(duration_seconds), 0)
                  FROM completed_periods
                  WHERE completed_at >= ?1
                  GROUP BY mode",
            )
            .map_err(|e| TimerError::Storage(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([timestamp(start)], |row| {
                Ok(ModeSummary {
                    mode: mode_column(row, 0)?,
                    periods: row.get(1)?,
                    skipped: row.get(2)?,
                    total_seconds: row.get(3)?,
                })
            })
            .map_err(|e| TimerError::Storage(format!("Failed to summarise periods: {e}")))?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        summaries.sort_by_key(|s| s.mode.index());

        Ok(summaries)
    }

    /// Delete every stored period. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<usize, TimerError> {
        self.db
            .connection()
            .execute("DELETE FROM completed_periods", [])
            .map_err(|e| TimerError::Storage(format!("Failed to clear history: {e}")))
    }
}

// Fixed-width UTC timestamps so text comparison matches time order.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn mode_column(row: &Row<'_>, idx: usize) -> Result<Mode, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn row_to_record(row: &Row<'_>) -> Result<PeriodRecord, rusqlite::Error> {
    let completed_at_str: String = row.get(4)?;
    let completed_at = DateTime::parse_from_rfc3339(&completed_at_str)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(PeriodRecord {
        id: row.get(0)?,
        mode: mode_column(row, 1)?,
        duration_seconds: row.get(2)?,
        skipped: row.get(3)?,
        completed_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn create_test_storage() -> HistoryStore {
        let db = Database::open_in_memory().unwrap();
        HistoryStore::with_database(db)
    }

    fn completion(finished: Mode, duration_seconds: u32, skipped: bool) -> Completion {
        Completion {
            finished,
            next: Mode::Focus,
            session_count: 1,
            duration_seconds,
            skipped,
        }
    }

    #[test]
    fn test_record_and_recent() {
        let storage = create_test_storage();
        let now = Utc::now();

        storage
            .record(&completion(Mode::Focus, 1500, false), now - Duration::minutes(10))
            .unwrap();
        let id = storage
            .record(&completion(Mode::ShortBreak, 120, true), now)
            .unwrap();

        let recent = storage.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, id);
        assert_eq!(recent[0].mode, Mode::ShortBreak);
        assert!(recent[0].skipped);
        assert_eq!(recent[1].mode, Mode::Focus);
        assert_eq!(recent[1].duration_seconds, 1500);
    }

    #[test]
    fn test_recent_respects_limit() {
        let storage = create_test_storage();
        for _ in 0..5 {
            storage
                .record(&completion(Mode::Focus, 60, false), Utc::now())
                .unwrap();
        }

        assert_eq!(storage.recent(3).unwrap().len(), 3);
    }

    #[test]
    fn test_summary_since() {
        let storage = create_test_storage();
        let now = Utc::now();

        storage
            .record(&completion(Mode::Focus, 1500, false), now - Duration::days(2))
            .unwrap();
        storage
            .record(&completion(Mode::Focus, 1500, false), now)
            .unwrap();
        storage
            .record(&completion(Mode::Focus, 600, true), now)
            .unwrap();
        storage
            .record(&completion(Mode::LongBreak, 900, false), now)
            .unwrap();

        let summary = storage.summary_since(now - Duration::hours(1)).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].mode, Mode::Focus);
        assert_eq!(summary[0].periods, 2);
        assert_eq!(summary[0].skipped, 1);
        assert_eq!(summary[0].total_seconds, 2100);
        assert_eq!(summary[1].mode, Mode::LongBreak);
    }

    #[test]
    fn test_clear() {
        let storage = create_test_storage();
        storage
            .record(&completion(Mode::Focus, 60, false), Utc::now())
            .unwrap();

        assert_eq!(storage.clear().unwrap(), 1);
        assert!(storage.recent(10).unwrap().is_empty());
    }
}
