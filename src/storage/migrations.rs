//! Database migrations for the history log.
//!
//! Each migration upgrades the schema by one version and runs automatically
//! when the database is opened.

use rusqlite::Connection;

use crate::error::TimerError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, TimerError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TimerError::Storage(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), TimerError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TimerError::Storage(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), TimerError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), TimerError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TimerError::Storage(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: completed period log, indexed by time and mode.
fn migrate_v1(conn: &Connection) -> Result<(), TimerError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS completed_periods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            mode TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL,
            skipped INTEGER NOT NULL DEFAULT 0,
            completed_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_completed_periods_completed_at
        ON completed_periods(completed_at);

        CREATE INDEX IF NOT EXISTS idx_completed_periods_mode
        ON completed_periods(mode);
        ",
    )
    .map_err(|e| TimerError::Storage(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO completed_periods (mode, duration_seconds, skipped, completed_at)
             VALUES ('focus', 1500, 0, '2024-01-01T10:25:00+00:00')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
