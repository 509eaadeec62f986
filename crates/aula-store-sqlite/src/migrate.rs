//! Versioned schema migrations.
//!
//! Each migration is an embedded SQL file applied exactly once, in version
//! order. Applied versions are recorded in the `schema_migrations` control
//! table; a migration and its version row are committed in one transaction,
//! so a failed migration leaves no trace. Re-running is a no-op for versions
//! already recorded.

use chrono::Utc;
use rusqlite::OptionalExtension as _;

/// One versioned DDL step.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
  pub version: &'static str,
  pub sql:     &'static str,
}

/// All migrations, in application order. Append-only: never edit or reorder
/// an entry that has shipped.
pub const MIGRATIONS: &[Migration] = &[
  Migration {
    version: "0001_create_subjects",
    sql:     include_str!("../migrations/0001_create_subjects.sql"),
  },
  Migration {
    version: "0002_create_programs",
    sql:     include_str!("../migrations/0002_create_programs.sql"),
  },
  Migration {
    version: "0003_create_periods",
    sql:     include_str!("../migrations/0003_create_periods.sql"),
  },
];

const CONTROL_TABLE: &str = "
CREATE TABLE IF NOT EXISTS schema_migrations (
    version     TEXT PRIMARY KEY,
    executed_at TEXT NOT NULL
);
";

/// Apply all pending migrations on `conn`.
pub(crate) fn run(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
  conn.execute_batch(CONTROL_TABLE)?;

  for migration in MIGRATIONS {
    let applied: bool = conn
      .query_row(
        "SELECT 1 FROM schema_migrations WHERE version = ?1",
        rusqlite::params![migration.version],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false);

    if applied {
      continue;
    }

    let tx = conn.transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.execute(
      "INSERT INTO schema_migrations (version, executed_at) VALUES (?1, ?2)",
      rusqlite::params![migration.version, Utc::now().to_rfc3339()],
    )?;
    tx.commit()?;
  }

  Ok(())
}
