//! [`SqliteStore`] — the SQLite implementation of the catalog repository
//! traits.

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use aula_core::{
  period::AcademicPeriod,
  program::AcademicProgram,
  store::{PeriodStore, ProgramStore, SubjectStore},
  subject::Subject,
};

use crate::{
  Error, Result,
  encode::{
    RawPeriod, RawProgram, RawSubject, encode_date, encode_dt, encode_duration_unit,
    encode_level, encode_modality, encode_period_status, encode_subject_kind,
  },
  migrate,
};

const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A catalog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Opening the
/// store applies any pending migrations.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run pending migrations.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  pub(crate) async fn init(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        migrate::run(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SubjectStore impl ───────────────────────────────────────────────────────

fn subject_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSubject> {
  Ok(RawSubject {
    id:             row.get(0)?,
    name:           row.get(1)?,
    workload_hours: row.get(2)?,
    kind:           row.get(3)?,
    created_at:     row.get(4)?,
    updated_at:     row.get(5)?,
  })
}

const SUBJECT_COLUMNS: &str = "id, name, workload_hours, kind, created_at, updated_at";

impl SubjectStore for SqliteStore {
  type Error = Error;

  async fn save(&self, subject: Subject) -> Result<Subject> {
    let now = Utc::now();
    let name = subject.name().to_owned();
    let hours = i64::from(subject.workload_hours());
    let kind = encode_subject_kind(subject.kind()).to_owned();
    let now_str = encode_dt(now);

    match subject.id() {
      // Update by id; `created_at` stays as stored.
      Some(id) => {
        let affected = self
          .conn
          .call(move |conn| {
            Ok(conn.execute(
              "UPDATE subjects
               SET name = ?1, workload_hours = ?2, kind = ?3, updated_at = ?4
               WHERE id = ?5",
              rusqlite::params![name, hours, kind, now_str, id],
            )?)
          })
          .await?;

        if affected == 0 {
          return Err(Error::SubjectNotFound(id));
        }

        // Read the row back so the returned entity reports what is stored
        // (in particular the row's own `created_at`), not caller input.
        SubjectStore::find_by_id(self, id)
          .await?
          .ok_or(Error::SubjectNotFound(id))
      }

      // Insert; the store assigns id and both timestamps.
      None => {
        let id = self
          .conn
          .call(move |conn| {
            conn.execute(
              "INSERT INTO subjects (name, workload_hours, kind, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5)",
              rusqlite::params![name, hours, kind, now_str, now_str],
            )?;
            Ok(conn.last_insert_rowid())
          })
          .await?;

        let saved = Subject::from_parts(
          Some(id),
          subject.name().to_owned(),
          hours,
          subject.kind(),
          now,
          now,
        )?;
        Ok(saved)
      }
    }
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Subject>> {
    let raw: Option<RawSubject> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = ?1"),
              rusqlite::params![id],
              subject_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSubject::into_subject).transpose()
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Subject>> {
    let name = name.to_owned();

    let raw: Option<RawSubject> = self
      .conn
      .call(move |conn| {
        // `=` on TEXT is case-sensitive in SQLite, which is the contract.
        Ok(
          conn
            .query_row(
              &format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE name = ?1"),
              rusqlite::params![name],
              subject_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSubject::into_subject).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Subject>> {
    let raws: Vec<RawSubject> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {SUBJECT_COLUMNS} FROM subjects ORDER BY name"))?;
        let rows = stmt
          .query_map([], subject_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubject::into_subject).collect()
  }

  async fn delete(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM subjects WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::SubjectNotFound(id));
    }
    Ok(())
  }
}

// ─── ProgramStore impl ───────────────────────────────────────────────────────

fn program_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawProgram> {
  Ok(RawProgram {
    id:             row.get(0)?,
    name:           row.get(1)?,
    description:    row.get(2)?,
    level:          row.get(3)?,
    modality:       row.get(4)?,
    duration_value: row.get(5)?,
    duration_unit:  row.get(6)?,
  })
}

const PROGRAM_COLUMNS: &str =
  "id, name, description, level, modality, duration_value, duration_unit";

impl ProgramStore for SqliteStore {
  type Error = Error;

  async fn create(&self, program: AcademicProgram) -> Result<AcademicProgram> {
    let id = Uuid::new_v4().hyphenated().to_string();
    let name = program.name().to_owned();
    let description = program.description().to_owned();
    let level = encode_level(program.level()).to_owned();
    let modality = encode_modality(program.modality()).to_owned();
    let duration_value = i64::from(program.duration().value());
    let duration_unit = encode_duration_unit(program.duration().unit()).to_owned();

    let id_arg = id.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO programs (id, name, description, level, modality, duration_value, duration_unit)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_arg,
            name,
            description,
            level,
            modality,
            duration_value,
            duration_unit,
          ],
        )?;
        Ok(())
      })
      .await?;

    let created = AcademicProgram::from_parts(
      Some(id),
      program.name().to_owned(),
      program.description().to_owned(),
      program.level(),
      program.modality(),
      program.duration(),
    )?;
    Ok(created)
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<AcademicProgram>> {
    let id = id.to_owned();

    let raw: Option<RawProgram> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PROGRAM_COLUMNS} FROM programs WHERE id = ?1"),
              rusqlite::params![id],
              program_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawProgram::into_program).transpose()
  }

  async fn find_all(&self) -> Result<Vec<AcademicProgram>> {
    let raws: Vec<RawProgram> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PROGRAM_COLUMNS} FROM programs ORDER BY name"))?;
        let rows = stmt
          .query_map([], program_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawProgram::into_program).collect()
  }

  async fn update(&self, id: &str, program: AcademicProgram) -> Result<AcademicProgram> {
    let id = id.to_owned();
    let name = program.name().to_owned();
    let description = program.description().to_owned();
    let level = encode_level(program.level()).to_owned();
    let modality = encode_modality(program.modality()).to_owned();
    let duration_value = i64::from(program.duration().value());
    let duration_unit = encode_duration_unit(program.duration().unit()).to_owned();

    let id_arg = id.clone();
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE programs
           SET name = ?1, description = ?2, level = ?3, modality = ?4,
               duration_value = ?5, duration_unit = ?6
           WHERE id = ?7",
          rusqlite::params![
            name,
            description,
            level,
            modality,
            duration_value,
            duration_unit,
            id_arg,
          ],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::ProgramNotFound(id));
    }

    let updated = AcademicProgram::from_parts(
      Some(id),
      program.name().to_owned(),
      program.description().to_owned(),
      program.level(),
      program.modality(),
      program.duration(),
    )?;
    Ok(updated)
  }

  async fn delete(&self, id: &str) -> Result<()> {
    let id = id.to_owned();
    let id_arg = id.clone();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM programs WHERE id = ?1", rusqlite::params![id_arg])?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::ProgramNotFound(id));
    }
    Ok(())
  }
}

// ─── PeriodStore impl ────────────────────────────────────────────────────────

fn period_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPeriod> {
  Ok(RawPeriod {
    id:         row.get(0)?,
    name:       row.get(1)?,
    start_date: row.get(2)?,
    end_date:   row.get(3)?,
    status:     row.get(4)?,
    created_at: row.get(5)?,
    updated_at: row.get(6)?,
  })
}

const PERIOD_COLUMNS: &str =
  "id, name, start_date, end_date, status, created_at, updated_at";

impl PeriodStore for SqliteStore {
  type Error = Error;

  async fn create(&self, period: AcademicPeriod) -> Result<AcademicPeriod> {
    let id = Uuid::new_v4().hyphenated().to_string();
    let now = Utc::now();
    let name = period.name().to_owned();
    let start = encode_date(period.start_date());
    let end = encode_date(period.end_date());
    let status = encode_period_status(period.status()).to_owned();
    let now_str = encode_dt(now);

    let id_arg = id.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO periods (id, name, start_date, end_date, status, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_arg, name, start, end, status, now_str, now_str],
        )?;
        Ok(())
      })
      .await?;

    let created = AcademicPeriod::from_parts(
      Some(id),
      period.name().to_owned(),
      period.start_date(),
      period.end_date(),
      period.status(),
      now,
      now,
    )?;
    Ok(created)
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<AcademicPeriod>> {
    let id = id.to_owned();

    let raw: Option<RawPeriod> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERIOD_COLUMNS} FROM periods WHERE id = ?1"),
              rusqlite::params![id],
              period_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPeriod::into_period).transpose()
  }

  async fn find_all(&self) -> Result<Vec<AcademicPeriod>> {
    let raws: Vec<RawPeriod> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PERIOD_COLUMNS} FROM periods ORDER BY start_date"))?;
        let rows = stmt
          .query_map([], period_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPeriod::into_period).collect()
  }

  async fn update(&self, id: &str, period: AcademicPeriod) -> Result<AcademicPeriod> {
    let id = id.to_owned();
    let now = Utc::now();
    let name = period.name().to_owned();
    let start = encode_date(period.start_date());
    let end = encode_date(period.end_date());
    let status = encode_period_status(period.status()).to_owned();
    let now_str = encode_dt(now);

    let id_arg = id.clone();
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE periods
           SET name = ?1, start_date = ?2, end_date = ?3, status = ?4, updated_at = ?5
           WHERE id = ?6",
          rusqlite::params![name, start, end, status, now_str, id_arg],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::PeriodNotFound(id));
    }

    // Read back; `created_at` is whatever the row holds, not caller input.
    PeriodStore::find_by_id(self, &id)
      .await?
      .ok_or(Error::PeriodNotFound(id))
  }

  async fn delete(&self, id: &str) -> Result<()> {
    let id = id.to_owned();
    let id_arg = id.clone();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM periods WHERE id = ?1", rusqlite::params![id_arg])?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::PeriodNotFound(id));
    }
    Ok(())
  }
}
