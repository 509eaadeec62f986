//! Error type for `aula-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] aula_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("cannot decode stored value: {0}")]
  Decode(String),

  /// Attempted to update or delete a subject row that does not exist.
  #[error("subject {0} not found")]
  SubjectNotFound(i64),

  #[error("academic program {0} not found")]
  ProgramNotFound(String),

  #[error("academic period {0} not found")]
  PeriodNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
