//! Error types for `aula-core`.
//!
//! Use cases surface four semantic kinds: validation (rejected at entity
//! construction), not-found, conflict (duplicate name), and store (any
//! persistence failure, propagated unmodified). The HTTP layer owns the
//! translation to transport status codes.

use chrono::NaiveDate;
use thiserror::Error;

use crate::subject::MIN_NAME_LEN;

#[derive(Debug, Error)]
pub enum Error {
  // ── Validation ────────────────────────────────────────────────────────

  #[error("name {0:?} is too short, the minimum is {MIN_NAME_LEN} characters")]
  NameTooShort(String),

  #[error("workload hours must be a positive whole number, got {0}")]
  InvalidWorkloadHours(i64),

  #[error("duration value must be positive, got {0}")]
  InvalidDuration(i64),

  #[error("period ends on {end}, which is not after its start {start}")]
  PeriodEndsBeforeStart { start: NaiveDate, end: NaiveDate },

  // ── Not found ─────────────────────────────────────────────────────────

  #[error("subject {0} not found")]
  SubjectNotFound(i64),

  #[error("academic program {0} not found")]
  ProgramNotFound(String),

  #[error("academic period {0} not found")]
  PeriodNotFound(String),

  // ── Conflict ──────────────────────────────────────────────────────────

  #[error("a subject named {0:?} already exists")]
  DuplicateSubjectName(String),

  #[error("an academic program named {0:?} already exists")]
  DuplicateProgramName(String),

  #[error("an academic period named {0:?} already exists")]
  DuplicatePeriodName(String),

  // ── Persistence ───────────────────────────────────────────────────────

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error as [`Error::Store`].
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  /// True for errors raised by entity constructors.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::NameTooShort(_)
        | Self::InvalidWorkloadHours(_)
        | Self::InvalidDuration(_)
        | Self::PeriodEndsBeforeStart { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
