//! Repository contracts, one per entity.
//!
//! The traits are implemented by storage backends (e.g. `aula-store-sqlite`).
//! Use cases and the HTTP layer depend on these abstractions, never on a
//! concrete backend. Reads translate an absent row to `Ok(None)`, never to an
//! error; callers distinguish "not found" from "failure" explicitly.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{period::AcademicPeriod, program::AcademicProgram, subject::Subject};

// ─── Subjects ────────────────────────────────────────────────────────────────

/// Persistence contract for [`Subject`].
pub trait SubjectStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `subject`. Inserts (and assigns id and timestamps) when the id
  /// is `None`; updates by id otherwise, preserving `created_at` and
  /// assigning a fresh `updated_at`. Updating an absent id is an error.
  fn save(
    &self,
    subject: Subject,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  /// Retrieve a subject by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + '_;

  /// Retrieve a subject by exact, case-sensitive name match.
  fn find_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + 'a;

  /// List all subjects, ordered by name.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + '_;

  /// Delete a subject by id. Deleting an absent id is an error, never a
  /// silent no-op.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

// ─── Academic programs ───────────────────────────────────────────────────────

/// Persistence contract for [`AcademicProgram`].
pub trait ProgramStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new program, assigning its id.
  fn create(
    &self,
    program: AcademicProgram,
  ) -> impl Future<Output = Result<AcademicProgram, Self::Error>> + Send + '_;

  /// Retrieve a program by id. Returns `None` if not found.
  fn find_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<AcademicProgram>, Self::Error>> + Send + 'a;

  /// List all programs, ordered by name.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<AcademicProgram>, Self::Error>> + Send + '_;

  /// Overwrite the program stored under `id`. Updating an absent id is an
  /// error.
  fn update<'a>(
    &'a self,
    id: &'a str,
    program: AcademicProgram,
  ) -> impl Future<Output = Result<AcademicProgram, Self::Error>> + Send + 'a;

  /// Delete a program by id. Deleting an absent id is an error.
  fn delete<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── Academic periods ────────────────────────────────────────────────────────

/// Persistence contract for [`AcademicPeriod`].
pub trait PeriodStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new period, assigning its id and timestamps.
  fn create(
    &self,
    period: AcademicPeriod,
  ) -> impl Future<Output = Result<AcademicPeriod, Self::Error>> + Send + '_;

  /// Retrieve a period by id. Returns `None` if not found.
  fn find_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<AcademicPeriod>, Self::Error>> + Send + 'a;

  /// List all periods, ordered by start date.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<AcademicPeriod>, Self::Error>> + Send + '_;

  /// Overwrite the period stored under `id`, preserving `created_at` and
  /// assigning a fresh `updated_at`. Updating an absent id is an error.
  fn update<'a>(
    &'a self,
    id: &'a str,
    period: AcademicPeriod,
  ) -> impl Future<Output = Result<AcademicPeriod, Self::Error>> + Send + 'a;

  /// Delete a period by id. Deleting an absent id is an error.
  fn delete<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
