//! In-memory store used by the use-case tests. Lives behind `cfg(test)`;
//! the real backend is `aula-store-sqlite`.
//!
//! Keeps the same contract as a real backend: updating or deleting an absent
//! id is an error, never a silent no-op.

use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use crate::{
  period::AcademicPeriod,
  program::AcademicProgram,
  store::{PeriodStore, ProgramStore, SubjectStore},
  subject::Subject,
};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("no subject row with id {0}")]
  SubjectMissing(i64),

  #[error("no program row with id {0}")]
  ProgramMissing(String),

  #[error("no period row with id {0}")]
  PeriodMissing(String),
}

#[derive(Default)]
pub struct MemoryCatalog {
  inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
  next_subject_id: i64,
  subjects:        Vec<Subject>,
  programs:        Vec<(String, AcademicProgram)>,
  periods:         Vec<(String, AcademicPeriod)>,
}

fn next_uuid_like(n: usize) -> String {
  format!("mem-{n}")
}

impl SubjectStore for MemoryCatalog {
  type Error = MemoryError;

  async fn save(&self, subject: Subject) -> Result<Subject, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    let saved = match subject.id() {
      Some(id) => {
        let slot = inner
          .subjects
          .iter_mut()
          .find(|s| s.id() == Some(id))
          .ok_or(MemoryError::SubjectMissing(id))?;
        *slot = subject.clone();
        subject
      }
      None => {
        inner.next_subject_id += 1;
        let id = inner.next_subject_id;
        let assigned = Subject::from_parts(
          Some(id),
          subject.name().to_owned(),
          i64::from(subject.workload_hours()),
          subject.kind(),
          subject.created_at(),
          subject.updated_at(),
        )
        .unwrap();
        inner.subjects.push(assigned.clone());
        assigned
      }
    };
    Ok(saved)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Subject>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    Ok(inner.subjects.iter().find(|s| s.id() == Some(id)).cloned())
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Subject>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    Ok(inner.subjects.iter().find(|s| s.name() == name).cloned())
  }

  async fn find_all(&self) -> Result<Vec<Subject>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    let mut all = inner.subjects.clone();
    all.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(all)
  }

  async fn delete(&self, id: i64) -> Result<(), MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    if !inner.subjects.iter().any(|s| s.id() == Some(id)) {
      return Err(MemoryError::SubjectMissing(id));
    }
    inner.subjects.retain(|s| s.id() != Some(id));
    Ok(())
  }
}

impl ProgramStore for MemoryCatalog {
  type Error = MemoryError;

  async fn create(&self, program: AcademicProgram) -> Result<AcademicProgram, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    let id = next_uuid_like(inner.programs.len() + 1);
    let assigned = AcademicProgram::from_parts(
      Some(id.clone()),
      program.name().to_owned(),
      program.description().to_owned(),
      program.level(),
      program.modality(),
      program.duration(),
    )
    .unwrap();
    inner.programs.push((id, assigned.clone()));
    Ok(assigned)
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<AcademicProgram>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    Ok(inner.programs.iter().find(|(pid, _)| pid == id).map(|(_, p)| p.clone()))
  }

  async fn find_all(&self) -> Result<Vec<AcademicProgram>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    let mut all: Vec<_> = inner.programs.iter().map(|(_, p)| p.clone()).collect();
    all.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(all)
  }

  async fn update(
    &self,
    id: &str,
    program: AcademicProgram,
  ) -> Result<AcademicProgram, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    let slot = inner
      .programs
      .iter_mut()
      .find(|(pid, _)| pid == id)
      .ok_or_else(|| MemoryError::ProgramMissing(id.to_owned()))?;
    slot.1 = program.clone();
    Ok(program)
  }

  async fn delete(&self, id: &str) -> Result<(), MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    if !inner.programs.iter().any(|(pid, _)| pid == id) {
      return Err(MemoryError::ProgramMissing(id.to_owned()));
    }
    inner.programs.retain(|(pid, _)| pid != id);
    Ok(())
  }
}

impl PeriodStore for MemoryCatalog {
  type Error = MemoryError;

  async fn create(&self, period: AcademicPeriod) -> Result<AcademicPeriod, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    let id = next_uuid_like(inner.periods.len() + 1);
    let now = Utc::now();
    let assigned = AcademicPeriod::from_parts(
      Some(id.clone()),
      period.name().to_owned(),
      period.start_date(),
      period.end_date(),
      period.status(),
      now,
      now,
    )
    .unwrap();
    inner.periods.push((id, assigned.clone()));
    Ok(assigned)
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<AcademicPeriod>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    Ok(inner.periods.iter().find(|(pid, _)| pid == id).map(|(_, p)| p.clone()))
  }

  async fn find_all(&self) -> Result<Vec<AcademicPeriod>, MemoryError> {
    let inner = self.inner.lock().unwrap();
    let mut all: Vec<_> = inner.periods.iter().map(|(_, p)| p.clone()).collect();
    all.sort_by_key(|p| p.start_date());
    Ok(all)
  }

  async fn update(&self, id: &str, period: AcademicPeriod) -> Result<AcademicPeriod, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    let slot = inner
      .periods
      .iter_mut()
      .find(|(pid, _)| pid == id)
      .ok_or_else(|| MemoryError::PeriodMissing(id.to_owned()))?;
    slot.1 = period.clone();
    Ok(period)
  }

  async fn delete(&self, id: &str) -> Result<(), MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    if !inner.periods.iter().any(|(pid, _)| pid == id) {
      return Err(MemoryError::PeriodMissing(id.to_owned()));
    }
    inner.periods.retain(|(pid, _)| pid != id);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    program::{Duration, DurationUnit, EducationLevel, Modality},
    subject::SubjectKind,
  };

  // The mock must hold the same line as a real backend: writes against an
  // absent id error instead of silently succeeding.
  #[tokio::test]
  async fn writes_against_absent_ids_error() {
    let store = MemoryCatalog::default();
    let now = Utc::now();

    let ghost =
      Subject::from_parts(Some(9), "Fantasma".into(), 2, SubjectKind::Mixed, now, now).unwrap();
    assert!(matches!(
      store.save(ghost).await.unwrap_err(),
      MemoryError::SubjectMissing(9)
    ));
    assert!(matches!(
      SubjectStore::delete(&store, 9).await.unwrap_err(),
      MemoryError::SubjectMissing(9)
    ));

    let program = AcademicProgram::new(
      "Ingeniería de Sistemas",
      "desc",
      EducationLevel::Undergraduate,
      Modality::OnSite,
      Duration::new(10, DurationUnit::Semesters).unwrap(),
    )
    .unwrap();
    assert!(matches!(
      ProgramStore::update(&store, "missing", program).await.unwrap_err(),
      MemoryError::ProgramMissing(_)
    ));
    assert!(matches!(
      PeriodStore::delete(&store, "missing").await.unwrap_err(),
      MemoryError::PeriodMissing(_)
    ));
  }
}
