//! Subject (asignatura) — a teaching unit with workload hours and a
//! pedagogical kind.
//!
//! All invariants are checked in the constructors. A `Subject` that exists
//! holds a valid name, positive workload hours, and consistent timestamps;
//! the rest of the system never re-checks them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Minimum number of characters in an entity name.
pub const MIN_NAME_LEN: usize = 3;

/// The pedagogical kind of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
  Theoretical,
  Practical,
  Mixed,
}

/// A course/teaching unit. Fields are private so an invalid or mutated
/// instance cannot be produced outside the validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
  id:             Option<i64>,
  name:           String,
  workload_hours: u32,
  kind:           SubjectKind,
  created_at:     DateTime<Utc>,
  updated_at:     DateTime<Utc>,
}

impl Subject {
  /// Build a new, not-yet-persisted subject. The id is assigned by the
  /// store on first save; both timestamps start at now.
  pub fn new(name: impl Into<String>, workload_hours: i64, kind: SubjectKind) -> Result<Self> {
    let now = Utc::now();
    Self::from_parts(None, name.into(), workload_hours, kind, now, now)
  }

  /// Rebuild a subject from its constituent parts (e.g. a stored row),
  /// re-running all field validation.
  pub fn from_parts(
    id: Option<i64>,
    name: String,
    workload_hours: i64,
    kind: SubjectKind,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Result<Self> {
    validate_name(&name)?;
    let workload_hours = u32::try_from(workload_hours)
      .ok()
      .filter(|h| *h > 0)
      .ok_or(Error::InvalidWorkloadHours(workload_hours))?;

    Ok(Self { id, name, workload_hours, kind, created_at, updated_at })
  }

  pub fn id(&self) -> Option<i64> { self.id }

  pub fn name(&self) -> &str { &self.name }

  pub fn workload_hours(&self) -> u32 { self.workload_hours }

  pub fn kind(&self) -> SubjectKind { self.kind }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
}

/// Shared name rule: at least [`MIN_NAME_LEN`] characters (not bytes).
pub(crate) fn validate_name(name: &str) -> Result<()> {
  if name.chars().count() < MIN_NAME_LEN {
    return Err(Error::NameTooShort(name.to_owned()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_subject_constructs() {
    let s = Subject::new("Álgebra", 4, SubjectKind::Theoretical).unwrap();
    assert_eq!(s.id(), None);
    assert_eq!(s.name(), "Álgebra");
    assert_eq!(s.workload_hours(), 4);
    assert_eq!(s.kind(), SubjectKind::Theoretical);
    assert_eq!(s.created_at(), s.updated_at());
  }

  #[test]
  fn short_name_is_rejected_for_every_kind() {
    for kind in [SubjectKind::Theoretical, SubjectKind::Practical, SubjectKind::Mixed] {
      let err = Subject::new("ab", 4, kind).unwrap_err();
      assert!(matches!(err, Error::NameTooShort(_)));
    }
    let err = Subject::new("", 4, SubjectKind::Mixed).unwrap_err();
    assert!(matches!(err, Error::NameTooShort(_)));
  }

  #[test]
  fn name_length_counts_characters_not_bytes() {
    // Two characters, four bytes.
    let err = Subject::new("ñá", 4, SubjectKind::Mixed).unwrap_err();
    assert!(matches!(err, Error::NameTooShort(_)));
    // Three characters, five bytes.
    Subject::new("ñán", 4, SubjectKind::Mixed).unwrap();
  }

  #[test]
  fn non_positive_hours_are_rejected() {
    for hours in [0, -1, -40] {
      let err = Subject::new("Cálculo I", hours, SubjectKind::Practical).unwrap_err();
      assert!(matches!(err, Error::InvalidWorkloadHours(_)));
    }
  }

  #[test]
  fn hours_beyond_u32_are_rejected() {
    let err = Subject::new("Cálculo I", i64::MAX, SubjectKind::Practical).unwrap_err();
    assert!(matches!(err, Error::InvalidWorkloadHours(_)));
  }

  #[test]
  fn from_parts_revalidates() {
    let now = Utc::now();
    let err =
      Subject::from_parts(Some(1), "ab".into(), 4, SubjectKind::Mixed, now, now).unwrap_err();
    assert!(matches!(err, Error::NameTooShort(_)));
  }
}
