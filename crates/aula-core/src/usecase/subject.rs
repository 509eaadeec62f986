//! Use cases for subjects.

use chrono::Utc;
use serde::Deserialize;

use crate::{
  Error, Result,
  store::SubjectStore,
  subject::{Subject, SubjectKind},
};

/// Input for [`create`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubject {
  pub name:           String,
  pub workload_hours: i64,
  pub kind:           SubjectKind,
}

/// Input for [`update`]. The target id travels separately (it comes from the
/// URL path, not the body).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubject {
  pub name:           String,
  pub workload_hours: i64,
  pub kind:           SubjectKind,
}

/// Create a subject. The name must not already be in use (case-sensitive
/// exact match); the check runs before the entity is constructed.
pub async fn create<S: SubjectStore>(store: &S, input: CreateSubject) -> Result<Subject> {
  if store
    .find_by_name(&input.name)
    .await
    .map_err(Error::store)?
    .is_some()
  {
    return Err(Error::DuplicateSubjectName(input.name));
  }

  let subject = Subject::new(input.name, input.workload_hours, input.kind)?;
  store.save(subject).await.map_err(Error::store)
}

/// Update a subject. The id must exist; if the name changes, it must not be
/// held by a different subject. `created_at` is preserved from the current
/// record.
pub async fn update<S: SubjectStore>(
  store: &S,
  id: i64,
  input: UpdateSubject,
) -> Result<Subject> {
  let current = store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::SubjectNotFound(id))?;

  if input.name != current.name()
    && let Some(existing) = store
      .find_by_name(&input.name)
      .await
      .map_err(Error::store)?
    && existing.id() != Some(id)
  {
    return Err(Error::DuplicateSubjectName(input.name));
  }

  let subject = Subject::from_parts(
    Some(id),
    input.name,
    input.workload_hours,
    input.kind,
    current.created_at(),
    Utc::now(),
  )?;
  store.save(subject).await.map_err(Error::store)
}

/// Delete a subject. The id must exist.
pub async fn delete<S: SubjectStore>(store: &S, id: i64) -> Result<()> {
  store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::SubjectNotFound(id))?;
  store.delete(id).await.map_err(Error::store)
}

/// Fetch one subject. Pass-through; absence is `Ok(None)`.
pub async fn get<S: SubjectStore>(store: &S, id: i64) -> Result<Option<Subject>> {
  store.find_by_id(id).await.map_err(Error::store)
}

/// List all subjects. Pass-through.
pub async fn list<S: SubjectStore>(store: &S) -> Result<Vec<Subject>> {
  store.find_all().await.map_err(Error::store)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::usecase::memory::MemoryCatalog;

  fn input(name: &str, hours: i64, kind: SubjectKind) -> CreateSubject {
    CreateSubject { name: name.into(), workload_hours: hours, kind }
  }

  #[tokio::test]
  async fn create_assigns_id() {
    let store = MemoryCatalog::default();
    let s = create(&store, input("Álgebra", 4, SubjectKind::Theoretical))
      .await
      .unwrap();
    assert_eq!(s.id(), Some(1));
    assert_eq!(s.name(), "Álgebra");
  }

  #[tokio::test]
  async fn create_duplicate_name_conflicts() {
    let store = MemoryCatalog::default();
    create(&store, input("Cálculo I", 4, SubjectKind::Theoretical))
      .await
      .unwrap();

    let err = create(&store, input("Cálculo I", 6, SubjectKind::Mixed))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::DuplicateSubjectName(_)));
  }

  #[tokio::test]
  async fn create_name_match_is_case_sensitive() {
    let store = MemoryCatalog::default();
    create(&store, input("Cálculo I", 4, SubjectKind::Theoretical))
      .await
      .unwrap();

    // Differs only in case: not a duplicate.
    create(&store, input("cálculo i", 4, SubjectKind::Theoretical))
      .await
      .unwrap();
  }

  #[tokio::test]
  async fn create_invalid_input_fails_validation() {
    let store = MemoryCatalog::default();
    let err = create(&store, input("ab", 4, SubjectKind::Practical))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NameTooShort(_)));

    let err = create(&store, input("Física", 0, SubjectKind::Practical))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::InvalidWorkloadHours(0)));
  }

  #[tokio::test]
  async fn update_preserves_created_at_and_renames() {
    let store = MemoryCatalog::default();
    let created = create(&store, input("Álgebra", 4, SubjectKind::Theoretical))
      .await
      .unwrap();
    let id = created.id().unwrap();

    let updated = update(
      &store,
      id,
      UpdateSubject {
        name:           "Álgebra II".into(),
        workload_hours: 4,
        kind:           SubjectKind::Theoretical,
      },
    )
    .await
    .unwrap();

    assert_eq!(updated.id(), Some(id));
    assert_eq!(updated.name(), "Álgebra II");
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() >= created.updated_at());
  }

  #[tokio::test]
  async fn update_to_own_name_is_not_a_conflict() {
    let store = MemoryCatalog::default();
    let created = create(&store, input("Álgebra", 4, SubjectKind::Theoretical))
      .await
      .unwrap();

    update(
      &store,
      created.id().unwrap(),
      UpdateSubject {
        name:           "Álgebra".into(),
        workload_hours: 6,
        kind:           SubjectKind::Mixed,
      },
    )
    .await
    .unwrap();
  }

  #[tokio::test]
  async fn update_to_anothers_name_conflicts() {
    let store = MemoryCatalog::default();
    create(&store, input("Álgebra", 4, SubjectKind::Theoretical))
      .await
      .unwrap();
    let other = create(&store, input("Cálculo I", 4, SubjectKind::Theoretical))
      .await
      .unwrap();

    let err = update(
      &store,
      other.id().unwrap(),
      UpdateSubject {
        name:           "Álgebra".into(),
        workload_hours: 4,
        kind:           SubjectKind::Theoretical,
      },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateSubjectName(_)));
  }

  #[tokio::test]
  async fn update_missing_id_is_not_found() {
    let store = MemoryCatalog::default();
    let err = update(
      &store,
      99,
      UpdateSubject {
        name:           "Física".into(),
        workload_hours: 4,
        kind:           SubjectKind::Practical,
      },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::SubjectNotFound(99)));
  }

  #[tokio::test]
  async fn delete_missing_id_is_not_found() {
    let store = MemoryCatalog::default();
    let err = delete(&store, 7).await.unwrap_err();
    assert!(matches!(err, Error::SubjectNotFound(7)));
  }

  #[tokio::test]
  async fn delete_then_get_returns_none() {
    let store = MemoryCatalog::default();
    let s = create(&store, input("Física", 3, SubjectKind::Practical))
      .await
      .unwrap();
    let id = s.id().unwrap();

    delete(&store, id).await.unwrap();
    assert!(get(&store, id).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn list_returns_all_ordered_by_name() {
    let store = MemoryCatalog::default();
    create(&store, input("Física", 3, SubjectKind::Practical))
      .await
      .unwrap();
    create(&store, input("Álgebra", 4, SubjectKind::Theoretical))
      .await
      .unwrap();

    let all = list(&store).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].name() <= all[1].name());
  }
}
