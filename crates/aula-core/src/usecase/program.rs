//! Use cases for academic programs.
//!
//! Programs have no dedicated name lookup in the store contract, so the
//! uniqueness checks scan `find_all`.

use serde::Deserialize;

use crate::{
  Error, Result,
  program::{AcademicProgram, Duration, DurationUnit, EducationLevel, Modality},
  store::ProgramStore,
};

/// Input for [`create`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgram {
  pub name:           String,
  pub description:    String,
  pub level:          EducationLevel,
  pub modality:       Modality,
  pub duration_value: i64,
  pub duration_unit:  DurationUnit,
}

/// Input for [`update`]. Only the general info is mutable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramInfo {
  pub name:        String,
  pub description: String,
}

/// Create a program. The name must not already be in use.
pub async fn create<S: ProgramStore>(store: &S, input: CreateProgram) -> Result<AcademicProgram> {
  let taken = store
    .find_all()
    .await
    .map_err(Error::store)?
    .iter()
    .any(|p| p.name() == input.name);
  if taken {
    return Err(Error::DuplicateProgramName(input.name));
  }

  let duration = Duration::new(input.duration_value, input.duration_unit)?;
  let program =
    AcademicProgram::new(input.name, input.description, input.level, input.modality, duration)?;
  store.create(program).await.map_err(Error::store)
}

/// Rename/re-describe a program. The id must exist; a changed name must not
/// be held by a different program. Level, modality and duration are
/// untouched.
pub async fn update<S: ProgramStore>(
  store: &S,
  id: &str,
  input: UpdateProgramInfo,
) -> Result<AcademicProgram> {
  let mut current = store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ProgramNotFound(id.to_owned()))?;

  if input.name != current.name() {
    let taken = store
      .find_all()
      .await
      .map_err(Error::store)?
      .iter()
      .any(|p| p.name() == input.name && p.id() != Some(id));
    if taken {
      return Err(Error::DuplicateProgramName(input.name));
    }
  }

  current.update_general_info(input.name, input.description)?;
  store.update(id, current).await.map_err(Error::store)
}

/// Delete a program. The id must exist.
pub async fn delete<S: ProgramStore>(store: &S, id: &str) -> Result<()> {
  store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ProgramNotFound(id.to_owned()))?;
  store.delete(id).await.map_err(Error::store)
}

/// Fetch one program. Pass-through; absence is `Ok(None)`.
pub async fn get<S: ProgramStore>(store: &S, id: &str) -> Result<Option<AcademicProgram>> {
  store.find_by_id(id).await.map_err(Error::store)
}

/// List all programs. Pass-through.
pub async fn list<S: ProgramStore>(store: &S) -> Result<Vec<AcademicProgram>> {
  store.find_all().await.map_err(Error::store)
}
