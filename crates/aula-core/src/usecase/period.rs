//! Use cases for academic periods.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{
  Error, Result,
  period::{AcademicPeriod, PeriodStatus},
  store::PeriodStore,
};

/// Input for [`create`]. A missing status defaults to `planned`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriod {
  pub name:       String,
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  #[serde(default)]
  pub status:     PeriodStatus,
}

/// Input for [`update`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeriod {
  pub name:       String,
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  pub status:     PeriodStatus,
}

/// Create a period. The name must not already be in use.
pub async fn create<S: PeriodStore>(store: &S, input: CreatePeriod) -> Result<AcademicPeriod> {
  let taken = store
    .find_all()
    .await
    .map_err(Error::store)?
    .iter()
    .any(|p| p.name() == input.name);
  if taken {
    return Err(Error::DuplicatePeriodName(input.name));
  }

  let period = AcademicPeriod::new(input.name, input.start_date, input.end_date, input.status)?;
  store.create(period).await.map_err(Error::store)
}

/// Update a period. The id must exist; a changed name must not be held by a
/// different period. `created_at` is preserved from the current record.
pub async fn update<S: PeriodStore>(
  store: &S,
  id: &str,
  input: UpdatePeriod,
) -> Result<AcademicPeriod> {
  let current = store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::PeriodNotFound(id.to_owned()))?;

  if input.name != current.name() {
    let taken = store
      .find_all()
      .await
      .map_err(Error::store)?
      .iter()
      .any(|p| p.name() == input.name && p.id() != Some(id));
    if taken {
      return Err(Error::DuplicatePeriodName(input.name));
    }
  }

  let period = AcademicPeriod::from_parts(
    Some(id.to_owned()),
    input.name,
    input.start_date,
    input.end_date,
    input.status,
    current.created_at(),
    Utc::now(),
  )?;
  store.update(id, period).await.map_err(Error::store)
}

/// Delete a period. The id must exist.
pub async fn delete<S: PeriodStore>(store: &S, id: &str) -> Result<()> {
  store
    .find_by_id(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::PeriodNotFound(id.to_owned()))?;
  store.delete(id).await.map_err(Error::store)
}

/// Fetch one period. Pass-through; absence is `Ok(None)`.
pub async fn get<S: PeriodStore>(store: &S, id: &str) -> Result<Option<AcademicPeriod>> {
  store.find_by_id(id).await.map_err(Error::store)
}

/// List all periods. Pass-through.
pub async fn list<S: PeriodStore>(store: &S) -> Result<Vec<AcademicPeriod>> {
  store.find_all().await.map_err(Error::store)
}
