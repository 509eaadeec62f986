//! Academic period — a bounded academic term with a lifecycle status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, subject::validate_name};

/// Lifecycle status of an academic period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
  #[default]
  Planned,
  Active,
  Closed,
}

/// A bounded academic term, e.g. "2026-1".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriod {
  id:         Option<String>,
  name:       String,
  start_date: NaiveDate,
  end_date:   NaiveDate,
  status:     PeriodStatus,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl AcademicPeriod {
  /// Build a new, not-yet-persisted period. The store assigns the id.
  pub fn new(
    name: impl Into<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: PeriodStatus,
  ) -> Result<Self> {
    let now = Utc::now();
    Self::from_parts(None, name.into(), start_date, end_date, status, now, now)
  }

  /// Rebuild a period from its constituent parts, re-running validation.
  pub fn from_parts(
    id: Option<String>,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: PeriodStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Result<Self> {
    validate_name(&name)?;
    if end_date <= start_date {
      return Err(Error::PeriodEndsBeforeStart { start: start_date, end: end_date });
    }
    Ok(Self { id, name, start_date, end_date, status, created_at, updated_at })
  }

  pub fn id(&self) -> Option<&str> { self.id.as_deref() }

  pub fn name(&self) -> &str { &self.name }

  pub fn start_date(&self) -> NaiveDate { self.start_date }

  pub fn end_date(&self) -> NaiveDate { self.end_date }

  pub fn status(&self) -> PeriodStatus { self.status }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
}
