//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, dates as `YYYY-MM-DD`, enums as
//! their lowercase discriminants, UUIDs as hyphenated lowercase strings.
//! Decoding always goes back through the entity constructors, so a corrupted
//! row can never produce an invalid entity.

use aula_core::{
  period::{AcademicPeriod, PeriodStatus},
  program::{AcademicProgram, Duration, DurationUnit, EducationLevel, Modality},
  subject::{Subject, SubjectKind},
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("timestamp {s:?}: {e}")))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::Decode(format!("date {s:?}: {e}")))
}

// ─── SubjectKind ─────────────────────────────────────────────────────────────

pub fn encode_subject_kind(k: SubjectKind) -> &'static str {
  match k {
    SubjectKind::Theoretical => "theoretical",
    SubjectKind::Practical => "practical",
    SubjectKind::Mixed => "mixed",
  }
}

pub fn decode_subject_kind(s: &str) -> Result<SubjectKind> {
  match s {
    "theoretical" => Ok(SubjectKind::Theoretical),
    "practical" => Ok(SubjectKind::Practical),
    "mixed" => Ok(SubjectKind::Mixed),
    other => Err(Error::Decode(format!("unknown subject kind: {other:?}"))),
  }
}

// ─── EducationLevel ──────────────────────────────────────────────────────────

pub fn encode_level(l: EducationLevel) -> &'static str {
  match l {
    EducationLevel::Technical => "technical",
    EducationLevel::Technological => "technological",
    EducationLevel::Undergraduate => "undergraduate",
    EducationLevel::Postgraduate => "postgraduate",
  }
}

pub fn decode_level(s: &str) -> Result<EducationLevel> {
  match s {
    "technical" => Ok(EducationLevel::Technical),
    "technological" => Ok(EducationLevel::Technological),
    "undergraduate" => Ok(EducationLevel::Undergraduate),
    "postgraduate" => Ok(EducationLevel::Postgraduate),
    other => Err(Error::Decode(format!("unknown education level: {other:?}"))),
  }
}

// ─── Modality ────────────────────────────────────────────────────────────────

pub fn encode_modality(m: Modality) -> &'static str {
  match m {
    Modality::OnSite => "on-site",
    Modality::Virtual => "virtual",
    Modality::Hybrid => "hybrid",
  }
}

pub fn decode_modality(s: &str) -> Result<Modality> {
  match s {
    "on-site" => Ok(Modality::OnSite),
    "virtual" => Ok(Modality::Virtual),
    "hybrid" => Ok(Modality::Hybrid),
    other => Err(Error::Decode(format!("unknown modality: {other:?}"))),
  }
}

// ─── DurationUnit ────────────────────────────────────────────────────────────

pub fn encode_duration_unit(u: DurationUnit) -> &'static str {
  match u {
    DurationUnit::Months => "months",
    DurationUnit::Semesters => "semesters",
    DurationUnit::Years => "years",
  }
}

pub fn decode_duration_unit(s: &str) -> Result<DurationUnit> {
  match s {
    "months" => Ok(DurationUnit::Months),
    "semesters" => Ok(DurationUnit::Semesters),
    "years" => Ok(DurationUnit::Years),
    other => Err(Error::Decode(format!("unknown duration unit: {other:?}"))),
  }
}

// ─── PeriodStatus ────────────────────────────────────────────────────────────

pub fn encode_period_status(s: PeriodStatus) -> &'static str {
  match s {
    PeriodStatus::Planned => "planned",
    PeriodStatus::Active => "active",
    PeriodStatus::Closed => "closed",
  }
}

pub fn decode_period_status(s: &str) -> Result<PeriodStatus> {
  match s {
    "planned" => Ok(PeriodStatus::Planned),
    "active" => Ok(PeriodStatus::Active),
    "closed" => Ok(PeriodStatus::Closed),
    other => Err(Error::Decode(format!("unknown period status: {other:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `subjects` row.
pub struct RawSubject {
  pub id:             i64,
  pub name:           String,
  pub workload_hours: i64,
  pub kind:           String,
  pub created_at:     String,
  pub updated_at:     String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    let subject = Subject::from_parts(
      Some(self.id),
      self.name,
      self.workload_hours,
      decode_subject_kind(&self.kind)?,
      decode_dt(&self.created_at)?,
      decode_dt(&self.updated_at)?,
    )?;
    Ok(subject)
  }
}

/// Raw values read directly from a `programs` row.
pub struct RawProgram {
  pub id:             String,
  pub name:           String,
  pub description:    String,
  pub level:          String,
  pub modality:       String,
  pub duration_value: i64,
  pub duration_unit:  String,
}

impl RawProgram {
  pub fn into_program(self) -> Result<AcademicProgram> {
    let duration = Duration::new(self.duration_value, decode_duration_unit(&self.duration_unit)?)?;
    let program = AcademicProgram::from_parts(
      Some(self.id),
      self.name,
      self.description,
      decode_level(&self.level)?,
      decode_modality(&self.modality)?,
      duration,
    )?;
    Ok(program)
  }
}

/// Raw values read directly from a `periods` row.
pub struct RawPeriod {
  pub id:         String,
  pub name:       String,
  pub start_date: String,
  pub end_date:   String,
  pub status:     String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawPeriod {
  pub fn into_period(self) -> Result<AcademicPeriod> {
    let period = AcademicPeriod::from_parts(
      Some(self.id),
      self.name,
      decode_date(&self.start_date)?,
      decode_date(&self.end_date)?,
      decode_period_status(&self.status)?,
      decode_dt(&self.created_at)?,
      decode_dt(&self.updated_at)?,
    )?;
    Ok(period)
  }
}
