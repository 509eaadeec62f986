//! Academic program — a structured course of study.
//!
//! Level, modality and duration are fixed at creation; the only mutation the
//! contract allows is [`AcademicProgram::update_general_info`], which changes
//! name and description together.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, subject::validate_name};

/// The educational level a program leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
  Technical,
  Technological,
  Undergraduate,
  Postgraduate,
}

/// How the program is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
  OnSite,
  Virtual,
  Hybrid,
}

/// Unit for a program duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
  Months,
  Semesters,
  Years,
}

/// A value + unit pair, e.g. "10 semesters".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration {
  value: u32,
  unit:  DurationUnit,
}

impl Duration {
  pub fn new(value: i64, unit: DurationUnit) -> Result<Self> {
    let value = u32::try_from(value)
      .ok()
      .filter(|v| *v > 0)
      .ok_or(Error::InvalidDuration(value))?;
    Ok(Self { value, unit })
  }

  pub fn value(&self) -> u32 { self.value }

  pub fn unit(&self) -> DurationUnit { self.unit }
}

/// A structured course of study with level, modality and duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicProgram {
  id:          Option<String>,
  name:        String,
  description: String,
  level:       EducationLevel,
  modality:    Modality,
  duration:    Duration,
}

impl AcademicProgram {
  /// Build a new, not-yet-persisted program. The store assigns the id.
  pub fn new(
    name: impl Into<String>,
    description: impl Into<String>,
    level: EducationLevel,
    modality: Modality,
    duration: Duration,
  ) -> Result<Self> {
    Self::from_parts(None, name.into(), description.into(), level, modality, duration)
  }

  /// Rebuild a program from its constituent parts, re-running validation.
  pub fn from_parts(
    id: Option<String>,
    name: String,
    description: String,
    level: EducationLevel,
    modality: Modality,
    duration: Duration,
  ) -> Result<Self> {
    validate_name(&name)?;
    Ok(Self { id, name, description, level, modality, duration })
  }

  /// The one permitted mutation: rename and re-describe the program.
  /// Level, modality and duration stay as created.
  pub fn update_general_info(
    &mut self,
    name: impl Into<String>,
    description: impl Into<String>,
  ) -> Result<()> {
    let name = name.into();
    validate_name(&name)?;
    self.name = name;
    self.description = description.into();
    Ok(())
  }

  pub fn id(&self) -> Option<&str> { self.id.as_deref() }

  pub fn name(&self) -> &str { &self.name }

  pub fn description(&self) -> &str { &self.description }

  pub fn level(&self) -> EducationLevel { self.level }

  pub fn modality(&self) -> Modality { self.modality }

  pub fn duration(&self) -> Duration { self.duration }
}
