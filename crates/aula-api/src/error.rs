//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The use-case layer surfaces semantic error kinds; this is the one place
//! they become transport status codes: validation → 400, not-found → 404,
//! conflict → 409, store → 500.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<aula_core::Error> for ApiError {
  fn from(e: aula_core::Error) -> Self {
    use aula_core::Error as E;
    match e {
      E::SubjectNotFound(_) | E::ProgramNotFound(_) | E::PeriodNotFound(_) => {
        ApiError::NotFound(e.to_string())
      }
      E::DuplicateSubjectName(_) | E::DuplicateProgramName(_) | E::DuplicatePeriodName(_) => {
        ApiError::Conflict(e.to_string())
      }
      E::Store(src) => ApiError::Store(src),
      // Everything else is a validation failure.
      _ => ApiError::BadRequest(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
