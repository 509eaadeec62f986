//! Body extraction with API-shaped rejections.
//!
//! `axum::Json` answers malformed bodies itself with `422` and a plain-text
//! message. This wrapper routes those failures through [`ApiError`] instead,
//! so a body that fails to parse gets the same `400` + `{"error": …}` shape
//! as a body that fails entity validation.

use axum::{
  extract::{FromRequest, rejection::JsonRejection},
  response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;

/// Drop-in replacement for [`axum::Json`] whose rejection is an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl<T: Serialize> IntoResponse for Json<T> {
  fn into_response(self) -> Response {
    axum::Json(self.0).into_response()
  }
}
