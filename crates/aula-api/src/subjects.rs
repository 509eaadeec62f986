//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | |
//! | `POST`   | `/subjects` | Body: `{"name":…,"workloadHours":…,"kind":…}` |
//! | `GET`    | `/subjects/:id` | 404 if not found |
//! | `PUT`    | `/subjects/:id` | 404 / 409 / 400 |
//! | `DELETE` | `/subjects/:id` | 204, 404 if not found |

use std::sync::Arc;

use aula_core::{
  store::SubjectStore,
  subject::Subject,
  usecase::subject::{self as usecase, CreateSubject, UpdateSubject},
};
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};

use crate::{error::ApiError, extract::Json};

/// `GET /subjects`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Subject>>, ApiError>
where
  S: SubjectStore,
{
  let subjects = usecase::list(store.as_ref()).await?;
  Ok(Json(subjects))
}

/// `POST /subjects`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateSubject>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubjectStore,
{
  let subject = usecase::create(store.as_ref(), body).await?;
  Ok((StatusCode::CREATED, Json(subject)))
}

/// `GET /subjects/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Subject>, ApiError>
where
  S: SubjectStore,
{
  let subject = usecase::get(store.as_ref(), id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("subject {id} not found")))?;
  Ok(Json(subject))
}

/// `PUT /subjects/:id`
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateSubject>,
) -> Result<Json<Subject>, ApiError>
where
  S: SubjectStore,
{
  let subject = usecase::update(store.as_ref(), id, body).await?;
  Ok(Json(subject))
}

/// `DELETE /subjects/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SubjectStore,
{
  usecase::delete(store.as_ref(), id).await?;
  Ok(StatusCode::NO_CONTENT)
}
