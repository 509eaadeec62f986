//! Handlers for `/programs` endpoints.
//!
//! `PUT /programs/:id` carries only the general info (name + description);
//! level, modality and duration are immutable after creation.

use std::sync::Arc;

use aula_core::{
  program::AcademicProgram,
  store::ProgramStore,
  usecase::program::{self as usecase, CreateProgram, UpdateProgramInfo},
};
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};

use crate::{error::ApiError, extract::Json};

/// `GET /programs`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<AcademicProgram>>, ApiError>
where
  S: ProgramStore,
{
  let programs = usecase::list(store.as_ref()).await?;
  Ok(Json(programs))
}

/// `POST /programs`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateProgram>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ProgramStore,
{
  let program = usecase::create(store.as_ref(), body).await?;
  Ok((StatusCode::CREATED, Json(program)))
}

/// `GET /programs/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<AcademicProgram>, ApiError>
where
  S: ProgramStore,
{
  let program = usecase::get(store.as_ref(), &id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("academic program {id} not found")))?;
  Ok(Json(program))
}

/// `PUT /programs/:id`
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<UpdateProgramInfo>,
) -> Result<Json<AcademicProgram>, ApiError>
where
  S: ProgramStore,
{
  let program = usecase::update(store.as_ref(), &id, body).await?;
  Ok(Json(program))
}

/// `DELETE /programs/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: ProgramStore,
{
  usecase::delete(store.as_ref(), &id).await?;
  Ok(StatusCode::NO_CONTENT)
}
