//! Handlers for `/periods` endpoints.

use std::sync::Arc;

use aula_core::{
  period::AcademicPeriod,
  store::PeriodStore,
  usecase::period::{self as usecase, CreatePeriod, UpdatePeriod},
};
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};

use crate::{error::ApiError, extract::Json};

/// `GET /periods`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<AcademicPeriod>>, ApiError>
where
  S: PeriodStore,
{
  let periods = usecase::list(store.as_ref()).await?;
  Ok(Json(periods))
}

/// `POST /periods`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreatePeriod>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PeriodStore,
{
  let period = usecase::create(store.as_ref(), body).await?;
  Ok((StatusCode::CREATED, Json(period)))
}

/// `GET /periods/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<AcademicPeriod>, ApiError>
where
  S: PeriodStore,
{
  let period = usecase::get(store.as_ref(), &id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("academic period {id} not found")))?;
  Ok(Json(period))
}

/// `PUT /periods/:id`
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<UpdatePeriod>,
) -> Result<Json<AcademicPeriod>, ApiError>
where
  S: PeriodStore,
{
  let period = usecase::update(store.as_ref(), &id, body).await?;
  Ok(Json(period))
}

/// `DELETE /periods/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: PeriodStore,
{
  usecase::delete(store.as_ref(), &id).await?;
  Ok(StatusCode::NO_CONTENT)
}
