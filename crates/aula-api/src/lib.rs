//! JSON REST API for the aula catalog.
//!
//! Exposes an axum [`Router`] backed by any store implementing the
//! repository traits from [`aula_core::store`]. Transport concerns (TLS,
//! nesting under a prefix) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/v1", aula_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod periods;
pub mod programs;
pub mod subjects;

use std::sync::Arc;

use aula_core::store::{PeriodStore, ProgramStore, SubjectStore};
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubjectStore + ProgramStore + PeriodStore + Send + Sync + 'static,
{
  Router::new()
    // Subjects
    .route(
      "/subjects",
      get(subjects::list::<S>).post(subjects::create::<S>),
    )
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<S>)
        .put(subjects::update_one::<S>)
        .delete(subjects::delete_one::<S>),
    )
    // Academic programs
    .route(
      "/programs",
      get(programs::list::<S>).post(programs::create::<S>),
    )
    .route(
      "/programs/{id}",
      get(programs::get_one::<S>)
        .put(programs::update_one::<S>)
        .delete(programs::delete_one::<S>),
    )
    // Academic periods
    .route(
      "/periods",
      get(periods::list::<S>).post(periods::create::<S>),
    )
    .route(
      "/periods/{id}",
      get(periods::get_one::<S>)
        .put(periods::update_one::<S>)
        .delete(periods::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────
