//! Domain model, repository contracts and use cases for the aula academic
//! catalog.
//!
//! Entities validate themselves in their constructors; use cases add the
//! cross-record rules. Nothing in here knows about HTTP or SQLite — the
//! backends and the API crate both depend on this one.

#![allow(async_fn_in_trait)]

pub mod error;
pub mod period;
pub mod program;
pub mod store;
pub mod subject;
pub mod usecase;

pub use error::{Error, Result};
