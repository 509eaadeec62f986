//! SQLite backend for the aula catalog store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! pool without blocking the async runtime.

mod encode;
mod migrate;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use migrate::{MIGRATIONS, Migration};
pub use store::SqliteStore;
