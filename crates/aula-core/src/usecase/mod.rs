//! Application-layer use cases, one module per entity.
//!
//! Use cases enforce the cross-record business rules a single entity cannot
//! check alone: name uniqueness on create, existence plus own-id-excluded
//! uniqueness on update, existence on delete. They consult the repository
//! traits and never bypass entity validation.

pub mod period;
pub mod program;
pub mod subject;

#[cfg(test)]
pub(crate) mod memory;
