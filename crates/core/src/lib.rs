//! `bizrecords-core`: shared building blocks for the record stores.
//!
//! Pure domain primitives only: identifiers, the error model and the
//! entity trait the stores key their records by. No logging setup, no storage.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EmployeeId;
