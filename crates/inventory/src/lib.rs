//! Inventory module.
//!
//! Products keyed by name with a quantity that never goes negative. Pure
//! in-memory state; no IO, no storage.

pub mod product;
pub mod store;

pub use product::Product;
pub use store::{AddOutcome, InventoryStore};
