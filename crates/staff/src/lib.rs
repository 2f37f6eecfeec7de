//! Staff module: employee records, their accumulators and the hire queue.
//!
//! Records are plain in-memory state owned by [`EmployeeRegistry`]; nothing
//! here performs IO.

pub mod employee;
pub mod hiring;
pub mod record;
pub mod registry;

pub use employee::{AccumulatorBaseline, Employee, EmployeeDescription};
pub use hiring::HireCandidate;
pub use record::{StaffDescription, StaffRecord};
pub use registry::{EmployeeRegistry, RegistryConfig};
