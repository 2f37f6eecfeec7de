//! `bizrecords-company`: composition root over the three record stores.
//!
//! [`Company`] owns an [`EmployeeRegistry`], a [`ServiceLog`] and an
//! [`InventoryStore`] and adds unified reporting on top; every business
//! operation is reached through the individual stores.

pub mod company;
pub mod config;
pub mod report;

pub use company::Company;
pub use config::{CompanyConfig, ConfigError};
pub use report::CompanyReport;

pub use bizrecords_core::{DomainError, DomainResult, EmployeeId};
pub use bizrecords_inventory::{AddOutcome, InventoryStore, Product};
pub use bizrecords_service::{CustomerServiceDescription, CustomerServiceEmployee, ServiceLog};
pub use bizrecords_staff::{
    AccumulatorBaseline, Employee, EmployeeDescription, EmployeeRegistry, HireCandidate,
    RegistryConfig, StaffDescription, StaffRecord,
};
