//! Customer-service module.
//!
//! Tracks customer-service staff and the per-interaction metrics they
//! accumulate (service time, satisfaction), deriving averages on demand.

pub mod agent;
pub mod service_log;

pub use agent::{CustomerServiceDescription, CustomerServiceEmployee};
pub use service_log::ServiceLog;
