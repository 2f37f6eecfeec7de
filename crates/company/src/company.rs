use bizrecords_inventory::InventoryStore;
use bizrecords_service::ServiceLog;
use bizrecords_staff::EmployeeRegistry;

use crate::config::CompanyConfig;
use crate::report::CompanyReport;

/// The three stores of one organization, side by side.
///
/// The stores share nothing: an id registered in the registry and the same id
/// in the service log are unrelated records.
#[derive(Debug, Default, Clone)]
pub struct Company {
    pub staff: EmployeeRegistry,
    pub service: ServiceLog,
    pub inventory: InventoryStore,
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CompanyConfig) -> Self {
        Self {
            staff: EmployeeRegistry::with_config(config.registry),
            ..Self::default()
        }
    }

    /// Install logging from `config`, then build the stores.
    pub fn bootstrap(config: &CompanyConfig) -> Self {
        bizrecords_observability::tracing::init(&config.observability);
        tracing::info!(
            baseline_hours = config.registry.baseline.hours_worked,
            "company records initialized"
        );
        Self::with_config(config)
    }

    pub fn report(&self) -> CompanyReport {
        CompanyReport {
            inventory: self.inventory.list_inventory().to_vec(),
            hire_queue: self.staff.list_hire_queue().to_vec(),
            staff_count: self.staff.len(),
            service_staff_count: self.service.len(),
        }
    }
}
