use std::collections::HashMap;

use serde::Deserialize;

use bizrecords_core::{EmployeeId, Entity};

use crate::employee::{AccumulatorBaseline, Employee};
use crate::hiring::HireCandidate;
use crate::record::{StaffDescription, StaffRecord};

/// Registry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Accumulator values given to every newly registered employee.
    pub baseline: AccumulatorBaseline,
}

/// In-memory store of staff records keyed by id, plus the hire queue.
///
/// Every operation on an unknown id is a no-op: mutators return `false` and
/// queries return `None`. Hour, promotion and vacation operations only touch
/// [`StaffRecord::General`] entries; a customer-service entry has none of
/// those fields and is left alone.
#[derive(Debug, Default, Clone)]
pub struct EmployeeRegistry {
    config: RegistryConfig,
    records: HashMap<EmployeeId, StaffRecord>,
    hire_queue: Vec<HireCandidate>,
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Store a general employee at the configured baseline (last write wins).
    pub fn register(&mut self, id: EmployeeId, name: impl Into<String>, role: impl Into<String>) {
        let employee = Employee::with_baseline(id, name, role, self.config.baseline);
        self.insert(employee.into());
    }

    /// Store a record of either variant under its own id (last write wins).
    pub fn insert(&mut self, record: StaffRecord) {
        let id = *Entity::id(&record);
        if self.records.insert(id, record).is_some() {
            tracing::debug!(employee_id = %id, "staff record replaced");
        } else {
            tracing::debug!(employee_id = %id, "staff record registered");
        }
    }

    pub fn deregister(&mut self, id: EmployeeId) -> bool {
        let removed = self.records.remove(&id).is_some();
        if removed {
            tracing::debug!(employee_id = %id, "staff record removed");
        }
        removed
    }

    pub fn queue_hire(&mut self, name: impl Into<String>, role: impl Into<String>) {
        let candidate = HireCandidate::new(name, role);
        tracing::debug!(name = %candidate.name, role = %candidate.role, "hire candidate queued");
        self.hire_queue.push(candidate);
    }

    pub fn log_hours(&mut self, id: EmployeeId, hours: f64) -> bool {
        self.update_general(id, |e| e.work(hours))
    }

    pub fn log_overtime(&mut self, id: EmployeeId, hours: f64) -> bool {
        self.update_general(id, |e| e.log_overtime(hours))
    }

    pub fn log_unavailable(&mut self, id: EmployeeId, hours: f64) -> bool {
        self.update_general(id, |e| e.mark_unavailable(hours))
    }

    pub fn log_training(&mut self, id: EmployeeId, hours: f64) -> bool {
        self.update_general(id, |e| e.log_training(hours))
    }

    pub fn promote(&mut self, id: EmployeeId) -> bool {
        self.update_general(id, Employee::promote)
    }

    pub fn begin_vacation(&mut self, id: EmployeeId) -> bool {
        self.update_general(id, Employee::start_vacation)
    }

    pub fn end_vacation(&mut self, id: EmployeeId) -> bool {
        self.update_general(id, Employee::end_vacation)
    }

    pub fn describe(&self, id: EmployeeId) -> Option<StaffDescription> {
        self.records.get(&id).map(StaffRecord::describe)
    }

    /// Candidates in arrival order. Listing does not drain the queue.
    pub fn list_hire_queue(&self) -> &[HireCandidate] {
        &self.hire_queue
    }

    pub fn get(&self, id: EmployeeId) -> Option<&StaffRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn update_general(&mut self, id: EmployeeId, f: impl FnOnce(&mut Employee)) -> bool {
        match self.records.get_mut(&id).and_then(StaffRecord::as_general_mut) {
            Some(employee) => {
                f(employee);
                tracing::debug!(employee_id = %id, "employee updated");
                true
            }
            None => false,
        }
    }
}
