use serde::{Deserialize, Serialize};

use bizrecords_core::{EmployeeId, Entity};
use bizrecords_service::{CustomerServiceDescription, CustomerServiceEmployee};

use crate::employee::{Employee, EmployeeDescription};

/// A registry entry: either a general employee or a customer-service one.
///
/// Callers branch on the variant; the two shapes share only id, name and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaffRecord {
    General(Employee),
    CustomerService(CustomerServiceEmployee),
}

impl StaffRecord {
    pub fn id_typed(&self) -> EmployeeId {
        match self {
            StaffRecord::General(e) => e.id_typed(),
            StaffRecord::CustomerService(e) => e.id_typed(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StaffRecord::General(e) => e.name(),
            StaffRecord::CustomerService(e) => e.name(),
        }
    }

    pub fn role(&self) -> &str {
        match self {
            StaffRecord::General(e) => e.role(),
            StaffRecord::CustomerService(e) => e.role(),
        }
    }

    pub fn as_general(&self) -> Option<&Employee> {
        match self {
            StaffRecord::General(e) => Some(e),
            StaffRecord::CustomerService(_) => None,
        }
    }

    pub fn as_general_mut(&mut self) -> Option<&mut Employee> {
        match self {
            StaffRecord::General(e) => Some(e),
            StaffRecord::CustomerService(_) => None,
        }
    }

    pub fn as_customer_service(&self) -> Option<&CustomerServiceEmployee> {
        match self {
            StaffRecord::CustomerService(e) => Some(e),
            StaffRecord::General(_) => None,
        }
    }

    /// Field snapshot using the variant's own field set.
    pub fn describe(&self) -> StaffDescription {
        match self {
            StaffRecord::General(e) => StaffDescription::General(e.describe()),
            StaffRecord::CustomerService(e) => StaffDescription::CustomerService(e.describe()),
        }
    }
}

impl Entity for StaffRecord {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        match self {
            StaffRecord::General(e) => Entity::id(e),
            StaffRecord::CustomerService(e) => Entity::id(e),
        }
    }
}

impl From<Employee> for StaffRecord {
    fn from(value: Employee) -> Self {
        StaffRecord::General(value)
    }
}

impl From<CustomerServiceEmployee> for StaffRecord {
    fn from(value: CustomerServiceEmployee) -> Self {
        StaffRecord::CustomerService(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaffDescription {
    General(EmployeeDescription),
    CustomerService(CustomerServiceDescription),
}

impl core::fmt::Display for StaffDescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StaffDescription::General(d) => core::fmt::Display::fmt(d, f),
            StaffDescription::CustomerService(d) => core::fmt::Display::fmt(d, f),
        }
    }
}
