use serde::{Deserialize, Serialize};

use bizrecords_core::{EmployeeId, Entity};

/// Record: a customer-service employee and their interaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerServiceEmployee {
    id: EmployeeId,
    name: String,
    role: String,
    clients_served: u64,
    total_service_time: f64,
    satisfaction_scores: Vec<f64>,
    service_area: String,
}

impl CustomerServiceEmployee {
    pub fn new(id: EmployeeId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            clients_served: 0,
            total_service_time: 0.0,
            satisfaction_scores: Vec::new(),
            service_area: String::new(),
        }
    }

    pub fn id_typed(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn clients_served(&self) -> u64 {
        self.clients_served
    }

    /// Accumulated service time, in minutes.
    pub fn total_service_time(&self) -> f64 {
        self.total_service_time
    }

    /// One score per interaction, in arrival order.
    pub fn satisfaction_scores(&self) -> &[f64] {
        &self.satisfaction_scores
    }

    pub fn service_area(&self) -> &str {
        &self.service_area
    }

    /// Record one served client. Inputs are trusted as-is.
    pub fn serve_client(&mut self, duration: f64, satisfaction: f64) {
        self.clients_served += 1;
        self.total_service_time += duration;
        self.satisfaction_scores.push(satisfaction);
    }

    pub fn set_service_area(&mut self, area: impl Into<String>) {
        self.service_area = area.into();
    }

    /// Mean minutes per client; exactly `0.0` before the first interaction.
    pub fn average_service_time(&self) -> f64 {
        if self.clients_served == 0 {
            return 0.0;
        }
        self.total_service_time / self.clients_served as f64
    }

    /// Mean satisfaction score; exactly `0.0` when no scores were logged.
    pub fn average_satisfaction(&self) -> f64 {
        if self.satisfaction_scores.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.satisfaction_scores.iter().sum();
        sum / self.satisfaction_scores.len() as f64
    }

    pub fn describe(&self) -> CustomerServiceDescription {
        CustomerServiceDescription {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
            clients_served: self.clients_served,
            average_service_time: self.average_service_time(),
            average_satisfaction: self.average_satisfaction(),
            service_area: self.service_area.clone(),
        }
    }
}

impl Entity for CustomerServiceEmployee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Point-in-time view of a customer-service employee, derived metrics included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerServiceDescription {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub clients_served: u64,
    pub average_service_time: f64,
    pub average_satisfaction: f64,
    pub service_area: String,
}

impl core::fmt::Display for CustomerServiceDescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Customer Service Employee ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Role: {}", self.role)?;
        writeln!(f, "Clients Served: {}", self.clients_served)?;
        writeln!(f, "Average Service Time: {} minutes", self.average_service_time)?;
        writeln!(
            f,
            "Average Customer Satisfaction Level: {}",
            self.average_satisfaction
        )?;
        write!(f, "Service Area: {}", self.service_area)
    }
}
