use serde::{Deserialize, Serialize};

use bizrecords_core::{EmployeeId, Entity};

/// Starting values for the four hour accumulators of a new employee.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorBaseline {
    pub hours_worked: f64,
    pub overtime_hours: f64,
    pub unavailable_hours: f64,
    pub training_hours: f64,
}

/// Record: a general employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    role: String,
    hours_worked: f64,
    overtime_hours: f64,
    unavailable_hours: f64,
    training_hours: f64,
    promoted: bool,
    on_vacation: bool,
}

impl Employee {
    /// New employee with every accumulator at zero.
    pub fn new(id: EmployeeId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self::with_baseline(id, name, role, AccumulatorBaseline::default())
    }

    pub fn with_baseline(
        id: EmployeeId,
        name: impl Into<String>,
        role: impl Into<String>,
        baseline: AccumulatorBaseline,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            hours_worked: baseline.hours_worked,
            overtime_hours: baseline.overtime_hours,
            unavailable_hours: baseline.unavailable_hours,
            training_hours: baseline.training_hours,
            promoted: false,
            on_vacation: false,
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

    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    pub fn overtime_hours(&self) -> f64 {
        self.overtime_hours
    }

    pub fn unavailable_hours(&self) -> f64 {
        self.unavailable_hours
    }

    pub fn training_hours(&self) -> f64 {
        self.training_hours
    }

    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    pub fn is_on_vacation(&self) -> bool {
        self.on_vacation
    }

    // Accumulator inputs are not validated; negative hours go straight in.

    pub fn work(&mut self, hours: f64) {
        self.hours_worked += hours;
    }

    pub fn log_overtime(&mut self, hours: f64) {
        self.overtime_hours += hours;
    }

    pub fn mark_unavailable(&mut self, hours: f64) {
        self.unavailable_hours += hours;
    }

    pub fn log_training(&mut self, hours: f64) {
        self.training_hours += hours;
    }

    /// One-way: nothing sets `promoted` back to false.
    pub fn promote(&mut self) {
        self.promoted = true;
    }

    pub fn start_vacation(&mut self) {
        self.on_vacation = true;
    }

    pub fn end_vacation(&mut self) {
        self.on_vacation = false;
    }

    pub fn describe(&self) -> EmployeeDescription {
        EmployeeDescription {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            unavailable_hours: self.unavailable_hours,
            training_hours: self.training_hours,
            on_vacation: self.on_vacation,
            promoted: self.promoted,
        }
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Point-in-time view of a general employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeDescription {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    pub unavailable_hours: f64,
    pub training_hours: f64,
    pub on_vacation: bool,
    pub promoted: bool,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

impl core::fmt::Display for EmployeeDescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Employee ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Role: {}", self.role)?;
        writeln!(f, "Hours Worked: {}", self.hours_worked)?;
        writeln!(f, "Overtime Hours: {}", self.overtime_hours)?;
        writeln!(f, "Unavailable Hours: {}", self.unavailable_hours)?;
        writeln!(f, "Training Hours: {}", self.training_hours)?;
        writeln!(f, "On Vacation: {}", yes_no(self.on_vacation))?;
        write!(f, "Promoted: {}", yes_no(self.promoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_starts_at_zero_and_unflagged() {
        let e = Employee::new(EmployeeId::new(1), "John Doe", "Developer");
        assert_eq!(e.hours_worked(), 0.0);
        assert_eq!(e.overtime_hours(), 0.0);
        assert_eq!(e.unavailable_hours(), 0.0);
        assert_eq!(e.training_hours(), 0.0);
        assert!(!e.is_promoted());
        assert!(!e.is_on_vacation());
    }

    #[test]
    fn baseline_seeds_accumulators() {
        let baseline = AccumulatorBaseline {
            hours_worked: 10.0,
            overtime_hours: 20.0,
            unavailable_hours: 30.0,
            training_hours: 40.0,
        };
        let mut e = Employee::with_baseline(EmployeeId::new(1), "John Doe", "Developer", baseline);
        e.work(40.0);
        e.log_overtime(5.0);

        assert_eq!(e.hours_worked(), 50.0);
        assert_eq!(e.overtime_hours(), 25.0);
        assert_eq!(e.unavailable_hours(), 30.0);
        assert_eq!(e.training_hours(), 40.0);
    }

    #[test]
    fn description_renders_flags_as_yes_no() {
        let mut e = Employee::new(EmployeeId::new(2), "Jane Smith", "Designer");
        e.log_training(8.0);
        e.promote();

        let text = e.describe().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Employee ID: 2",
                "Name: Jane Smith",
                "Role: Designer",
                "Hours Worked: 0",
                "Overtime Hours: 0",
                "Unavailable Hours: 0",
                "Training Hours: 8",
                "On Vacation: No",
                "Promoted: Yes",
            ]
        );
    }
}
