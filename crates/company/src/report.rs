use serde::Serialize;

use bizrecords_inventory::Product;
use bizrecords_staff::HireCandidate;

/// Snapshot across all stores, for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    pub inventory: Vec<Product>,
    pub hire_queue: Vec<HireCandidate>,
    pub staff_count: usize,
    pub service_staff_count: usize,
}

impl CompanyReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl core::fmt::Display for CompanyReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory List:")?;
        for product in &self.inventory {
            writeln!(f, "{product}")?;
        }
        writeln!(f, "Employees to be Hired:")?;
        for candidate in &self.hire_queue {
            writeln!(f, "{candidate}")?;
        }
        writeln!(f, "Employees: {}", self.staff_count)?;
        write!(f, "Customer Service Employees: {}", self.service_staff_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompanyReport {
        CompanyReport {
            inventory: vec![Product::new("Laptop", 45, 1200), Product::new("Headset", 100, 50)],
            hire_queue: vec![HireCandidate::new("Bob Lee", "QA Engineer")],
            staff_count: 2,
            service_staff_count: 4,
        }
    }

    #[test]
    fn display_lists_inventory_then_hire_queue() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Inventory List:",
                "Product: Laptop, Quantity: 45, Price: 1200",
                "Product: Headset, Quantity: 100, Price: 50",
                "Employees to be Hired:",
                "Name: Bob Lee, Role: QA Engineer",
                "Employees: 2",
                "Customer Service Employees: 4",
            ]
        );
    }

    #[test]
    fn json_export_keeps_field_names() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["inventory"][0]["name"], "Laptop");
        assert_eq!(json["inventory"][0]["quantity"], 45);
        assert_eq!(json["inventory"][0]["price_per_unit"], 1200);
        assert_eq!(json["hire_queue"][0]["role"], "QA Engineer");
        assert_eq!(json["service_staff_count"], 4);
    }
}
