use std::collections::HashMap;

use bizrecords_core::{EmployeeId, Entity};

use crate::agent::{CustomerServiceDescription, CustomerServiceEmployee};

/// In-memory store of customer-service employees keyed by id.
///
/// Unknown ids are never an error: mutators return `false`, queries `None`.
#[derive(Debug, Default, Clone)]
pub struct ServiceLog {
    agents: HashMap<EmployeeId, CustomerServiceEmployee>,
}

impl ServiceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with empty metrics, replacing any previous one.
    pub fn register(&mut self, id: EmployeeId, name: impl Into<String>, role: impl Into<String>) {
        let agent = CustomerServiceEmployee::new(id, name, role);
        if self.agents.insert(*agent.id(), agent).is_some() {
            tracing::debug!(employee_id = %id, "customer-service record replaced");
        } else {
            tracing::debug!(employee_id = %id, "customer-service record registered");
        }
    }

    pub fn log_interaction(&mut self, id: EmployeeId, duration: f64, satisfaction: f64) -> bool {
        let Some(agent) = self.agents.get_mut(&id) else {
            return false;
        };
        agent.serve_client(duration, satisfaction);
        tracing::debug!(employee_id = %id, duration, satisfaction, "interaction logged");
        true
    }

    pub fn set_service_area(&mut self, id: EmployeeId, area: impl Into<String>) -> bool {
        match self.agents.get_mut(&id) {
            Some(agent) => {
                agent.set_service_area(area);
                true
            }
            None => false,
        }
    }

    pub fn average_service_time(&self, id: EmployeeId) -> Option<f64> {
        self.agents.get(&id).map(CustomerServiceEmployee::average_service_time)
    }

    pub fn average_satisfaction(&self, id: EmployeeId) -> Option<f64> {
        self.agents.get(&id).map(CustomerServiceEmployee::average_satisfaction)
    }

    pub fn describe(&self, id: EmployeeId) -> Option<CustomerServiceDescription> {
        self.agents.get(&id).map(CustomerServiceEmployee::describe)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&CustomerServiceEmployee> {
        self.agents.get(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(raw: u64) -> EmployeeId {
        EmployeeId::new(raw)
    }

    #[test]
    fn averages_follow_logged_interactions() {
        let mut log = ServiceLog::new();
        log.register(id(1), "Chris Brown", "Customer Service Rep");

        assert!(log.log_interaction(id(1), 15.0, 4.5));
        assert!(log.log_interaction(id(1), 10.0, 4.0));

        assert_eq!(log.get(id(1)).unwrap().clients_served(), 2);
        assert_eq!(log.average_service_time(id(1)), Some(12.5));
        assert_eq!(log.average_satisfaction(id(1)), Some(4.25));
    }

    #[test]
    fn averages_are_zero_without_interactions() {
        let mut log = ServiceLog::new();
        log.register(id(3), "Derek Robinson", "Customer Support Specialist");

        assert_eq!(log.average_service_time(id(3)), Some(0.0));
        assert_eq!(log.average_satisfaction(id(3)), Some(0.0));
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let mut log = ServiceLog::new();
        log.register(id(1), "Chris Brown", "Customer Service Rep");

        assert!(!log.log_interaction(id(999), 10.0, 5.0));
        assert!(!log.set_service_area(id(999), "Nowhere"));
        assert_eq!(log.average_service_time(id(999)), None);
        assert_eq!(log.describe(id(999)), None);

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(id(1)).unwrap().clients_served(), 0);
    }

    #[test]
    fn service_area_is_overwritten() {
        let mut log = ServiceLog::new();
        log.register(id(2), "Emma Wilson", "Customer Support Specialist");

        assert!(log.set_service_area(id(2), "Technical Assistance"));
        assert!(log.set_service_area(id(2), "Customer Relations"));
        assert_eq!(log.get(id(2)).unwrap().service_area(), "Customer Relations");
    }

    #[test]
    fn re_registration_discards_history() {
        let mut log = ServiceLog::new();
        log.register(id(4), "Rachel Raynolds", "Customer Support Specialist");
        log.log_interaction(id(4), 30.0, 4.7);

        log.register(id(4), "Rachel Raynolds", "Team Lead");

        let agent = log.get(id(4)).unwrap();
        assert_eq!(agent.clients_served(), 0);
        assert_eq!(agent.role(), "Team Lead");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn out_of_range_scores_are_accepted() {
        let mut log = ServiceLog::new();
        log.register(id(5), "Sam", "Rep");
        log.log_interaction(id(5), -10.0, 42.0);

        assert_eq!(log.average_service_time(id(5)), Some(-10.0));
        assert_eq!(log.average_satisfaction(id(5)), Some(42.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: averages always equal total/count and mean of scores.
        #[test]
        fn averages_match_logged_history(
            interactions in prop::collection::vec((0u32..240, 0u32..=50), 0..40)
        ) {
            let mut log = ServiceLog::new();
            log.register(id(1), "Agent", "Rep");

            let mut total = 0.0;
            let mut score_sum = 0.0;
            for (minutes, tenths) in &interactions {
                let duration = f64::from(*minutes);
                let score = f64::from(*tenths) / 10.0;
                total += duration;
                score_sum += score;
                log.log_interaction(id(1), duration, score);
            }

            let agent = log.get(id(1)).unwrap();
            prop_assert_eq!(agent.clients_served() as usize, interactions.len());
            prop_assert_eq!(agent.satisfaction_scores().len(), interactions.len());

            let (expected_time, expected_satisfaction) = if interactions.is_empty() {
                (0.0, 0.0)
            } else {
                let n = interactions.len() as f64;
                (total / n, score_sum / n)
            };
            prop_assert!((agent.average_service_time() - expected_time).abs() < 1e-9);
            prop_assert!((agent.average_satisfaction() - expected_satisfaction).abs() < 1e-9);
        }
    }
}
