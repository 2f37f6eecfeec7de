use serde::{Deserialize, Serialize};

/// A `(name, role)` pair waiting for onboarding.
///
/// Candidates carry no id and are never linked to an [`Employee`](crate::Employee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireCandidate {
    pub name: String,
    pub role: String,
}

impl HireCandidate {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

impl core::fmt::Display for HireCandidate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}, Role: {}", self.name, self.role)
    }
}
