//! Company-wide configuration.

use serde::Deserialize;
use thiserror::Error;

use bizrecords_observability::ObservabilityConfig;
use bizrecords_staff::RegistryConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for every store plus logging. All sections are optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub registry: RegistryConfig,
    pub observability: ObservabilityConfig,
}

impl CompanyConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizrecords_observability::LogFormat;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CompanyConfig::from_json("{}").unwrap();
        assert_eq!(config, CompanyConfig::default());
        assert_eq!(config.registry.baseline.hours_worked, 0.0);
    }

    #[test]
    fn baseline_and_format_are_read() {
        let config = CompanyConfig::from_json(
            r#"{
                "registry": { "baseline": { "hours_worked": 10, "training_hours": 40 } },
                "observability": { "format": "pretty" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.registry.baseline.hours_worked, 10.0);
        assert_eq!(config.registry.baseline.overtime_hours, 0.0);
        assert_eq!(config.registry.baseline.training_hours, 40.0);
        assert_eq!(config.observability.format, LogFormat::Pretty);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = CompanyConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("malformed configuration"));
    }
}
