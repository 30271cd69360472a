// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};
use statfy_shared_kernel::{DomainError, DomainResult};

/// Lines inspected when an ambiguous extension needs content-based resolution.
pub const DEFAULT_DETECTION_LINE_LIMIT: usize = 20;

/// Settings for the analyzer. Built once, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Upper bound on lines read while resolving an ambiguous extension.
    pub detection_line_limit: usize,
    /// Worker threads for batch analysis.
    pub jobs: usize,
    /// Turn a negative code size into a hard error instead of a warning.
    pub strict: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            detection_line_limit: DEFAULT_DETECTION_LINE_LIMIT,
            jobs: num_cpus::get().max(1),
            strict: false,
        }
    }
}

impl AnalyzerConfig {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] for zero limits.
    pub fn validate(&self) -> DomainResult<()> {
        if self.detection_line_limit == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "detection_line_limit must be at least 1".to_string(),
            });
        }
        if self.jobs == 0 {
            return Err(DomainError::InvalidConfiguration { reason: "jobs must be at least 1".to_string() });
        }
        Ok(())
    }

    /// Parses and validates a JSON document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or when [`validate`](Self::validate) rejects the values.
    pub fn from_json_str(input: &str) -> statfy_shared_kernel::Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use statfy_shared_kernel::StatfyError;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.detection_line_limit, 20);
        assert!(config.jobs >= 1);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalyzerConfig::from_json_str(r#"{ "strict": true }"#).expect("parses");
        assert!(config.strict);
        assert_eq!(config.detection_line_limit, DEFAULT_DETECTION_LINE_LIMIT);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let err = AnalyzerConfig::from_json_str(r#"{ "jobs": 0 }"#).unwrap_err();
        assert!(matches!(err, StatfyError::Domain(DomainError::InvalidConfiguration { .. })));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = AnalyzerConfig::from_json_str("{ jobs: ").unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }
}
