//! Configuration validation for chainaudit.

use super::types::{AppConfig, CasesConfig, OutputConfig, ParametersConfig, TuiConfig};
use crate::mapper::{BASE_PRICE_RANGE, RISK_THRESHOLD_RANGE};
use crate::model::CaseFilter;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.parameters.validate());
        errors.extend(self.cases.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ParametersConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !BASE_PRICE_RANGE.contains(&self.base_price) {
            errors.push(ConfigError {
                field: "parameters.base_price".to_string(),
                message: format!(
                    "Base price must be between {} and {}, got {}",
                    BASE_PRICE_RANGE.start(),
                    BASE_PRICE_RANGE.end(),
                    self.base_price
                ),
            });
        }
        if !RISK_THRESHOLD_RANGE.contains(&self.risk_threshold) {
            errors.push(ConfigError {
                field: "parameters.risk_threshold".to_string(),
                message: format!(
                    "Risk threshold must be between {} and {}, got {}",
                    RISK_THRESHOLD_RANGE.start(),
                    RISK_THRESHOLD_RANGE.end(),
                    self.risk_threshold
                ),
            });
        }
        errors
    }
}

impl Validatable for CasesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match self.filter.parse::<CaseFilter>() {
            Ok(_) => Vec::new(),
            Err(message) => vec![ConfigError {
                field: "cases.filter".to_string(),
                message,
            }],
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let valid_themes = ["dark", "light", "high-contrast"];
        if !valid_themes.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    valid_themes.join(", ")
                ),
            });
        }
        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}
