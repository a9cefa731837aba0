//! Configuration module for chainaudit.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.chainaudit.yaml` file in your working directory or
//! `~/.config/chainaudit/`:
//!
//! ```yaml
//! parameters:
//!   base_price: 15.0
//!   risk_threshold: 75
//! cases:
//!   filter: triple
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_BASE_PRICE, DEFAULT_CASE_FILTER, DEFAULT_RISK_THRESHOLD, DEFAULT_TICK_RATE_MS,
    STATUS_MESSAGE_TICKS,
};
pub use types::{
    AppConfig, CasesConfig, DashboardConfig, DashboardModule, OutputConfig, ParametersConfig,
    TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_config_strict, load_or_default, CliOverrides, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.chainaudit.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
