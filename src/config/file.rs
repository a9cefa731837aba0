//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".chainaudit.yaml",
    ".chainaudit.yml",
    "chainaudit.yaml",
    "chainaudit.yml",
];

/// Directories searched for a config file, in priority order.
///
/// Does not include an explicit `--config` path.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut dirs_list = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_list.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_list.push(config_dir.join("chainaudit"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_list.push(home);
    }
    dirs_list
}

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/chainaudit/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load a config file the user named explicitly.
///
/// Unlike discovery, a broken file is an error rather than a warning.
pub fn load_config_strict(path: &Path) -> crate::Result<AppConfig> {
    use crate::error::ErrorContext;
    load_config_file(path).with_context(|| format!("loading {}", path.display()))
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None`/`false` means "not given", so file values survive.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_price: Option<f64>,
    pub risk_threshold: Option<u8>,
    pub case_filter: Option<String>,
    pub format: Option<crate::reports::ReportFormat>,
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

impl AppConfig {
    /// Layer CLI overrides over this config.
    pub fn merge(&mut self, overrides: &CliOverrides) {
        if let Some(base_price) = overrides.base_price {
            self.parameters.base_price = base_price;
        }
        if let Some(risk_threshold) = overrides.risk_threshold {
            self.parameters.risk_threshold = risk_threshold;
        }
        if let Some(ref filter) = overrides.case_filter {
            self.cases.filter.clone_from(filter);
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.file.is_some() {
            self.output.file.clone_from(&overrides.file);
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &CliOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# chainaudit configuration
# Place this file at .chainaudit.yaml in your working directory
# or at ~/.config/chainaudit/chainaudit.yaml.
#
# CLI arguments always override file settings.

# Initial slider positions
parameters:
  # Baseline price in units of 10,000 yuan (10.0-20.0)
  base_price: 14.2
  # Risk threshold (0-100); below 70 rates the supplier high risk
  risk_threshold: 60

# Case library
cases:
  # all, triple, double, single
  filter: all

# Output configuration
output:
  # Format: auto, tui, summary, json, markdown, csv
  format: auto
  # Output file path (omit for stdout)
  # file: dashboard.md
  # Sections: all, scenario, workflow, cases
  sections: all
  no_color: false

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  tick_rate_ms: 100
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
