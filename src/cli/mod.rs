//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod dashboard;
mod report;

pub use config::{config_paths_report, run_config_init, run_config_schema, run_config_show};
pub use dashboard::run_dashboard;
pub use report::run_report;

use crate::config::{
    load_config_strict, AppConfig, CliOverrides, DashboardConfig, DashboardModule, Validatable,
};
use crate::error::ChainAuditError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load the config file, layer CLI overrides and validate the result.
///
/// Returns the resolved command settings and the file they came from.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    module: DashboardModule,
    quiet: bool,
) -> Result<(DashboardConfig, Option<PathBuf>)> {
    let (app_config, loaded_from) = match config_path {
        Some(path) if path.exists() => {
            let mut config = load_config_strict(path)?;
            config.merge(overrides);
            (config, Some(path.to_path_buf()))
        }
        _ => AppConfig::from_file_with_overrides(config_path, overrides),
    };

    if let Some(err) = ChainAuditError::from_config_errors(&app_config.validate()) {
        return Err(err.into());
    }

    let mut config = DashboardConfig::from_app_config(&app_config, module);
    config.quiet = quiet;
    Ok((config, loaded_from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseFilter, ConflictType};

    /// An empty config file, so discovery never reaches the user's own files.
    fn empty_config(dir: &Path) -> PathBuf {
        let path = dir.join(".chainaudit.yaml");
        std::fs::write(&path, "{}\n").expect("write");
        path
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let empty = empty_config(dir.path());
        let overrides = CliOverrides {
            risk_threshold: Some(75),
            case_filter: Some("double".to_string()),
            ..Default::default()
        };
        let (config, loaded_from) =
            resolve_config(Some(&empty), &overrides, DashboardModule::Cases, true).expect("resolve");
        assert_eq!(loaded_from, Some(empty));
        assert_eq!(config.parameters.risk_threshold(), 75);
        assert_eq!(config.case_filter, CaseFilter::Only(ConflictType::Double));
        assert_eq!(config.module, DashboardModule::Cases);
        assert!(config.quiet);
    }

    #[test]
    fn test_resolve_config_rejects_out_of_range_price() {
        let dir = tempfile::tempdir().expect("tempdir");
        let empty = empty_config(dir.path());
        let overrides = CliOverrides {
            base_price: Some(25.0),
            ..Default::default()
        };
        let err = resolve_config(Some(&empty), &overrides, DashboardModule::Scenario, false)
            .unwrap_err();
        assert!(err.to_string().contains("parameters.base_price"));
    }

    #[test]
    fn test_resolve_config_explicit_broken_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "parameters: [not, a, map]\n").expect("write");
        let err = resolve_config(Some(&path), &CliOverrides::default(), DashboardModule::Scenario, false)
            .unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_resolve_config_explicit_file_then_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("audit.yaml");
        std::fs::write(&path, "parameters:\n  base_price: 15.0\n  risk_threshold: 80\n").expect("write");
        let overrides = CliOverrides {
            risk_threshold: Some(65),
            ..Default::default()
        };
        let (config, loaded_from) =
            resolve_config(Some(&path), &overrides, DashboardModule::Scenario, false).expect("resolve");
        assert_eq!(loaded_from, Some(path));
        assert!((config.parameters.base_price() - 15.0).abs() < 1e-9);
        assert_eq!(config.parameters.risk_threshold(), 65);
    }

    #[test]
    fn test_resolve_config_rejects_unknown_filter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let empty = empty_config(dir.path());
        let overrides = CliOverrides {
            case_filter: Some("quadruple".to_string()),
            ..Default::default()
        };
        assert!(resolve_config(Some(&empty), &overrides, DashboardModule::Cases, false).is_err());
    }
}
