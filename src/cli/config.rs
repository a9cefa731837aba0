//! Config command handlers.
//!
//! Implements `config show`, `config path`, `config init` and
//! `config schema`.

use crate::config::{
    config_search_dirs, discover_config_file, generate_example_config, generate_json_schema,
    load_config_strict, load_or_default, AppConfig, CONFIG_FILE_NAMES,
};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Resolve the config `config show` prints.
///
/// An explicit path that exists must parse; discovered files only warn.
fn effective_config(config_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    match config_path {
        Some(path) if path.exists() => {
            let config = load_config_strict(path)?;
            Ok((config, Some(path.to_path_buf())))
        }
        _ => Ok(load_or_default(config_path)),
    }
}

/// Print the effective configuration (defaults merged with the file) as YAML.
pub fn run_config_show(config_path: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = effective_config(config_path)?;
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Describe where config files are searched for and which one is active.
#[must_use]
pub fn config_paths_report(config_path: Option<&Path>) -> String {
    let mut out = String::from("Config file search paths (in order):\n");
    for dir in config_search_dirs() {
        let _ = writeln!(out, "  {}", dir.display());
    }
    out.push_str("\nRecognized file names:\n");
    for name in CONFIG_FILE_NAMES {
        let _ = writeln!(out, "  {name}");
    }
    out.push('\n');
    match discover_config_file(config_path) {
        Some(path) => {
            let _ = writeln!(out, "Active config file: {}", path.display());
        }
        None => out.push_str("No config file found.\n"),
    }
    out
}

/// Write an example `.chainaudit.yaml` into `dir`, refusing to overwrite.
pub fn run_config_init(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(".chainaudit.yaml");
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), "created example config");
    Ok(target)
}

/// Print the config JSON schema, or write it to `output`.
pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema().context("failed to generate config schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = run_config_init(dir.path()).expect("init");
        let config = load_config_file(&path).expect("load");
        assert_eq!(config.parameters.risk_threshold, 60);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        run_config_init(dir.path()).expect("first init");
        let err = run_config_init(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_show_rejects_broken_explicit_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "parameters: [not, a, map]\n").expect("write");
        let err = run_config_show(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_show_uses_explicit_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = run_config_init(dir.path()).expect("init");
        let (config, loaded_from) = effective_config(Some(&path)).expect("load");
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config.parameters.risk_threshold, 60);
    }

    #[test]
    fn test_paths_report_names_explicit_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = run_config_init(dir.path()).expect("init");
        let report = config_paths_report(Some(&path));
        assert!(report.contains(".chainaudit.yaml"));
        assert!(report.contains(&format!("Active config file: {}", path.display())));
    }

    #[test]
    fn test_schema_written_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("schema.json");
        run_config_schema(Some(&path)).expect("schema");
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).expect("read")).expect("json");
        assert!(value.get("properties").is_some());
    }
}
