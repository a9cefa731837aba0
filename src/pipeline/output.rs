//! Where reports go and in which format.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Report destination
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` means stdout.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// ANSI colour is only ever written to an interactive stdout.
    pub fn wants_color(&self, no_color_flag: bool) -> bool {
        self.is_terminal() && should_use_color(no_color_flag)
    }
}

/// Resolve `Auto` against the destination.
///
/// A terminal stdout gets the interactive dashboard, anything else the
/// plain-text summary.
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto if target.is_terminal() => ReportFormat::Tui,
        ReportFormat::Auto => ReportFormat::Summary,
        other => other,
    }
}

/// Format for a non-interactive module report.
///
/// Same as [`auto_detect_format`], except that the interactive dashboard
/// is never an option and falls back to the summary.
pub fn report_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match auto_detect_format(format, target) {
        ReportFormat::Tui => ReportFormat::Summary,
        other => other,
    }
}

/// `--no-color` and `NO_COLOR` both disable colour
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

/// Write a rendered report to stdout or a file.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => println!("{content}"),
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            if !quiet {
                tracing::info!(path = %path.display(), bytes = content.len(), "report written");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_target(name: &str) -> OutputTarget {
        OutputTarget::from_option(Some(std::env::temp_dir().join(name)))
    }

    #[test]
    fn test_from_option_maps_none_to_stdout() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
        assert!(matches!(file_target("cases.json"), OutputTarget::File(_)));
    }

    #[test]
    fn test_explicit_formats_pass_through() {
        let target = file_target("scenario.md");
        for format in [ReportFormat::Json, ReportFormat::Markdown, ReportFormat::Csv] {
            assert_eq!(auto_detect_format(format, &target), format);
            assert_eq!(report_format(format, &target), format);
        }
    }

    #[test]
    fn test_auto_to_file_is_summary() {
        let target = file_target("dashboard.txt");
        assert_eq!(auto_detect_format(ReportFormat::Auto, &target), ReportFormat::Summary);
    }

    #[test]
    fn test_report_format_never_tui() {
        let target = file_target("workflow.txt");
        assert_eq!(report_format(ReportFormat::Tui, &target), ReportFormat::Summary);
        assert_eq!(report_format(ReportFormat::Auto, &OutputTarget::Stdout), ReportFormat::Summary);
    }

    #[test]
    fn test_files_never_get_color() {
        assert!(!file_target("cases.csv").wants_color(false));
        assert!(!OutputTarget::Stdout.wants_color(true));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cases.csv");
        let target = OutputTarget::from_option(Some(path.clone()));
        write_output("case_id,conflict_type", &target, true).expect("write");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "case_id,conflict_type");
    }

    #[test]
    fn test_write_output_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = OutputTarget::File(dir.path().join("missing").join("report.json"));
        let err = write_output("{}", &target, true).unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }
}
