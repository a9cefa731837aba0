//! Pipeline orchestration for non-interactive dashboard renderings.
//!
//! Shared logic for the capture → render → write flow used by the CLI
//! command handlers.

mod output;
mod report_stage;

pub use output::{auto_detect_format, report_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_report, render_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
