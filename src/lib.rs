//! **Terminal demo dashboard for multi-AI supply-chain arbitration.**
//!
//! `chainaudit` shows how a procurement decision looks when three
//! departmental assessment AIs (procurement, legal, finance) disagree about
//! a supplier, and how the disagreement is classified, arbitrated and
//! tracked. All data is a fixed, simulated dataset; the only live logic is
//! the mapping from two user controls to the scenario readout.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the literal dataset, [`DemoCatalog`], and its record
//!   types (suppliers, conflicts, cases, workflow tables).
//! - **[`mapper`]**: the parameter-to-display mapping. [`ScenarioReadout`]
//!   turns a baseline price and a risk threshold into the deviation and
//!   risk labels.
//! - **[`reports`]**: renders a dashboard snapshot as a terminal summary,
//!   JSON, Markdown or CSV.
//! - **[`tui`]**: the interactive ratatui dashboard.
//! - **[`config`]** and **[`cli`]**: YAML config discovery and the command
//!   handlers behind the `chainaudit` binary.
//!
//! ## Computing a readout
//!
//! ```
//! use chainaudit::mapper::{DeviationLabel, Parameters, RiskLabel, ScenarioReadout};
//! use chainaudit::model::DemoCatalog;
//!
//! let catalog = DemoCatalog::seeded();
//! let readout = ScenarioReadout::compute(catalog.featured_supplier(), &Parameters::new(14.2, 60));
//!
//! assert_eq!(readout.deviation, DeviationLabel::ExceedsThreshold);
//! assert_eq!(readout.risk, RiskLabel::High);
//! ```
//!
//! ## Filtering the case library
//!
//! ```
//! use chainaudit::model::{CaseFilter, DemoCatalog};
//!
//! let catalog = DemoCatalog::seeded();
//! let filter: CaseFilter = "triple".parse().unwrap();
//! assert_eq!(catalog.filtered_cases(filter).len(), 1);
//! assert_eq!(catalog.filtered_cases(CaseFilter::All).len(), 3);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math casts between usize, u16 and f64 on small bounded values
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // State structs use bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, DashboardConfig, DashboardModule, OutputConfig, TuiConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ChainAuditError, ErrorContext, Result};
pub use mapper::{DeviationLabel, Parameters, RiskLabel, ScenarioReadout};
pub use model::{CaseFilter, CaseRecord, ConflictType, DemoCatalog, Supplier};
pub use reports::{DashboardSnapshot, ReportFormat, ReportGenerator, ReportType};
pub use tui::DashboardApp;
