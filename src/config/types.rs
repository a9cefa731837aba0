//! Configuration types for chainaudit.

use super::defaults;
use crate::mapper::Parameters;
use crate::model::CaseFilter;
use crate::reports::{ReportFormat, ReportType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Application Configuration
// ============================================================================

/// Complete application configuration, as read from `.chainaudit.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Initial slider positions
    pub parameters: ParametersConfig,
    /// Case library settings
    pub cases: CasesConfig,
    /// Output settings
    pub output: OutputConfig,
    /// TUI settings
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Parameters built from the configured defaults, clamped into range.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::new(self.parameters.base_price, self.parameters.risk_threshold)
    }

    /// The configured case filter, falling back to `All` when unparsable.
    #[must_use]
    pub fn case_filter(&self) -> CaseFilter {
        self.cases.filter.parse().unwrap_or_default()
    }
}

/// Initial positions of the two parameter sliders.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParametersConfig {
    /// Baseline price in ten-thousand-yuan units
    #[schemars(range(min = 10.0, max = 20.0))]
    pub base_price: f64,
    /// Risk threshold
    #[schemars(range(min = 0, max = 100))]
    pub risk_threshold: u8,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            base_price: defaults::DEFAULT_BASE_PRICE,
            risk_threshold: defaults::DEFAULT_RISK_THRESHOLD,
        }
    }
}

/// Case library configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CasesConfig {
    /// Initial case-type filter: all, triple, double or single
    pub filter: String,
}

impl Default for CasesConfig {
    fn default() -> Self {
        Self {
            filter: defaults::DEFAULT_CASE_FILTER.to_string(),
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Dashboard sections to include in reports
    pub sections: ReportType,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: defaults::DEFAULT_TICK_RATE_MS,
        }
    }
}

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chainaudit").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Which dashboard module a command opens or renders.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardModule {
    /// Supplier qualification conflict simulation
    #[default]
    Scenario,
    /// Three-stage arbitration workflow
    Workflow,
    /// Implementation case library
    Cases,
}

impl DashboardModule {
    pub const ALL: [Self; 3] = [Self::Scenario, Self::Workflow, Self::Cases];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Scenario => "Conflict scenario simulation",
            Self::Workflow => "Arbitration workflow",
            Self::Cases => "Case library",
        }
    }

    /// The report section that renders this module.
    #[must_use]
    pub const fn section(self) -> ReportType {
        match self {
            Self::Scenario => ReportType::Scenario,
            Self::Workflow => ReportType::Workflow,
            Self::Cases => ReportType::Cases,
        }
    }
}

/// Fully resolved settings for one dashboard command.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Module shown first in the TUI
    pub module: DashboardModule,
    pub parameters: Parameters,
    pub case_filter: CaseFilter,
    pub output: OutputConfig,
    pub tui: TuiConfig,
    pub quiet: bool,
}

impl DashboardConfig {
    /// Start from file configuration; CLI overrides are applied by the caller.
    #[must_use]
    pub fn from_app_config(config: &AppConfig, module: DashboardModule) -> Self {
        Self {
            module,
            parameters: config.parameters(),
            case_filter: config.case_filter(),
            output: config.output.clone(),
            tui: config.tui.clone(),
            quiet: false,
        }
    }
}
