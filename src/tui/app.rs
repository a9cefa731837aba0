//! `DashboardApp`: state of the interactive arbitration dashboard.
//!
//! Every control change recomputes the scenario readout from scratch; the
//! catalog itself never changes.

use crate::config::{DashboardConfig, DashboardModule, STATUS_MESSAGE_TICKS};
use crate::mapper::{Parameters, ScenarioReadout};
use crate::model::{CaseFilter, CaseRecord, DemoCatalog, Supplier};

/// Main application state for the dashboard.
pub struct DashboardApp {
    /// Literal demo dataset
    pub(crate) catalog: DemoCatalog,

    /// Currently shown module
    pub(crate) module: DashboardModule,

    /// Slider positions
    pub(crate) parameters: Parameters,

    /// Readout derived from `parameters`
    pub(crate) readout: ScenarioReadout,

    /// Case library filter
    pub(crate) case_filter: CaseFilter,

    /// Active tab inside the workflow module
    pub(crate) workflow_tab: WorkflowTab,

    /// Scenario decision-logic expanders
    pub(crate) show_logic: bool,

    /// Case-trend expander
    pub(crate) show_trend: bool,

    /// Show help overlay
    pub(crate) show_help: bool,

    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,

    /// Tick at which the status message expires
    status_expires_at: u64,

    /// Should quit
    pub(crate) should_quit: bool,

    /// Animation tick counter
    pub(crate) tick: u64,
}

impl DashboardApp {
    /// Create the app from resolved command settings.
    #[must_use]
    pub fn new(catalog: DemoCatalog, config: &DashboardConfig) -> Self {
        let readout = ScenarioReadout::compute(catalog.featured_supplier(), &config.parameters);
        Self {
            catalog,
            module: config.module,
            parameters: config.parameters,
            readout,
            case_filter: config.case_filter,
            workflow_tab: WorkflowTab::Identification,
            show_logic: false,
            show_trend: false,
            show_help: false,
            status_message: None,
            status_expires_at: 0,
            should_quit: false,
            tick: 0,
        }
    }

    /// Supplier shown on the scenario screen.
    #[must_use]
    pub fn supplier(&self) -> &Supplier {
        self.catalog.featured_supplier()
    }

    /// Case rows visible under the current filter.
    #[must_use]
    pub fn visible_cases(&self) -> Vec<&CaseRecord> {
        self.catalog.filtered_cases(self.case_filter)
    }

    fn recompute(&mut self) {
        self.readout = ScenarioReadout::compute(self.catalog.featured_supplier(), &self.parameters);
    }

    // ------------------------------------------------------------------
    // Module navigation
    // ------------------------------------------------------------------

    pub fn select_module(&mut self, module: DashboardModule) {
        self.module = module;
    }

    pub fn next_module(&mut self) {
        self.module = match self.module {
            DashboardModule::Scenario => DashboardModule::Workflow,
            DashboardModule::Workflow => DashboardModule::Cases,
            DashboardModule::Cases => DashboardModule::Scenario,
        };
    }

    pub fn prev_module(&mut self) {
        self.module = match self.module {
            DashboardModule::Scenario => DashboardModule::Cases,
            DashboardModule::Workflow => DashboardModule::Scenario,
            DashboardModule::Cases => DashboardModule::Workflow,
        };
    }

    pub fn next_workflow_tab(&mut self) {
        self.workflow_tab = self.workflow_tab.next();
    }

    pub fn prev_workflow_tab(&mut self) {
        self.workflow_tab = self.workflow_tab.prev();
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    /// Move the baseline price slider by `steps` increments.
    pub fn nudge_base_price(&mut self, steps: i32) {
        self.parameters.nudge_base_price(steps);
        self.recompute();
    }

    /// Move the risk threshold slider by `steps` increments.
    pub fn nudge_risk_threshold(&mut self, steps: i32) {
        self.parameters.nudge_risk_threshold(steps);
        self.recompute();
    }

    /// Advance the case filter: all, triple, double, single.
    pub fn cycle_case_filter(&mut self) {
        self.case_filter = self.case_filter.next();
    }

    /// Step the case filter back: all, single, double, triple.
    pub fn cycle_case_filter_back(&mut self) {
        self.case_filter = self.case_filter.prev();
    }

    /// Toggle the expander belonging to the current module.
    pub fn toggle_details(&mut self) {
        match self.module {
            DashboardModule::Scenario => self.show_logic = !self.show_logic,
            DashboardModule::Cases => self.show_trend = !self.show_trend,
            DashboardModule::Workflow => {
                self.set_status_message("No expandable details on this screen");
            }
        }
    }

    /// The "simulate completion notification" button.
    ///
    /// Only meaningful on the execution tracking tab; nothing is sent.
    pub fn simulate_notification(&mut self) {
        if self.module != DashboardModule::Workflow || self.workflow_tab != WorkflowTab::Tracking {
            return;
        }
        tracing::info!("simulated completion notification (nothing sent)");
        self.set_status_message("Completion notification simulated (demo, nothing sent)");
    }

    // ------------------------------------------------------------------
    // Overlays and status
    // ------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_expires_at = self.tick + STATUS_MESSAGE_TICKS;
    }

    /// Advance the tick counter, expiring stale status messages.
    pub fn on_tick(&mut self) {
        self.tick += 1;
        if self.status_message.is_some() && self.tick >= self.status_expires_at {
            self.status_message = None;
        }
    }
}

/// Tabs of the arbitration workflow module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowTab {
    Identification,
    Meeting,
    Integration,
    Tracking,
}

impl WorkflowTab {
    pub const ALL: [Self; 4] = [
        Self::Identification,
        Self::Meeting,
        Self::Integration,
        Self::Tracking,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Identification => "Conflict identification",
            Self::Meeting => "Arbitration meeting",
            Self::Integration => "System integration",
            Self::Tracking => "Execution tracking",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Identification => 0,
            Self::Meeting => 1,
            Self::Integration => 2,
            Self::Tracking => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
