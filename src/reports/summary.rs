//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable rendering of each dashboard module.

use super::{DashboardSnapshot, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportType};
use crate::model::Tone;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "green",
        Tone::Caution => "yellow",
        Tone::Alert => "red",
        Tone::Neutral => "dim",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(String::new());
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
    }

    fn scenario(&self, snapshot: &DashboardSnapshot<'_>, lines: &mut Vec<String>) {
        let supplier = snapshot.supplier;
        self.heading(lines, "Conflict scenario simulation");
        lines.push(format!(
            "{}  {} {} ({})",
            self.color("Supplier:", "cyan"),
            supplier.id,
            supplier.name,
            supplier.category
        ));
        lines.push(format!(
            "{}  base price {:.1} (x10k yuan), risk threshold {}",
            self.color("Controls:", "cyan"),
            snapshot.parameters.base_price(),
            snapshot.parameters.risk_threshold()
        ));
        lines.push(format!(
            "{}  {:.2} (x10k yuan)",
            self.color("Quote:", "cyan"),
            snapshot.readout.current_price
        ));

        for card in snapshot.readout.metric_cards(supplier) {
            let delta_color = if card.delta_inverted { "red" } else { "green" };
            lines.push(format!(
                "  {:<12} {:<26} {:>8}  {}",
                card.department.ai_name(),
                card.title,
                self.color(&card.value, "bold"),
                self.color(&card.delta, delta_color)
            ));
        }

        let radar = snapshot.catalog.radar();
        lines.push(format!("  {}", self.color("Cross-AI comparison (avg):", "cyan")));
        for (dept, avg) in radar.averages() {
            lines.push(format!("    {:<12} {avg:.1}", dept.label()));
        }
    }

    fn workflow(&self, snapshot: &DashboardSnapshot<'_>, lines: &mut Vec<String>) {
        let catalog = snapshot.catalog;
        self.heading(lines, "Arbitration workflow");

        for event in catalog.conflicts() {
            lines.push(format!(
                "{}  {} {} ({})",
                self.color("Event:", "cyan"),
                event.event_id,
                event.conflict_type.label(),
                event.status.label()
            ));
            if let Some(arb) = catalog.arbitration_for_event(event.event_id) {
                lines.push(format!(
                    "  {} {}",
                    self.color("Resolution:", "bold"),
                    arb.resolution
                ));
                for condition in &arb.conditions {
                    lines.push(format!("    - {condition}"));
                }
            }
        }

        lines.push(self.color("Classification:", "cyan"));
        for rule in catalog.classification() {
            lines.push(format!(
                "  {:<7} {:<34} {:<36} {}h",
                rule.conflict_type.as_str(),
                rule.description,
                rule.channel,
                rule.time_limit_hours
            ));
        }

        lines.push(self.color("Confidence:", "cyan"));
        for conf in catalog.confidences() {
            let color = if conf.inverted { "red" } else { "green" };
            lines.push(format!(
                "  {:<14} {}",
                conf.department.ai_name(),
                self.color(&format!("{}%", conf.percent), color)
            ));
        }

        lines.push(self.color("Meeting timeline:", "cyan"));
        for stage in catalog.timeline() {
            lines.push(format!(
                "  {:<20} {:<12} {}h  {}",
                stage.stage,
                self.color(stage.status.label(), tone_color(stage.status.tone())),
                stage.duration_hours,
                stage.owner
            ));
        }

        lines.push(self.color("Data flows:", "cyan"));
        for flow in catalog.flows() {
            lines.push(format!(
                "  {:<18} {:<18} {:<8} {}ms",
                flow.channel,
                flow.data_type,
                self.color(flow.status.label(), tone_color(flow.status.tone())),
                flow.latency_ms
            ));
        }

        lines.push(self.color("Tracking:", "cyan"));
        for task in catalog.tasks() {
            let executor = if task.highlight_executor() {
                self.color(task.executor, "yellow")
            } else {
                task.executor.to_string()
            };
            lines.push(format!(
                "  {:<20} {executor:<18} {:<18} {}",
                task.task, task.supervisor, task.criterion
            ));
        }
    }

    fn cases(&self, snapshot: &DashboardSnapshot<'_>, lines: &mut Vec<String>) {
        self.heading(lines, "Case library");
        lines.push(format!(
            "{}  {}",
            self.color("Filter:", "cyan"),
            snapshot.case_filter.label()
        ));
        if snapshot.cases.is_empty() {
            lines.push(format!("  {}", self.color("No matching cases", "dim")));
        }
        for case in &snapshot.cases {
            lines.push(format!(
                "  {:<11} {:<7} {:<26} {:>3}h  {}",
                case.case_id,
                case.conflict_type.as_str(),
                case.disposition,
                case.duration_hours,
                case.retention
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = vec![
            self.color(config.title_or_default(), "bold"),
            self.color("═".repeat(48).as_str(), "dim"),
        ];

        if config.includes(ReportType::Scenario) {
            self.scenario(snapshot, &mut lines);
        }
        if config.includes(ReportType::Workflow) {
            self.workflow(snapshot, &mut lines);
        }
        if config.includes(ReportType::Cases) {
            self.cases(snapshot, &mut lines);
        }

        lines.push(String::new());
        lines.push(self.color("Demo system: all data shown is simulated.", "dim"));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
