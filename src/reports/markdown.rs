//! Markdown report generator.

use super::escape::{escape_markdown_list, escape_markdown_table};
use super::{DashboardSnapshot, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportType};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn scenario(snapshot: &DashboardSnapshot<'_>, md: &mut String) -> Result<(), ReportError> {
        let supplier = snapshot.supplier;
        writeln!(md, "## Conflict scenario simulation\n")?;
        writeln!(
            md,
            "Supplier **{}** {} ({}), quote {:.2} x10k yuan.\n",
            supplier.id,
            escape_markdown_list(supplier.name),
            escape_markdown_list(supplier.category),
            snapshot.readout.current_price
        )?;
        writeln!(
            md,
            "Controls: base price {:.1}, risk threshold {}.\n",
            snapshot.parameters.base_price(),
            snapshot.parameters.risk_threshold()
        )?;

        writeln!(md, "| Department | Metric | Value | Delta |")?;
        writeln!(md, "|------------|--------|-------|-------|")?;
        for card in snapshot.readout.metric_cards(supplier) {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                card.department.ai_name(),
                card.title,
                escape_markdown_table(&card.value),
                escape_markdown_table(&card.delta)
            )?;
        }
        writeln!(md)?;

        for assessment in snapshot.catalog.assessments() {
            writeln!(
                md,
                "### {} decision logic\n\nModel: {}. {}:\n",
                assessment.department.ai_name(),
                assessment.model_type,
                assessment.factor_heading
            )?;
            for factor in &assessment.factors {
                writeln!(md, "- {} ({}%)", escape_markdown_list(factor.name), factor.weight_pct)?;
            }
            writeln!(md, "\nData sources: {}\n", escape_markdown_list(assessment.data_sources))?;
        }

        let radar = snapshot.catalog.radar();
        writeln!(md, "### Cross-AI comparison\n")?;
        write!(md, "| Dimension |")?;
        for dept in radar.series.keys() {
            write!(md, " {} |", dept.label())?;
        }
        writeln!(md)?;
        writeln!(md, "|-----------|{}", "------|".repeat(radar.series.len()))?;
        for (idx, dimension) in radar.dimensions.iter().enumerate() {
            write!(md, "| {dimension} |")?;
            for dept in radar.series.keys() {
                match radar.score(*dept, idx) {
                    Some(score) => write!(md, " {score} |")?,
                    None => write!(md, " - |")?,
                }
            }
            writeln!(md)?;
        }
        writeln!(md)?;
        Ok(())
    }

    fn workflow(snapshot: &DashboardSnapshot<'_>, md: &mut String) -> Result<(), ReportError> {
        let catalog = snapshot.catalog;
        writeln!(md, "## Arbitration workflow\n")?;

        writeln!(md, "### Conflict identification\n")?;
        for feature in catalog.conflict_features() {
            writeln!(md, "- {}", escape_markdown_list(feature))?;
        }
        writeln!(md)?;
        writeln!(md, "| Type | Description | Channel | Time limit |")?;
        writeln!(md, "|------|-------------|---------|------------|")?;
        for rule in catalog.classification() {
            writeln!(
                md,
                "| {} | {} | {} | {}h |",
                rule.conflict_type.label(),
                escape_markdown_table(rule.description),
                escape_markdown_table(rule.channel),
                rule.time_limit_hours
            )?;
        }
        writeln!(md)?;
        writeln!(md, "| Department | Indicator | Value | Source | Status |")?;
        writeln!(md, "|------------|-----------|-------|--------|--------|")?;
        for row in catalog.provenance() {
            writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                row.department.label(),
                escape_markdown_table(row.indicator),
                escape_markdown_table(row.value),
                escape_markdown_table(row.source),
                row.status.label()
            )?;
        }
        writeln!(md)?;

        writeln!(md, "### Arbitration meeting\n")?;
        for chain in catalog.evidence() {
            writeln!(md, "**{}**\n", escape_markdown_list(chain.title))?;
            for item in &chain.items {
                let mark = if item.supports { "+" } else { "-" };
                writeln!(md, "- [{mark}] {}", escape_markdown_list(item.text))?;
            }
            writeln!(md)?;
        }
        for conf in catalog.confidences() {
            writeln!(
                md,
                "- {} confidence: {}%{}",
                conf.department.ai_name(),
                conf.percent,
                conf.note.map(|n| format!(" ({n})")).unwrap_or_default()
            )?;
        }
        writeln!(md)?;
        writeln!(md, "| Stage | Status | Duration | Owner |")?;
        writeln!(md, "|-------|--------|----------|-------|")?;
        for stage in catalog.timeline() {
            writeln!(
                md,
                "| {} | {} | {}h | {} |",
                stage.stage,
                stage.status.label(),
                stage.duration_hours,
                escape_markdown_table(stage.owner)
            )?;
        }
        writeln!(md)?;

        writeln!(md, "### System integration\n")?;
        for (from, to, edge) in catalog.resolved_edges() {
            writeln!(md, "- {} -> {} ({})", from.name, to.name, edge.link)?;
        }
        writeln!(md)?;
        writeln!(md, "| Channel | Data | Status | Latency |")?;
        writeln!(md, "|---------|------|--------|---------|")?;
        for flow in catalog.flows() {
            writeln!(
                md,
                "| {} | {} | {} | {}ms |",
                escape_markdown_table(flow.channel),
                escape_markdown_table(flow.data_type),
                flow.status.label(),
                flow.latency_ms
            )?;
        }
        writeln!(md)?;

        writeln!(md, "### Execution tracking\n")?;
        writeln!(md, "| Task | Executor | Supervisor | Criterion |")?;
        writeln!(md, "|------|----------|------------|-----------|")?;
        for task in catalog.tasks() {
            let executor = if task.highlight_executor() {
                format!("**{}**", task.executor)
            } else {
                task.executor.to_string()
            };
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                task.task,
                executor,
                escape_markdown_table(task.supervisor),
                escape_markdown_table(task.criterion)
            )?;
        }
        writeln!(md)?;
        Ok(())
    }

    fn cases(snapshot: &DashboardSnapshot<'_>, md: &mut String) -> Result<(), ReportError> {
        writeln!(md, "## Case library\n")?;
        writeln!(md, "Filter: `{}`\n", snapshot.case_filter)?;
        writeln!(md, "| Case | Type | Disposition | Duration | Retention |")?;
        writeln!(md, "|------|------|-------------|----------|-----------|")?;
        for case in &snapshot.cases {
            writeln!(
                md,
                "| {} | {} | {} | {}h | {} |",
                case.case_id,
                case.conflict_type.as_str(),
                escape_markdown_table(case.disposition),
                case.duration_hours,
                escape_markdown_table(case.retention)
            )?;
        }
        writeln!(md)?;
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# {}\n", config.title_or_default())?;
        writeln!(
            md,
            "_Generated {} by chainaudit {}_\n",
            config.metadata.timestamp(),
            config.metadata.tool_version
        )?;

        if config.includes(ReportType::Scenario) {
            Self::scenario(snapshot, &mut md)?;
        }
        if config.includes(ReportType::Workflow) {
            Self::workflow(snapshot, &mut md)?;
        }
        if config.includes(ReportType::Cases) {
            Self::cases(snapshot, &mut md)?;
        }

        writeln!(md, "---\n\nDemo system: all data shown is simulated.")?;
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Parameters;
    use crate::model::{CaseFilter, ConflictType, DemoCatalog};

    fn render(reporter: &MarkdownReporter, types: Vec<ReportType>, filter: CaseFilter) -> String {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::new(14.2, 60), filter);
        reporter
            .generate_report(&snapshot, &ReportConfig::with_types(types))
            .unwrap()
    }

    #[test]
    fn test_scenario_table() {
        let md = render(&MarkdownReporter::new(), vec![ReportType::Scenario], CaseFilter::All);
        assert!(md.contains("| Finance AI | Price deviation | -88.9% | exceeds threshold |"));
        assert!(md.contains("| Legal AI | Risk rating | high | 1 related lawsuit |"));
        assert!(md.contains("### Procurement AI decision logic"));
    }

    #[test]
    fn test_workflow_highlights_legal_executor() {
        let md = render(&MarkdownReporter::new(), vec![ReportType::Workflow], CaseFilter::All);
        assert!(md.contains("**Legal dept.**"));
        assert!(md.contains("Chain Audit core -> ERP (Real-time data)"));
    }

    #[test]
    fn test_cases_filter() {
        let md = render(
            &MarkdownReporter::new(),
            vec![ReportType::Cases],
            CaseFilter::Only(ConflictType::Triple),
        );
        assert!(md.contains("Filter: `triple`"));
        assert!(md.contains("| C-2023-045 | triple |"));
        assert!(!md.contains("C-2024-018"));
    }
}
