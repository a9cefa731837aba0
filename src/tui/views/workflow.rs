//! Arbitration workflow: identification, meeting, integration, tracking.

use super::{section_block, styled_table};
use crate::model::{DemoCatalog, NodeKind};
use crate::tui::app::{DashboardApp, WorkflowTab};
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Paragraph, Row, Tabs, Wrap,
    },
};

pub fn render_workflow(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    let titles: Vec<Line> = WorkflowTab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(section_block("Arbitration workflow [←→]"))
        .select(app.workflow_tab.index())
        .style(Styles::text_muted())
        .highlight_style(
            Style::default()
                .fg(colors().badge_fg_dark)
                .bg(colors().accent)
                .bold(),
        );
    frame.render_widget(tabs, chunks[0]);

    let catalog = &app.catalog;
    match app.workflow_tab {
        WorkflowTab::Identification => render_identification(frame, chunks[1], catalog),
        WorkflowTab::Meeting => render_meeting(frame, chunks[1], catalog),
        WorkflowTab::Integration => render_integration(frame, chunks[1], catalog),
        WorkflowTab::Tracking => render_tracking(frame, chunks[1], catalog),
    }
}

fn bullet_lines(heading: &str, items: &[&'static str]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(heading.to_string(), Styles::section_title())];
    lines.extend(items.iter().map(|item| {
        Line::from(vec![
            Span::styled(" • ", Styles::text_muted()),
            Span::styled(*item, Styles::text()),
        ])
    }));
    lines
}

fn render_identification(frame: &mut Frame, area: Rect, catalog: &DemoCatalog) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let mut lines = bullet_lines("Conflict features", catalog.conflict_features());
    lines.extend(bullet_lines("Difference kinds", catalog.difference_kinds()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(section_block("Multi-source conflict detection"))
            .wrap(Wrap { trim: false }),
        top[0],
    );

    let classification: Vec<Row> = catalog
        .classification()
        .iter()
        .map(|rule| {
            Row::new(vec![
                Span::styled(rule.conflict_type.label(), Styles::value()),
                Span::raw(rule.description),
                Span::raw(rule.channel),
                Span::raw(format!("{}h", rule.time_limit_hours)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(16),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(5),
    ];
    frame.render_widget(
        styled_table(
            "Conflict classification",
            &["Type", "Trigger", "Channel", "Limit"],
            classification,
            &widths,
        ),
        top[1],
    );

    let provenance: Vec<Row> = catalog
        .provenance()
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::styled(
                    row.department.ai_name(),
                    Style::default().fg(scheme.department_color(row.department)),
                ),
                Span::raw(row.indicator),
                Span::styled(row.value, Styles::value()),
                Span::raw(row.source),
                Span::styled(
                    row.status.label(),
                    Style::default().fg(scheme.tone_color(row.status.tone())).bold(),
                ),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(16),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Fill(2),
        Constraint::Length(13),
    ];
    frame.render_widget(
        styled_table(
            "Data provenance check",
            &["AI", "Indicator", "Value", "Source", "Status"],
            provenance,
            &widths,
        ),
        rows[1],
    );
}

fn render_meeting(frame: &mut Frame, area: Rect, catalog: &DemoCatalog) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);
    for (chain, slot) in catalog.evidence().iter().zip(columns.iter()) {
        let lines: Vec<Line> = chain
            .items
            .iter()
            .map(|item| {
                let (mark, color) = if item.supports {
                    ("✓ ", scheme.success)
                } else {
                    ("✗ ", scheme.error)
                };
                Line::from(vec![
                    Span::styled(mark, Style::default().fg(color).bold()),
                    Span::styled(item.text, Styles::text()),
                ])
            })
            .collect();
        let block = section_block(chain.title).title_style(
            Style::default()
                .fg(scheme.department_color(chain.department))
                .bold(),
        );
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *slot,
        );
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let confidence_lines: Vec<Line> = catalog
        .confidences()
        .iter()
        .map(|c| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<14}", c.department.ai_name()),
                    Style::default().fg(scheme.department_color(c.department)),
                ),
                Span::styled(format!("{:>3}% ", c.percent), Styles::value()),
            ];
            if let Some(note) = c.note {
                spans.push(Span::styled(
                    note,
                    Style::default().fg(scheme.delta_color(c.inverted)),
                ));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(confidence_lines).block(section_block("AI confidence")),
        bottom[0],
    );

    let stages: Vec<Row> = catalog
        .timeline()
        .iter()
        .map(|stage| {
            Row::new(vec![
                Span::raw(stage.stage),
                Span::styled(
                    stage.status.label(),
                    Style::default().fg(scheme.tone_color(stage.status.tone())),
                ),
                Span::raw(format!("{}h", stage.duration_hours)),
                Span::styled(stage.owner, Styles::text_muted()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Fill(2),
        Constraint::Length(11),
        Constraint::Length(4),
        Constraint::Fill(2),
    ];
    frame.render_widget(
        styled_table(
            "Meeting timeline",
            &["Stage", "Status", "Time", "Owner"],
            stages,
            &widths,
        ),
        bottom[1],
    );
}

fn node_color(kind: NodeKind) -> Color {
    let scheme = colors();
    match kind {
        NodeKind::Hub => scheme.accent,
        NodeKind::Business => scheme.procurement,
        NodeKind::Legal => scheme.legal,
        NodeKind::Finance => scheme.finance,
        NodeKind::External => scheme.secondary,
    }
}

fn render_integration(frame: &mut Frame, area: Rect, catalog: &DemoCatalog) {
    let scheme = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let (x_max, y_max) = catalog
        .nodes()
        .iter()
        .fold((1.0_f64, 1.0_f64), |(x, y), n| (x.max(n.x), y.max(n.y)));

    let edges = catalog.resolved_edges();
    let canvas = Canvas::default()
        .block(section_block("System topology"))
        .marker(Marker::Braille)
        .x_bounds([-0.5, x_max + 0.5])
        .y_bounds([-0.5, y_max + 0.5])
        .paint(|ctx| {
            for (from, to, _) in &edges {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    color: scheme.muted,
                });
            }
            ctx.layer();
            for node in catalog.nodes() {
                let marker = if node.kind == NodeKind::Hub { "◉ " } else { "● " };
                ctx.print(
                    node.x,
                    node.y,
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(node_color(node.kind))),
                        Span::styled(node.name, Styles::text()),
                    ]),
                );
            }
        });
    frame.render_widget(canvas, columns[0]);

    let flows: Vec<Row> = catalog
        .flows()
        .iter()
        .map(|flow| {
            Row::new(vec![
                Span::raw(flow.channel),
                Span::styled(flow.data_type, Styles::text_muted()),
                Span::styled(
                    flow.status.label(),
                    Style::default().fg(scheme.tone_color(flow.status.tone())),
                ),
                Span::raw(format!("{}ms", flow.latency_ms)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Length(6),
    ];
    frame.render_widget(
        styled_table(
            "Real-time data flows",
            &["Channel", "Data", "Status", "Lat."],
            flows,
            &widths,
        ),
        columns[1],
    );
}

fn render_tracking(frame: &mut Frame, area: Rect, catalog: &DemoCatalog) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let supplier = catalog.featured_supplier();
    let arbitration = catalog
        .conflicts_for_supplier(supplier.id)
        .first()
        .and_then(|event| catalog.arbitration_for_event(event.event_id));

    let mut lines = Vec::new();
    match arbitration {
        Some(arb) => {
            lines.push(Line::from(vec![
                Span::styled("Resolution: ", Styles::label()),
                Span::styled(arb.resolution, Style::default().fg(scheme.success).bold()),
                Span::styled(format!(" ({} {})", supplier.id, supplier.name), Styles::text_muted()),
            ]));
            lines.extend(arb.conditions.iter().map(|c| {
                Line::from(vec![
                    Span::styled(" • ", Styles::text_muted()),
                    Span::styled(*c, Styles::text()),
                ])
            }));
        }
        None => lines.push(Line::styled("No arbitration on record", Styles::text_muted())),
    }
    frame.render_widget(
        Paragraph::new(lines).block(section_block("Arbitration result")),
        rows[0],
    );

    let tasks: Vec<Row> = catalog
        .tasks()
        .iter()
        .map(|task| {
            let executor_style = if task.highlight_executor() {
                Style::default().fg(scheme.warning).bold()
            } else {
                Styles::text()
            };
            Row::new(vec![
                Span::raw(task.task),
                Span::styled(task.executor, executor_style),
                Span::raw(task.supervisor),
                Span::styled(task.criterion, Styles::text_muted()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Fill(2),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Fill(2),
    ];
    frame.render_widget(
        styled_table(
            "Task breakdown",
            &["Task", "Executor", "Supervisor", "Acceptance"],
            tasks,
            &widths,
        ),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[n] ", Styles::shortcut_key()),
            Span::styled("Simulate completion notification", Styles::shortcut_desc()),
        ])),
        rows[2],
    );
}
