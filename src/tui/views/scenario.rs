//! Conflict scenario simulation: sliders, department metrics, comparison.

use super::section_block;
use crate::mapper::{MetricCard, RISK_THRESHOLD_RANGE};
use crate::model::DepartmentAssessment;
use crate::tui::app::DashboardApp;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::HorizontalBar;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, LineGauge, Paragraph, Wrap},
};

pub fn render_scenario(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Supplier + sliders
            Constraint::Length(6), // Metric cards
            Constraint::Min(7),    // Decision logic or comparison chart
        ])
        .split(area);

    render_controls(frame, chunks[0], app);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    let supplier = app.supplier();
    for (card, slot) in app.readout.metric_cards(supplier).iter().zip(cards.iter()) {
        render_metric_card(frame, *slot, card);
    }

    if app.show_logic {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[2]);
        for (assessment, slot) in app.catalog.assessments().iter().zip(columns.iter()) {
            render_decision_logic(frame, *slot, assessment);
        }
    } else {
        render_comparison(frame, chunks[2], app);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let supplier = app.supplier();
    let block = section_block("Supplier qualification conflict");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let info = Line::from(vec![
        Span::styled(format!("{} ", supplier.id), Style::default().fg(scheme.accent).bold()),
        Span::styled(supplier.name, Styles::value()),
        Span::styled(format!(" │ {} │ quote ", supplier.category), Styles::label()),
        Span::styled(
            format!("{:.2}", app.readout.current_price),
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled(" x10k yuan", Styles::label()),
    ]);
    frame.render_widget(Paragraph::new(info), rows[0]);

    let sliders = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let base = LineGauge::default()
        .label(format!("[ ] Base price {:>4.1}", app.parameters.base_price()))
        .ratio(app.parameters.base_price_ratio().clamp(0.0, 1.0))
        .filled_style(Style::default().fg(scheme.primary))
        .unfilled_style(Style::default().fg(scheme.muted));
    frame.render_widget(base, sliders[0]);

    let risk_span = f64::from(*RISK_THRESHOLD_RANGE.end() - *RISK_THRESHOLD_RANGE.start());
    let risk = LineGauge::default()
        .label(format!("-+ Risk threshold {:>3}", app.parameters.risk_threshold()))
        .ratio((f64::from(app.parameters.risk_threshold()) / risk_span).clamp(0.0, 1.0))
        .filled_style(Style::default().fg(scheme.accent))
        .unfilled_style(Style::default().fg(scheme.muted));
    frame.render_widget(risk, sliders[1]);
}

fn render_metric_card(frame: &mut Frame, area: Rect, card: &MetricCard) {
    let scheme = colors();
    let block = Block::default()
        .title(format!(" {} ", card.department.ai_name()))
        .title_style(Style::default().fg(scheme.department_color(card.department)).bold())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let arrow = if card.delta_inverted { "▼ " } else { "▲ " };
    let lines = vec![
        Line::styled(card.title, Styles::label()),
        Line::styled(card.value.clone(), Styles::value()),
        Line::styled(
            format!("{arrow}{}", card.delta),
            Style::default().fg(scheme.delta_color(card.delta_inverted)),
        ),
    ];

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(Paragraph::new(lines), parts[0]);

    if let Some(ratio) = card.gauge {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(scheme.success).bg(scheme.muted))
            .ratio(ratio.clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, parts[1]);
    }
}

fn render_decision_logic(frame: &mut Frame, area: Rect, assessment: &DepartmentAssessment) {
    let scheme = colors();
    let block = section_block("Decision logic");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(assessment.factors.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Model: ", Styles::label()),
            Span::styled(assessment.model_type, Styles::value()),
        ])),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(assessment.factor_heading, Styles::section_title())),
        rows[1],
    );

    let color = scheme.department_color(assessment.department);
    for (factor, row) in assessment.factors.iter().zip(rows.iter().skip(2)) {
        frame.render_widget(
            HorizontalBar::new(factor.name, usize::from(factor.weight_pct), 100)
                .color(color)
                .suffix("%")
                .label_width(16),
            *row,
        );
    }

    if let Some(last) = rows.last() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Sources: ", Styles::label()),
                Span::styled(assessment.data_sources, Styles::text_muted()),
            ]))
            .wrap(Wrap { trim: true }),
            *last,
        );
    }
}

fn render_comparison(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let radar = app.catalog.radar();

    let groups: Vec<BarGroup> = radar
        .dimensions
        .iter()
        .enumerate()
        .map(|(idx, dimension)| {
            let bars: Vec<Bar> = radar
                .series
                .keys()
                .filter_map(|dept| {
                    radar.score(*dept, idx).map(|score| {
                        Bar::default()
                            .value(u64::from(score))
                            .style(Style::default().fg(scheme.department_color(*dept)))
                            .value_style(
                                Style::default()
                                    .fg(scheme.badge_fg_dark)
                                    .bg(scheme.department_color(*dept)),
                            )
                    })
                })
                .collect();
            BarGroup::default()
                .label(Line::from(*dimension))
                .bars(&bars)
        })
        .collect();

    let legend: String = radar
        .series
        .keys()
        .map(|d| d.ai_name())
        .collect::<Vec<_>>()
        .join(" / ");

    let mut chart = BarChart::default()
        .block(section_block(&format!("Cross-AI comparison ({legend}) [d] logic details")))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(3)
        .max(100);
    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}
