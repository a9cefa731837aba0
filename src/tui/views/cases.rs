//! Historical case library with the conflict-type filter.

use super::{section_block, styled_table};
use crate::model::{duration_trend, CaseFilter, CaseRecord};
use crate::tui::app::DashboardApp;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_empty_state, render_filter_indicator};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Row},
};

pub fn render_cases(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let cases = app.visible_cases();

    let table_height = u16::try_from(cases.len()).unwrap_or(u16::MAX).saturating_add(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(table_height.max(4)),
            Constraint::Min(3),
        ])
        .split(area);

    let options: Vec<&str> = CaseFilter::OPTIONS.iter().map(|f| f.label()).collect();
    let mut spans = render_filter_indicator("Conflict type [f]", app.case_filter.label(), &options);
    spans.push(Span::styled(
        format!("  {} of {} cases", cases.len(), app.catalog.cases().len()),
        Styles::text_muted(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if cases.is_empty() {
        render_empty_state(frame, chunks[1], "No cases match this filter", Some("Press f to change it"));
    } else {
        render_case_table(frame, chunks[1], &cases);
    }

    if app.show_trend {
        render_trend(frame, chunks[2], &cases);
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[d] ", Styles::shortcut_key()),
                Span::styled("Show case trend", Styles::shortcut_desc()),
            ])),
            chunks[2],
        );
    }
}

fn render_case_table(frame: &mut Frame, area: Rect, cases: &[&CaseRecord]) {
    let rows: Vec<Row> = cases
        .iter()
        .map(|case| {
            Row::new(vec![
                Span::styled(case.case_id, Styles::value()),
                Span::raw(case.conflict_type.label()),
                Span::raw(case.disposition),
                Span::raw(format!("{}h", case.duration_hours)),
                Span::styled(case.retention, Styles::text_muted()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(11),
        Constraint::Length(16),
        Constraint::Fill(2),
        Constraint::Length(9),
        Constraint::Fill(2),
    ];
    frame.render_widget(
        styled_table(
            "Historical cases",
            &["Case", "Conflict", "Disposition", "Duration", "Follow-up"],
            rows,
            &widths,
        ),
        area,
    );
}

fn render_trend(frame: &mut Frame, area: Rect, cases: &[&CaseRecord]) {
    let trend = duration_trend(cases);
    if trend.is_empty() {
        render_empty_state(frame, area, "No cases to plot", None);
        return;
    }

    let points: Vec<(f64, f64)> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.duration_hours)))
        .collect();
    let x_max = (trend.len().saturating_sub(1)).max(1) as f64;
    let y_max = trend
        .iter()
        .map(|p| p.duration_hours)
        .max()
        .unwrap_or(0)
        .max(1);
    // Leave headroom above the tallest point
    let y_top = f64::from(y_max) * 1.2;

    let dataset = Dataset::default()
        .name("Arbitration hours")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors().primary))
        .data(&points);

    let x_labels: Vec<Span> = trend
        .iter()
        .map(|p| Span::styled(p.case_id, Styles::text_muted()))
        .collect();
    let y_labels = vec![
        Span::styled("0", Styles::text_muted()),
        Span::styled(format!("{y_max}h"), Styles::text_muted()),
    ];

    let chart = Chart::new(vec![dataset])
        .block(section_block("Case trend: arbitration duration"))
        .x_axis(
            Axis::default()
                .style(Styles::border())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Styles::border())
                .bounds([0.0, y_top])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
