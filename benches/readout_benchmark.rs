use chainaudit::mapper::{Parameters, ScenarioReadout};
use chainaudit::model::{CaseFilter, ConflictType, DemoCatalog};
use chainaudit::reports::{create_reporter_with_options, DashboardSnapshot, ReportConfig, ReportFormat};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_readout(c: &mut Criterion) {
    let catalog = DemoCatalog::seeded();
    let supplier = catalog.featured_supplier();

    c.bench_function("readout_slider_sweep", |b| {
        b.iter(|| {
            let mut params = Parameters::default();
            for step in [-40, 15, 3, 22, -7] {
                params.nudge_base_price(step);
                params.nudge_risk_threshold(step);
                black_box(ScenarioReadout::compute(black_box(supplier), &params));
            }
        });
    });
}

fn bench_case_filter(c: &mut Criterion) {
    let catalog = DemoCatalog::seeded();

    c.bench_function("case_filter_cycle", |b| {
        b.iter(|| {
            for filter in CaseFilter::OPTIONS {
                black_box(catalog.filtered_cases(black_box(filter)));
            }
        });
    });
}

fn bench_reports(c: &mut Criterion) {
    let catalog = DemoCatalog::seeded();
    let snapshot = DashboardSnapshot::capture(
        &catalog,
        Parameters::new(15.8, 72),
        CaseFilter::Only(ConflictType::Triple),
    );
    let config = ReportConfig::all();

    let mut group = c.benchmark_group("full_report");
    for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown, ReportFormat::Csv] {
        let reporter = create_reporter_with_options(format, false);
        group.bench_function(format.to_string(), |b| {
            b.iter(|| black_box(reporter.generate_report(black_box(&snapshot), &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_readout, bench_case_filter, bench_reports);
criterion_main!(benches);
