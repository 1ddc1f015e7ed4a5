use chartplan::core::{ChartKind, DataPoint, compose_tooltip};
use chartplan::{PlanEngine, PlanRequest, request_fingerprint};
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn quarter_of_daily_data() -> Vec<DataPoint> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid start timestamp");

    (0..90)
        .map(|day| {
            let t = f64::from(day);
            DataPoint::at_timestamp(start + Duration::days(i64::from(day)))
                .with_value("spend", 500.0 + t * 12.0)
                .with_value("revenue", 1_400.0 + t * 31.0)
                .with_value("roas", 2.0 + (t * 0.37).sin())
                .with_value("ctr", 1.5 + (t * 0.11).cos())
                .with_value("clicks", 10_000.0 + t * 250.0)
                .with_value("impressions", 400_000.0 + t * 9_000.0)
        })
        .collect()
}

fn bench_full_plan_90_days_6_metrics(c: &mut Criterion) {
    let engine = PlanEngine::default();
    let data = quarter_of_daily_data();
    let keys = ["spend", "revenue", "roas", "ctr", "clicks", "impressions"];

    c.bench_function("full_plan_90_days_6_metrics", |b| {
        b.iter(|| {
            let request =
                PlanRequest::metrics(black_box(&data), black_box(keys), ChartKind::Composed);
            let state = engine.plan(&request);
            assert!(state.is_ready());
        })
    });
}

fn bench_tooltip_compose(c: &mut Criterion) {
    let engine = PlanEngine::default();
    let data = quarter_of_daily_data();
    let keys = ["spend", "revenue", "roas", "ctr", "clicks", "impressions"];
    let request = PlanRequest::metrics(&data, keys, ChartKind::Line);
    let state = engine.plan(&request);
    let plan = state.plan().expect("ready state expected").clone();

    c.bench_function("tooltip_compose_mid_series", |b| {
        b.iter(|| {
            let tooltip = compose_tooltip(black_box(&plan), black_box(&data), black_box(45));
            assert_eq!(tooltip.entries.len(), keys.len());
        })
    });
}

fn bench_request_fingerprint(c: &mut Criterion) {
    let data = quarter_of_daily_data();
    let keys = ["spend", "revenue", "roas", "ctr", "clicks", "impressions"];
    let request = PlanRequest::metrics(&data, keys, ChartKind::Line);

    c.bench_function("request_fingerprint_90_days", |b| {
        b.iter(|| {
            let _ = request_fingerprint(black_box(&request));
        })
    });
}

criterion_group!(
    benches,
    bench_full_plan_90_days_6_metrics,
    bench_tooltip_compose,
    bench_request_fingerprint
);
criterion_main!(benches);
