use chartplan::api::PlanFlags;
use chartplan::core::{
    AxisSide, ChartKind, DataPoint, DrawType, EngineState, FormatClass, NEUTRAL_GRAY,
    SeriesDescriptor,
};
use chartplan::{PlanEngine, PlanRequest, request_fingerprint};
use chrono::{TimeZone, Utc};

fn one_day_point() -> DataPoint {
    DataPoint::at_timestamp(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
    .with_value("revenue", 1_500.0)
    .with_value("roas", 2.5)
}

// End-to-end scenario B: currency + multiplier split axes and format as documented.
#[test]
fn revenue_and_roas_split_across_axes_with_expected_formatting() {
    let data = vec![one_day_point()];
    let engine = PlanEngine::default();

    let state = engine.plan(&PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line));
    let plan = state.plan().expect("ready state expected");

    assert_eq!(plan.axes.left_metrics.as_slice(), ["revenue"]);
    assert_eq!(plan.axes.right_metrics.as_slice(), ["roas"]);
    assert!(plan.axes.needs_right_axis);
    assert_eq!(plan.format_left_tick(Some(1_500.0)), "$1.5k");
    assert_eq!(plan.format_tooltip_value("roas", Some(2.5)), "2.50x");
}

// End-to-end scenario C: same-class metrics never open a second axis.
#[test]
fn same_class_metrics_share_the_left_axis() {
    let data = vec![one_day_point().with_value("spend", 800.0).with_value("cpc", 1.2)];
    let engine = PlanEngine::default();

    let state = engine.plan(&PlanRequest::metrics(&data, ["spend", "cpc"], ChartKind::Area));
    let plan = state.plan().expect("ready state expected");

    assert!(!plan.axes.needs_right_axis);
    assert_eq!(plan.axes.left_metrics.as_slice(), ["spend", "cpc"]);
}

#[test]
fn identical_requests_produce_structurally_identical_plans() {
    let data = vec![one_day_point()];
    let engine = PlanEngine::default();
    let request = PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Composed);

    let first = engine.plan(&request);
    let second = engine.plan(&request);
    assert_eq!(first, second);
}

#[test]
fn unknown_metric_key_resolves_to_fallback_descriptor() {
    let data = vec![DataPoint::at_ordinal(0.0).with_value("wombats", 7.0)];
    let engine = PlanEngine::default();

    let state = engine.plan(&PlanRequest::metrics(&data, ["wombats"], ChartKind::Line));
    let plan = state.plan().expect("ready state expected");

    let directive = &plan.series[0];
    assert_eq!(directive.label, "wombats");
    assert_eq!(directive.color, NEUTRAL_GRAY);
    assert_eq!(directive.value_format.class, FormatClass::Number);
}

#[test]
fn legend_is_gated_by_the_show_legend_flag() {
    let data = vec![one_day_point()];
    let engine = PlanEngine::default();

    let with_legend =
        engine.plan(&PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line));
    let plan = with_legend.plan().expect("ready state expected");
    let labels: Vec<&str> = plan.legend.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Revenue", "ROAS"]);

    let request = PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line).with_flags(
        PlanFlags {
            show_legend: false,
            ..PlanFlags::default()
        },
    );
    let without_legend = engine.plan(&request);
    assert!(without_legend.plan().expect("ready state expected").legend.is_empty());
}

#[test]
fn explicit_series_descriptors_override_registry_entries() {
    let data = vec![one_day_point().with_value("spend", 640.0)];
    let engine = PlanEngine::default();

    let descriptors = vec![
        SeriesDescriptor::new("spend")
            .with_label("Meta Spend")
            .with_color("#1877f2")
            .with_draw_type(DrawType::Bar)
            .with_stack_id("platforms"),
        SeriesDescriptor::new("roas"),
    ];
    let state = engine.plan(&PlanRequest::series(&data, descriptors, ChartKind::Composed));
    let plan = state.plan().expect("ready state expected");

    assert_eq!(plan.series[0].label, "Meta Spend");
    assert_eq!(plan.series[0].color, "#1877f2");
    assert_eq!(plan.series[0].draw_type, DrawType::Bar);
    assert_eq!(plan.series[0].stack_id.as_deref(), Some("platforms"));
    // No override on roas: registry label/color, composed default draw type.
    assert_eq!(plan.series[1].label, "ROAS");
    assert_eq!(plan.series[1].draw_type, DrawType::Area);
}

#[test]
fn tick_formatter_handles_match_plan_methods() {
    let data = vec![one_day_point()];
    let engine = PlanEngine::default();

    let state = engine.plan(&PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line));
    let plan = state.plan().expect("ready state expected");

    let left = plan.axis_tick_formatter(AxisSide::Left);
    let right = plan.axis_tick_formatter(AxisSide::Right);
    assert_eq!(left(Some(2_000.0)), plan.format_left_tick(Some(2_000.0)));
    assert_eq!(right(Some(2.5)), plan.format_right_tick(Some(2.5)));
    assert_eq!(right(Some(2.5)), "2.5x");

    let tooltip = plan.tooltip_value_formatter();
    assert_eq!(tooltip("revenue", Some(1_500.0)), "$1,500");
    assert_eq!(tooltip("revenue", None), "—");
}

#[test]
fn fingerprint_is_stable_for_identical_requests() {
    let data = vec![one_day_point()];
    let first = PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line);
    let second = PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line);

    assert_eq!(request_fingerprint(&first), request_fingerprint(&second));
}

#[test]
fn fingerprint_changes_when_series_order_changes() {
    let data = vec![one_day_point()];
    let forward = PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line);
    let reversed = PlanRequest::metrics(&data, ["roas", "revenue"], ChartKind::Line);

    assert_ne!(request_fingerprint(&forward), request_fingerprint(&reversed));
}

#[test]
fn fingerprint_changes_when_empty_state_copy_changes() {
    let data = vec![one_day_point()];
    let default_copy = PlanRequest::metrics(&data, ["revenue"], ChartKind::Line);
    let custom_copy = PlanRequest::metrics(&data, ["revenue"], ChartKind::Line).with_flags(
        PlanFlags {
            empty_state: chartplan::core::EmptyStateConfig {
                title: "No campaigns yet".to_owned(),
                message: "Connect an ad account to see performance.".to_owned(),
            },
            ..PlanFlags::default()
        },
    );

    assert_ne!(
        request_fingerprint(&default_copy),
        request_fingerprint(&custom_copy)
    );
}

#[test]
fn render_plan_round_trips_through_serde() {
    let data = vec![one_day_point()];
    let engine = PlanEngine::default();

    let state = engine.plan(&PlanRequest::metrics(&data, ["revenue", "roas"], ChartKind::Line));
    let plan = state.plan().expect("ready state expected");

    let json = serde_json::to_string(plan).expect("serialize plan");
    let restored: chartplan::RenderPlan = serde_json::from_str(&json).expect("deserialize plan");
    assert_eq!(&restored, plan);
}

#[test]
fn engine_state_itself_serializes() {
    let state = EngineState::Error {
        message: "upstream timeout".to_owned(),
        retry_available: true,
    };
    let json = serde_json::to_string(&state).expect("serialize state");
    let restored: EngineState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(restored, state);
}
