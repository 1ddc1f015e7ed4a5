use std::hash::{DefaultHasher, Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::core::{ChartKind, DataPoint, XValue};

use super::engine::{PlanRequest, SeriesSpec};

/// Structural hash of a plan request, for callers that memoize plans.
///
/// The engine itself never caches; this only
/// supplies a stable key so a caller-owned cache can skip re-planning when
/// the input is unchanged. Identical requests hash identically; reordering
/// series or samples changes the hash.
#[must_use]
pub fn request_fingerprint(request: &PlanRequest<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();

    hash_chart(request.chart, &mut hasher);
    hash_series_spec(&request.series, &mut hasher);

    let flags = &request.flags;
    (
        flags.show_legend,
        flags.show_grid,
        flags.is_single_day,
        flags.loading,
        flags.error.as_deref(),
        flags.retry_available,
    )
        .hash(&mut hasher);
    // The empty-state copy surfaces in `EngineState::Empty`, so it is part
    // of the output and must participate in the cache key.
    flags.empty_state.title.hash(&mut hasher);
    flags.empty_state.message.hash(&mut hasher);

    request.data.len().hash(&mut hasher);
    for point in request.data {
        hash_data_point(point, &mut hasher);
    }

    hasher.finish()
}

fn hash_chart(chart: ChartKind, hasher: &mut impl Hasher) {
    (chart as u8).hash(hasher);
}

fn hash_series_spec(spec: &SeriesSpec, hasher: &mut impl Hasher) {
    match spec {
        SeriesSpec::Metrics(keys) => {
            0u8.hash(hasher);
            keys.hash(hasher);
        }
        SeriesSpec::Descriptors(descriptors) => {
            1u8.hash(hasher);
            descriptors.len().hash(hasher);
            for descriptor in descriptors {
                descriptor.key.hash(hasher);
                descriptor.label.hash(hasher);
                descriptor.color.hash(hasher);
                descriptor.draw_type.map(|d| d as u8).hash(hasher);
                descriptor.stack_id.hash(hasher);
                descriptor.connect_nulls.hash(hasher);
            }
        }
    }
}

fn hash_data_point(point: &DataPoint, hasher: &mut impl Hasher) {
    match point.x {
        XValue::Timestamp(time) => {
            0u8.hash(hasher);
            time.timestamp_millis().hash(hasher);
        }
        XValue::Ordinal(ordinal) => {
            1u8.hash(hasher);
            OrderedFloat(ordinal).hash(hasher);
        }
    }
    for key in point.metric_keys() {
        key.hash(hasher);
        point.value(key).map(OrderedFloat).hash(hasher);
    }
}
