use serde::{Deserialize, Serialize};

use super::axis::AxisPlan;
use super::formatter::ValueFormat;
use super::types::{AxisSide, ChartKind, DrawType, MetricDescriptor, SeriesDescriptor};

/// One active series before directive resolution: the registry descriptor
/// paired with the caller's optional overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSeries {
    pub descriptor: MetricDescriptor,
    pub overrides: Option<SeriesDescriptor>,
}

impl ActiveSeries {
    #[must_use]
    pub fn from_descriptor(descriptor: MetricDescriptor) -> Self {
        Self {
            descriptor,
            overrides: None,
        }
    }

    #[must_use]
    pub fn with_overrides(descriptor: MetricDescriptor, overrides: SeriesDescriptor) -> Self {
        Self {
            descriptor,
            overrides: Some(overrides),
        }
    }
}

/// Fully resolved draw instruction for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDirective {
    pub key: String,
    pub label: String,
    pub color: String,
    pub draw_type: DrawType,
    pub axis: AxisSide,
    pub stack_id: Option<String>,
    pub connect_nulls: bool,
    pub value_format: ValueFormat,
}

/// Maps each active series, in caller order, to a concrete draw directive.
///
/// Precedence: caller override, then registry descriptor, then the built-in
/// fallback already baked into the descriptor. Draw-type overrides are only
/// honored in composed mode, where a series without one defaults to area.
/// Output length always equals input length; no series is silently dropped.
#[must_use]
pub fn resolve_series(
    active: &[ActiveSeries],
    chart: ChartKind,
    axes: &AxisPlan,
) -> Vec<SeriesDirective> {
    let mut directives = Vec::with_capacity(active.len());

    for series in active {
        let descriptor = &series.descriptor;
        let overrides = series.overrides.as_ref();

        let draw_type = match chart.base_draw_type() {
            Some(shared) => shared,
            None => overrides
                .and_then(|o| o.draw_type)
                .unwrap_or(DrawType::Area),
        };

        directives.push(SeriesDirective {
            key: descriptor.key.clone(),
            label: overrides
                .and_then(|o| o.label.clone())
                .unwrap_or_else(|| descriptor.label.clone()),
            color: overrides
                .and_then(|o| o.color.clone())
                .unwrap_or_else(|| descriptor.color.clone()),
            draw_type,
            axis: axes.side_of(&descriptor.key),
            stack_id: overrides.and_then(|o| o.stack_id.clone()),
            connect_nulls: overrides.is_some_and(|o| o.connect_nulls),
            value_format: ValueFormat::from_descriptor(descriptor),
        });
    }

    directives
}
