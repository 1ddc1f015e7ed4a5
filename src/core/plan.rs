use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::axis::AxisPlan;
use super::formatter::{
    NumberLocale, ValueFormat, format_axis_tick, format_tooltip_value, format_x_axis_label,
    format_x_tooltip_label,
};
use super::series::SeriesDirective;
use super::types::{AxisSide, XValue};

/// Tick-formatter handle for drawing layers that want a plain function value
/// rather than a method call on the plan.
pub type AxisTickFormatterFn = Arc<dyn Fn(Option<f64>) -> String + Send + Sync>;
/// Tooltip-formatter handle keyed by metric.
pub type TooltipValueFormatterFn = Arc<dyn Fn(&str, Option<f64>) -> String + Send + Sync>;

/// One legend row, mirroring series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
}

/// The engine's output: a fully resolved, renderer-agnostic description of
/// how one chart should be painted.
///
/// Structural fields are plain data (comparable, serializable); the
/// formatting operations are methods so two plans built from identical input
/// compare equal even though closures never would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub axes: AxisPlan,
    pub series: Vec<SeriesDirective>,
    /// Empty when the caller disabled the legend.
    pub legend: Vec<LegendEntry>,
    pub show_grid: bool,
    pub is_single_day: bool,
    pub locale: NumberLocale,
}

impl RenderPlan {
    /// Compact tick label for the left axis.
    #[must_use]
    pub fn format_left_tick(&self, value: Option<f64>) -> String {
        format_axis_tick(value, self.axes.left_class, self.locale)
    }

    /// Compact tick label for the right axis; falls back to the left-axis
    /// class when no right axis is populated.
    #[must_use]
    pub fn format_right_tick(&self, value: Option<f64>) -> String {
        let class = self.axes.right_class.unwrap_or(self.axes.left_class);
        format_axis_tick(value, class, self.locale)
    }

    /// Full-precision tooltip value for `key`. Keys outside the plan format
    /// as plain numbers.
    #[must_use]
    pub fn format_tooltip_value(&self, key: &str, value: Option<f64>) -> String {
        format_tooltip_value(value, self.value_format_of(key), self.locale)
    }

    #[must_use]
    pub fn format_x_axis_label(&self, x: XValue) -> String {
        format_x_axis_label(x, self.is_single_day, self.locale)
    }

    #[must_use]
    pub fn format_x_tooltip_label(&self, x: XValue) -> String {
        format_x_tooltip_label(x, self.is_single_day, self.locale)
    }

    /// Function-value form of the tick formatter for one axis side.
    #[must_use]
    pub fn axis_tick_formatter(&self, side: AxisSide) -> AxisTickFormatterFn {
        let class = match side {
            AxisSide::Left => self.axes.left_class,
            AxisSide::Right => self.axes.right_class.unwrap_or(self.axes.left_class),
        };
        let locale = self.locale;
        Arc::new(move |value| format_axis_tick(value, class, locale))
    }

    /// Function-value form of the per-metric tooltip formatter.
    #[must_use]
    pub fn tooltip_value_formatter(&self) -> TooltipValueFormatterFn {
        let formats: Vec<(String, ValueFormat)> = self
            .series
            .iter()
            .map(|directive| (directive.key.clone(), directive.value_format))
            .collect();
        let locale = self.locale;
        Arc::new(move |key, value| {
            let format = formats
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, format)| *format)
                .unwrap_or_default();
            format_tooltip_value(value, format, locale)
        })
    }

    fn value_format_of(&self, key: &str) -> ValueFormat {
        self.series
            .iter()
            .find(|directive| directive.key == key)
            .map(|directive| directive.value_format)
            .unwrap_or_default()
    }
}
