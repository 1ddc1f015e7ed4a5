pub mod axis;
pub mod formatter;
pub mod plan;
pub mod registry;
pub mod series;
pub mod state;
pub mod tooltip;
pub mod types;

pub use axis::{AxisPlan, AxisPolicy, plan_axes};
pub use formatter::{
    NO_DATA, NumberLocale, ValueFormat, format_axis_tick, format_tooltip_value,
    format_x_axis_label, format_x_tooltip_label,
};
pub use plan::{AxisTickFormatterFn, LegendEntry, RenderPlan, TooltipValueFormatterFn};
pub use registry::{MetricRegistry, MetricRegistryBuilder};
pub use series::{ActiveSeries, SeriesDirective, resolve_series};
pub use state::{EngineState, resolve_short_circuit};
pub use tooltip::{TooltipContent, TooltipEntry, compose_tooltip};
pub use types::{
    AxisSide, ChartKind, DataPoint, DrawType, EmptyStateConfig, FormatClass, MetricDescriptor,
    NEUTRAL_GRAY, SeriesDescriptor, XValue,
};
