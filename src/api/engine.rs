use tracing::debug;

use crate::core::{
    ActiveSeries, AxisPolicy, ChartKind, DataPoint, EmptyStateConfig, EngineState, LegendEntry,
    MetricRegistry, NumberLocale, RenderPlan, SeriesDescriptor, plan_axes, resolve_series,
    resolve_short_circuit,
};

/// How the caller names the active series: plain metric keys resolved via the
/// registry, or explicit descriptors (e.g. one per ad platform) whose fields
/// override the registry entry for the same key.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSpec {
    Metrics(Vec<String>),
    Descriptors(Vec<SeriesDescriptor>),
}

/// Presentation flags accompanying one plan request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFlags {
    pub show_legend: bool,
    pub show_grid: bool,
    /// Data spans a single calendar day; x labels switch to hour:minute.
    pub is_single_day: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub retry_available: bool,
    pub empty_state: EmptyStateConfig,
}

impl Default for PlanFlags {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            is_single_day: false,
            loading: false,
            error: None,
            retry_available: false,
            empty_state: EmptyStateConfig::default(),
        }
    }
}

/// One planning invocation's full input. Borrowed data: the engine never
/// copies or retains the caller's samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest<'a> {
    pub data: &'a [DataPoint],
    pub series: SeriesSpec,
    pub chart: ChartKind,
    pub flags: PlanFlags,
}

impl<'a> PlanRequest<'a> {
    #[must_use]
    pub fn metrics(
        data: &'a [DataPoint],
        keys: impl IntoIterator<Item = impl Into<String>>,
        chart: ChartKind,
    ) -> Self {
        Self {
            data,
            series: SeriesSpec::Metrics(keys.into_iter().map(Into::into).collect()),
            chart,
            flags: PlanFlags::default(),
        }
    }

    #[must_use]
    pub fn series(data: &'a [DataPoint], descriptors: Vec<SeriesDescriptor>, chart: ChartKind) -> Self {
        Self {
            data,
            series: SeriesSpec::Descriptors(descriptors),
            chart,
            flags: PlanFlags::default(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PlanFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// The planning engine: an injectable registry, an axis-policy table, and an
/// output locale. Stateless across invocations; `plan` is a pure transform
/// of its request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEngine {
    registry: MetricRegistry,
    axis_policy: AxisPolicy,
    locale: NumberLocale,
}

impl Default for PlanEngine {
    fn default() -> Self {
        Self::new(MetricRegistry::standard())
    }
}

impl PlanEngine {
    #[must_use]
    pub fn new(registry: MetricRegistry) -> Self {
        Self {
            registry,
            axis_policy: AxisPolicy::default(),
            locale: NumberLocale::default(),
        }
    }

    #[must_use]
    pub fn with_axis_policy(mut self, policy: AxisPolicy) -> Self {
        self.axis_policy = policy;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    /// Resolves one request into a presentation state.
    ///
    /// Never fails: every input, including unknown keys and empty data,
    /// resolves to one of the four states.
    #[must_use]
    pub fn plan(&self, request: &PlanRequest<'_>) -> EngineState {
        if let Some(state) = resolve_short_circuit(
            request.flags.loading,
            request.flags.error.as_deref(),
            request.flags.retry_available,
            request.data.len(),
            &request.flags.empty_state,
        ) {
            return state;
        }

        let active = self.resolve_active_series(&request.series);
        let descriptors: Vec<_> = active
            .iter()
            .map(|series| series.descriptor.clone())
            .collect();

        let axes = plan_axes(&descriptors, &self.axis_policy);
        let series = resolve_series(&active, request.chart, &axes);

        let legend = if request.flags.show_legend {
            series
                .iter()
                .map(|directive| LegendEntry {
                    key: directive.key.clone(),
                    label: directive.label.clone(),
                    color: directive.color.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            series = series.len(),
            points = request.data.len(),
            needs_right_axis = axes.needs_right_axis,
            "resolved render plan"
        );

        EngineState::Ready(RenderPlan {
            axes,
            series,
            legend,
            show_grid: request.flags.show_grid,
            is_single_day: request.flags.is_single_day,
            locale: self.locale,
        })
    }

    fn resolve_active_series(&self, spec: &SeriesSpec) -> Vec<ActiveSeries> {
        match spec {
            SeriesSpec::Metrics(keys) => keys
                .iter()
                .map(|key| ActiveSeries::from_descriptor(self.registry.resolve(key)))
                .collect(),
            SeriesSpec::Descriptors(descriptors) => descriptors
                .iter()
                .map(|overrides| {
                    ActiveSeries::with_overrides(
                        self.registry.resolve(&overrides.key),
                        overrides.clone(),
                    )
                })
                .collect(),
        }
    }
}
