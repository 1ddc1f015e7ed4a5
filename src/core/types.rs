use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Neutral fallback color used whenever neither the registry nor the caller
/// supplies one.
pub const NEUTRAL_GRAY: &str = "#9ca3af";

/// Horizontal position of a sample: a calendar instant or a plain ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum XValue {
    Timestamp(DateTime<Utc>),
    Ordinal(f64),
}

/// One sample row: an x-position plus per-metric values.
///
/// The value map preserves insertion order. A `None` value is the explicit
/// missing-sample sentinel; non-finite numbers are coerced to `None` on the
/// way in so malformed samples render as gaps instead of aborting the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    values: IndexMap<String, Option<f64>>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: XValue) -> Self {
        Self {
            x,
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn at_timestamp(time: DateTime<Utc>) -> Self {
        Self::new(XValue::Timestamp(time))
    }

    #[must_use]
    pub fn at_ordinal(ordinal: f64) -> Self {
        Self::new(XValue::Ordinal(ordinal))
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Option<f64>>) -> Self {
        self.set_value(key, value);
        self
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Option<f64>>) {
        self.values.insert(key.into(), sanitize_sample(value.into()));
    }

    /// Returns the sample for `key`, treating both an absent key and an
    /// explicit null as missing.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    #[must_use]
    pub fn metric_keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Coerces malformed samples (NaN, infinities) to the missing-sample sentinel.
#[must_use]
pub fn sanitize_sample(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Semantic category of a metric's values; drives formatting and default
/// axis assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormatClass {
    /// Monetary amounts (`$1.5k` ticks, grouped tooltip values).
    Currency,
    /// Percent-unit values (a sample of `2.5` means 2.5%).
    Percentage,
    /// Ratios such as ROAS (`2.50x`).
    Multiplier,
    /// Large counts abbreviated aggressively (impressions, clicks).
    Compact,
    /// Plain counts; also the fallback class for unknown metrics.
    #[default]
    Number,
}

/// Which y-axis a series is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    Left,
    Right,
}

/// Draw primitive for one series. Resolved once by the series resolver and
/// never re-interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawType {
    #[default]
    Area,
    Line,
    Bar,
}

/// Requested top-level chart shape.
///
/// In `Composed` mode each series may carry its own [`DrawType`] override;
/// in the other modes every series shares the top-level type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartKind {
    #[default]
    Area,
    Line,
    Bar,
    Composed,
}

impl ChartKind {
    /// The shared draw type for non-composed charts; `None` for `Composed`.
    #[must_use]
    pub fn base_draw_type(self) -> Option<DrawType> {
        match self {
            Self::Area => Some(DrawType::Area),
            Self::Line => Some(DrawType::Line),
            Self::Bar => Some(DrawType::Bar),
            Self::Composed => None,
        }
    }
}

/// Registered display properties for one metric key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub key: String,
    pub label: String,
    pub format_class: FormatClass,
    pub color: String,
    /// Overrides the axis-policy table for this metric when set.
    #[serde(default)]
    pub axis_preference: Option<AxisSide>,
    /// Tooltip decimal places for `Currency` metrics: 0 for whole-dollar
    /// summary metrics, 2 for unit-economics metrics such as CPC/CPA.
    #[serde(default)]
    pub currency_decimals: u8,
    /// When set, `Percentage` tooltip values carry an explicit `+`/`-` sign.
    #[serde(default)]
    pub signed_delta: bool,
}

impl MetricDescriptor {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        format_class: FormatClass,
        color: impl Into<String>,
    ) -> PlanResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(PlanError::EmptyMetricKey);
        }
        Ok(Self {
            key,
            label: label.into(),
            format_class,
            color: color.into(),
            axis_preference: None,
            currency_decimals: 0,
            signed_delta: false,
        })
    }

    /// The documented fallback for unregistered keys: label = key, plain
    /// number formatting, neutral color.
    #[must_use]
    pub fn fallback(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            label: key.to_owned(),
            format_class: FormatClass::Number,
            color: NEUTRAL_GRAY.to_owned(),
            axis_preference: None,
            currency_decimals: 0,
            signed_delta: false,
        }
    }

    #[must_use]
    pub fn with_axis_preference(mut self, side: AxisSide) -> Self {
        self.axis_preference = Some(side);
        self
    }

    pub fn with_currency_decimals(mut self, decimals: u8) -> PlanResult<Self> {
        if decimals > 6 {
            return Err(PlanError::InvalidDescriptor {
                key: self.key,
                reason: format!("currency_decimals must be <= 6, got {decimals}"),
            });
        }
        self.currency_decimals = decimals;
        Ok(self)
    }

    #[must_use]
    pub fn with_signed_delta(mut self) -> Self {
        self.signed_delta = true;
        self
    }
}

/// Caller-side series definition; any field left unset falls back to the
/// registry descriptor for the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Only honored when the chart kind is `Composed`.
    #[serde(default)]
    pub draw_type: Option<DrawType>,
    #[serde(default)]
    pub stack_id: Option<String>,
    /// Bridge gaps left by missing samples instead of breaking the series.
    #[serde(default)]
    pub connect_nulls: bool,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            color: None,
            draw_type: None,
            stack_id: None,
            connect_nulls: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_draw_type(mut self, draw_type: DrawType) -> Self {
        self.draw_type = Some(draw_type);
        self
    }

    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    #[must_use]
    pub fn with_connect_nulls(mut self) -> Self {
        self.connect_nulls = true;
        self
    }
}

/// Copy the caller can customize for the empty-data presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStateConfig {
    pub title: String,
    pub message: String,
}

impl Default for EmptyStateConfig {
    fn default() -> Self {
        Self {
            title: "No data to display".to_owned(),
            message: "Try a different date range or connect an ad account.".to_owned(),
        }
    }
}
