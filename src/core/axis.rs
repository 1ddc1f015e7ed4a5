use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::types::{AxisSide, FormatClass, MetricDescriptor};

/// Configuration table mapping format classes to their preferred axis.
///
/// Axis eligibility is data rather than scattered conditionals so the
/// consistency rules can be inspected and overridden in one place. Classes
/// absent from the table default to the left axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPolicy {
    assignments: IndexMap<FormatClass, AxisSide>,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        let mut assignments = IndexMap::new();
        assignments.insert(FormatClass::Currency, AxisSide::Left);
        assignments.insert(FormatClass::Percentage, AxisSide::Right);
        assignments.insert(FormatClass::Multiplier, AxisSide::Right);
        assignments.insert(FormatClass::Compact, AxisSide::Left);
        assignments.insert(FormatClass::Number, AxisSide::Left);
        Self { assignments }
    }
}

impl AxisPolicy {
    #[must_use]
    pub fn assign(mut self, class: FormatClass, side: AxisSide) -> Self {
        self.assignments.insert(class, side);
        self
    }

    #[must_use]
    pub fn side_for(&self, class: FormatClass) -> AxisSide {
        self.assignments
            .get(&class)
            .copied()
            .unwrap_or(AxisSide::Left)
    }
}

/// Resolved axis membership for one plan.
///
/// `left_metrics` and `right_metrics` partition the active metric set and
/// both preserve caller order. `left_class`/`right_class` are the format
/// classes driving each axis' tick formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub left_metrics: SmallVec<[String; 4]>,
    pub right_metrics: SmallVec<[String; 4]>,
    pub needs_right_axis: bool,
    pub left_class: FormatClass,
    pub right_class: Option<FormatClass>,
}

impl AxisPlan {
    #[must_use]
    pub fn side_of(&self, key: &str) -> AxisSide {
        if self.right_metrics.iter().any(|metric| metric == key) {
            AxisSide::Right
        } else {
            AxisSide::Left
        }
    }
}

/// Partitions the active metrics between the two y-axes.
///
/// A right axis is only populated when right-eligible metrics coexist with
/// left-eligible ones; a single-class metric set always collapses onto the
/// left axis. When several right-axis classes coexist, the tick formatter
/// follows the first right-eligible metric in caller order.
#[must_use]
pub fn plan_axes(descriptors: &[MetricDescriptor], policy: &AxisPolicy) -> AxisPlan {
    let mut left_metrics: SmallVec<[String; 4]> = SmallVec::new();
    let mut right_metrics: SmallVec<[String; 4]> = SmallVec::new();
    let mut left_class = None;
    let mut right_class = None;

    for descriptor in descriptors {
        let side = descriptor
            .axis_preference
            .unwrap_or_else(|| policy.side_for(descriptor.format_class));
        match side {
            AxisSide::Left => {
                left_class.get_or_insert(descriptor.format_class);
                left_metrics.push(descriptor.key.clone());
            }
            AxisSide::Right => {
                right_class.get_or_insert(descriptor.format_class);
                right_metrics.push(descriptor.key.clone());
            }
        }
    }

    if left_metrics.is_empty() || right_metrics.is_empty() {
        // Collapse: no gratuitous second axis when one side would be empty.
        let mut all: SmallVec<[String; 4]> = SmallVec::new();
        for descriptor in descriptors {
            all.push(descriptor.key.clone());
        }
        let collapsed_class = descriptors
            .first()
            .map(|descriptor| descriptor.format_class)
            .unwrap_or_default();
        return AxisPlan {
            left_metrics: all,
            right_metrics: SmallVec::new(),
            needs_right_axis: false,
            left_class: collapsed_class,
            right_class: None,
        };
    }

    AxisPlan {
        left_metrics,
        right_metrics,
        needs_right_axis: true,
        left_class: left_class.unwrap_or_default(),
        right_class,
    }
}
