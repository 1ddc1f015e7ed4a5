use serde::{Deserialize, Serialize};

use super::formatter::NO_DATA;
use super::plan::RenderPlan;
use super::types::DataPoint;

/// One tooltip row: series label, formatted value, swatch color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub key: String,
    pub label: String,
    pub formatted_value: String,
    pub color: String,
}

/// Assembled tooltip for one hovered x-position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub x_label: String,
    pub entries: Vec<TooltipEntry>,
}

/// Composes the tooltip for the sample at `hovered_index`.
///
/// Entries follow the plan's series order exactly; they are never reordered
/// by value magnitude. A hover index outside the data renders every value as
/// the no-data sentinel rather than failing.
#[must_use]
pub fn compose_tooltip(plan: &RenderPlan, data: &[DataPoint], hovered_index: usize) -> TooltipContent {
    let point = data.get(hovered_index);

    let x_label = match point {
        Some(point) => plan.format_x_tooltip_label(point.x),
        None => NO_DATA.to_owned(),
    };

    let entries = plan
        .series
        .iter()
        .map(|directive| {
            let value = point.and_then(|point| point.value(&directive.key));
            TooltipEntry {
                key: directive.key.clone(),
                label: directive.label.clone(),
                formatted_value: plan.format_tooltip_value(&directive.key, value),
                color: directive.color.clone(),
            }
        })
        .collect();

    TooltipContent { x_label, entries }
}
