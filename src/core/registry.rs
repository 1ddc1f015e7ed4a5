use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{FormatClass, MetricDescriptor};
use crate::error::{PlanError, PlanResult};

/// Insertion-ordered lookup table from metric key to display properties.
///
/// Lookup never fails: unknown keys resolve to the documented fallback
/// (label = key, plain number formatting, neutral color) and emit a
/// warning-level tracing signal instead of interrupting the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricRegistry {
    entries: IndexMap<String, MetricDescriptor>,
}

impl MetricRegistry {
    #[must_use]
    pub fn builder() -> MetricRegistryBuilder {
        MetricRegistryBuilder::default()
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The metric table a marketing dashboard registers out of the box.
    #[must_use]
    pub fn standard() -> Self {
        let mut entries = IndexMap::new();
        for descriptor in [
            standard_entry("spend", "Ad Spend", FormatClass::Currency, "#8884d8", 0, false),
            standard_entry("revenue", "Revenue", FormatClass::Currency, "#82ca9d", 0, false),
            standard_entry("roas", "ROAS", FormatClass::Multiplier, "#ffc658", 0, false),
            standard_entry("cpc", "Cost per Click", FormatClass::Currency, "#ff8042", 2, false),
            standard_entry("cpa", "Cost per Acquisition", FormatClass::Currency, "#d4526e", 2, false),
            standard_entry("ctr", "Click-through Rate", FormatClass::Percentage, "#0088fe", 0, false),
            standard_entry("clicks", "Clicks", FormatClass::Compact, "#00c49f", 0, false),
            standard_entry("impressions", "Impressions", FormatClass::Compact, "#a4de6c", 0, false),
            standard_entry("conversions", "Conversions", FormatClass::Number, "#8dd1e1", 0, false),
            standard_entry("aov", "Average Order Value", FormatClass::Currency, "#83a6ed", 2, false),
            standard_entry("revenue_change", "Revenue Change", FormatClass::Percentage, "#82ca9d", 0, true),
        ] {
            entries.insert(descriptor.key.clone(), descriptor);
        }
        Self { entries }
    }

    /// Resolves `key` to its descriptor, falling back for unknown keys.
    #[must_use]
    pub fn resolve(&self, key: &str) -> MetricDescriptor {
        match self.entries.get(key) {
            Some(descriptor) => descriptor.clone(),
            None => {
                warn!(metric = key, "unregistered metric key, using fallback descriptor");
                MetricDescriptor::fallback(key)
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct MetricRegistryBuilder {
    entries: IndexMap<String, MetricDescriptor>,
}

impl MetricRegistryBuilder {
    /// Registers a descriptor, replacing any previous entry for the same key.
    pub fn register(mut self, descriptor: MetricDescriptor) -> PlanResult<Self> {
        if descriptor.key.is_empty() {
            return Err(PlanError::EmptyMetricKey);
        }
        self.entries.insert(descriptor.key.clone(), descriptor);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> MetricRegistry {
        MetricRegistry {
            entries: self.entries,
        }
    }
}

fn standard_entry(
    key: &str,
    label: &str,
    format_class: FormatClass,
    color: &str,
    currency_decimals: u8,
    signed_delta: bool,
) -> MetricDescriptor {
    MetricDescriptor {
        key: key.to_owned(),
        label: label.to_owned(),
        format_class,
        color: color.to_owned(),
        axis_preference: None,
        currency_decimals,
        signed_delta,
    }
}
