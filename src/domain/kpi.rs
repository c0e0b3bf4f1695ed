// KPI domain model
use serde::Serialize;

/// A single headline metric with its pre-formatted value and delta annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl Kpi {
    pub fn new(label: impl Into<String>, value: impl Into<String>, delta: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: delta.into(),
        }
    }

    /// Deltas starting with '-' are rendered as a decline.
    pub fn is_negative(&self) -> bool {
        self.delta.trim_start().starts_with('-')
    }
}
