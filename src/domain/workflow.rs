// Workflow snapshot - everything the dashboard displays
use super::chart::{CategorySeries, TurnaroundComparison};
use super::kpi::Kpi;
use super::quote::QuoteRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowSnapshot {
    /// Display order is significant.
    pub kpis: Vec<Kpi>,
    pub turnaround: TurnaroundComparison,
    pub time_saved_by_property: CategorySeries,
    pub adoption_by_region: CategorySeries,
    pub recent_quotes: Vec<QuoteRecord>,
}
