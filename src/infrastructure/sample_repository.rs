// Sample workflow data - literal figures for the inspection-to-quote dashboard
use crate::application::workflow_repository::WorkflowRepository;
use crate::domain::chart::{CategorySeries, TurnaroundComparison};
use crate::domain::kpi::Kpi;
use crate::domain::quote::{QuoteRecord, QuoteStatus};
use crate::domain::workflow::WorkflowSnapshot;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

const KPIS: [(&str, &str, &str); 5] = [
    ("Total Time Saved via AI", "1,240 Hours", "+15% vs. prev 30d"),
    ("Average Time Saved per Quote", "4.1 Hours", "+0.2h vs. prev 30d"),
    ("AI Adoption Rate", "82%", "-5% vs. prev 30d"),
    ("Avg Quote Turnaround Time (AI)", "8.5 Hours", "Goal: <10h"),
    ("Avg Quote Turnaround Time (Manual)", "22.1 Hours", "+13.6h delay"),
];

const AI_TURNAROUND_HOURS: f64 = 8.5;
const MANUAL_TURNAROUND_HOURS: f64 = 22.1;

const PROPERTY_TYPES: [&str; 5] = [
    "Warehouse",
    "Office Building",
    "Multi-Family Apt",
    "Single-Family Home",
    "Retail Space",
];
const TIME_SAVED_HOURS: [f64; 5] = [7.8, 6.9, 5.1, 2.9, 2.1];

const REGIONS: [&str; 5] = ["West", "East", "Central", "North", "South"];
const ADOPTION_PERCENT: [f64; 5] = [95.0, 91.0, 88.0, 81.0, 64.0];

type QuoteRow = (&'static str, &'static str, &'static str, &'static str, bool, f64, QuoteStatus);

const QUOTES: [QuoteRow; 6] = [
    ("HUS-83491", "West", "Office Building", "2023-10-26", true, 7.2, QuoteStatus::QuoteSent),
    ("HUS-83490", "South", "Single-Family Home", "2023-10-26", false, 25.8, QuoteStatus::Delayed),
    ("HUS-83488", "Central", "Warehouse", "2023-10-25", true, 9.1, QuoteStatus::QuoteSent),
    ("HUS-83487", "East", "Multi-Family Apt", "2023-10-25", true, 8.5, QuoteStatus::QuoteSent),
    ("HUS-83485", "South", "Office Building", "2023-10-24", false, 21.4, QuoteStatus::Delayed),
    ("HUS-83482", "North", "Retail Space", "2023-10-24", true, 6.9, QuoteStatus::QuoteSent),
];

#[derive(Debug, Clone, Default)]
pub struct SampleWorkflowRepository;

impl SampleWorkflowRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn sample_snapshot() -> Result<WorkflowSnapshot> {
        let kpis = KPIS
            .iter()
            .map(|(label, value, delta)| Kpi::new(*label, *value, *delta))
            .collect();

        let time_saved_by_property = CategorySeries::new(
            PROPERTY_TYPES.iter().map(|p| p.to_string()).collect(),
            TIME_SAVED_HOURS.to_vec(),
        )
        .context("property type series")?;

        let adoption_by_region = CategorySeries::new(
            REGIONS.iter().map(|r| r.to_string()).collect(),
            ADOPTION_PERCENT.to_vec(),
        )
        .context("region adoption series")?;

        let recent_quotes = QUOTES
            .iter()
            .map(|(id, region, property_type, date, ai_used, hours, status)| {
                let inspection_date = date
                    .parse::<NaiveDate>()
                    .with_context(|| format!("inspection date for {}", id))?;
                Ok(QuoteRecord {
                    inspection_id: id.to_string(),
                    region: region.to_string(),
                    property_type: property_type.to_string(),
                    inspection_date,
                    ai_used: *ai_used,
                    turnaround_hours: *hours,
                    status: *status,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WorkflowSnapshot {
            kpis,
            turnaround: TurnaroundComparison {
                ai_hours: AI_TURNAROUND_HOURS,
                manual_hours: MANUAL_TURNAROUND_HOURS,
            },
            time_saved_by_property,
            adoption_by_region,
            recent_quotes,
        })
    }
}

#[async_trait]
impl WorkflowRepository for SampleWorkflowRepository {
    async fn snapshot(&self) -> Result<WorkflowSnapshot> {
        Self::sample_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_snapshot_shape() {
        let snapshot = SampleWorkflowRepository::sample_snapshot().unwrap();
        assert_eq!(snapshot.kpis.len(), 5);
        assert_eq!(snapshot.time_saved_by_property.len(), 5);
        assert_eq!(snapshot.adoption_by_region.len(), 5);
        assert_eq!(snapshot.recent_quotes.len(), 6);
        assert_eq!(snapshot.turnaround.ai_hours, 8.5);
        assert_eq!(snapshot.turnaround.manual_hours, 22.1);
    }

    #[test]
    fn test_delayed_quotes_are_manual() {
        let snapshot = SampleWorkflowRepository::sample_snapshot().unwrap();
        let delayed: Vec<&QuoteRecord> = snapshot
            .recent_quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Delayed)
            .collect();
        assert_eq!(delayed.len(), 2);
        assert!(delayed.iter().all(|q| !q.ai_used && q.region == "South"));
    }

    #[tokio::test]
    async fn test_snapshot_is_identical_every_call() {
        let repo = SampleWorkflowRepository::new();
        assert_eq!(repo.snapshot().await.unwrap(), repo.snapshot().await.unwrap());
    }
}
