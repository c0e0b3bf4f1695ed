// Quote activity domain models
use chrono::NaiveDate;
use serde::Serialize;

pub const QUOTE_COLUMNS: [&str; 7] = [
    "Inspection ID",
    "Region",
    "Property Type",
    "Inspection Date",
    "AI Used?",
    "Turnaround Time",
    "Status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteStatus {
    QuoteSent,
    Delayed,
}

impl QuoteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::QuoteSent => "Quote Sent",
            QuoteStatus::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    pub inspection_id: String,
    pub region: String,
    pub property_type: String,
    pub inspection_date: NaiveDate,
    pub ai_used: bool,
    pub turnaround_hours: f64,
    pub status: QuoteStatus,
}

impl QuoteRecord {
    /// Display cells in `QUOTE_COLUMNS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.inspection_id.clone(),
            self.region.clone(),
            self.property_type.clone(),
            self.inspection_date.format("%Y-%m-%d").to_string(),
            if self.ai_used { "Yes" } else { "No" }.to_string(),
            format!("{:.1}", self.turnaround_hours),
            self.status.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub full_width: bool,
}

impl TableData {
    pub fn from_records(records: &[QuoteRecord]) -> Self {
        Self {
            columns: QUOTE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(QuoteRecord::cells).collect(),
            full_width: true,
        }
    }
}
