// Dashboard service - Use case for building dashboards
use crate::application::workflow_repository::WorkflowRepository;
use crate::domain::chart::{ChartData, YRange};
use crate::domain::dashboard::{Dashboard, Directive, PageLayout};
use crate::domain::filter::{FilterControl, FilterSelection};
use crate::domain::quote::TableData;
use crate::domain::workflow::WorkflowSnapshot;
use anyhow::Context;
use std::sync::Arc;

pub const DEFAULT_PAGE_TITLE: &str = "Hustad - Inspection-to-Quote Dashboard";
const HEADLINE: &str = "Hustad - Inspection-to-Quote Workflow Performance";

pub const TURNAROUND_CHART_ID: &str = "turnaround";
pub const PROPERTY_CHART_ID: &str = "time_saved_by_property";
pub const REGION_CHART_ID: &str = "adoption_by_region";

/// KPIs per metric row; the source lays them out 3 then 2.
const KPI_ROWS: [usize; 2] = [3, 2];

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn WorkflowRepository>,
    page_title: String,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn WorkflowRepository>, page_title: String) -> Self {
        Self {
            repository,
            page_title,
        }
    }

    pub async fn get_dashboard(&self, selection: &FilterSelection) -> anyhow::Result<Dashboard> {
        let snapshot = self.repository.snapshot().await?;
        let dashboard = render_dashboard(&self.page_title, &snapshot, selection)?;
        tracing::debug!(
            "Rendered dashboard with {} KPIs, {} charts and {} quote rows",
            dashboard.kpis().len(),
            dashboard.charts().len(),
            dashboard.table().map(|t| t.rows.len()).unwrap_or(0)
        );
        Ok(dashboard)
    }
}

/// Filter controls with their default selections.
pub fn filter_controls() -> Vec<FilterControl> {
    vec![
        FilterControl::select(
            "date_range",
            "Date Range",
            &["Last 30 Days", "Last 7 Days", "This Quarter"],
            "Last 30 Days",
        ),
        FilterControl::multi_select(
            "region",
            "Region",
            &["All", "West", "East", "Central", "North", "South"],
            &["All"],
        ),
        FilterControl::multi_select(
            "property_type",
            "Property Type",
            &[
                "All",
                "Warehouse",
                "Office Building",
                "Multi-Family Apt",
                "Single-Family Home",
                "Retail Space",
            ],
            &["All"],
        ),
    ]
}

/// Lay out the whole page. The selection only changes what the filter
/// controls show as selected; no other directive reads it.
pub fn render_dashboard(
    page_title: &str,
    snapshot: &WorkflowSnapshot,
    selection: &FilterSelection,
) -> anyhow::Result<Dashboard> {
    let adoption_range = YRange::new(0.0, 100.0).context("region adoption range")?;

    let mut directives = vec![
        Directive::PageConfig {
            title: page_title.to_string(),
            layout: PageLayout::Wide,
        },
        Directive::Title {
            text: HEADLINE.to_string(),
        },
        heading("Filters"),
    ];

    for mut control in filter_controls() {
        control.apply_selection(&selection.values_for(&control.key));
        directives.push(if control.multiple {
            Directive::MultiSelect { control }
        } else {
            Directive::Select { control }
        });
    }

    // KPIs
    directives.push(Directive::Divider);
    directives.push(heading("Overall Performance KPIs"));
    let mut remaining = snapshot.kpis.as_slice();
    for row_len in KPI_ROWS {
        if remaining.is_empty() {
            break;
        }
        let (row, rest) = remaining.split_at(row_len.min(remaining.len()));
        directives.push(Directive::MetricRow {
            metrics: row.to_vec(),
        });
        remaining = rest;
    }
    if !remaining.is_empty() {
        directives.push(Directive::MetricRow {
            metrics: remaining.to_vec(),
        });
    }

    // Charts
    directives.push(Directive::Divider);
    directives.push(heading("Delay Analysis: AI vs Manual Turnaround Time"));
    directives.push(Directive::BarChart {
        chart: ChartData::bar(
            TURNAROUND_CHART_ID,
            "",
            "Turnaround Time (h)",
            snapshot.turnaround.to_series(),
        ),
    });

    directives.push(heading("Performance by Property Type (Avg Time Saved)"));
    directives.push(Directive::BarChart {
        chart: ChartData::bar(
            PROPERTY_CHART_ID,
            "Property Type",
            "Avg Time Saved (h)",
            snapshot.time_saved_by_property.clone(),
        )
        .with_title("Time Saved by Property Type"),
    });

    directives.push(heading("AI Adoption Rate by Region"));
    directives.push(Directive::BarChart {
        chart: ChartData::bar(
            REGION_CHART_ID,
            "Region",
            "Adoption Rate (%)",
            snapshot.adoption_by_region.clone(),
        )
        .with_title("AI Adoption Rate by Region")
        .color_scaled()
        .with_y_range(adoption_range),
    });

    // Table
    directives.push(heading("Recent Quote Activity"));
    directives.push(Directive::Table {
        table: TableData::from_records(&snapshot.recent_quotes),
    });

    // Notes
    directives.push(Directive::Divider);
    directives.push(Directive::BulletList {
        lead: "How to Use This Dashboard:".to_string(),
        items: vec![
            "**Executives**: Focus on the top KPIs to measure AI ROI and business impact.".to_string(),
            "**Regional Managers**: Filter by region to check AI adoption and delays.".to_string(),
            "**Operations Staff**: Use the quote table for daily monitoring and investigations."
                .to_string(),
        ],
    });

    Ok(Dashboard::new(directives))
}

fn heading(text: &str) -> Directive {
    Directive::Heading {
        text: text.to_string(),
    }
}
