// Dashboard domain model - ordered display directives
use super::chart::ChartData;
use super::filter::FilterControl;
use super::kpi::Kpi;
use super::quote::TableData;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    Centered,
    Wide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    PageConfig { title: String, layout: PageLayout },
    Title { text: String },
    Heading { text: String },
    Divider,
    Select { control: FilterControl },
    MultiSelect { control: FilterControl },
    MetricRow { metrics: Vec<Kpi> },
    BarChart { chart: ChartData },
    Table { table: TableData },
    BulletList { lead: String, items: Vec<String> },
}

impl Directive {
    pub fn is_filter(&self) -> bool {
        matches!(self, Directive::Select { .. } | Directive::MultiSelect { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub directives: Vec<Directive>,
}

impl Dashboard {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn page_title(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::PageConfig { title, .. } => Some(title.as_str()),
            _ => None,
        })
    }

    pub fn layout(&self) -> PageLayout {
        self.directives
            .iter()
            .find_map(|d| match d {
                Directive::PageConfig { layout, .. } => Some(*layout),
                _ => None,
            })
            .unwrap_or(PageLayout::Centered)
    }

    #[cfg(test)]
    pub fn filters(&self) -> Vec<&FilterControl> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::Select { control } | Directive::MultiSelect { control } => Some(control),
                _ => None,
            })
            .collect()
    }

    /// KPIs across all metric rows, in display order.
    pub fn kpis(&self) -> Vec<&Kpi> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::MetricRow { metrics } => Some(metrics.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn charts(&self) -> Vec<&ChartData> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::BarChart { chart } => Some(chart),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn chart(&self, id: &str) -> Option<&ChartData> {
        self.charts().into_iter().find(|c| c.id == id)
    }

    pub fn table(&self) -> Option<&TableData> {
        self.directives.iter().find_map(|d| match d {
            Directive::Table { table } => Some(table),
            _ => None,
        })
    }

    /// Every directive except the filter controls.
    #[cfg(test)]
    pub fn content(&self) -> Vec<&Directive> {
        self.directives.iter().filter(|d| !d.is_filter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_serializes_with_type_tag() {
        let json = serde_json::to_value(Directive::Heading {
            text: "Filters".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["text"], "Filters");

        let json = serde_json::to_value(Directive::Divider).unwrap();
        assert_eq!(json["type"], "divider");
    }

    #[test]
    fn test_layout_defaults_to_centered() {
        assert_eq!(Dashboard::new(vec![]).layout(), PageLayout::Centered);
        assert_eq!(Dashboard::new(vec![]).page_title(), None);
    }

    #[test]
    fn test_content_excludes_filters() {
        let dashboard = Dashboard::new(vec![
            Directive::Divider,
            Directive::Select {
                control: FilterControl::select("date_range", "Date Range", &["Last 7 Days"], "Last 7 Days"),
            },
        ]);
        assert_eq!(dashboard.content(), vec![&Directive::Divider]);
        assert_eq!(dashboard.filters().len(), 1);
    }
}
