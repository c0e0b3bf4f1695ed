// Chart domain models
use super::error::DashboardError;
use serde::Serialize;

/// Parallel category/value sequences. Both sides always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    categories: Vec<String>,
    values: Vec<f64>,
}

impl CategorySeries {
    pub fn new(categories: Vec<String>, values: Vec<f64>) -> Result<Self, DashboardError> {
        if categories.len() != values.len() {
            return Err(DashboardError::SeriesLengthMismatch {
                categories: categories.len(),
                values: values.len(),
            });
        }
        if categories.is_empty() {
            return Err(DashboardError::EmptySeries);
        }
        Ok(Self { categories, values })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories()
            .iter()
            .map(String::as_str)
            .zip(self.values().iter().copied())
    }

    #[cfg(test)]
    pub fn value_of(&self, category: &str) -> Option<f64> {
        self.points().find(|(c, _)| *c == category).map(|(_, v)| v)
    }

    /// (min, max) over the values; series are never empty.
    pub fn bounds(&self) -> (f64, f64) {
        self.values()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YRange {
    pub min: f64,
    pub max: f64,
}

impl YRange {
    pub fn new(min: f64, max: f64) -> Result<Self, DashboardError> {
        if min >= max {
            return Err(DashboardError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    /// Bars whose fill intensity follows the value.
    ColorScaledBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: Option<String>,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub y_range: Option<YRange>,
    pub series: CategorySeries,
}

impl ChartData {
    pub fn bar(id: &str, x_label: &str, y_label: &str, series: CategorySeries) -> Self {
        Self {
            id: id.to_string(),
            title: None,
            kind: ChartKind::Bar,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            y_range: None,
            series,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn color_scaled(mut self) -> Self {
        self.kind = ChartKind::ColorScaledBar;
        self
    }

    pub fn with_y_range(mut self, range: YRange) -> Self {
        self.y_range = Some(range);
        self
    }

    /// Axis range used for drawing: the explicit range, else [0, max].
    pub fn effective_range(&self) -> YRange {
        if let Some(range) = self.y_range {
            return range;
        }
        let (_, max) = self.series.bounds();
        YRange {
            min: 0.0,
            max: if max > 0.0 { max } else { 1.0 },
        }
    }
}

/// AI-assisted vs manual average turnaround, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurnaroundComparison {
    pub ai_hours: f64,
    pub manual_hours: f64,
}

impl TurnaroundComparison {
    pub fn to_series(&self) -> CategorySeries {
        CategorySeries {
            categories: vec!["AI-Assisted".to_string(), "Manual".to_string()],
            values: vec![self.ai_hours, self.manual_hours],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_series_rejects_length_mismatch() {
        let err = CategorySeries::new(names(&["West", "East"]), vec![95.0]).unwrap_err();
        assert_eq!(
            err,
            DashboardError::SeriesLengthMismatch {
                categories: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_series_rejects_empty() {
        assert_eq!(
            CategorySeries::new(vec![], vec![]).unwrap_err(),
            DashboardError::EmptySeries
        );
    }

    #[test]
    fn test_series_bounds_and_lookup() {
        let series = CategorySeries::new(names(&["West", "South", "East"]), vec![95.0, 64.0, 91.0]).unwrap();
        assert_eq!(series.bounds(), (64.0, 95.0));
        assert_eq!(series.value_of("East"), Some(91.0));
        assert_eq!(series.value_of("Nowhere"), None);
    }

    #[test]
    fn test_effective_range() {
        let series = CategorySeries::new(names(&["a", "b"]), vec![2.0, 8.0]).unwrap();
        let chart = ChartData::bar("c", "x", "y", series.clone());
        assert_eq!(chart.effective_range(), YRange { min: 0.0, max: 8.0 });

        let chart = ChartData::bar("c", "x", "y", series).with_y_range(YRange::new(0.0, 100.0).unwrap());
        assert_eq!(chart.effective_range(), YRange { min: 0.0, max: 100.0 });
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            YRange::new(100.0, 0.0).unwrap_err(),
            DashboardError::InvalidRange { min: 100.0, max: 0.0 }
        );
        assert!(YRange::new(5.0, 5.0).is_err());
        assert_eq!(YRange::new(0.0, 100.0).unwrap(), YRange { min: 0.0, max: 100.0 });
    }

    #[test]
    fn test_turnaround_series() {
        let cmp = TurnaroundComparison { ai_hours: 8.5, manual_hours: 22.1 };
        let series = cmp.to_series();
        assert_eq!(series.categories(), ["AI-Assisted", "Manual"]);
        assert_eq!(series.values(), [8.5, 22.1]);
    }
}
