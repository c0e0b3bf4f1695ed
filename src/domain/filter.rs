// Filter widget models. Selections only change what a control shows as selected.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControl {
    /// Query-string key the control submits under.
    pub key: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub multiple: bool,
}

impl FilterControl {
    pub fn select(key: &str, label: &str, options: &[&str], default: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: vec![default.to_string()],
            multiple: false,
        }
    }

    pub fn multi_select(key: &str, label: &str, options: &[&str], default: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: default.iter().map(|o| o.to_string()).collect(),
            multiple: true,
        }
    }

    /// Replace the shown selection. Unknown values are dropped; if nothing
    /// valid remains the default selection is kept.
    pub fn apply_selection(&mut self, values: &[String]) {
        if values.is_empty() {
            return;
        }

        let mut chosen: Vec<String> = Vec::new();
        for value in values {
            if !self.options.contains(value) {
                tracing::warn!("Ignoring unknown option '{}' for filter {}", value, self.key);
                continue;
            }
            if !chosen.contains(value) {
                chosen.push(value.clone());
            }
        }

        if chosen.is_empty() {
            return;
        }
        if !self.multiple {
            chosen.truncate(1);
        }
        self.selected = chosen;
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }
}

/// Filter values submitted by a viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub date_range: Option<String>,
    pub regions: Vec<String>,
    pub property_types: Vec<String>,
}

impl FilterSelection {
    pub fn values_for(&self, key: &str) -> Vec<String> {
        match key {
            "date_range" => self.date_range.iter().cloned().collect(),
            "region" => self.regions.clone(),
            "property_type" => self.property_types.clone(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> FilterControl {
        FilterControl::multi_select("region", "Region", &["All", "West", "East"], &["All"])
    }

    #[test]
    fn test_apply_selection_keeps_known_options() {
        let mut control = regions();
        control.apply_selection(&["East".to_string(), "Mars".to_string(), "East".to_string()]);
        assert_eq!(control.selected, vec!["East"]);
    }

    #[test]
    fn test_apply_selection_falls_back_to_default() {
        let mut control = regions();
        control.apply_selection(&["Mars".to_string()]);
        assert_eq!(control.selected, vec!["All"]);

        control.apply_selection(&[]);
        assert_eq!(control.selected, vec!["All"]);
    }

    #[test]
    fn test_single_select_takes_first() {
        let mut control =
            FilterControl::select("date_range", "Date Range", &["Last 30 Days", "Last 7 Days"], "Last 30 Days");
        control.apply_selection(&["Last 7 Days".to_string(), "Last 30 Days".to_string()]);
        assert_eq!(control.selected, vec!["Last 7 Days"]);
        assert!(control.is_selected("Last 7 Days"));
    }

    #[test]
    fn test_values_for() {
        let selection = FilterSelection {
            date_range: Some("Last 7 Days".to_string()),
            regions: vec!["West".to_string()],
            property_types: vec![],
        };
        assert_eq!(selection.values_for("date_range"), vec!["Last 7 Days"]);
        assert_eq!(selection.values_for("region"), vec!["West"]);
        assert!(selection.values_for("property_type").is_empty());
        assert!(selection.values_for("unknown").is_empty());
    }
}
