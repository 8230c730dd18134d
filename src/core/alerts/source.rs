// Where the dashboard gets its records from.

use super::model::{AlertIcon, AlertSummaryCollection, AlertSummaryRecord, Severity};

pub trait AlertSummarySource {
    /// Fetch the current alert summary
    fn fetch_summary(&self) -> AlertSummaryCollection;
}

/// Fixed literal summary. Nothing backs these numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAlertSummary;

impl StaticAlertSummary {
    pub fn records() -> Vec<AlertSummaryRecord> {
        vec![
            AlertSummaryRecord::new(1, AlertIcon::Bell, Severity::Info, 5, "Total Alerts"),
            AlertSummaryRecord::new(2, AlertIcon::Bell, Severity::Warning, 3, "Unread"),
            AlertSummaryRecord::new(
                3,
                AlertIcon::WarningTriangle,
                Severity::Critical,
                2,
                "High Priority",
            ),
            AlertSummaryRecord::new(4, AlertIcon::WarningCircle, Severity::Success, 3, "Medium/Low"),
        ]
    }
}

impl AlertSummarySource for StaticAlertSummary {
    fn fetch_summary(&self) -> AlertSummaryCollection {
        match AlertSummaryCollection::new(Self::records()) {
            Ok(collection) => collection,
            Err(err) => {
                log::warn!("Static alert summary rejected: {err}");
                AlertSummaryCollection::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_summary_values() {
        let summary = StaticAlertSummary.fetch_summary();
        assert_eq!(summary.len(), 4);

        let counts: Vec<u32> = summary.records().iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![5, 3, 2, 3]);

        let labels: Vec<&str> = summary.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Total Alerts", "Unread", "High Priority", "Medium/Low"]);
    }

    #[test]
    fn test_static_summary_is_stable() {
        assert_eq!(StaticAlertSummary.fetch_summary(), StaticAlertSummary.fetch_summary());
    }
}
