// Alert summary model types.
//
// A record is one aggregate metric shown on a dashboard card. Records are
// immutable once built and a collection keeps them in display order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theme::Theme;

/// Icon drawn inside a card's tinted square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertIcon {
    Bell,
    WarningTriangle,
    WarningCircle,
}

/// Semantic category that selects a card's color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blue
    Info,
    /// Yellow
    Warning,
    /// Red
    Critical,
    /// Green
    Success,
}

impl Severity {
    /// Get all severities in palette order
    pub fn all() -> &'static [Severity] {
        &[Self::Info, Self::Warning, Self::Critical, Self::Success]
    }

    /// Look up the style tokens for this severity
    pub fn theme(self) -> &'static Theme {
        Theme::for_severity(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummaryRecord {
    pub id: u32,
    pub icon: AlertIcon,
    pub severity: Severity,
    pub count: u32,
    pub label: String,
}

impl AlertSummaryRecord {
    pub fn new(id: u32, icon: AlertIcon, severity: Severity, count: u32, label: &str) -> Self {
        Self {
            id,
            icon,
            severity,
            count,
            label: label.to_string(),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.severity.theme()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("duplicate alert summary id {0}")]
    DuplicateId(u32),
}

/// Ordered records with unique ids. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertSummaryCollection {
    records: Vec<AlertSummaryRecord>,
}

impl AlertSummaryCollection {
    pub fn new(records: Vec<AlertSummaryRecord>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CollectionError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AlertSummaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<AlertSummaryRecord> {
        self.records
    }
}
