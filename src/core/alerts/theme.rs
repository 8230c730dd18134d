// Severity palette.
//
// Cards read their colors from CSS custom properties, so a theme is just
// the five values written into a card's inline style.

use super::model::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Fill of the rounded square behind the icon
    pub tint: &'static str,
    pub icon: &'static str,
    /// Count color while the card is hovered
    pub hover: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

const INFO: Theme = Theme {
    tint: "#dbeafe",
    icon: "#2563eb",
    hover: "#2563eb",
    border: "#bfdbfe",
    shadow: "rgba(59, 130, 246, 0.25)",
};

const WARNING: Theme = Theme {
    tint: "#fef9c3",
    icon: "#ca8a04",
    hover: "#ca8a04",
    border: "#fef08a",
    shadow: "rgba(234, 179, 8, 0.25)",
};

const CRITICAL: Theme = Theme {
    tint: "#fee2e2",
    icon: "#dc2626",
    hover: "#dc2626",
    border: "#fecaca",
    shadow: "rgba(239, 68, 68, 0.25)",
};

const SUCCESS: Theme = Theme {
    tint: "#dcfce7",
    icon: "#16a34a",
    hover: "#16a34a",
    border: "#bbf7d0",
    shadow: "rgba(34, 197, 94, 0.25)",
};

impl Theme {
    pub fn for_severity(severity: Severity) -> &'static Theme {
        match severity {
            Severity::Info => &INFO,
            Severity::Warning => &WARNING,
            Severity::Critical => &CRITICAL,
            Severity::Success => &SUCCESS,
        }
    }

    /// Inline style declaring the card's custom properties
    pub fn css_vars(&self) -> String {
        format!(
            "--card-tint: {}; --card-icon: {}; --card-hover: {}; --card-border: {}; --card-shadow: {};",
            self.tint, self.icon, self.hover, self.border, self.shadow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_severity_has_distinct_theme() {
        let tints: HashSet<&str> = Severity::all()
            .iter()
            .map(|severity| severity.theme().tint)
            .collect();
        assert_eq!(tints.len(), Severity::all().len());
    }

    #[test]
    fn test_css_vars() {
        let vars = Theme::for_severity(Severity::Critical).css_vars();
        assert!(vars.contains("--card-tint: #fee2e2;"));
        assert!(vars.contains("--card-shadow: rgba(239, 68, 68, 0.25);"));
    }
}
