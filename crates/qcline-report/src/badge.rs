//! Badge metadata for the renderer.
//!
//! Every badge is derived purely from the value it labels, so the renderer
//! never has to make a coloring decision itself.

use qcline_aql::{AqlResult, RiskLevel};
use qcline_core::{Bucket, DefectSeverity, ItemStatus};
use serde::{Deserialize, Serialize};

use crate::model::RowStatus;
use crate::truncate::truncate_label;

/// Label plus color for a badge or banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    pub color_class: String,
    pub fill: String,
}

const RED: (&str, &str) = ("badge-red", "#DC2626");
const ORANGE: (&str, &str) = ("badge-orange", "#EA580C");
const YELLOW: (&str, &str) = ("badge-yellow", "#CA8A04");
const GREEN: (&str, &str) = ("badge-green", "#16A34A");
const GRAY: (&str, &str) = ("badge-gray", "#6B7280");

impl Badge {
    fn new(label: impl Into<String>, (color_class, fill): (&str, &str)) -> Self {
        Self {
            label: label.into(),
            color_class: color_class.to_string(),
            fill: fill.to_string(),
        }
    }

    pub fn for_severity(severity: &Bucket<DefectSeverity>) -> Self {
        match severity {
            Bucket::Known(DefectSeverity::Critical) => Self::new("CRITICAL", RED),
            Bucket::Known(DefectSeverity::Major) => Self::new("MAJOR", ORANGE),
            Bucket::Known(DefectSeverity::Minor) => Self::new("MINOR", YELLOW),
            Bucket::Unknown(raw) => Self::new(unknown_label(raw), GRAY),
        }
    }

    pub fn for_item_status(status: &Bucket<ItemStatus>) -> Self {
        match status {
            Bucket::Known(ItemStatus::Pass) => Self::new("PASS", GREEN),
            Bucket::Known(ItemStatus::Minor) => Self::new("MINOR", YELLOW),
            Bucket::Known(ItemStatus::Major) => Self::new("MAJOR", ORANGE),
            Bucket::Known(ItemStatus::Critical) => Self::new("CRITICAL", RED),
            Bucket::Unknown(raw) => Self::new(unknown_label(raw), GRAY),
        }
    }

    pub fn for_risk(level: RiskLevel) -> Self {
        Self {
            label: format!("{} RISK", level),
            color_class: level.color_class().to_string(),
            fill: level.fill().to_string(),
        }
    }

    pub fn for_result(result: AqlResult) -> Self {
        match result {
            AqlResult::Pass => Self::new(result.banner(), GREEN),
            AqlResult::Fail => Self::new(result.banner(), RED),
        }
    }

    /// Badge for a severity row's limit check
    pub fn for_row_status(status: RowStatus) -> Self {
        match status {
            RowStatus::Pass => Self::pass(),
            RowStatus::Fail => Self::fail(),
            RowStatus::Review => Self::review(),
        }
    }

    /// Same badge with its label cut to `budget` characters
    pub fn truncated(mut self, budget: usize) -> Self {
        self.label = truncate_label(&self.label, budget);
        self
    }

    fn pass() -> Self {
        Self::new("PASS", GREEN)
    }

    fn fail() -> Self {
        Self::new("FAIL", RED)
    }

    fn review() -> Self {
        Self::new("REVIEW", GRAY)
    }

    pub(crate) fn all_pass(label: &str) -> Self {
        Self::new(label, GREEN)
    }

    pub(crate) fn minor_issue(label: &str) -> Self {
        Self::new(label, YELLOW)
    }

    pub(crate) fn issues_noted(label: &str) -> Self {
        Self::new(label, ORANGE)
    }
}

fn unknown_label(raw: &str) -> String {
    if raw.is_empty() {
        "UNKNOWN".to_string()
    } else {
        raw.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_badges() {
        let badge = Badge::for_severity(&Bucket::Known(DefectSeverity::Critical));
        assert_eq!(badge.label, "CRITICAL");
        assert_eq!(badge.color_class, "badge-red");

        let badge = Badge::for_severity(&Bucket::Known(DefectSeverity::Minor));
        assert_eq!(badge.color_class, "badge-yellow");
    }

    #[test]
    fn test_unknown_badges_are_gray() {
        let badge = Badge::for_severity(&Bucket::Unknown("cosmetic".to_string()));
        assert_eq!(badge.label, "COSMETIC");
        assert_eq!(badge.color_class, "badge-gray");

        let badge = Badge::for_item_status(&Bucket::Unknown(String::new()));
        assert_eq!(badge.label, "UNKNOWN");
    }

    #[test]
    fn test_result_and_risk_badges() {
        assert_eq!(Badge::for_result(AqlResult::Pass).label, "PASSED");
        assert_eq!(Badge::for_result(AqlResult::Fail).color_class, "badge-red");
        let risk = Badge::for_risk(RiskLevel::Amber);
        assert_eq!(risk.label, "AMBER RISK");
        assert_eq!(risk.color_class, "risk-amber");
    }

    #[test]
    fn test_row_status_badges() {
        assert_eq!(Badge::for_row_status(RowStatus::Pass).color_class, "badge-green");
        assert_eq!(Badge::for_row_status(RowStatus::Fail).label, "FAIL");
        assert_eq!(Badge::for_row_status(RowStatus::Review).color_class, "badge-gray");
    }

    #[test]
    fn test_truncated_label() {
        let badge = Badge::for_severity(&Bucket::Unknown("x".repeat(300))).truncated(24);
        assert_eq!(badge.label.chars().count(), 24);
        assert!(badge.label.ends_with("..."));
        assert_eq!(badge.color_class, "badge-gray");
    }
}
