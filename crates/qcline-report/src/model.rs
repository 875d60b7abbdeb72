//! Report data model consumed by the document renderer.
//!
//! Field names and orderings are the renderer contract: it lays out what it
//! receives and performs no business computation of its own.

use qcline_aql::InspectionVerdict;
use qcline_core::{Bucket, DefectSeverity, ItemStatus};
use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::section::SectionLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub header: ReportHeader,
    pub details_table: Vec<DetailRow>,
    pub verdict: InspectionVerdict,
    /// Rows in order critical, major, minor, then any unknown severities
    pub defect_summary_by_severity: Vec<SeveritySummary>,
    pub checklist_sections: Vec<ChecklistSection>,
    pub defect_detail_rows: Vec<DefectRow>,
    pub photo_groups: Vec<PhotoGroup>,
    /// Labels that fell outside the known enumerations
    pub unknown_buckets: Vec<String>,
    /// `blake3:<hex>` over the inputs; absent if they could not be serialized
    pub fingerprint: Option<String>,
}

impl ReportModel {
    pub fn summary_for(&self, severity: DefectSeverity) -> Option<&SeveritySummary> {
        self.defect_summary_by_severity
            .iter()
            .find(|row| row.severity == Bucket::Known(severity))
    }

    pub fn section(&self, display_name: &str) -> Option<&ChecklistSection> {
        self.checklist_sections
            .iter()
            .find(|s| s.display_name == display_name)
    }

    pub fn has_unknown_buckets(&self) -> bool {
        !self.unknown_buckets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeader {
    pub title: String,
    pub brand_name: String,
    pub inspection_id: String,
    pub report_number: Option<String>,
    pub buyer: Option<String>,
    /// Caller-supplied "today" label; display only
    pub generated_on: Option<String>,
    pub banner: Banner,
    pub risk_badge: Badge,
    pub summary: Option<String>,
    pub engine_version: String,
}

/// PASSED / FAILED banner at the top of the first page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub text: String,
    pub color_class: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Whether a severity row is within its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    Pass,
    Fail,
    /// No limit applies (unknown severity)
    Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeveritySummary {
    pub severity: Bucket<DefectSeverity>,
    pub found: u32,
    pub limit: Option<u32>,
    pub status: RowStatus,
    /// Severity badge
    pub badge: Badge,
    /// Badge for the limit check
    pub status_badge: Badge,
}

/// Aggregate status of a checklist section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionStatus {
    #[serde(rename = "ALL PASS")]
    AllPass,
    #[serde(rename = "MINOR ISSUE")]
    MinorIssue,
    #[serde(rename = "ISSUES NOTED")]
    IssuesNoted,
}

impl SectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SectionStatus::AllPass => "ALL PASS",
            SectionStatus::MinorIssue => "MINOR ISSUE",
            SectionStatus::IssuesNoted => "ISSUES NOTED",
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            SectionStatus::AllPass => Badge::all_pass(self.label()),
            SectionStatus::MinorIssue => Badge::minor_issue(self.label()),
            SectionStatus::IssuesNoted => Badge::issues_noted(self.label()),
        }
    }
}

impl std::fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSection {
    pub name: SectionLabel,
    pub display_name: String,
    pub items: Vec<ChecklistRow>,
    pub section_status: SectionStatus,
    pub status_badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRow {
    pub name: String,
    pub status: Bucket<ItemStatus>,
    pub badge: Badge,
    pub note: Option<String>,
    /// 1-based numbers of the defect rows this item links to
    pub linked_defect_rows: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectRow {
    pub number: usize,
    pub severity: Bucket<DefectSeverity>,
    pub badge: Badge,
    pub code: String,
    pub description: String,
    pub quantity: u32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoGroup {
    pub name: String,
    /// Photos laid out row by row
    pub rows: Vec<Vec<PhotoCell>>,
    /// Photos dropped by the per-group cap
    pub omitted: usize,
}

impl PhotoGroup {
    pub fn photo_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoCell {
    pub url: String,
    pub caption: Option<String>,
}
