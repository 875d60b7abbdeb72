//! Data Model: InspectionHeader, ChecklistItemResult, DefectRecord
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bucket::{Bucket, Enumerated};
use crate::error::QcError;

/// Defect severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectSeverity {
    Critical,
    Major,
    Minor,
}

impl DefectSeverity {
    /// Report order: most severe first
    pub const ALL: [DefectSeverity; 3] = [
        DefectSeverity::Critical,
        DefectSeverity::Major,
        DefectSeverity::Minor,
    ];
}

impl Enumerated for DefectSeverity {
    fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(DefectSeverity::Critical),
            "major" => Some(DefectSeverity::Major),
            "minor" => Some(DefectSeverity::Minor),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DefectSeverity::Critical => "critical",
            DefectSeverity::Major => "major",
            DefectSeverity::Minor => "minor",
        }
    }
}

impl std::fmt::Display for DefectSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DefectSeverity::Critical => write!(f, "CRITICAL"),
            DefectSeverity::Major => write!(f, "MAJOR"),
            DefectSeverity::Minor => write!(f, "MINOR"),
        }
    }
}

/// Outcome the inspector recorded for one checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pass,
    Minor,
    Major,
    Critical,
}

impl Enumerated for ItemStatus {
    fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pass" => Some(ItemStatus::Pass),
            "minor" => Some(ItemStatus::Minor),
            "major" => Some(ItemStatus::Major),
            "critical" => Some(ItemStatus::Critical),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pass => "pass",
            ItemStatus::Minor => "minor",
            ItemStatus::Major => "major",
            ItemStatus::Critical => "critical",
        }
    }
}

/// Reference to an uploaded photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Checklist section the photo documents, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl PhotoRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
            section: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// Inspection header record: buyer, order metadata and lot information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionHeader {
    pub inspection_id: String,
    #[serde(default)]
    pub report_number: Option<String>,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub po_number: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub factory: Option<String>,
    #[serde(default)]
    pub inspector: Option<String>,
    #[serde(default)]
    pub inspection_type: Option<String>,
    /// Units in the lot being evaluated
    pub lot_size: u32,
    /// Sample size the inspector declared, if it differs from the plan
    #[serde(default)]
    pub sample_size: Option<u32>,
    #[serde(default)]
    pub inspection_date: Option<NaiveDate>,
    /// Free-text summary written for the owner
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

impl InspectionHeader {
    pub fn new(inspection_id: impl Into<String>, lot_size: u32) -> Self {
        Self {
            inspection_id: inspection_id.into(),
            lot_size,
            ..Default::default()
        }
    }

    pub fn with_buyer(mut self, buyer: impl Into<String>) -> Self {
        self.buyer = Some(buyer.into());
        self
    }

    pub fn with_po_number(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = Some(po_number.into());
        self
    }

    pub fn with_inspection_type(mut self, inspection_type: impl Into<String>) -> Self {
        self.inspection_type = Some(inspection_type.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.inspection_date = Some(date);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// A defect recorded during checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectRecord {
    pub severity: Bucket<DefectSeverity>,
    pub code: String,
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity_affected: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<PhotoRef>,
}

fn default_quantity() -> u32 {
    1
}

impl DefectRecord {
    pub fn new(
        severity: DefectSeverity,
        code: impl Into<String>,
        description: impl Into<String>,
        quantity_affected: u32,
    ) -> Self {
        Self {
            severity: Bucket::Known(severity),
            code: code.into(),
            description: description.into(),
            quantity_affected,
            location: None,
            photos: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photos.push(photo);
        self
    }

    /// Units this record contributes to the severity totals.
    ///
    /// A recorded defect always counts at least once, even if the quantity
    /// was left at zero.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity_affected.max(1)
    }

    /// Reject records that break the `quantity_affected >= 1` invariant
    pub fn validate(&self) -> Result<(), QcError> {
        if self.quantity_affected == 0 {
            return Err(QcError::invalid_input(format!(
                "defect {} must affect at least one unit",
                self.code
            )));
        }
        Ok(())
    }
}

/// Result for one checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemResult {
    pub section: String,
    pub name: String,
    pub status: Bucket<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Codes of the defects this item raised
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_defects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<PhotoRef>,
}

impl ChecklistItemResult {
    pub fn new(section: impl Into<String>, name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            section: section.into(),
            name: name.into(),
            status: Bucket::Known(status),
            note: None,
            linked_defects: Vec::new(),
            photos: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn link_defect(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        if !self.linked_defects.contains(&code) {
            self.linked_defects.push(code);
        }
        self
    }

    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photos.push(photo);
        self
    }
}
