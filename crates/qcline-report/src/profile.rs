//! Report profiles
//!
//! Display budgets, known checklist sections and photo layout for a report.
//! Owners can ship their own profile as YAML; the built-in ones cover the
//! standard A4 layout and a compact mobile preview.

use qcline_core::QcError;
use serde::{Deserialize, Serialize};

/// Maximum characters shown for each free-text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncationBudgets {
    pub header_value: usize,
    pub item_name: usize,
    pub note: usize,
    pub defect_code: usize,
    pub defect_description: usize,
    pub location: usize,
    pub photo_caption: usize,
    pub summary: usize,
    /// Checklist section headings and photo group names
    pub section_name: usize,
    /// Badges carrying an owner-typed label
    pub badge_label: usize,
}

impl Default for TruncationBudgets {
    fn default() -> Self {
        Self {
            header_value: 40,
            item_name: 48,
            note: 60,
            defect_code: 12,
            defect_description: 70,
            location: 24,
            photo_caption: 40,
            summary: 600,
            section_name: 48,
            badge_label: 24,
        }
    }
}

/// Report profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProfile {
    /// Profile name (e.g., "standard@1.0", "compact@1.0")
    pub name: String,

    /// Brand shown in the report header
    pub brand_name: String,

    pub report_title: String,

    // === Checklist ===

    /// Section names the owner's checklist template defines, in canonical spelling
    pub known_sections: Vec<String>,

    // === Display ===

    #[serde(default)]
    pub budgets: TruncationBudgets,

    // === Photos ===

    /// Photos per layout row
    pub photos_per_row: usize,

    /// Photos kept per group; the rest are counted as omitted
    pub max_photos_per_group: usize,
}

impl ReportProfile {
    /// Full A4 layout
    pub fn standard() -> Self {
        Self {
            name: "standard@1.0".to_string(),
            brand_name: "qcline".to_string(),
            report_title: "Final Random Inspection Report".to_string(),
            known_sections: default_sections(),
            budgets: TruncationBudgets::default(),
            photos_per_row: 3,
            max_photos_per_group: 12,
        }
    }

    /// Narrow layout used for on-screen previews
    pub fn compact() -> Self {
        Self {
            name: "compact@1.0".to_string(),
            brand_name: "qcline".to_string(),
            report_title: "Inspection Summary".to_string(),
            known_sections: default_sections(),
            budgets: TruncationBudgets {
                header_value: 24,
                item_name: 28,
                note: 36,
                defect_code: 10,
                defect_description: 40,
                location: 16,
                photo_caption: 24,
                summary: 280,
                section_name: 28,
                badge_label: 16,
            },
            photos_per_row: 2,
            max_photos_per_group: 4,
        }
    }

    /// Load profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, QcError> {
        let profile: ReportProfile =
            serde_yaml::from_str(yaml).map_err(|e| QcError::ProfileError(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load profile from a YAML file
    pub fn load(path: &str) -> Result<Self, QcError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QcError::ProfileError(format!("Failed to read profile {}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    /// Get profile by name
    pub fn for_name(name: &str) -> Self {
        match name {
            "standard" => Self::standard(),
            "compact" => Self::compact(),
            _ => Self::standard(),
        }
    }

    fn validate(&self) -> Result<(), QcError> {
        if self.photos_per_row == 0 {
            return Err(QcError::ProfileError(
                "photos_per_row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportProfile {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_sections() -> Vec<String> {
    [
        "Packaging",
        "Labeling",
        "Dimensions",
        "Visual Appearance",
        "Construction",
        "Color & Shade",
        "Backing",
        "Finishing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
