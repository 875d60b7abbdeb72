//! Risk scoring for inspections
//!
//! A coarse triage level for owners, independent of the AQL verdict: a lot
//! can pass sampling and still be flagged amber or red.

use serde::{Deserialize, Serialize};

/// Major defects at which an inspection turns red
pub const RED_MAJOR_THRESHOLD: u32 = 4;
/// Major defects at which an inspection turns amber
pub const AMBER_MAJOR_THRESHOLD: u32 = 2;
/// Minor defects at which an inspection turns amber
pub const AMBER_MINOR_THRESHOLD: u32 = 6;

/// Risk level of an inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Nothing needing owner attention
    #[default]
    Green = 0,
    /// Several majors or many minors
    Amber = 1,
    /// Any critical defect, or a cluster of majors
    Red = 2,
}

impl RiskLevel {
    /// Check if this risk level should be surfaced to the owner
    pub fn requires_attention(&self) -> bool {
        matches!(self, RiskLevel::Amber | RiskLevel::Red)
    }

    /// CSS-style class the renderer uses to color the badge
    pub fn color_class(&self) -> &'static str {
        match self {
            RiskLevel::Green => "risk-green",
            RiskLevel::Amber => "risk-amber",
            RiskLevel::Red => "risk-red",
        }
    }

    /// Hex fill for renderers without a stylesheet
    pub fn fill(&self) -> &'static str {
        match self {
            RiskLevel::Green => "#16A34A",
            RiskLevel::Amber => "#D97706",
            RiskLevel::Red => "#DC2626",
        }
    }

    /// Short explanation shown next to the badge
    pub fn explanation(&self) -> &'static str {
        match self {
            RiskLevel::Green => "Low risk - no action needed",
            RiskLevel::Amber => "Elevated risk - review recommended",
            RiskLevel::Red => "High risk - owner attention required",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RiskLevel::Green => write!(f, "GREEN"),
            RiskLevel::Amber => write!(f, "AMBER"),
            RiskLevel::Red => write!(f, "RED"),
        }
    }
}

/// Classify an inspection from its defect counts. First matching rule wins.
pub fn classify_risk(major: u32, minor: u32, critical: u32) -> RiskLevel {
    if critical > 0 || major >= RED_MAJOR_THRESHOLD {
        RiskLevel::Red
    } else if major >= AMBER_MAJOR_THRESHOLD || minor >= AMBER_MINOR_THRESHOLD {
        RiskLevel::Amber
    } else {
        RiskLevel::Green
    }
}
