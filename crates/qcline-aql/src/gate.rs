//! AQL gate evaluation for inspected lots
//!
//! Looks up the sampling plan for a lot and compares the major/minor defect
//! counts against its acceptance numbers. Critical defects do not enter the
//! AQL math; they only drive the risk level.

use qcline_core::QcError;
use serde::{Deserialize, Serialize};

use crate::plan::select_plan;
use crate::risk::{classify_risk, RiskLevel};

/// Pass/fail result of the sampling check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AqlResult {
    Pass,
    Fail,
}

impl AqlResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, AqlResult::Pass)
    }

    /// Banner text for the report header
    pub fn banner(&self) -> &'static str {
        match self {
            AqlResult::Pass => "PASSED",
            AqlResult::Fail => "FAILED",
        }
    }
}

impl std::fmt::Display for AqlResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AqlResult::Pass => write!(f, "PASS"),
            AqlResult::Fail => write!(f, "FAIL"),
        }
    }
}

/// Output of [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AqlOutcome {
    pub result: AqlResult,
    pub sample_size: u32,
    pub major_limit: u32,
    pub minor_limit: u32,
}

/// Evaluate a lot against its sampling plan.
///
/// Passes only when both the major and the minor count are within limits.
pub fn evaluate(lot_size: u32, major: u32, minor: u32) -> AqlOutcome {
    let plan = select_plan(lot_size);
    let result = if major <= plan.major_defect_limit && minor <= plan.minor_defect_limit {
        AqlResult::Pass
    } else {
        AqlResult::Fail
    };

    AqlOutcome {
        result,
        sample_size: plan.sample_size,
        major_limit: plan.major_defect_limit,
        minor_limit: plan.minor_defect_limit,
    }
}

/// Aggregate defect counts for one inspection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectCounts {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
}

impl DefectCounts {
    pub fn new(critical: u32, major: u32, minor: u32) -> Self {
        Self {
            critical,
            major,
            minor,
        }
    }

    /// Build counts from untrusted signed input, rejecting negatives
    pub fn try_new(critical: i64, major: i64, minor: i64) -> Result<Self, QcError> {
        Ok(Self {
            critical: non_negative("critical defect count", critical)?,
            major: non_negative("major defect count", major)?,
            minor: non_negative("minor defect count", minor)?,
        })
    }

    pub fn total(&self) -> u32 {
        self.critical
            .saturating_add(self.major)
            .saturating_add(self.minor)
    }
}

/// Validate a lot size received from outside the typed API
pub fn validate_lot_size(lot_size: i64) -> Result<u32, QcError> {
    non_negative("lot size", lot_size)
}

fn non_negative(what: &str, value: i64) -> Result<u32, QcError> {
    if value < 0 {
        return Err(QcError::invalid_input(format!(
            "{} must be non-negative, got {}",
            what, value
        )));
    }
    u32::try_from(value)
        .map_err(|_| QcError::invalid_input(format!("{} {} is out of range", what, value)))
}

/// Derived verdict for an inspection: AQL numbers plus risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionVerdict {
    pub sample_size: u32,
    pub major_limit: u32,
    pub minor_limit: u32,
    pub result: AqlResult,
    pub risk_level: RiskLevel,
    pub critical_found: u32,
    pub major_found: u32,
    pub minor_found: u32,
}

impl InspectionVerdict {
    /// The AQL half of the verdict
    pub fn outcome(&self) -> AqlOutcome {
        AqlOutcome {
            result: self.result,
            sample_size: self.sample_size,
            major_limit: self.major_limit,
            minor_limit: self.minor_limit,
        }
    }

    /// Passed sampling but still flagged for attention
    pub fn passed_with_risk(&self) -> bool {
        self.result.is_pass() && self.risk_level.requires_attention()
    }
}

/// Compute both judgments for an inspection without reconciling them
pub fn inspect(lot_size: u32, counts: DefectCounts) -> InspectionVerdict {
    let outcome = evaluate(lot_size, counts.major, counts.minor);
    let risk_level = classify_risk(counts.major, counts.minor, counts.critical);

    tracing::debug!(
        lot_size,
        sample_size = outcome.sample_size,
        result = %outcome.result,
        risk = %risk_level,
        "evaluated inspection"
    );

    InspectionVerdict {
        sample_size: outcome.sample_size,
        major_limit: outcome.major_limit,
        minor_limit: outcome.minor_limit,
        result: outcome.result,
        risk_level,
        critical_found: counts.critical,
        major_found: counts.major,
        minor_found: counts.minor,
    }
}
