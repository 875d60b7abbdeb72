//! qcline AQL: sampling plan evaluation and risk scoring
//!
//! Two independent judgments are produced for every inspection:
//!
//! ```text
//! lot size ──► select_plan ──► evaluate(major, minor) ──► PASS / FAIL
//! counts  ───────────────────► classify_risk(major, minor, critical) ──► GREEN / AMBER / RED
//! ```
//!
//! They are never reconciled: a lot can pass sampling and still be red.
//!
//! # Example
//!
//! ```
//! use qcline_aql::{evaluate, classify_risk, AqlResult, RiskLevel};
//!
//! let outcome = evaluate(120, 1, 2);
//! assert_eq!(outcome.sample_size, 20);
//! assert_eq!(outcome.result, AqlResult::Pass);
//!
//! assert_eq!(classify_risk(1, 2, 0), RiskLevel::Green);
//! assert_eq!(classify_risk(1, 2, 1), RiskLevel::Red);
//! ```

pub mod gate;
pub mod plan;
pub mod risk;
pub mod stats;

pub use gate::{
    evaluate, inspect, validate_lot_size, AqlOutcome, AqlResult, DefectCounts, InspectionVerdict,
};
pub use plan::{select_plan, LotSamplingPlan, INSPECTION_LEVEL, SAMPLING_PLANS};
pub use risk::{classify_risk, RiskLevel};
pub use stats::InspectionStats;

/// Check if a lot would pass sampling
pub fn would_pass(lot_size: u32, major: u32, minor: u32) -> bool {
    evaluate(lot_size, major, minor).result.is_pass()
}
