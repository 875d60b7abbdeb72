//! AQL sampling plans
//!
//! ANSI Z1.4-2008, General Inspection Level II, single sampling, normal
//! severity. Each row covers lot sizes up to and including `max_lot_size`;
//! the last row is unbounded so every lot size has exactly one plan.

use serde::{Deserialize, Serialize};

/// Human readable name of the inspection level the table encodes
pub const INSPECTION_LEVEL: &str = "ANSI Z1.4-2008 General Level II";

/// One row of the sampling table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSamplingPlan {
    /// Inclusive upper bound of the lot size range; `None` is unbounded
    pub max_lot_size: Option<u32>,
    pub sample_size: u32,
    /// Maximum major defects accepted in the sample
    pub major_defect_limit: u32,
    /// Maximum minor defects accepted in the sample
    pub minor_defect_limit: u32,
}

impl LotSamplingPlan {
    const fn bounded(max: u32, sample_size: u32, major: u32, minor: u32) -> Self {
        Self {
            max_lot_size: Some(max),
            sample_size,
            major_defect_limit: major,
            minor_defect_limit: minor,
        }
    }

    /// Whether a lot of this size falls under this row
    pub fn covers(&self, lot_size: u32) -> bool {
        self.max_lot_size.map_or(true, |max| lot_size <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_lot_size.is_none()
    }
}

/// The fixed sampling table, ordered by `max_lot_size`
pub static SAMPLING_PLANS: [LotSamplingPlan; 9] = [
    LotSamplingPlan::bounded(50, 8, 0, 1),
    LotSamplingPlan::bounded(90, 13, 1, 2),
    LotSamplingPlan::bounded(150, 20, 1, 3),
    LotSamplingPlan::bounded(280, 32, 2, 5),
    LotSamplingPlan::bounded(500, 50, 3, 7),
    LotSamplingPlan::bounded(1200, 80, 5, 10),
    LotSamplingPlan::bounded(3200, 125, 7, 14),
    LotSamplingPlan::bounded(10000, 200, 10, 21),
    LotSamplingPlan {
        max_lot_size: None,
        sample_size: 315,
        major_defect_limit: 14,
        minor_defect_limit: 21,
    },
];

/// Select the plan for a lot: the first row whose bound is >= `lot_size`
pub fn select_plan(lot_size: u32) -> &'static LotSamplingPlan {
    SAMPLING_PLANS
        .iter()
        .find(|plan| plan.covers(lot_size))
        .unwrap_or(&SAMPLING_PLANS[SAMPLING_PLANS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_with_unbounded_tail() {
        let bounds: Vec<u32> = SAMPLING_PLANS.iter().filter_map(|p| p.max_lot_size).collect();
        assert_eq!(bounds.len(), SAMPLING_PLANS.len() - 1);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(SAMPLING_PLANS[SAMPLING_PLANS.len() - 1].is_unbounded());
    }

    #[test]
    fn test_small_lots_use_first_row() {
        for lot_size in 1..=50 {
            let plan = select_plan(lot_size);
            assert_eq!(plan.sample_size, 8);
            assert_eq!(plan.major_defect_limit, 0);
            assert_eq!(plan.minor_defect_limit, 1);
        }
    }

    #[test]
    fn test_zero_lot_matches_first_row() {
        assert_eq!(select_plan(0), &SAMPLING_PLANS[0]);
    }

    #[test]
    fn test_large_lots_use_unbounded_row() {
        for lot_size in [10_001, 25_000, 1_000_000, u32::MAX] {
            let plan = select_plan(lot_size);
            assert_eq!(plan.sample_size, 315);
            assert!(plan.is_unbounded());
        }
    }

    #[test]
    fn test_breakpoints_select_their_own_row() {
        for (index, plan) in SAMPLING_PLANS.iter().enumerate() {
            if let Some(max) = plan.max_lot_size {
                assert_eq!(select_plan(max), &SAMPLING_PLANS[index]);
                assert_eq!(select_plan(max + 1), &SAMPLING_PLANS[index + 1]);
            }
        }
    }

    #[test]
    fn test_mid_table_lookup() {
        let plan = select_plan(120);
        assert_eq!(plan.sample_size, 20);
        assert_eq!(plan.major_defect_limit, 1);
        assert_eq!(plan.minor_defect_limit, 3);

        let plan = select_plan(2000);
        assert_eq!(plan.sample_size, 125);
        assert_eq!(plan.major_defect_limit, 7);
        assert_eq!(plan.minor_defect_limit, 14);
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let json = serde_json::to_value(select_plan(60)).unwrap();
        assert_eq!(json["maxLotSize"], 90);
        assert_eq!(json["sampleSize"], 13);
        assert_eq!(json["majorDefectLimit"], 1);
        assert_eq!(json["minorDefectLimit"], 2);
    }
}
