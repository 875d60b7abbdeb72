//! Integration tests for qcline-aql
//!
//! Exercise the public API the way the report aggregator and the HTTP layer
//! use it: untrusted counts in, verdicts and dashboard stats out.

use qcline_aql::{
    inspect, select_plan, validate_lot_size, would_pass, AqlResult, DefectCounts,
    InspectionStats, RiskLevel, SAMPLING_PLANS,
};

// =============================================================================
// Sampling table
// =============================================================================

#[test]
fn test_every_breakpoint_selects_its_own_row() {
    for (index, plan) in SAMPLING_PLANS.iter().enumerate() {
        if let Some(max) = plan.max_lot_size {
            assert_eq!(select_plan(max), plan, "lot {}", max);
            assert_eq!(select_plan(max + 1), &SAMPLING_PLANS[index + 1], "lot {}", max + 1);
        }
    }
}

#[test]
fn test_plans_grow_with_lot_size() {
    for pair in SAMPLING_PLANS.windows(2) {
        assert!(pair[0].sample_size < pair[1].sample_size);
        assert!(pair[0].major_defect_limit <= pair[1].major_defect_limit);
        assert!(pair[0].minor_defect_limit <= pair[1].minor_defect_limit);
    }
}

// =============================================================================
// Verdicts
// =============================================================================

#[test]
fn test_sample_report_lot() {
    let verdict = inspect(120, DefectCounts::new(0, 1, 2));

    assert_eq!(verdict.sample_size, 20);
    assert_eq!(verdict.major_limit, 1);
    assert_eq!(verdict.minor_limit, 3);
    assert_eq!(verdict.result, AqlResult::Pass);
    assert_eq!(verdict.result.banner(), "PASSED");
    assert_eq!(verdict.risk_level, RiskLevel::Green);
}

#[test]
fn test_too_many_majors_fails_and_turns_red() {
    let verdict = inspect(500, DefectCounts::new(0, 4, 0));

    assert_eq!(verdict.major_limit, 3);
    assert_eq!(verdict.result, AqlResult::Fail);
    assert_eq!(verdict.risk_level, RiskLevel::Red);
}

#[test]
fn test_judgments_are_independent() {
    // a single critical passes sampling but is red
    let verdict = inspect(120, DefectCounts::new(1, 0, 0));
    assert!(verdict.result.is_pass());
    assert_eq!(verdict.risk_level, RiskLevel::Red);
    assert!(verdict.passed_with_risk());

    // one minor over the limit fails sampling but stays green
    let verdict = inspect(40, DefectCounts::new(0, 0, 2));
    assert_eq!(verdict.result, AqlResult::Fail);
    assert_eq!(verdict.risk_level, RiskLevel::Green);
}

#[test]
fn test_untrusted_input_path() {
    let lot = validate_lot_size(3201).unwrap();
    let counts = DefectCounts::try_new(0, 7, 14).unwrap();
    let verdict = inspect(lot, counts);
    assert_eq!(verdict.sample_size, 200);
    assert!(verdict.result.is_pass());
    assert_eq!(verdict.risk_level, RiskLevel::Red);

    let err = DefectCounts::try_new(0, 0, -3).unwrap_err();
    assert!(err.to_string().starts_with("INPUT/"));
    assert!(validate_lot_size(-1).is_err());
}

#[test]
fn test_would_pass_is_monotonic() {
    for lot in [1, 51, 91, 151, 281, 501, 1201, 3201, 10001] {
        for major in 0..16 {
            for minor in 0..24 {
                if !would_pass(lot, major, minor) {
                    assert!(!would_pass(lot, major + 1, minor));
                    assert!(!would_pass(lot, major, minor + 1));
                }
            }
        }
    }
}

// =============================================================================
// Dashboard stats
// =============================================================================

#[test]
fn test_stats_over_mixed_inspections() {
    let verdicts = vec![
        inspect(120, DefectCounts::new(0, 1, 2)),
        inspect(500, DefectCounts::new(0, 4, 0)),
        inspect(120, DefectCounts::new(1, 0, 0)),
        inspect(280, DefectCounts::new(0, 2, 0)),
    ];
    let stats = InspectionStats::from_verdicts(&verdicts);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.passed, 3);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.count_for(RiskLevel::Green), 1);
    assert_eq!(stats.count_for(RiskLevel::Amber), 1);
    assert_eq!(stats.count_for(RiskLevel::Red), 2);
    assert_eq!(stats.passed_with_risk, 2);
    assert!((stats.pass_rate - 0.75).abs() < f64::EPSILON);
}
