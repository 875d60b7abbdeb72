//! Dashboard statistics over many inspection verdicts

use serde::{Deserialize, Serialize};

use crate::gate::{AqlResult, InspectionVerdict};
use crate::risk::RiskLevel;

/// Roll-up shown above the dashboard inspection list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub green: usize,
    pub amber: usize,
    pub red: usize,
    /// Passed AQL but flagged amber or red
    pub passed_with_risk: usize,
    pub pass_rate: f64,
}

impl InspectionStats {
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a InspectionVerdict>,
    {
        let mut stats = InspectionStats::default();

        for verdict in verdicts {
            stats.total += 1;
            match verdict.result {
                AqlResult::Pass => stats.passed += 1,
                AqlResult::Fail => stats.failed += 1,
            }
            match verdict.risk_level {
                RiskLevel::Green => stats.green += 1,
                RiskLevel::Amber => stats.amber += 1,
                RiskLevel::Red => stats.red += 1,
            }
            if verdict.passed_with_risk() {
                stats.passed_with_risk += 1;
            }
        }

        stats.pass_rate = if stats.total > 0 {
            stats.passed as f64 / stats.total as f64
        } else {
            0.0
        };
        stats
    }

    /// Count for a single risk level
    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Green => self.green,
            RiskLevel::Amber => self.amber,
            RiskLevel::Red => self.red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{inspect, DefectCounts};

    #[test]
    fn test_empty_stats() {
        let none: Vec<InspectionVerdict> = Vec::new();
        let stats = InspectionStats::from_verdicts(&none);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pass_rate, 0.0);
    }

    #[test]
    fn test_mixed_verdicts() {
        let verdicts = vec![
            inspect(120, DefectCounts::new(0, 1, 2)), // pass, green
            inspect(120, DefectCounts::new(1, 0, 0)), // pass, red
            inspect(500, DefectCounts::new(0, 4, 0)), // fail, red
            inspect(500, DefectCounts::new(0, 2, 1)), // pass, amber
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
}
