//! Prometheus counters exposed on `/metrics`
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use qcline_aql::{AqlResult, RiskLevel};

pub struct Metrics {
    registry: Registry,
    evaluations: IntCounterVec,
    reports: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations = IntCounterVec::new(
            Opts::new("qcline_evaluations_total", "AQL evaluations by result"),
            &["result"],
        )?;
        let reports = IntCounterVec::new(
            Opts::new("qcline_reports_total", "Report models built by risk level"),
            &["risk"],
        )?;

        registry.register(Box::new(evaluations.clone()))?;
        registry.register(Box::new(reports.clone()))?;

        Ok(Self {
            registry,
            evaluations,
            reports,
        })
    }

    pub fn record_evaluation(&self, result: AqlResult) {
        let label = result.to_string();
        self.evaluations.with_label_values(&[label.as_str()]).inc();
    }

    pub fn record_report(&self, risk: RiskLevel) {
        let label = risk.to_string();
        self.reports.with_label_values(&[label.as_str()]).inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        encode(&self.registry)
    }
}

/// Text exposition format
pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_exported() {
        let metrics = Metrics::new().unwrap();
        metrics.record_evaluation(AqlResult::Pass);
        metrics.record_evaluation(AqlResult::Pass);
        metrics.record_report(RiskLevel::Red);

        let text = metrics.encode().unwrap();
        assert!(text.contains("qcline_evaluations_total{result=\"PASS\"} 2"));
        assert!(text.contains("qcline_reports_total{risk=\"RED\"} 1"));
    }
}
