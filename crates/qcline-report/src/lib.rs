//! qcline report: inspection data to a layout-ready report model
//!
//! This crate aggregates checklist results and defects into the
//! [`ReportModel`] the PDF renderer lays out, and renders plain-text
//! summaries of it for notification emails.
//!
//! # Example
//!
//! ```
//! use qcline_core::{ChecklistItemResult, DefectRecord, DefectSeverity, InspectionHeader, ItemStatus};
//! use qcline_report::{build_report_model, render_summary};
//!
//! let inspection = InspectionHeader::new("insp-1", 120).with_buyer("Acme Home");
//! let items = vec![ChecklistItemResult::new("Packaging", "Carton marks", ItemStatus::Pass)];
//! let defects = vec![DefectRecord::new(DefectSeverity::Minor, "FN-11", "Loose fringe knot", 2)];
//!
//! let model = build_report_model(&inspection, &items, &defects);
//! assert_eq!(model.header.banner.text, "PASSED");
//!
//! let text = render_summary(&model).unwrap();
//! assert!(text.contains("Packaging: ALL PASS"));
//! ```

pub mod aggregator;
pub mod badge;
pub mod fingerprint;
pub mod model;
pub mod photos;
pub mod profile;
pub mod renderer;
pub mod section;
pub mod templates;
pub mod truncate;

pub use aggregator::{
    build_report_model, section_status, severity_counts, ReportBuilder, ReportRequest,
};
pub use badge::Badge;
pub use model::{
    Banner, ChecklistRow, ChecklistSection, DefectRow, DetailRow, PhotoCell, PhotoGroup,
    ReportHeader, ReportModel, RowStatus, SectionStatus, SeveritySummary,
};
pub use profile::{ReportProfile, TruncationBudgets};
pub use renderer::TemplateRenderer;
pub use section::{SectionClassifier, SectionLabel};
pub use templates::TemplatesFile;
pub use truncate::{truncate_label, TRUNCATION_MARKER};

use thiserror::Error;

/// Errors that can occur during summary rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Render failed: {0}")]
    Render(String),
}

/// Render the stakeholder email summary with the bundled templates
pub fn render_summary(model: &ReportModel) -> Result<String, RenderError> {
    TemplateRenderer::bundled()?.email_summary(model)
}

/// Build and summarize in one step
pub fn build_and_summarize(request: &ReportRequest) -> Result<(ReportModel, String), RenderError> {
    let model = ReportBuilder::default().build_request(request);
    let summary = render_summary(&model)?;
    Ok((model, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcline_core::{DefectRecord, DefectSeverity, InspectionHeader};

    #[test]
    fn test_render_summary_mentions_verdict() {
        let inspection = InspectionHeader::new("insp-9", 500).with_buyer("Acme Home");
        let defects = vec![DefectRecord::new(DefectSeverity::Major, "WV-02", "Missed weft", 4)];
        let model = build_report_model(&inspection, &[], &defects);

        let text = render_summary(&model).unwrap();
        assert!(text.contains("Result: FAILED"));
        assert!(text.contains("RED RISK"));
        assert!(text.contains("MAJOR: 4 found (limit 3) Fail"));
        assert!(text.contains("1. [MAJOR] WV-02 Missed weft x4"));
    }

    #[test]
    fn test_build_and_summarize() {
        let request: ReportRequest = serde_json::from_value(serde_json::json!({
            "inspection": { "inspectionId": "insp-3", "lotSize": 40 },
            "generatedOn": "18 Mar 2024"
        }))
        .unwrap();
        let (model, summary) = build_and_summarize(&request).unwrap();
        assert_eq!(model.verdict.sample_size, 8);
        assert!(summary.contains("(18 Mar 2024)"));
        assert!(summary.contains("CRITICAL: 0 found (limit 0) Pass"));
    }
}
