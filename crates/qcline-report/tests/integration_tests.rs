//! Integration tests for qcline-report with a real inspection fixture.
//!
//! These tests verify the full path from a submitted inspection payload to
//! the report model and the rendered email summary.

use qcline_aql::{AqlResult, RiskLevel};
use qcline_core::DefectSeverity;
use qcline_report::{
    build_report_model, ReportBuilder, ReportProfile, ReportRequest, RowStatus, SectionLabel,
    SectionStatus, TemplateRenderer,
};

/// Path to the fixture relative to the workspace root
const FIXTURE_PATH: &str = "testing/fixtures/inspections/hand-tufted-120.json";

/// Load the fixture from the workspace root
fn load_fixture() -> ReportRequest {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let content = std::fs::read_to_string(workspace_root.join(FIXTURE_PATH)).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// Report Model
// =============================================================================

#[test]
fn test_fixture_verdict_matches_sample_report() {
    let request = load_fixture();
    let model = ReportBuilder::default().build_request(&request);

    assert_eq!(model.verdict.sample_size, 20);
    assert_eq!(model.verdict.major_limit, 1);
    assert_eq!(model.verdict.minor_limit, 3);
    assert_eq!(model.verdict.result, AqlResult::Pass);
    assert_eq!(model.verdict.risk_level, RiskLevel::Green);
    assert_eq!(model.header.banner.text, "PASSED");
    assert_eq!(model.header.generated_on.as_deref(), Some("18 Mar 2024"));
}

#[test]
fn test_fixture_severity_summary() {
    let model = ReportBuilder::default().build_request(&load_fixture());

    let rows: Vec<(String, u32, Option<u32>, RowStatus)> = model
        .defect_summary_by_severity
        .iter()
        .map(|r| (r.severity.to_string(), r.found, r.limit, r.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("critical".to_string(), 0, Some(0), RowStatus::Pass),
            ("major".to_string(), 1, Some(1), RowStatus::Pass),
            ("minor".to_string(), 2, Some(3), RowStatus::Pass),
        ]
    );
    assert!(model.summary_for(DefectSeverity::Critical).is_some());
}

#[test]
fn test_fixture_sections() {
    let model = ReportBuilder::default().build_request(&load_fixture());

    let sections: Vec<(&str, SectionStatus)> = model
        .checklist_sections
        .iter()
        .map(|s| (s.display_name.as_str(), s.section_status))
        .collect();
    assert_eq!(
        sections,
        vec![
            ("Packaging", SectionStatus::AllPass),
            ("Dimensions", SectionStatus::AllPass),
            ("Visual Appearance", SectionStatus::IssuesNoted),
            ("Finishing", SectionStatus::MinorIssue),
            ("Fringe Wash", SectionStatus::AllPass),
        ]
    );

    // owner-added section survives as an unknown bucket
    let custom = model.section("Fringe Wash").unwrap();
    assert_eq!(custom.name, SectionLabel::Unknown("Fringe Wash".to_string()));
    assert_eq!(model.unknown_buckets, vec!["section:Fringe Wash".to_string()]);

    let weft = &model.section("Visual Appearance").unwrap().items[0];
    assert_eq!(weft.linked_defect_rows, vec![1]);
    assert_eq!(weft.badge.label, "MAJOR");
}

#[test]
fn test_fixture_photo_groups() {
    let model = ReportBuilder::default().build_request(&load_fixture());

    let names: Vec<&str> = model.photo_groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["General", "Visual Appearance"]);
    assert_eq!(model.photo_groups[1].rows[0][0].caption.as_deref(), Some("Missed weft"));
}

#[test]
fn test_fixture_details_table_order() {
    let model = ReportBuilder::default().build_request(&load_fixture());

    let labels: Vec<&str> = model.details_table.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Buyer",
            "PO Number",
            "Style",
            "Color",
            "Size",
            "Factory",
            "Inspector",
            "Inspection Type",
            "Inspection Date",
            "Lot Size",
            "Sample Size",
            "Inspection Level",
        ]
    );
    assert_eq!(model.details_table[8].value, "18 Mar 2024");
    assert_eq!(model.details_table[10].value, "20");
}

#[test]
fn test_build_twice_is_deep_equal() {
    let request = load_fixture();
    let first = build_report_model(&request.inspection, &request.checklist_items, &request.defects);
    let second = build_report_model(&request.inspection, &request.checklist_items, &request.defects);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_display_date_does_not_change_fingerprint() {
    let mut request = load_fixture();
    let builder = ReportBuilder::default();
    let first = builder.build_request(&request);
    request.generated_on = Some("19 Mar 2024".to_string());
    let second = builder.build_request(&request);

    assert!(first.fingerprint.is_some());
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_ne!(first.header, second.header);
}

#[test]
fn test_compact_profile_truncates_notes() {
    let request = load_fixture();
    let model = ReportBuilder::new(ReportProfile::compact()).build_request(&request);

    let note = model.section("Visual Appearance").unwrap().items[0].note.clone().unwrap();
    assert_eq!(note.chars().count(), 36);
    assert!(note.ends_with("..."));
    assert_eq!(
        request.checklist_items[3].note.as_deref(),
        Some("Missed weft line visible under raking light")
    );
}

#[test]
fn test_report_json_field_names() {
    let model = ReportBuilder::default().build_request(&load_fixture());
    let json = serde_json::to_value(&model).unwrap();

    for field in [
        "header",
        "detailsTable",
        "verdict",
        "defectSummaryBySeverity",
        "checklistSections",
        "defectDetailRows",
        "photoGroups",
    ] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(json["checklistSections"][0]["sectionStatus"], "ALL PASS");
    assert_eq!(json["checklistSections"][4]["name"]["kind"], "unknown");
    assert_eq!(json["defectDetailRows"][0]["badge"]["colorClass"], "badge-orange");
}

// =============================================================================
// Summary Rendering
// =============================================================================

#[test]
fn test_email_summary_from_fixture() {
    let model = ReportBuilder::default().build_request(&load_fixture());
    let renderer = TemplateRenderer::bundled().unwrap();
    let text = renderer.email_summary(&model).unwrap();

    assert!(text.contains("qcline | Final Random Inspection Report"));
    assert!(text.contains("Report QC-0318-07 for Acme Home Furnishings (18 Mar 2024)"));
    assert!(text.contains("Result: PASSED | GREEN RISK"));
    assert!(text.contains("- Visual Appearance: ISSUES NOTED"));
    assert!(text.contains("2. [MINOR] FN-11 Loose fringe knot x2"));
}

#[test]
fn test_banner_line_and_digest() {
    let model = ReportBuilder::default().build_request(&load_fixture());
    let renderer = TemplateRenderer::bundled().unwrap();

    let line = renderer.banner_line(&model).unwrap();
    assert_eq!(
        line,
        "insp-2024-0318-07: PASSED / green risk (1 major, 2 minor, 0 critical)"
    );

    let digest = renderer.section_digest(&model).unwrap();
    assert_eq!(digest, "Visual Appearance, Finishing");
}
