//! Inspection report aggregation
//!
//! Projects an inspection's header, checklist results and defects into a
//! [`ReportModel`]. The projection is pure: the same inputs always produce
//! the same model, and labels outside the known enumerations are kept in
//! Unknown buckets instead of failing the report.

use qcline_aql::{inspect, select_plan, DefectCounts, InspectionVerdict, INSPECTION_LEVEL};
use qcline_core::{
    Bucket, ChecklistItemResult, DefectRecord, DefectSeverity, InspectionHeader, ItemStatus,
    QCLINE_VERSION,
};
use serde::Deserialize;

use crate::badge::Badge;
use crate::fingerprint::fingerprint;
use crate::model::{
    Banner, ChecklistRow, ChecklistSection, DefectRow, DetailRow, ReportHeader, ReportModel,
    RowStatus, SectionStatus, SeveritySummary,
};
use crate::photos::group_photos;
use crate::profile::ReportProfile;
use crate::section::{SectionClassifier, SectionLabel};
use crate::truncate::{truncate_label, truncate_opt};

/// Placeholder for empty detail values
const MISSING: &str = "-";

/// Everything needed to build one report
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub inspection: InspectionHeader,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItemResult>,
    #[serde(default)]
    pub defects: Vec<DefectRecord>,
    /// "Today" label shown in the header
    #[serde(default)]
    pub generated_on: Option<String>,
}

/// Builds report models under a given profile
pub struct ReportBuilder {
    profile: ReportProfile,
    classifier: SectionClassifier,
}

impl ReportBuilder {
    /// Create a new builder with the given profile
    pub fn new(profile: ReportProfile) -> Self {
        let classifier = SectionClassifier::new(&profile);
        Self { profile, classifier }
    }

    /// Create a builder for a named built-in profile
    pub fn for_profile(name: &str) -> Self {
        Self::new(ReportProfile::for_name(name))
    }

    pub fn profile(&self) -> &ReportProfile {
        &self.profile
    }

    pub fn build_request(&self, request: &ReportRequest) -> ReportModel {
        self.build(
            &request.inspection,
            &request.checklist_items,
            &request.defects,
            request.generated_on.as_deref(),
        )
    }

    /// Build the report model
    pub fn build(
        &self,
        inspection: &InspectionHeader,
        checklist_items: &[ChecklistItemResult],
        defects: &[DefectRecord],
        generated_on: Option<&str>,
    ) -> ReportModel {
        let mut unknown_buckets = Vec::new();

        // === Severity totals and verdict ===
        let counts = severity_counts(defects);
        let verdict = inspect(inspection.lot_size, counts);
        let defect_summary_by_severity = self.severity_summary(defects, &verdict, &mut unknown_buckets);

        // === Defect rows ===
        let defect_detail_rows = self.defect_rows(defects);

        // === Checklist sections ===
        let checklist_sections =
            self.checklist_sections(checklist_items, defects, &mut unknown_buckets);

        let photo_groups = group_photos(
            &self.profile,
            &self.classifier,
            inspection,
            checklist_items,
            defects,
        );

        let fingerprint = match fingerprint(inspection, checklist_items, defects) {
            Ok(digest) => Some(digest),
            Err(e) => {
                tracing::warn!(error = %e, "could not fingerprint report inputs");
                None
            }
        };

        for label in &unknown_buckets {
            tracing::warn!(
                inspection_id = %inspection.inspection_id,
                label = %label,
                "label outside known enumeration, reported in unknown bucket"
            );
        }

        tracing::debug!(
            inspection_id = %inspection.inspection_id,
            result = %verdict.result,
            risk = %verdict.risk_level,
            sections = checklist_sections.len(),
            defects = defect_detail_rows.len(),
            "built report model"
        );

        ReportModel {
            header: self.header(inspection, &verdict, generated_on),
            details_table: self.details_table(inspection),
            verdict,
            defect_summary_by_severity,
            checklist_sections,
            defect_detail_rows,
            photo_groups,
            unknown_buckets,
            fingerprint,
        }
    }

    fn header(
        &self,
        inspection: &InspectionHeader,
        verdict: &InspectionVerdict,
        generated_on: Option<&str>,
    ) -> ReportHeader {
        let budget = self.profile.budgets.header_value;
        let result_badge = Badge::for_result(verdict.result);

        ReportHeader {
            title: self.profile.report_title.clone(),
            brand_name: self.profile.brand_name.clone(),
            inspection_id: inspection.inspection_id.clone(),
            report_number: truncate_opt(inspection.report_number.as_deref(), budget),
            buyer: truncate_opt(inspection.buyer.as_deref(), budget),
            generated_on: generated_on.map(str::to_string),
            banner: Banner {
                text: result_badge.label,
                color_class: result_badge.color_class,
                detail: format!(
                    "{} major / {} minor found (limits {} / {}), sample {}",
                    verdict.major_found,
                    verdict.minor_found,
                    verdict.major_limit,
                    verdict.minor_limit,
                    verdict.sample_size
                ),
            },
            risk_badge: Badge::for_risk(verdict.risk_level),
            summary: truncate_opt(inspection.summary.as_deref(), self.profile.budgets.summary),
            engine_version: QCLINE_VERSION.to_string(),
        }
    }

    fn details_table(&self, inspection: &InspectionHeader) -> Vec<DetailRow> {
        let budget = self.profile.budgets.header_value;
        let text = |value: &Option<String>| {
            truncate_opt(value.as_deref(), budget).unwrap_or_else(|| MISSING.to_string())
        };
        let sample_size = inspection
            .sample_size
            .unwrap_or_else(|| select_plan(inspection.lot_size).sample_size);
        let date = inspection
            .inspection_date
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| MISSING.to_string());

        vec![
            DetailRow::new("Buyer", text(&inspection.buyer)),
            DetailRow::new("PO Number", text(&inspection.po_number)),
            DetailRow::new("Style", text(&inspection.style)),
            DetailRow::new("Color", text(&inspection.color)),
            DetailRow::new("Size", text(&inspection.size)),
            DetailRow::new("Factory", text(&inspection.factory)),
            DetailRow::new("Inspector", text(&inspection.inspector)),
            DetailRow::new("Inspection Type", text(&inspection.inspection_type)),
            DetailRow::new("Inspection Date", date),
            DetailRow::new("Lot Size", inspection.lot_size.to_string()),
            DetailRow::new("Sample Size", sample_size.to_string()),
            DetailRow::new("Inspection Level", INSPECTION_LEVEL),
        ]
    }

    fn severity_summary(
        &self,
        defects: &[DefectRecord],
        verdict: &InspectionVerdict,
        unknown_buckets: &mut Vec<String>,
    ) -> Vec<SeveritySummary> {
        let mut rows: Vec<SeveritySummary> = DefectSeverity::ALL
            .iter()
            .map(|&severity| {
                let (found, limit) = match severity {
                    DefectSeverity::Critical => (verdict.critical_found, 0),
                    DefectSeverity::Major => (verdict.major_found, verdict.major_limit),
                    DefectSeverity::Minor => (verdict.minor_found, verdict.minor_limit),
                };
                let status = if found <= limit {
                    RowStatus::Pass
                } else {
                    RowStatus::Fail
                };
                let bucket = Bucket::Known(severity);
                SeveritySummary {
                    badge: Badge::for_severity(&bucket),
                    severity: bucket,
                    found,
                    limit: Some(limit),
                    status,
                    status_badge: Badge::for_row_status(status),
                }
            })
            .collect();

        // Unknown severities, first-seen order
        let mut unknown: Vec<(String, u32)> = Vec::new();
        for defect in defects {
            if let Bucket::Unknown(raw) = &defect.severity {
                match unknown.iter_mut().find(|(label, _)| label == raw) {
                    Some((_, found)) => *found = found.saturating_add(defect.effective_quantity()),
                    None => unknown.push((raw.clone(), defect.effective_quantity())),
                }
            }
        }
        for (raw, found) in unknown {
            note_unknown(unknown_buckets, format!("severity:{}", raw));
            let bucket = Bucket::Unknown(raw);
            rows.push(SeveritySummary {
                badge: Badge::for_severity(&bucket).truncated(self.profile.budgets.badge_label),
                severity: bucket,
                found,
                limit: None,
                status: RowStatus::Review,
                status_badge: Badge::for_row_status(RowStatus::Review),
            });
        }

        rows
    }

    fn defect_rows(&self, defects: &[DefectRecord]) -> Vec<DefectRow> {
        let budgets = &self.profile.budgets;
        defects
            .iter()
            .enumerate()
            .map(|(index, defect)| DefectRow {
                number: index + 1,
                badge: Badge::for_severity(&defect.severity).truncated(budgets.badge_label),
                severity: defect.severity.clone(),
                code: truncate_label(&defect.code, budgets.defect_code),
                description: truncate_label(&defect.description, budgets.defect_description),
                quantity: defect.effective_quantity(),
                location: truncate_opt(defect.location.as_deref(), budgets.location),
            })
            .collect()
    }

    fn checklist_sections(
        &self,
        checklist_items: &[ChecklistItemResult],
        defects: &[DefectRecord],
        unknown_buckets: &mut Vec<String>,
    ) -> Vec<ChecklistSection> {
        let budgets = &self.profile.budgets;
        let mut grouped: Vec<(SectionLabel, Vec<&ChecklistItemResult>)> = Vec::new();

        for item in checklist_items {
            let label = self.classifier.classify(&item.section);
            match grouped.iter_mut().find(|(existing, _)| *existing == label) {
                Some((_, items)) => items.push(item),
                None => grouped.push((label, vec![item])),
            }
        }

        grouped
            .into_iter()
            .map(|(label, items)| {
                if label.is_unknown() {
                    note_unknown(unknown_buckets, format!("section:{}", label.display_name()));
                }

                let rows: Vec<ChecklistRow> = items
                    .iter()
                    .map(|item| {
                        if let Bucket::Unknown(raw) = &item.status {
                            note_unknown(unknown_buckets, format!("status:{}", raw));
                        }
                        ChecklistRow {
                            name: truncate_label(&item.name, budgets.item_name),
                            status: item.status.clone(),
                            badge: Badge::for_item_status(&item.status)
                                .truncated(budgets.badge_label),
                            note: truncate_opt(item.note.as_deref(), budgets.note),
                            linked_defect_rows: linked_rows(&item.linked_defects, defects),
                        }
                    })
                    .collect();

                let section_status = section_status(items.iter().map(|item| &item.status));
                ChecklistSection {
                    display_name: truncate_label(label.display_name(), budgets.section_name),
                    name: label,
                    items: rows,
                    status_badge: section_status.badge(),
                    section_status,
                }
            })
            .collect()
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(ReportProfile::default())
    }
}

/// Sum `quantity_affected` per known severity
pub fn severity_counts(defects: &[DefectRecord]) -> DefectCounts {
    defects
        .iter()
        .fold(DefectCounts::default(), |mut counts, defect| {
            let quantity = defect.effective_quantity();
            match defect.severity.known() {
                Some(DefectSeverity::Critical) => {
                    counts.critical = counts.critical.saturating_add(quantity)
                }
                Some(DefectSeverity::Major) => counts.major = counts.major.saturating_add(quantity),
                Some(DefectSeverity::Minor) => counts.minor = counts.minor.saturating_add(quantity),
                None => {}
            }
            counts
        })
}

/// Section status by priority: major (or critical) issue, then minor, then all pass.
///
/// An unrecognized item status cannot be claimed as a pass, so it counts as
/// a minor issue.
pub fn section_status<'a, I>(statuses: I) -> SectionStatus
where
    I: IntoIterator<Item = &'a Bucket<ItemStatus>>,
{
    statuses
        .into_iter()
        .map(|status| match status {
            Bucket::Known(ItemStatus::Pass) => SectionStatus::AllPass,
            Bucket::Known(ItemStatus::Minor) | Bucket::Unknown(_) => SectionStatus::MinorIssue,
            Bucket::Known(ItemStatus::Major) | Bucket::Known(ItemStatus::Critical) => {
                SectionStatus::IssuesNoted
            }
        })
        .max()
        .unwrap_or(SectionStatus::AllPass)
}

fn linked_rows(codes: &[String], defects: &[DefectRecord]) -> Vec<usize> {
    defects
        .iter()
        .enumerate()
        .filter(|(_, defect)| codes.iter().any(|code| *code == defect.code))
        .map(|(index, _)| index + 1)
        .collect()
}

fn note_unknown(unknown_buckets: &mut Vec<String>, label: String) {
    if !unknown_buckets.contains(&label) {
        unknown_buckets.push(label);
    }
}

/// Build a report model with the standard profile and no display date
pub fn build_report_model(
    inspection: &InspectionHeader,
    checklist_items: &[ChecklistItemResult],
    defects: &[DefectRecord],
) -> ReportModel {
    ReportBuilder::default().build(inspection, checklist_items, defects, None)
}
