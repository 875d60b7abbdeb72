//! Photo grouping and grid layout

use qcline_core::{ChecklistItemResult, DefectRecord, InspectionHeader, PhotoRef};

use crate::model::{PhotoCell, PhotoGroup};
use crate::profile::ReportProfile;
use crate::section::SectionClassifier;
use crate::truncate::{truncate_label, truncate_opt};

/// Group name for header photos without a section
pub const GENERAL_GROUP: &str = "General";
/// Group name for photos attached to defect records
pub const DEFECTS_GROUP: &str = "Defects";

/// Collect photos into named groups in first-seen order and lay each group
/// out in rows of `photos_per_row`.
///
/// Sources are visited header first, then checklist items, then defects.
pub fn group_photos(
    profile: &ReportProfile,
    classifier: &SectionClassifier,
    inspection: &InspectionHeader,
    checklist_items: &[ChecklistItemResult],
    defects: &[DefectRecord],
) -> Vec<PhotoGroup> {
    let mut groups: Vec<(String, Vec<&PhotoRef>)> = Vec::new();

    for photo in &inspection.photos {
        let name = match &photo.section {
            Some(section) => classifier.classify(section).display_name().to_string(),
            None => GENERAL_GROUP.to_string(),
        };
        push_photo(&mut groups, name, photo);
    }

    for item in checklist_items {
        let name = classifier.classify(&item.section).display_name().to_string();
        for photo in &item.photos {
            push_photo(&mut groups, name.clone(), photo);
        }
    }

    for defect in defects {
        for photo in &defect.photos {
            push_photo(&mut groups, DEFECTS_GROUP.to_string(), photo);
        }
    }

    let per_row = profile.photos_per_row.max(1);
    groups
        .into_iter()
        .map(|(name, photos)| {
            let kept = photos.len().min(profile.max_photos_per_group);
            let cells: Vec<PhotoCell> = photos
                .iter()
                .take(kept)
                .map(|photo| PhotoCell {
                    url: photo.url.clone(),
                    caption: truncate_opt(photo.caption.as_deref(), profile.budgets.photo_caption),
                })
                .collect();
            PhotoGroup {
                name: truncate_label(&name, profile.budgets.section_name),
                rows: cells.chunks(per_row).map(|row| row.to_vec()).collect(),
                omitted: photos.len() - kept,
            }
        })
        .collect()
}

fn push_photo<'a>(groups: &mut Vec<(String, Vec<&'a PhotoRef>)>, name: String, photo: &'a PhotoRef) {
    match groups.iter_mut().find(|(existing, _)| *existing == name) {
        Some((_, photos)) => photos.push(photo),
        None => groups.push((name, vec![photo])),
    }
}
