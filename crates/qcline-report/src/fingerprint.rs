//! Content fingerprint for report inputs

use qcline_core::{ChecklistItemResult, DefectRecord, InspectionHeader, QcError};
use serde::Serialize;

#[derive(Serialize)]
struct FingerprintInput<'a> {
    inspection: &'a InspectionHeader,
    checklist_items: &'a [ChecklistItemResult],
    defects: &'a [DefectRecord],
}

/// `blake3:<hex>` digest over the canonical JSON of the inputs.
///
/// The display date is not part of the digest.
pub fn fingerprint(
    inspection: &InspectionHeader,
    checklist_items: &[ChecklistItemResult],
    defects: &[DefectRecord],
) -> Result<String, QcError> {
    let input = FingerprintInput {
        inspection,
        checklist_items,
        defects,
    };
    let bytes = serde_json::to_vec(&input).map_err(|e| QcError::SerializeError(e.to_string()))?;
    Ok(format!("blake3:{}", blake3::hash(&bytes)))
}
