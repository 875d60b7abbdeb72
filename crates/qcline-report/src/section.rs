//! Checklist section classification.
//!
//! Section names come from owner-configured templates and are typed by hand,
//! so matching is done on a normalized key:
//! - Lowercase conversion
//! - `&` read as "and"
//! - Punctuation and repeated whitespace collapsed

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::ReportProfile;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Display name used when an item carries no section at all
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A section that matched the profile's template, or the raw label as typed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum SectionLabel {
    Known(String),
    Unknown(String),
}

impl SectionLabel {
    pub fn display_name(&self) -> &str {
        match self {
            SectionLabel::Known(name) => name,
            SectionLabel::Unknown(raw) if raw.is_empty() => UNCATEGORIZED,
            SectionLabel::Unknown(raw) => raw,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SectionLabel::Unknown(_))
    }
}

/// Normalize a label into its matching key
pub fn normalize_key(label: &str) -> String {
    let lowered = label.to_lowercase().replace('&', " and ");
    NON_ALNUM.replace_all(&lowered, " ").trim().to_string()
}

/// Classifies raw section labels against a profile's known sections
pub struct SectionClassifier {
    known: Vec<(String, String)>,
}

impl SectionClassifier {
    pub fn new(profile: &ReportProfile) -> Self {
        let known = profile
            .known_sections
            .iter()
            .map(|name| (normalize_key(name), name.clone()))
            .collect();
        Self { known }
    }

    pub fn classify(&self, raw: &str) -> SectionLabel {
        let key = normalize_key(raw);
        self.known
            .iter()
            .find(|(known_key, _)| !key.is_empty() && *known_key == key)
            .map(|(_, canonical)| SectionLabel::Known(canonical.clone()))
            .unwrap_or_else(|| SectionLabel::Unknown(raw.trim().to_string()))
    }
}
