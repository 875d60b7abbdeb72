//! Known/Unknown classification buckets
//!
//! Checklist templates are owner-configurable, so a severity or status label
//! outside the closed set must still load. Such labels land in
//! [`Bucket::Unknown`] with the raw text preserved instead of failing the
//! whole inspection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A closed enumeration that can be parsed from, and written back to, a wire label
pub trait Enumerated: Sized + Copy {
    /// Parse a label, ignoring case and surrounding whitespace
    fn parse_label(raw: &str) -> Option<Self>;

    /// Canonical lowercase wire label
    fn as_str(&self) -> &'static str;
}

/// A label that either matched the closed enumeration or was kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bucket<T> {
    Known(T),
    Unknown(String),
}

impl<T: Enumerated> Bucket<T> {
    /// Classify a raw label
    pub fn classify(raw: &str) -> Self {
        match T::parse_label(raw) {
            Some(known) => Bucket::Known(known),
            None => Bucket::Unknown(raw.trim().to_string()),
        }
    }

    /// The label as it should be written back out
    pub fn label(&self) -> &str {
        match self {
            Bucket::Known(known) => known.as_str(),
            Bucket::Unknown(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Bucket::Known(known) => Some(*known),
            Bucket::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Bucket::Unknown(_))
    }
}

impl<T: Enumerated> From<T> for Bucket<T> {
    fn from(known: T) -> Self {
        Bucket::Known(known)
    }
}

impl<T: Enumerated> fmt::Display for Bucket<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: Enumerated> Serialize for Bucket<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de, T: Enumerated> Deserialize<'de> for Bucket<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Bucket::classify(&raw))
    }
}
