//! qcline core: inspection data model, classification buckets and errors
//!
//! Everything an inspector records on the shop floor lands in these types.
//! The evaluator (`qcline-aql`) and the aggregator (`qcline-report`) only
//! borrow them and hand back fresh derived structures.

pub mod bucket;
pub mod data_model;
pub mod error;

pub use bucket::{Bucket, Enumerated};
pub use data_model::{
    ChecklistItemResult, DefectRecord, DefectSeverity, InspectionHeader, ItemStatus, PhotoRef,
};
pub use error::QcError;

/// Engine version stamped into rendered reports
pub const QCLINE_VERSION: &str = "1.0.0";
