//! Process configuration read from the environment
use qcline_report::{ReportProfile, TemplatesFile};
use std::path::Path;

use crate::error::ApiError;

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`QCLINE_ADDR`)
    pub addr: String,
    /// Built-in profile name or path to a profile YAML (`QCLINE_PROFILE`)
    pub profile: Option<String>,
    /// Path to a templates YAML replacing the bundled one (`QCLINE_TEMPLATES`)
    pub templates: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            profile: None,
            templates: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            addr: get("QCLINE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            profile: get("QCLINE_PROFILE"),
            templates: get("QCLINE_TEMPLATES"),
        }
    }

    /// Resolve the report profile.
    ///
    /// Values ending in `.yaml`/`.yml` are read from disk; anything else is a
    /// built-in profile name.
    pub fn load_profile(&self) -> Result<ReportProfile, ApiError> {
        match self.profile.as_deref() {
            None => Ok(ReportProfile::standard()),
            Some(value) if is_yaml_path(value) => Ok(ReportProfile::load(value)?),
            Some(name) => Ok(ReportProfile::for_name(name)),
        }
    }

    pub fn load_templates(&self) -> Result<TemplatesFile, ApiError> {
        let templates = match self.templates.as_deref() {
            Some(path) => TemplatesFile::load(path),
            None => TemplatesFile::bundled(),
        };
        templates.map_err(|e| ApiError::Startup(format!("templates: {}", e)))
    }
}

fn is_yaml_path(value: &str) -> bool {
    matches!(
        Path::new(value).extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
