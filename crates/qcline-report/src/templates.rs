//! Template loading for report summaries.
//!
//! Supports the report-templates.yaml format with:
//! - Multiple named templates
//! - Handlebars syntax
//! - Optional example data and expected output per template

use serde::Deserialize;
use std::collections::BTreeMap;

/// Templates bundled with the crate
pub const BUNDLED_TEMPLATES: &str = include_str!("../templates/report-templates.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: BTreeMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<String>,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file: {}", e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str::<TemplatesFile>(yaml)
            .map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    /// The templates shipped with the crate
    pub fn bundled() -> Result<Self, String> {
        Self::from_yaml(BUNDLED_TEMPLATES)
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_templates_parse() {
        let file = TemplatesFile::bundled().unwrap();
        assert_eq!(file.version, "1.0");
        assert!(file.get("email_summary").is_some());
        assert!(file.get("banner_line").is_some());
    }

    #[test]
    fn test_custom_file() {
        let yaml = r#"
version: "1.0"
templates:
  short:
    description: Short status
    template: "{{header.banner.text}}"
    output: "PASSED"
"#;
        let file = TemplatesFile::from_yaml(yaml).unwrap();
        assert_eq!(file.list_templates(), vec!["short"]);
        assert_eq!(file.get("short").unwrap().output.as_deref(), Some("PASSED"));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(TemplatesFile::from_yaml("templates: [").is_err());
    }
}
