//! Summary rendering for report models.
//!
//! Uses Handlebars for template rendering with custom helpers:
//! - truncate: Char-safe truncation with a marker
//! - upper: Uppercase a label
//! - join: Join array with separator
//! - default: Fallback for null values
//! - eq: Equality check for `#if` blocks
//!
//! Output is plain text, so HTML escaping is disabled.

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{json, Value};

use crate::model::{ReportModel, SectionStatus};
use crate::templates::TemplatesFile;
use crate::truncate::truncate_label;
use crate::RenderError;

/// Template used for the stakeholder email body
pub const EMAIL_SUMMARY: &str = "email_summary";
/// Template used for dashboard notifications
pub const BANNER_LINE: &str = "banner_line";
/// Template listing sections that need attention
pub const SECTION_DIGEST: &str = "section_digest";

handlebars_helper!(upper_helper: |text: str| text.to_uppercase());

handlebars_helper!(truncate_helper: |text: str, max: u64| truncate_label(text, max as usize));

handlebars_helper!(join_helper: |items: Json, separator: str| {
    items
        .as_array()
        .map(|arr| {
            arr.iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(separator)
        })
        .unwrap_or_default()
});

handlebars_helper!(eq_helper: |left: Json, right: Json| left == right);

handlebars_helper!(default_helper: |value: Json, fallback: str| {
    match value {
        Value::Null => fallback.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
});

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("upper", Box::new(upper_helper));
        handlebars.register_helper("truncate", Box::new(truncate_helper));
        handlebars.register_helper("join", Box::new(join_helper));
        handlebars.register_helper("default", Box::new(default_helper));
        handlebars.register_helper("eq", Box::new(eq_helper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(TemplateRenderer {
            handlebars,
            templates,
        })
    }

    /// Renderer over the bundled templates
    pub fn bundled() -> Result<Self, RenderError> {
        Self::new(TemplatesFile::bundled().map_err(RenderError::Template)?)
    }

    /// Load from a file path
    pub fn load(path: &str) -> Result<Self, RenderError> {
        Self::new(TemplatesFile::load(path).map_err(RenderError::Template)?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        if !self.handlebars.has_template(template_name) {
            return Err(RenderError::UnknownTemplate(template_name.to_string()));
        }
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    /// Render a named template against a report model
    pub fn render_report(
        &self,
        template_name: &str,
        model: &ReportModel,
    ) -> Result<String, RenderError> {
        let data = serde_json::to_value(model).map_err(|e| RenderError::Render(e.to_string()))?;
        self.render(template_name, &data)
    }

    /// Plain-text email body for a report
    pub fn email_summary(&self, model: &ReportModel) -> Result<String, RenderError> {
        self.render_report(EMAIL_SUMMARY, model)
    }

    /// One-line dashboard status
    pub fn banner_line(&self, model: &ReportModel) -> Result<String, RenderError> {
        self.render_report(BANNER_LINE, model)
    }

    /// Sections whose status is not ALL PASS, in report order
    pub fn section_digest(&self, model: &ReportModel) -> Result<String, RenderError> {
        let attention: Vec<&str> = model
            .checklist_sections
            .iter()
            .filter(|s| s.section_status != SectionStatus::AllPass)
            .map(|s| s.display_name.as_str())
            .collect();
        self.render(SECTION_DIGEST, &json!({ "attention": attention }))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}
