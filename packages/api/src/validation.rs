//! # Remark editor form validation
//!
//! The edit form posts `title` and `content`. Both are required and bounded in
//! characters ([`TITLE_MAX_LENGTH`], [`CONTENT_MAX_LENGTH`]). Validation runs
//! through `garde`; a failed [`garde::Report`] is flattened into [`FormErrors`],
//! which keeps field-scoped messages apart from form-scoped ones so the form can
//! show each next to the right element.

use std::collections::BTreeMap;

use garde::Validate;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LENGTH: usize = 80;
pub const CONTENT_MAX_LENGTH: usize = 10_000;

/// Submitted editor fields. Missing fields deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RemarkEditorForm {
    #[serde(default)]
    #[garde(length(chars, min = 1, max = 80))]
    pub title: String,
    #[serde(default)]
    #[garde(length(chars, min = 1, max = 10000))]
    pub content: String,
}

impl RemarkEditorForm {
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|report| FormErrors::from_report(&report))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    /// Errors not tied to a single field.
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn from_report(report: &garde::Report) -> Self {
        let mut errors = Self::default();
        for (path, error) in report.iter() {
            let field = path.to_string();
            let message = error.message().to_string();
            if field.is_empty() {
                errors.form_errors.push(message);
            } else {
                errors.field_errors.entry(field).or_default().push(message);
            }
        }
        errors
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.field_errors.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.values().all(Vec::is_empty)
    }
}
