//! Submission validation
//!
//! Presence checks over required fields plus a format check on the document
//! number. The document number is validated only when non-empty; presence for
//! required fields is already covered by the empty check.

use patas_dom::Form;

const NAME_FIELD_ID: &str = "name";
const DOCUMENT_FIELD_ID: &str = "document-number";

/// Masked document number is exactly `000.000.000-00`, 14 characters.
pub fn is_valid_document_number(masked: &str) -> bool {
    masked.chars().count() == 14
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid: bool,
    /// Field ids of the groups marked errored
    pub errored_ids: Vec<String>,
    /// Trimmed value of the name field, for the feedback template
    pub submitted_name: String,
}

/// Validate the form in place: clear old error marks, then mark every
/// offending group. Returns what the submission handler needs to act.
pub fn validate(form: &mut Form) -> ValidationReport {
    form.clear_errors();

    let mut submitted_name = String::new();

    for group in form.groups_mut() {
        let Some(field) = group.field.as_ref() else {
            continue;
        };

        if field.required && field.value.trim().is_empty() {
            group.errored = true;
        }

        if field.id == NAME_FIELD_ID {
            submitted_name = field.value.trim().to_string();
        }

        if field.id == DOCUMENT_FIELD_ID
            && !field.value.is_empty()
            && !is_valid_document_number(&field.value)
        {
            group.errored = true;
        }
    }

    let errored_ids = form.errored_field_ids();
    let valid = errored_ids.is_empty();

    ValidationReport {
        valid,
        errored_ids,
        submitted_name,
    }
}
