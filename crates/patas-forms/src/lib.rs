//! Patas Amigas Forms
//!
//! Pure formatting masks for the registration fields, presence/format
//! validation over the form model, and the feedback templates rendered on
//! submission and load failure.

mod mask;
mod template;
mod validate;

pub use mask::{mask_document_number, mask_phone, mask_postal_code, MaskKind};
pub use template::{load_error, success_feedback, VALIDATION_ALERT};
pub use validate::{is_valid_document_number, validate, ValidationReport};
