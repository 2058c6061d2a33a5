//! Step Validator and boundary checks.
//!
//! [`validate_step`] answers whether a wizard page may be left; it never fails,
//! it reports. [`check_character`] is the strict counterpart used when a
//! whole character arrives from an untrusted source.

mod boundary;
mod rules;
mod step;

pub use boundary::check_character;
pub use rules::{StepValidation, first_incomplete_step, is_complete, validate, validate_step};
pub use step::WizardStep;
