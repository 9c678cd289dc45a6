//! # Field Binding
//!
//! Runs a field's rule and applies the result to the field and its label:
//! a valid value replaces the displayed one, an invalid value gets an error
//! label next to the field.

use fieldguard_common::field::ValidationOutcome;
use tracing::debug;

use crate::field::InputField;
use crate::labels::ErrorLabels;

/// Validates `field` as if it just lost focus.
///
/// Returns `None` for fields that carry no marker class.
pub fn blur(field: &mut InputField, labels: &mut ErrorLabels) -> Option<ValidationOutcome> {
    let rule = field.rule()?;
    let outcome = rule.apply(field.is_required(), &field.value);

    match &outcome {
        ValidationOutcome::Valid(value) => {
            if *value != field.value {
                debug!(field = %field.name, from = %field.value, to = %value, "rewriting value");
                field.value = value.clone();
            }
            labels.clear(&field.name);
        }
        ValidationOutcome::Invalid(message) => {
            labels.show(&field.name, message.as_str());
        }
    }

    Some(outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
