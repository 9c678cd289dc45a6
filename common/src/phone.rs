//! # Phone Number Rule
//!
//! Accepts international phone numbers with an optional country code,
//! trunk digit, area code and extension, e.g. `+49 (0)89 123456 ext 12`.
//! Whitespace is ignored entirely and the value is never rewritten.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::field::ValidationOutcome;

pub const PHONE_NUMBER_CLASS: &str = "foswikiPhoneNumber";

pub const PHONE_ERROR_MESSAGE: &str =
    "Please enter a valid phone number (Intl format accepted + ext: or x:)";

pub const REQUIRED_MESSAGE: &str = "This field is required.";

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(",
        r"((\+)?[1-9]{1,2})?",              // country code
        r"([-\s.])?",
        r"(\([0-9]\)[-\s.]?)?",             // trunk digit
        r"((\([0-9]{1,4}\))|[0-9]{1,4})",   // area code
        r"(([-\s.])?[0-9]{1,12}){1,2}",     // subscriber
        r"(\s*(ext|x)\s*\.?:?\s*([0-9]+))?", // extension
        r")?$",
    ))
    .expect("phone pattern is valid")
});

/// Returns true when `value`, stripped of whitespace, looks like a phone number.
pub fn is_phone_number(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Validates a phone number field. Accepted values are returned unchanged.
pub fn validate_phone(value: &str, required: bool) -> ValidationOutcome {
    if value.trim().is_empty() {
        if required {
            return ValidationOutcome::Invalid(REQUIRED_MESSAGE.to_string());
        }
        debug!("empty phone number, not required, skipping");
        return ValidationOutcome::Valid(value.to_string());
    }

    if is_phone_number(value) {
        ValidationOutcome::Valid(value.to_string())
    } else {
        debug!(value, "phone number doesn't match");
        ValidationOutcome::Invalid(PHONE_ERROR_MESSAGE.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
