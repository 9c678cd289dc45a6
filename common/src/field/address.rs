//! # Address Field Validator
//!
//! Checks parsed segments against the bounds table of their [`FieldKind`]
//! and rewrites accepted values into canonical, zero-padded form
//! (`5.5.5.5` becomes `005.005.005.005`, `a:b:c:d:e:f` becomes
//! `0A:0B:0C:0D:0E:0F`).

use thiserror::Error;
use tracing::debug;

use crate::field::kind::FieldKind;
use crate::field::segments::{self, ParseError};
use crate::field::{FieldSpec, ValidationOutcome};

/// Detailed reason a value was rejected.
///
/// Callers facing the user only ever see [`FieldKind::error_message`]; this
/// type exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("a value is required")]
    Required,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("segment {position} is {value}, above the maximum of {max}")]
    TooHigh { position: usize, value: u32, max: u32 },
    #[error("segment {position} is {value}, below the minimum of {min}")]
    TooLow { position: usize, value: u32, min: u32 },
}

/// Validates `spec`, collapsing every failure into the kind's user message.
pub fn validate(spec: &FieldSpec) -> ValidationOutcome {
    match diagnose(spec) {
        Ok(value) => ValidationOutcome::Valid(value),
        Err(err) => {
            debug!(kind = %spec.kind, raw = %spec.raw_value, "rejected: {err}");
            ValidationOutcome::Invalid(spec.kind.error_message().to_string())
        }
    }
}

/// Validates `spec` and returns the canonical value or the first violation.
///
/// An empty value on an optional field is returned untouched.
pub fn diagnose(spec: &FieldSpec) -> Result<String, AddressError> {
    if spec.raw_value.is_empty() {
        if spec.required {
            return Err(AddressError::Required);
        }
        debug!(kind = %spec.kind, "empty value, not required, skipping");
        return Ok(spec.raw_value.clone());
    }

    let parsed = segments::parse_segments(spec.kind, &spec.raw_value)?;
    check_bounds(spec.kind, &parsed)?;

    Ok(canonicalize(spec.kind, &parsed))
}

/// Checks each segment left to right; the first offender wins.
pub fn check_bounds(kind: FieldKind, parsed: &[u32]) -> Result<(), AddressError> {
    for (idx, &value) in parsed.iter().enumerate() {
        let position = idx + 1;
        let bounds = kind.bounds(position);
        if value > bounds.max {
            return Err(AddressError::TooHigh { position, value, max: bounds.max });
        }
        if value < bounds.min {
            return Err(AddressError::TooLow { position, value, min: bounds.min });
        }
    }
    Ok(())
}

/// Joins already validated segments into the canonical string for `kind`.
pub fn canonicalize(kind: FieldKind, parsed: &[u32]) -> String {
    let separator = kind.separator().to_string();
    parsed
        .iter()
        .map(|&value| {
            let digits = match kind.radix() {
                16 => format!("{value:X}"),
                _ => value.to_string(),
            };
            pad_segment(&digits, kind.width())
        })
        .collect::<Vec<String>>()
        .join(&separator)
}

/// Left-pads `text` with `'0'` to `width`.
///
/// Text already at or beyond `width` keeps only its last `width` characters.
pub fn pad_segment(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{}{}", "0".repeat(width - len), text)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(raw: &str) -> FieldSpec {
        FieldSpec::new(FieldKind::IPv4Address, true, raw)
    }

    fn netmask(raw: &str) -> FieldSpec {
        FieldSpec::new(FieldKind::Netmask, true, raw)
    }

    fn mac(raw: &str) -> FieldSpec {
        FieldSpec::new(FieldKind::MacAddress, true, raw)
    }

    fn valid(value: &str) -> ValidationOutcome {
        ValidationOutcome::Valid(value.to_string())
    }

    #[test]
    fn test_ipv4_canonical_padding() {
        assert_eq!(validate(&ip("5.5.5.5")), valid("005.005.005.005"));
        assert_eq!(validate(&ip("192.168.0.1")), valid("192.168.000.001"));
    }

    #[test]
    fn test_ipv4_first_and_last_segment_must_be_positive() {
        assert_eq!(
            diagnose(&ip("0.1.2.3")),
            Err(AddressError::TooLow { position: 1, value: 0, min: 1 })
        );
        assert_eq!(
            diagnose(&ip("1.2.3.0")),
            Err(AddressError::TooLow { position: 4, value: 0, min: 1 })
        );
        assert_eq!(validate(&ip("1.0.0.1")), valid("001.000.000.001"));
    }

    #[test]
    fn test_ipv4_upper_bound_is_254() {
        assert_eq!(validate(&ip("10.0.0.254")), valid("010.000.000.254"));
        assert_eq!(
            diagnose(&ip("10.0.255.1")),
            Err(AddressError::TooHigh { position: 3, value: 255, max: 254 })
        );
        assert!(validate(&ip("300.1.1.1")).is_invalid());
    }

    #[test]
    fn test_netmask_accepts_zero_and_255() {
        assert_eq!(validate(&netmask("1.2.3.0")), valid("001.002.003.000"));
        assert_eq!(validate(&netmask("255.255.255.0")), valid("255.255.255.000"));
        assert_eq!(validate(&netmask("0.0.0.0")), valid("000.000.000.000"));
    }

    #[test]
    fn test_netmask_rejects_above_255() {
        assert_eq!(
            diagnose(&netmask("300.1.1.1")),
            Err(AddressError::TooHigh { position: 1, value: 300, max: 255 })
        );
        assert_eq!(
            validate(&netmask("255.256.0.0")),
            ValidationOutcome::Invalid("Please provide a valid netmask".to_string())
        );
    }

    #[test]
    fn test_mac_canonical_uppercase_colons() {
        assert_eq!(validate(&mac("a:b:c:d:e:f")), valid("0A:0B:0C:0D:0E:0F"));
        assert_eq!(validate(&mac("00-1a-2B-3c-4D-ff")), valid("00:1A:2B:3C:4D:FF"));
        assert_eq!(validate(&mac("1.2.3.4.5.6")), valid("01:02:03:04:05:06"));
    }

    #[test]
    fn test_mac_leading_zeros_collapse() {
        assert_eq!(validate(&mac("000a:b:c:d:e:f")), valid("0A:0B:0C:0D:0E:0F"));
    }

    #[test]
    fn test_mac_segment_above_ff_is_rejected() {
        assert_eq!(
            diagnose(&mac("aa:bb:cc:dd:ee:100")),
            Err(AddressError::TooHigh { position: 6, value: 0x100, max: 255 })
        );
    }

    #[test]
    fn test_empty_optional_value_is_left_alone() {
        for kind in FieldKind::ALL {
            let spec = FieldSpec::new(kind, false, "");
            assert_eq!(validate(&spec), valid(""));
        }
    }

    #[test]
    fn test_empty_required_value_is_invalid() {
        assert_eq!(diagnose(&ip("")), Err(AddressError::Required));
        assert_eq!(
            validate(&mac("")),
            ValidationOutcome::Invalid("Please provide a valid mac address".to_string())
        );
    }

    #[test]
    fn test_malformed_is_invalid_regardless_of_required() {
        for required in [true, false] {
            let spec = FieldSpec::new(FieldKind::IPv4Address, required, "1.2.3");
            assert_eq!(
                validate(&spec),
                ValidationOutcome::Invalid("Please provide a valid IP address".to_string())
            );
        }
    }

    #[test]
    fn test_canonical_value_is_a_fixed_point() {
        for raw in ["1.0.0.1", "254.254.254.254", "7.80.9.100", "1.254.0.12"] {
            let first = validate(&ip(raw));
            let ValidationOutcome::Valid(canonical) = first else {
                panic!("{raw} should be valid");
            };
            assert_eq!(validate(&ip(&canonical)), valid(&canonical));
        }
    }

    #[test]
    fn test_ipv4_sweep_within_bounds() {
        for a in (1..=254).step_by(23) {
            for b in (0..=254).step_by(31) {
                let raw = format!("{a}.{b}.{b}.{a}");
                let ValidationOutcome::Valid(canonical) = validate(&ip(&raw)) else {
                    panic!("{raw} should be valid");
                };
                assert_eq!(canonical, format!("{a:03}.{b:03}.{b:03}.{a:03}"));
            }
        }
    }

    #[test]
    fn test_pad_segment_policy() {
        assert_eq!(pad_segment("5", 3), "005");
        assert_eq!(pad_segment("A", 2), "0A");
        assert_eq!(pad_segment("", 3), "000");
        assert_eq!(pad_segment("123", 3), "123");
        assert_eq!(pad_segment("1FF", 2), "FF");
        assert_eq!(pad_segment("1234", 3), "234");
    }
}
