//! # Address Fields
//!
//! Validation and canonicalization of IPv4 address, netmask and MAC
//! address fields.
//!
//! A validation pass is stateless: the raw value is parsed into segments
//! ([`segments`]), each segment is checked against the bounds of its
//! [`FieldKind`] ([`kind`]), and the result is rejoined into a canonical
//! string ([`address`]).

pub mod address;
pub mod kind;
pub mod segments;

pub use address::{AddressError, diagnose, validate};
pub use kind::{FieldKind, SegmentBounds};
pub use segments::{ParseError, parse_segments};

/// Immutable input of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
    pub raw_value: String,
}

impl FieldSpec {
    pub fn new(kind: FieldKind, required: bool, raw_value: impl Into<String>) -> Self {
        Self {
            kind,
            required,
            raw_value: raw_value.into(),
        }
    }
}

/// Result of validating a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value to display in the field, possibly rewritten.
    Valid(String),
    /// A message meant for the user.
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}
