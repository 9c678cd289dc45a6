//! # Input Fields
//!
//! An [`InputField`] is a text input described by its class list, the way
//! the wiki renders form fields. Marker classes select the rule that
//! applies; everything class-related stays in this module so the rules in
//! `fieldguard-common` only ever see typed values.

use std::collections::BTreeSet;

use fieldguard_common::field::{self, FieldKind, FieldSpec, ValidationOutcome};
use fieldguard_common::phone::{self, PHONE_NUMBER_CLASS};

pub const REQUIRED_CLASS: &str = "required";

/// The validation rule bound to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Address(FieldKind),
    Phone,
}

impl FieldRule {
    /// Picks the rule for a set of classes.
    ///
    /// When several markers are present the netmask wins, then the IP
    /// address, then the MAC address, then the phone number.
    pub fn from_classes<'a, I>(classes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: BTreeSet<&str> = classes.into_iter().collect();

        let address_kinds = [FieldKind::Netmask, FieldKind::IPv4Address, FieldKind::MacAddress];

        address_kinds
            .into_iter()
            .map(|kind| (kind.marker_class(), FieldRule::Address(kind)))
            .chain(std::iter::once((PHONE_NUMBER_CLASS, FieldRule::Phone)))
            .find(|(class, _)| classes.contains(*class))
            .map(|(_, rule)| rule)
    }

    pub fn apply(&self, required: bool, value: &str) -> ValidationOutcome {
        match self {
            FieldRule::Address(kind) => field::validate(&FieldSpec::new(*kind, required, value)),
            FieldRule::Phone => phone::validate_phone(value, required),
        }
    }
}

/// A single text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub classes: BTreeSet<String>,
    pub value: String,
}

impl InputField {
    pub fn new<I, S>(name: impl Into<String>, classes: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }

    /// Splits a `class` attribute on whitespace.
    pub fn from_class_attr(
        name: impl Into<String>,
        class_attr: &str,
        value: impl Into<String>,
    ) -> Self {
        Self::new(name, class_attr.split_whitespace(), value)
    }

    pub fn rule(&self) -> Option<FieldRule> {
        FieldRule::from_classes(self.classes.iter().map(String::as_str))
    }

    pub fn is_required(&self) -> bool {
        self.classes.contains(REQUIRED_CLASS)
    }

    /// Builds the typed spec for address fields; `None` for anything else.
    pub fn spec(&self) -> Option<FieldSpec> {
        match self.rule()? {
            FieldRule::Address(kind) => Some(FieldSpec::new(kind, self.is_required(), &self.value)),
            FieldRule::Phone => None,
        }
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
