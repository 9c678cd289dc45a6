//! # Error Labels
//!
//! Tracks the inline error label shown next to each field. Labels are keyed
//! by field name, so validating one field never removes the label of
//! another.

use std::collections::BTreeMap;

use tracing::trace;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorLabels {
    shown: BTreeMap<String, String>,
}

impl ErrorLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` next to `field`, replacing that field's previous label.
    ///
    /// Returns the replaced message, if any.
    pub fn show(&mut self, field: &str, message: impl Into<String>) -> Option<String> {
        let message = message.into();
        trace!(field, %message, "showing error label");
        self.shown.insert(field.to_string(), message)
    }

    /// Removes the label of `field`, returning its message.
    pub fn clear(&mut self, field: &str) -> Option<String> {
        self.shown.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.shown.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    /// Labels ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shown.iter().map(|(k, v)| (k.as_str(), v.as_str()))
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
