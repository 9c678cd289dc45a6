//! # Forms
//!
//! A form is a list of input fields plus the controls (buttons and hidden
//! inputs) that carry the submit action, e.g. `action_save=Save`.

use crate::field::InputField;

const ACTION_PREFIX: &str = "action_";
const MAX_ACTION_LEN: usize = 10;

/// A named control and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub value: String,
}

impl Control {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The action this control triggers, if it is an armed action control.
    ///
    /// Any name containing `action_` qualifies, but the action is always
    /// read from a fixed offset: `edit_action_save` yields `ion_save`.
    pub fn action(&self) -> Option<String> {
        if self.value.is_empty() || !self.name.contains(ACTION_PREFIX) {
            return None;
        }
        Some(
            self.name
                .chars()
                .skip(ACTION_PREFIX.len())
                .take(MAX_ACTION_LEN)
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<InputField>,
    pub controls: Vec<Control>,
}

impl Form {
    pub fn new(fields: Vec<InputField>, controls: Vec<Control>) -> Self {
        Self { fields, controls }
    }

    /// The action named by the first armed action control, if any.
    pub fn pending_action(&self) -> Option<String> {
        self.controls.iter().find_map(Control::action)
    }

    /// Like [`Form::pending_action`], falling back to `default`.
    pub fn pending_action_or(&self, default: &str) -> String {
        self.pending_action().unwrap_or_else(|| default.to_string())
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut InputField> {
        self.fields.iter_mut().find(|f| f.name == name)
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
