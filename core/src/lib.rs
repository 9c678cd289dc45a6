//! # Fieldguard Core
//!
//! Binds the rules from `fieldguard-common` to form fields.
//!
//! * **[`field`]**: input fields and the rule their marker classes select.
//! * **[`labels`]**: the error label currently shown next to each field.
//! * **[`binding`]**: what happens when a field loses focus.
//! * **[`form`]**: forms, their controls and the pending action.
//! * **[`gate`]**: revalidation on submit and the decision to block it.
//! * **[`alert`]**: the port used to tell the user a submission was blocked.

pub mod alert;
pub mod binding;
pub mod field;
pub mod form;
pub mod gate;
pub mod labels;
