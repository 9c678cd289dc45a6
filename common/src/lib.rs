//! # Fieldguard Common
//!
//! Pure models and validation rules shared by the binding layer and the CLI.
//!
//! * **[`field`]**: address fields (IPv4 address, netmask, MAC address).
//! * **[`phone`]**: international phone number fields.
//! * **[`config`]**: runtime configuration.

pub mod config;
pub mod field;
pub mod phone;
