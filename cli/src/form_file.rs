//! # Form Description Files
//!
//! A form is described in TOML, one `[[field]]` table per input and one
//! `[[control]]` table per button or hidden input:
//!
//! ```toml
//! [[field]]
//! name = "Gateway"
//! classes = "foswikiInputField foswikiIpAddress required"
//! value = "10.0.0.1"
//!
//! [[control]]
//! name = "action_save"
//! value = "Save"
//! ```
//!
//! `classes` may also be written as a list of strings.
//!
//! A control without `value` gets an empty value, so it never counts as the
//! armed action control. Write a non-empty `value` to arm it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use fieldguard_core::field::InputField;
use fieldguard_core::form::{Control, Form};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormFileError {
    #[error("failed to read form file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid form description: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("field '{0}' is defined more than once")]
    DuplicateField(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Classes {
    Attr(String),
    List(Vec<String>),
}

impl Default for Classes {
    fn default() -> Self {
        Classes::List(Vec::new())
    }
}

impl Classes {
    fn into_vec(self) -> Vec<String> {
        match self {
            Classes::Attr(attr) => attr.split_whitespace().map(str::to_string).collect(),
            Classes::List(list) => list,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    name: String,
    #[serde(default)]
    classes: Classes,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct ControlEntry {
    name: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default, rename = "field")]
    fields: Vec<FieldEntry>,
    #[serde(default, rename = "control")]
    controls: Vec<ControlEntry>,
}

pub fn parse(content: &str) -> Result<Form, FormFileError> {
    let file: FormFile = toml::from_str(content)?;

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut fields: Vec<InputField> = Vec::with_capacity(file.fields.len());
    for entry in file.fields {
        if !seen.insert(entry.name.clone()) {
            return Err(FormFileError::DuplicateField(entry.name));
        }
        fields.push(InputField::new(entry.name, entry.classes.into_vec(), entry.value));
    }

    let controls: Vec<Control> = file
        .controls
        .into_iter()
        .map(|entry| Control::new(entry.name, entry.value))
        .collect();

    Ok(Form::new(fields, controls))
}

pub fn load(path: &Path) -> Result<Form, FormFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
