pub mod check;
pub mod submit;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fieldguard_common::field::FieldKind;
use fieldguard_core::field::FieldRule;

#[derive(Parser)]
#[command(name = "fieldguard")]
#[command(about = "Validates and normalizes wiki form fields.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and summaries (-qq also hides per-field details)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a single value and print its canonical form
    #[command(alias = "c")]
    Check {
        kind: CheckKind,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Treat an empty value as an error
        #[arg(short, long)]
        required: bool,
    },
    /// Validate every field of a form description and decide whether it may be submitted
    #[command(alias = "s")]
    Submit {
        form: PathBuf,
        /// Submit with this action instead of the one the form names
        #[arg(short, long)]
        action: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Ip,
    Netmask,
    Mac,
    Phone,
}

impl From<CheckKind> for FieldRule {
    fn from(kind: CheckKind) -> Self {
        match kind {
            CheckKind::Ip => FieldRule::Address(FieldKind::IPv4Address),
            CheckKind::Netmask => FieldRule::Address(FieldKind::Netmask),
            CheckKind::Mac => FieldRule::Address(FieldKind::MacAddress),
            CheckKind::Phone => FieldRule::Phone,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
