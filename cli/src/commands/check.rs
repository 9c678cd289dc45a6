use colored::*;
use fieldguard_common::config::Config;
use fieldguard_common::field::ValidationOutcome;
use fieldguard_core::field::FieldRule;
use tracing::info;

use crate::terminal::{colors, print};

/// Validates `value` and returns the value the field would display.
pub fn check(rule: FieldRule, value: &str, required: bool, cfg: &Config) -> anyhow::Result<String> {
    print::header("checking value", cfg.quiet);
    info!(?rule, required, "validating {value:?}");

    match rule.apply(required, value) {
        ValidationOutcome::Valid(canonical) => {
            if cfg.quiet > 1 {
                print::print(&canonical);
            } else {
                let key_width: usize = "Canonical".len();
                print::aligned_line("Input", key_width, value.color(colors::TEXT_DEFAULT));
                print::aligned_line("Canonical", key_width, canonical.color(colors::VALID));
            }
            Ok(canonical)
        }
        ValidationOutcome::Invalid(message) => anyhow::bail!(message),
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
