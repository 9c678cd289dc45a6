use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::*;
use fieldguard_common::config::Config;
use fieldguard_core::alert::{Alerter, RecordingAlerter};
use fieldguard_core::form::{Control, Form};
use fieldguard_core::gate::{SubmissionGate, SubmitOutcome};
use fieldguard_core::labels::ErrorLabels;
use tracing::warn;

use crate::form_file;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

/// Prints alerts as warnings and keeps them for the summary.
struct TerminalAlerter {
    recorded: Arc<RecordingAlerter>,
}

impl Alerter for TerminalAlerter {
    fn alert(&self, message: &str) {
        warn!("{message}");
        self.recorded.alert(message);
    }
}

pub fn submit(path: &Path, action: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let mut form: Form = form_file::load(path)
        .with_context(|| format!("could not load form from {}", path.display()))?;

    override_action(&mut form, action);

    print::header("submitting form", cfg.quiet);

    let recorded = Arc::new(RecordingAlerter::new());
    let alerter = TerminalAlerter {
        recorded: recorded.clone(),
    };
    let gate = SubmissionGate::new(cfg.gate.clone(), Box::new(alerter));
    let mut labels = ErrorLabels::new();

    let outcome: SubmitOutcome = gate.submit(&mut form, &mut labels);

    if cfg.quiet < 2 {
        print_fields(&form, &labels);
    }
    print_summary(&outcome, recorded.messages().len(), cfg);

    if outcome.blocked {
        anyhow::bail!(
            "submission with action '{}' blocked by {} invalid field(s)",
            outcome.action,
            outcome.flagged.len()
        );
    }
    Ok(())
}

/// Puts an armed `action_<name>` control in front so it wins inference.
fn override_action(form: &mut Form, action: Option<String>) {
    if let Some(action) = action {
        form.controls.insert(0, Control::new(format!("action_{action}"), action));
    }
}

fn print_fields(form: &Form, labels: &ErrorLabels) {
    for (idx, field) in form.fields.iter().enumerate() {
        let valid: Option<bool> = field.rule().map(|_| labels.get(&field.name).is_none());
        print::field_head(idx, &field.name, valid);

        let mut details: Vec<Detail> = Vec::new();
        let rule: ColoredString = match field.rule() {
            Some(rule) => format!("{rule:?}").normal(),
            None => "unbound".dimmed(),
        };
        details.push(("Rule".to_string(), rule));
        details.push(("Value".to_string(), field.value.color(colors::TEXT_DEFAULT)));

        if let Some(message) = labels.get(&field.name) {
            details.push(("Error".to_string(), message.color(colors::INVALID)));
        }

        print::as_tree_one_level(details);
    }
}

fn print_summary(outcome: &SubmitOutcome, alerts: usize, cfg: &Config) {
    print::fat_separator(cfg.quiet);
    if cfg.quiet > 0 {
        return;
    }

    let (text, color) = if outcome.blocked {
        (
            format!("Submission blocked: {alerts} alert(s) for '{}'", outcome.action),
            colors::INVALID,
        )
    } else if outcome.flagged.is_empty() {
        (format!("Submission accepted for '{}'", outcome.action), colors::VALID)
    } else {
        (
            format!(
                "Submission accepted for '{}' with {} flagged field(s)",
                outcome.action,
                outcome.flagged.len()
            ),
            colors::ACCENT,
        )
    };
    print::centerln(&text, color);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
