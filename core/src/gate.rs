//! # Submission Gate
//!
//! Revalidates every bound field when a form is submitted and decides
//! whether the submission goes through.
//!
//! Invalid fields only block actions that commit the form (see
//! [`GateConfig::persisting_actions`]). Any other action, such as `cancel`
//! or `preview`, still flags the invalid fields but lets the submission
//! proceed.

use fieldguard_common::config::GateConfig;
use fieldguard_common::field::ValidationOutcome;
use tracing::{debug, info, warn};

use crate::alert::Alerter;
use crate::binding;
use crate::form::Form;
use crate::labels::ErrorLabels;

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub action: String,
    /// Names of the fields that failed validation, in form order.
    pub flagged: Vec<String>,
    pub blocked: bool,
}

impl SubmitOutcome {
    pub fn proceeds(&self) -> bool {
        !self.blocked
    }
}

pub fn alert_message(field_name: &str) -> String {
    format!("Validation Error: please check '{field_name}'")
}

pub struct SubmissionGate {
    config: GateConfig,
    alerter: Box<dyn Alerter>,
}

impl SubmissionGate {
    pub fn new(config: GateConfig, alerter: Box<dyn Alerter>) -> Self {
        Self { config, alerter }
    }

    /// Submits `form`.
    ///
    /// Every bound field is revalidated, so valid values are rewritten into
    /// canonical form and labels are updated even when the submission is
    /// blocked. Each invalid field under a persisting action raises its
    /// own alert.
    pub fn submit(&self, form: &mut Form, labels: &mut ErrorLabels) -> SubmitOutcome {
        let action = form.pending_action_or(&self.config.default_action);
        let persisting = self.config.is_persisting(&action);
        debug!(%action, persisting, "submitting form");

        let mut flagged = Vec::new();
        let mut blocked = false;

        for field in form.fields.iter_mut() {
            let Some(ValidationOutcome::Invalid(_)) = binding::blur(field, labels) else {
                continue;
            };

            flagged.push(field.name.clone());
            if persisting {
                warn!(field = %field.name, "blocking submit");
                self.alerter.alert(&alert_message(&field.name));
                blocked = true;
            } else {
                info!(field = %field.name, %action, "invalid field, submitting anyway");
            }
        }

        SubmitOutcome {
            action,
            flagged,
            blocked,
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
