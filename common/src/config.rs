/// Actions that commit a form and are therefore blocked by invalid fields.
pub const PERSISTING_ACTIONS: &[&str] = &["save", "checkpoint"];

/// Action assumed when a form names none.
pub const DEFAULT_ACTION: &str = "save";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `1` suppresses headers and summaries, `2` also per-field details.
    ///
    /// Errors are always printed.
    pub quiet: u8,
    pub gate: GateConfig,
}

/// Controls which submissions are held back by invalid fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub persisting_actions: Vec<String>,
    pub default_action: String,
}

impl GateConfig {
    pub fn is_persisting(&self, action: &str) -> bool {
        self.persisting_actions.iter().any(|a| a == action)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            persisting_actions: PERSISTING_ACTIONS.iter().map(|a| a.to_string()).collect(),
            default_action: DEFAULT_ACTION.to_string(),
        }
    }
}
