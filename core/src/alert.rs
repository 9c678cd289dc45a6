//! # Alert Port
//!
//! The submission gate reports blocked submissions through this trait, the
//! way a browser would pop up an alert box. Front ends provide the
//! implementation.

use std::sync::{Arc, Mutex};

pub trait Alerter {
    fn alert(&self, message: &str);
}

/// Keeps every alert in memory. Useful for tests and for front ends that
/// print a summary at the end.
#[derive(Debug, Default)]
pub struct RecordingAlerter {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

impl<T: Alerter + ?Sized> Alerter for Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
