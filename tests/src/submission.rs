use std::sync::Arc;

use fieldguard_common::config::GateConfig;
use fieldguard_core::alert::RecordingAlerter;
use fieldguard_core::binding;
use fieldguard_core::field::InputField;
use fieldguard_core::form::{Control, Form};
use fieldguard_core::gate::SubmissionGate;
use fieldguard_core::labels::ErrorLabels;

fn network_form(action: &str) -> Form {
    Form::new(
        vec![
            InputField::from_class_attr("Title", "foswikiInputField", "Router"),
            InputField::from_class_attr("Address", "foswikiInputField foswikiIpAddress required", ""),
            InputField::from_class_attr("Netmask", "foswikiInputField foswikiNetmask", "255.255.255.0"),
            InputField::from_class_attr("Mac", "foswikiInputField foswikiMacAddress", "0-1b-2c-3d-4e-5f"),
            InputField::from_class_attr("Phone", "foswikiInputField foswikiPhoneNumber", "+49 89 1234567"),
        ],
        vec![
            Control::new("action_preview", ""),
            Control::new(format!("action_{action}"), "1"),
        ],
    )
}

fn gate() -> (SubmissionGate, Arc<RecordingAlerter>) {
    let alerter = Arc::new(RecordingAlerter::new());
    (SubmissionGate::new(GateConfig::default(), Box::new(alerter.clone())), alerter)
}

#[test]
fn invalid_required_field_blocks_save() {
    let (gate, alerter) = gate();
    let mut labels = ErrorLabels::new();
    let mut form = network_form("save");

    let outcome = gate.submit(&mut form, &mut labels);

    assert!(outcome.blocked);
    assert_eq!(outcome.flagged, vec!["Address".to_string()]);
    assert_eq!(alerter.messages(), vec!["Validation Error: please check 'Address'"]);

    // Valid fields are still rewritten while the submission is held back.
    assert_eq!(form.field("Netmask").map(|f| f.value.as_str()), Some("255.255.255.000"));
    assert_eq!(form.field("Mac").map(|f| f.value.as_str()), Some("00:1B:2C:3D:4E:5F"));
    assert_eq!(form.field("Phone").map(|f| f.value.as_str()), Some("+49 89 1234567"));
    assert_eq!(form.field("Title").map(|f| f.value.as_str()), Some("Router"));
}

#[test]
fn invalid_required_field_is_flagged_but_cancel_proceeds() {
    let (gate, alerter) = gate();
    let mut labels = ErrorLabels::new();
    let mut form = network_form("cancel");

    let outcome = gate.submit(&mut form, &mut labels);

    assert!(outcome.proceeds());
    assert_eq!(outcome.action, "cancel");
    assert_eq!(labels.get("Address"), Some("Please provide a valid IP address"));
    assert!(alerter.messages().is_empty());
}

#[test]
fn fixing_a_field_on_blur_unblocks_save() {
    let (gate, _alerter) = gate();
    let mut labels = ErrorLabels::new();
    let mut form = network_form("save");

    assert!(gate.submit(&mut form, &mut labels).blocked);

    if let Some(field) = form.field_mut("Address") {
        field.value = "192.168.1.1".to_string();
        binding::blur(field, &mut labels);
    }
    assert!(labels.is_empty());

    let outcome = gate.submit(&mut form, &mut labels);
    assert!(outcome.proceeds());
    assert_eq!(form.field("Address").map(|f| f.value.as_str()), Some("192.168.001.001"));
}

#[test]
fn every_invalid_field_is_labelled_independently() {
    let (gate, alerter) = gate();
    let mut labels = ErrorLabels::new();
    let mut form = network_form("checkpoint");
    if let Some(field) = form.field_mut("Mac") {
        field.value = "not-a-mac".to_string();
    }
    if let Some(field) = form.field_mut("Phone") {
        field.value = "call me".to_string();
    }

    let outcome = gate.submit(&mut form, &mut labels);

    assert!(outcome.blocked);
    assert_eq!(outcome.flagged, vec!["Address", "Mac", "Phone"]);
    assert_eq!(labels.len(), 3);
    assert_eq!(alerter.messages().len(), 3);
}
