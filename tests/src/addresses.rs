use fieldguard_common::field::{self, FieldKind, FieldSpec, ValidationOutcome};

fn outcome(kind: FieldKind, required: bool, raw: &str) -> ValidationOutcome {
    field::validate(&FieldSpec::new(kind, required, raw))
}

fn valid(value: &str) -> ValidationOutcome {
    ValidationOutcome::Valid(value.to_string())
}

/// Every address within the host bounds canonicalizes, and the canonical
/// value validates to itself.
#[test]
fn ipv4_canonical_values_are_fixed_points() {
    for a in [1, 2, 99, 100, 254] {
        for b in [0, 9, 10, 199, 254] {
            let raw = format!("{a}.{b}.{b}.{a}");
            let ValidationOutcome::Valid(canonical) = outcome(FieldKind::IPv4Address, true, &raw) else {
                panic!("{raw} should be valid");
            };
            assert_eq!(canonical.len(), 15, "{canonical} is not fixed width");
            assert_eq!(outcome(FieldKind::IPv4Address, true, &canonical), valid(&canonical));
        }
    }
}

#[test]
fn ipv4_and_netmask_boundaries() {
    assert!(outcome(FieldKind::IPv4Address, true, "0.1.2.3").is_invalid());
    assert!(outcome(FieldKind::IPv4Address, true, "1.2.3.0").is_invalid());
    assert_eq!(outcome(FieldKind::Netmask, true, "1.2.3.0"), valid("001.002.003.000"));

    assert!(outcome(FieldKind::IPv4Address, true, "300.1.1.1").is_invalid());
    assert!(outcome(FieldKind::Netmask, true, "300.1.1.1").is_invalid());

    assert!(outcome(FieldKind::IPv4Address, true, "1.1.1.255").is_invalid());
    assert_eq!(outcome(FieldKind::Netmask, true, "1.1.1.255"), valid("001.001.001.255"));
}

#[test]
fn documented_canonical_forms() {
    assert_eq!(outcome(FieldKind::IPv4Address, true, "5.5.5.5"), valid("005.005.005.005"));
    assert_eq!(outcome(FieldKind::MacAddress, true, "a:b:c:d:e:f"), valid("0A:0B:0C:0D:0E:0F"));
}

#[test]
fn empty_and_malformed_values() {
    for kind in FieldKind::ALL {
        assert_eq!(outcome(kind, false, ""), valid(""));
        assert_eq!(
            outcome(kind, true, ""),
            ValidationOutcome::Invalid(kind.error_message().to_string())
        );
    }
    assert!(outcome(FieldKind::IPv4Address, false, "1.2.3").is_invalid());
    assert!(outcome(FieldKind::IPv4Address, true, "1.2.3").is_invalid());
}

#[test]
fn messages_do_not_depend_on_the_violated_rule() {
    let too_low = outcome(FieldKind::IPv4Address, true, "0.1.1.1");
    let too_high = outcome(FieldKind::IPv4Address, true, "1.1.1.255");
    let malformed = outcome(FieldKind::IPv4Address, true, "one.two");
    assert_eq!(too_low, too_high);
    assert_eq!(too_high, malformed);
}
