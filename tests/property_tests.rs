//! Property-based tests for Tribool logic.
//!
//! These tests use proptest to verify the algebraic properties of the
//! connectives hold for every combination of states and native operands.

use proptest::prelude::*;
use std::collections::HashMap;
use tribool::{Resolve, Tribool, TriboolError, NAMES};

prop_compose! {
    fn arbitrary_tribool()(variant in 0..3u8) -> Tribool {
        match variant {
            0 => Tribool::True,
            1 => Tribool::False,
            _ => Tribool::Indeterminate,
        }
    }
}

prop_compose! {
    fn arbitrary_native()(variant in 0..3u8) -> Option<bool> {
        match variant {
            0 => Some(true),
            1 => Some(false),
            _ => None,
        }
    }
}

proptest! {
    #[test]
    fn double_negation_is_identity(a in arbitrary_tribool()) {
        prop_assert_eq!(!!a, a);
        prop_assert_eq!(a.not().not(), a);
    }

    #[test]
    fn and_or_are_commutative(a in arbitrary_tribool(), b in arbitrary_tribool()) {
        prop_assert_eq!(a & b, b & a);
        prop_assert_eq!(a | b, b | a);
        prop_assert_eq!(a ^ b, b ^ a);
    }

    #[test]
    fn de_morgan_holds(a in arbitrary_tribool(), b in arbitrary_tribool()) {
        prop_assert_eq!(!(a & b), !a | !b);
        prop_assert_eq!(!(a | b), !a & !b);
    }

    #[test]
    fn derived_comparisons_match_definitions(a in arbitrary_tribool(), b in arbitrary_tribool()) {
        prop_assert_eq!(a.le(b), a.lt(b) | a.equals(b));
        prop_assert_eq!(a.gt(b), !a.le(b));
        prop_assert_eq!(a.ge(b), !a.lt(b));
        prop_assert_eq!(a.not_equals(b), !a.equals(b));
    }

    #[test]
    fn indeterminate_equality_never_decides(a in arbitrary_tribool()) {
        prop_assert_eq!(a.equals(Tribool::Indeterminate), Tribool::Indeterminate);
        prop_assert_eq!(Tribool::Indeterminate.equals(a), Tribool::Indeterminate);
    }

    #[test]
    fn native_operands_are_symmetric(a in arbitrary_tribool(), value in arbitrary_native()) {
        prop_assert_eq!(a & value, value & a);
        prop_assert_eq!(a | value, value | a);
        prop_assert_eq!(a ^ value, value ^ a);
    }

    #[test]
    fn results_are_canonical(a in arbitrary_tribool(), b in arbitrary_tribool()) {
        let result = a & b;
        let rebuilt = Tribool::resolve(result.value()).unwrap();
        prop_assert!(std::ptr::eq(result.canonical(), rebuilt.canonical()));
    }

    #[test]
    fn resolution_is_pure(value in arbitrary_native()) {
        let first = value.resolve();
        let second = value.resolve();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_names_are_rejected(name in "[a-z]{1,12}") {
        // Recognized names all start with an uppercase letter.
        let result = Tribool::resolve(name.as_str());
        let is_invalid_value = matches!(result, Err(TriboolError::InvalidValue { .. }));
        prop_assert!(is_invalid_value);
    }

    #[test]
    fn conversions_always_fail(a in arbitrary_tribool()) {
        prop_assert!(bool::try_from(a).is_err());
        prop_assert!(i64::try_from(a).is_err());
        prop_assert!(usize::try_from(a).is_err());
    }

    #[test]
    fn debug_is_stable(a in arbitrary_tribool()) {
        prop_assert_eq!(format!("{a:?}"), format!("{a:?}"));
    }

    #[test]
    fn json_roundtrip_serialization(a in arbitrary_tribool()) {
        let json = serde_json::to_string(&a).unwrap();
        let deserialized: Tribool = serde_json::from_str(&json).unwrap();
        prop_assert!(std::ptr::eq(a.canonical(), deserialized.canonical()));
    }

    #[test]
    fn bincode_roundtrip_serialization(a in arbitrary_tribool()) {
        let bytes = bincode::serialize(&a).unwrap();
        let deserialized: Tribool = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(a, deserialized);
    }
}

#[test]
fn every_name_resolves_to_its_state() {
    for (name, state) in NAMES {
        assert_eq!(Tribool::resolve(name), Ok(state));
    }
}

#[test]
fn debug_strings_are_distinct() {
    let rendered: Vec<String> = Tribool::ALL.iter().map(|t| format!("{t:?}")).collect();
    assert_ne!(rendered[0], rendered[1]);
    assert_ne!(rendered[1], rendered[2]);
    assert_ne!(rendered[0], rendered[2]);
}

#[test]
fn map_keys_read_back_by_resolved_value() {
    let labels: HashMap<Tribool, &str> = [
        (Tribool::True, "Yes"),
        (Tribool::False, "No"),
        (Tribool::Indeterminate, "Maybe"),
    ]
    .into_iter()
    .collect();

    assert_eq!(labels[&Tribool::resolve("True").unwrap()], "Yes");
    assert_eq!(labels[&Tribool::resolve(false).unwrap()], "No");
    assert_eq!(labels[&Tribool::resolve("Unknown").unwrap()], "Maybe");
}
