#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::sync::Arc;

use pred_value::{FunctionValue, Heap, TypeFlags, Value};
use proptest::prelude::*;

use crate::{Operand, OperandKey, Precedence, Predicate, PredicateKind, RegexFlags};

fn identity() -> FunctionValue {
    FunctionValue::new("identity", 1, |_, args| {
        Ok(args.first().cloned().unwrap_or(Value::Undefined))
    })
}

mod kinds {
    use super::*;

    #[test]
    fn constructors_map_to_kinds() {
        let cases = [
            (Predicate::string_type(), PredicateKind::Type),
            (Predicate::charset("abc"), PredicateKind::Charset),
            (Predicate::string("foo"), PredicateKind::String),
            (Predicate::notnot(Operand::Unset), PredicateKind::NotNot),
            (Predicate::not(Operand::Unset), PredicateKind::Not),
            (Predicate::bnot(Operand::Unset), PredicateKind::BitNot),
            (Predicate::sqrt(Operand::Unset), PredicateKind::Sqrt),
            (Predicate::add(Operand::Unset, Operand::Unset), PredicateKind::Add),
            (Predicate::modulo(Operand::Unset, Operand::Unset), PredicateKind::Mod),
            (Predicate::atan2(Operand::Unset, Operand::Unset), PredicateKind::Atan2),
            (Predicate::xor([Operand::Unset]), PredicateKind::Xor),
            (Predicate::regex("a", RegexFlags::empty()), PredicateKind::Regex),
            (Predicate::equal(Value::int(1)), PredicateKind::Equal),
            (Predicate::property(Some("x"), None), PredicateKind::Property),
            (Predicate::member(Value::object::<&str, _>([])), PredicateKind::Member),
            (Predicate::shift(1, Operand::Unset), PredicateKind::Shift),
            (Predicate::function(identity(), Value::Undefined), PredicateKind::Function),
        ];
        for (pred, kind) in cases {
            assert_eq!(pred.kind(), kind);
        }
    }

    #[test]
    fn shorthand_type_tests() {
        assert!(matches!(Predicate::number(), Predicate::Type(f) if f == TypeFlags::NUMBER));
        assert!(matches!(Predicate::array(), Predicate::Type(f) if f == TypeFlags::ARRAY));
        assert!(matches!(Predicate::function_type(), Predicate::Type(f) if f == TypeFlags::FUNCTION));
    }

    #[test]
    #[should_panic(expected = "kind() called on an unset predicate")]
    fn unset_kind_panics() {
        let _ = Predicate::Unset.kind();
    }

    #[test]
    fn type_precedence_follows_rendered_tests() {
        assert_eq!(Predicate::type_of(TypeFlags::empty()).precedence(), Precedence::MemberAccess);
        assert_eq!(Predicate::int().precedence(), Precedence::Equality);
        assert_eq!(
            Predicate::type_of(TypeFlags::STRING | TypeFlags::NULL).precedence(),
            Precedence::LogicalOr
        );
    }

    #[test]
    fn shift_takes_operand_precedence() {
        let inner = Predicate::add(Operand::Unset, Operand::Unset);
        assert_eq!(Predicate::shift(2, inner).precedence(), Precedence::Additive);
        assert_eq!(
            Predicate::shift(2, Operand::Unset).precedence(),
            Precedence::MemberAccess
        );
    }
}

mod introspection {
    use super::*;

    #[test]
    fn binary_keys_and_values() {
        let pred = Predicate::sub(Value::int(3), Operand::Unset);
        assert_eq!(pred.keys(), vec![OperandKey::Name("left"), OperandKey::Name("right")]);
        let values = pred.values();
        assert!(matches!(&values[0], Operand::Value(v) if *v == Value::int(3)));
        assert!(values[1].is_unset());
    }

    #[test]
    fn boolean_keys_are_indices() {
        let pred = Predicate::or([Predicate::null(), Predicate::undefined()]);
        assert_eq!(pred.keys(), vec![OperandKey::Index(0), OperandKey::Index(1)]);
        assert_eq!(pred.keys()[1].to_string(), "1");
        assert_eq!(pred.values().len(), 2);
    }

    #[test]
    fn property_values_report_missing_parts() {
        let pred = Predicate::property(None, None);
        assert_eq!(pred.keys(), vec![OperandKey::Name("atom"), OperandKey::Name("predicate")]);
        let values = pred.values();
        assert!(matches!(&values[0], Operand::Value(Value::Undefined)));
        assert!(matches!(&values[1], Operand::Value(Value::Undefined)));
    }

    #[test]
    fn literal_text_values() {
        let values = Predicate::charset("xy").values();
        assert!(matches!(&values[0], Operand::Value(v) if *v == Value::string("xy")));
        assert!(Predicate::regex("a", RegexFlags::empty()).values().is_empty());
    }
}

mod arg_counts {
    use super::*;

    #[test]
    fn leaves_consume_one() {
        assert_eq!(Predicate::int().recursive_arg_count(), 1);
        assert_eq!(Predicate::charset("a").recursive_arg_count(), 1);
        assert_eq!(Predicate::regex("a", RegexFlags::empty()).recursive_arg_count(), 1);
        assert_eq!(Predicate::member(Value::Null).recursive_arg_count(), 1);
    }

    #[test]
    fn operands_sum() {
        let nested = Predicate::mul(Predicate::add(Operand::Unset, Operand::Unset), Value::int(2));
        assert_eq!(nested.recursive_arg_count(), 2);
        assert_eq!(nested.direct_arg_count(), 0);
        let combo = Predicate::and([
            Operand::from(Predicate::string("a")),
            Operand::Unset,
            Operand::Value(Value::bool(true)),
        ]);
        assert_eq!(combo.recursive_arg_count(), 2);
        assert_eq!(combo.direct_arg_count(), 1);
    }

    #[test]
    fn property_shift_function() {
        assert_eq!(Predicate::property(Some("a"), None).recursive_arg_count(), 1);
        assert_eq!(Predicate::property(None, None).recursive_arg_count(), 2);
        let filtered =
            Predicate::property(Some("a"), Some(Predicate::add(Operand::Unset, Operand::Unset).into()));
        assert_eq!(filtered.recursive_arg_count(), 1);
        assert_eq!(Predicate::shift(2, Predicate::int()).recursive_arg_count(), 3);
        assert_eq!(Predicate::shift(2, Predicate::int()).direct_arg_count(), 2);
        let call = Predicate::function_with_arity(identity(), Value::Undefined, 3);
        assert_eq!(call.recursive_arg_count(), 3);
    }

    #[test]
    fn huge_shift_saturates() {
        let shift = Predicate::shift(usize::MAX, Predicate::int());
        assert_eq!(shift.recursive_arg_count(), usize::MAX);
        let sum = Predicate::add(shift.clone(), shift);
        assert_eq!(sum.recursive_arg_count(), usize::MAX);
        let any = Predicate::or([Operand::Unset, Predicate::shift(usize::MAX, Operand::Unset).into()]);
        assert_eq!(any.recursive_arg_count(), usize::MAX);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn free_releases_references() {
        let target = Value::object([("a", Value::int(1))]);
        let Value::Object(handle) = &target else {
            unreachable!()
        };
        let handle = handle.clone();
        let before = Heap::strong_count(&handle);
        let mut pred = Predicate::member(target.clone());
        assert_eq!(Heap::strong_count(&handle), before + 1);
        pred.free();
        assert!(pred.is_unset());
        assert_eq!(Heap::strong_count(&handle), before);
        pred.free();
        assert!(pred.is_unset());
    }

    #[test]
    fn clone_is_independent_of_original() {
        let child = Arc::new(Predicate::string("foo"));
        let mut original = Predicate::not(Operand::Predicate(child.clone()));
        let copy = original.clone();
        assert_eq!(Arc::strong_count(&child), 3);
        original.free();
        assert_eq!(Arc::strong_count(&child), 2);
        assert_eq!(copy.kind(), PredicateKind::Not);
        assert_eq!(copy.recursive_arg_count(), 1);
    }

    #[test]
    fn clone_resets_regex_cache() {
        let pred = Predicate::regex("(x)", RegexFlags::empty());
        assert_eq!(pred.compile_regex().unwrap(), 2);
        let Predicate::Regex(copy) = pred.clone() else {
            unreachable!()
        };
        assert!(!copy.is_compiled());
    }

    #[test]
    #[should_panic(expected = "compile_regex() called on a `type` predicate")]
    fn compile_regex_on_other_kind_panics() {
        let _ = Predicate::int().compile_regex();
    }
}

fn leaf() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        Just(Predicate::int()),
        Just(Predicate::string("ab")),
        Just(Predicate::charset("xyz")),
        Just(Predicate::regex("a+", RegexFlags::empty())),
    ]
}

fn operand(inner: BoxedStrategy<Predicate>) -> impl Strategy<Value = Operand> {
    prop_oneof![
        Just(Operand::Unset),
        any::<i64>().prop_map(|n| Operand::Value(Value::int(n))),
        inner.prop_map(Operand::from),
    ]
}

fn tree() -> impl Strategy<Value = Predicate> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        let inner = inner.boxed();
        prop_oneof![
            (operand(inner.clone()), operand(inner.clone())).prop_map(|(l, r)| Predicate::add(l, r)),
            operand(inner.clone()).prop_map(Predicate::not),
            prop::collection::vec(operand(inner.clone()), 1..4).prop_map(Predicate::xor),
            (0usize..3, operand(inner)).prop_map(|(n, o)| Predicate::shift(n, o)),
        ]
    })
}

proptest! {
    #[test]
    fn recursive_count_at_least_direct(pred in tree()) {
        prop_assert!(pred.recursive_arg_count() >= pred.direct_arg_count());
    }

    #[test]
    fn keys_and_values_align(pred in tree()) {
        prop_assert_eq!(pred.keys().len(), pred.values().len());
    }
}
