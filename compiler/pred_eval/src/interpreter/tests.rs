#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::sync::Arc;

use parking_lot::Mutex;
use pred_ir::{Operand, Predicate, RegexFlags};
use pred_value::{thrown, EvalErrorKind, FunctionValue, TypeFlags, Value};
use proptest::prelude::*;

use super::Interpreter;
use crate::config::UnderflowPolicy;

fn eval(pred: &Predicate, args: &[Value]) -> Value {
    Interpreter::new().call_predicate(pred, args).unwrap()
}

fn s(text: &str) -> Value {
    Value::string(text)
}

/// A host function that records every argument list it receives.
fn recorder(name: &str, arity: usize, result: Value) -> (FunctionValue, Arc<Mutex<Vec<Vec<Value>>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&calls);
    let func = FunctionValue::new(name, arity, move |_, args| {
        log.lock().push(args.to_vec());
        Ok(result.clone())
    });
    (func, calls)
}

mod leaves {
    use super::*;

    #[test]
    fn string_prefix() {
        let pred = Predicate::string("foo");
        assert_eq!(eval(&pred, &[s("foobar")]), Value::Bool(true));
        assert_eq!(eval(&pred, &[s("fo")]), Value::Bool(false));
        assert_eq!(eval(&pred, &[s("bar")]), Value::Bool(false));
        assert_eq!(eval(&pred, &[s("foo")]), Value::Bool(true));
    }

    #[test]
    fn string_prefix_on_bytes() {
        let pred = Predicate::string([0xff, 0x00]);
        assert_eq!(eval(&pred, &[Value::bytes(vec![0xff, 0x00, 0x01])]), Value::Bool(true));
        assert_eq!(eval(&pred, &[Value::bytes(vec![0xff])]), Value::Bool(false));
    }

    #[test]
    fn charset_membership() {
        let pred = Predicate::charset("abc");
        assert_eq!(eval(&pred, &[s("cab")]), Value::Bool(true));
        assert_eq!(eval(&pred, &[s("cat")]), Value::Bool(false));
        assert_eq!(eval(&pred, &[s("")]), Value::Bool(true));
    }

    #[test]
    fn charset_decodes_once() {
        let pred = Predicate::charset("αβ");
        let Predicate::Charset(set) = &pred else {
            unreachable!()
        };
        assert!(!set.is_decoded());
        assert_eq!(eval(&pred, &[s("βα")]), Value::Bool(true));
        assert!(set.is_decoded());
        assert_eq!(eval(&pred, &[s("αγ")]), Value::Bool(false));
    }

    #[test]
    fn type_tests() {
        assert_eq!(eval(&Predicate::int(), &[Value::int(1)]), Value::Bool(true));
        assert_eq!(eval(&Predicate::int(), &[s("1")]), Value::Bool(false));
        assert_eq!(eval(&Predicate::object(), &[Value::array(vec![])]), Value::Bool(true));
        assert_eq!(eval(&Predicate::array(), &[Value::object::<&str, _>([])]), Value::Bool(false));
        assert_eq!(eval(&Predicate::undefined(), &[Value::Undefined]), Value::Bool(true));
        assert_eq!(
            eval(&Predicate::type_of(TypeFlags::NULL | TypeFlags::STRING), &[Value::Null]),
            Value::Bool(true)
        );
    }
}

mod operators {
    use super::*;

    #[test]
    fn unary_on_unset_and_literal() {
        assert_eq!(eval(&Predicate::not(Operand::Unset), &[Value::int(0)]), Value::Bool(true));
        assert_eq!(eval(&Predicate::notnot(Operand::Unset), &[s("x")]), Value::Bool(true));
        assert_eq!(eval(&Predicate::bnot(Value::int(5)), &[]), Value::Int(-6));
        assert_eq!(eval(&Predicate::sqrt(Operand::Unset), &[Value::int(16)]), Value::Float(4.0));
    }

    #[test]
    fn binary_consumes_left_then_right() {
        let pred = Predicate::sub(Operand::Unset, Operand::Unset);
        assert_eq!(eval(&pred, &[Value::int(10), Value::int(3)]), Value::Float(7.0));
    }

    #[test]
    fn nested_operands_share_the_cursor() {
        // (a + b) * c
        let pred = Predicate::mul(
            Predicate::add(Operand::Unset, Operand::Unset),
            Operand::Unset,
        );
        let args = [Value::int(1), Value::int(2), Value::int(4)];
        assert_eq!(eval(&pred, &args), Value::Float(12.0));
    }

    #[test]
    fn literal_operand_consumes_nothing() {
        let pred = Predicate::add(Value::int(100), Operand::Unset);
        assert_eq!(eval(&pred, &[Value::int(1)]), Value::Float(101.0));
    }

    #[test]
    fn literal_callable_sees_remaining_args() {
        let (func, calls) = recorder("peek", 0, Value::int(3));
        let pred = Predicate::add(Operand::Unset, Value::function(func));
        let args = [Value::int(1), Value::int(2)];
        assert_eq!(eval(&pred, &args), Value::Float(4.0));
        assert_eq!(*calls.lock(), vec![vec![Value::int(2)]]);
    }

    #[test]
    fn bitwise_returns_float() {
        let pred = Predicate::bor(Operand::Unset, Operand::Unset);
        assert_eq!(eval(&pred, &[Value::int(1), Value::int(6)]), Value::Float(7.0));
    }
}

mod combinators {
    use super::*;

    #[test]
    fn or_returns_first_truthy() {
        let pred = Predicate::or([Operand::Unset, Operand::Unset, Operand::Unset]);
        let args = [Value::int(0), s("hit"), s("unused")];
        assert_eq!(eval(&pred, &args), s("hit"));
    }

    #[test]
    fn or_defaults_to_last_falsy() {
        let pred = Predicate::or([Operand::Unset, Operand::Unset]);
        assert_eq!(eval(&pred, &[Value::int(0), Value::Null]), Value::Null);
    }

    #[test]
    fn and_returns_first_falsy() {
        let pred = Predicate::and([Operand::Unset, Operand::Unset]);
        assert_eq!(eval(&pred, &[Value::int(1), s("")]), s(""));
        assert_eq!(eval(&pred, &[Value::int(1), Value::int(2)]), Value::int(2));
    }

    #[test]
    fn empty_combinator_is_undefined() {
        let pred = Predicate::and(Vec::<Operand>::new());
        assert_eq!(eval(&pred, &[]), Value::Undefined);
    }

    #[test]
    fn and_short_circuit_skips_consumption() {
        let (func, calls) = recorder("second", 1, Value::Bool(true));
        let pred = Predicate::and([
            Operand::from(Predicate::int()),
            Operand::from(Predicate::function(func, Value::Undefined)),
        ]);
        let interp = Interpreter::new();
        let args = [s("not an int"), Value::int(1)];
        let mut cursor = interp.cursor(&args);
        let result = interp.eval(&pred, &mut cursor).unwrap();
        assert_eq!(result, Value::Bool(false));
        assert_eq!(cursor.position(), 1);
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn or_short_circuit_skips_consumption() {
        let (func, calls) = recorder("second", 2, Value::Bool(true));
        let pred = Predicate::or([
            Operand::from(Predicate::int()),
            Operand::from(Predicate::function(func, Value::Undefined)),
        ]);
        assert_eq!(eval(&pred, &[Value::int(1)]), Value::Bool(true));
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn xor_folds_every_operand() {
        let pred = Predicate::xor([Operand::Unset, Operand::Unset, Operand::Unset]);
        let args = [Value::int(0b1100), Value::int(0b1010), Value::int(0b0001)];
        assert_eq!(eval(&pred, &args), Value::Int(0b0111));
    }

    #[test]
    fn xor_evaluates_left_to_right() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let tagged = |tag: i64| {
            let order = Arc::clone(&order);
            FunctionValue::new("tag", 1, move |_, args| {
                order.lock().push((tag, args[0].clone()));
                Ok(Value::int(tag))
            })
        };
        let pred = Predicate::xor([
            Operand::from(Predicate::function(tagged(1), Value::Undefined)),
            Operand::from(Predicate::function(tagged(2), Value::Undefined)),
        ]);
        assert_eq!(eval(&pred, &[s("x"), s("y")]), Value::Int(3));
        assert_eq!(*order.lock(), vec![(1, s("x")), (2, s("y"))]);
    }

    #[test]
    fn xor_of_literals_commutes() {
        let a = Predicate::xor([Value::int(5), Value::int(9), Value::int(3)]);
        let b = Predicate::xor([Value::int(3), Value::int(5), Value::int(9)]);
        assert_eq!(eval(&a, &[]), eval(&b, &[]));
    }
}

mod regex {
    use super::*;

    #[test]
    fn matches_from_start_of_input() {
        let pred = Predicate::regex("b+", RegexFlags::empty());
        assert_eq!(eval(&pred, &[s("abbc")]), Value::Bool(true));
        assert_eq!(eval(&pred, &[s("ac")]), Value::Bool(false));
    }

    #[test]
    fn flags_apply() {
        let pred = Predicate::regex("^abc$", RegexFlags::IGNORE_CASE);
        assert_eq!(eval(&pred, &[s("ABC")]), Value::Bool(true));
        let sticky = Predicate::regex("b", RegexFlags::STICKY);
        assert_eq!(eval(&sticky, &[s("ab")]), Value::Bool(false));
    }

    #[test]
    fn fills_array_sink() {
        let pred = Predicate::regex("(\\d+)-(x)?", RegexFlags::empty());
        let sink = Value::array(vec![Value::int(9); 6]);
        let result = eval(&pred, &[s("ab12-"), sink.clone()]);
        assert_eq!(result, Value::Bool(true));
        assert_eq!(
            sink,
            Value::array(vec![
                Value::array(vec![Value::int(2), Value::int(5)]),
                Value::array(vec![Value::int(2), Value::int(4)]),
                Value::Null,
            ])
        );
    }

    #[test]
    fn invokes_callback_with_captures_and_input() {
        let (func, calls) = recorder("onMatch", 2, Value::Undefined);
        let pred = Predicate::regex("(o)", RegexFlags::empty());
        let input = s("foo");
        assert_eq!(eval(&pred, &[input.clone(), Value::function(func)]), Value::Bool(true));
        let calls = calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                Value::array(vec![
                    Value::array(vec![Value::int(1), Value::int(2)]),
                    Value::array(vec![Value::int(1), Value::int(2)]),
                ]),
                input,
            ]
        );
    }

    #[test]
    fn sink_untouched_without_match() {
        let pred = Predicate::regex("z", RegexFlags::empty());
        let sink = Value::array(vec![Value::int(1)]);
        let interp = Interpreter::new();
        let args = [s("abc"), sink.clone()];
        let mut cursor = interp.cursor(&args);
        assert_eq!(interp.eval(&pred, &mut cursor).unwrap(), Value::Bool(false));
        assert_eq!(cursor.position(), 1);
        assert_eq!(sink, Value::array(vec![Value::int(1)]));
    }

    #[test]
    fn capture_limit_applies() {
        let interp = Interpreter::builder().max_regex_captures(1).build();
        let pred = Predicate::regex("(a)(b)", RegexFlags::empty());
        let sink = Value::array(vec![]);
        interp.call_predicate(&pred, &[s("ab"), sink.clone()]).unwrap();
        assert_eq!(sink.as_array().unwrap().len(), 1);
    }

    #[test]
    fn callback_failure_propagates() {
        let func = FunctionValue::new("boom", 2, |_, _| Err(thrown(Value::string("bad"))));
        let pred = Predicate::regex("a", RegexFlags::empty());
        let err = Interpreter::new()
            .call_predicate(&pred, &[s("a"), Value::function(func)])
            .unwrap_err();
        assert_eq!(err.thrown, Some(s("bad")));
    }

    #[test]
    fn compile_failure_reported_every_time() {
        let pred = Predicate::regex("(unclosed", RegexFlags::empty());
        let interp = Interpreter::new();
        for _ in 0..2 {
            let err = interp.call_predicate(&pred, &[s("x")]).unwrap_err();
            assert!(matches!(err.kind, EvalErrorKind::RegexCompile { ref pattern, .. } if pattern == "(unclosed"));
        }
    }
}

mod relations {
    use super::*;

    #[test]
    fn equal_compares_values() {
        let pred = Predicate::equal(Value::int(3));
        assert_eq!(eval(&pred, &[Value::float(3.0)]), Value::Bool(true));
        assert_eq!(eval(&pred, &[s("3")]), Value::Bool(false));
    }

    #[test]
    fn instance_of_walks_prototypes() {
        let proto = Value::new_object_ref::<&str, _>([]);
        let ctor = FunctionValue::new("Point", 0, |_, _| Ok(Value::Undefined))
            .with_prototype(proto.clone());
        let pred = Predicate::instance_of(Value::function(ctor));
        let instance = Value::object_with_prototype(&proto, [("x", Value::int(1))]);
        assert_eq!(eval(&pred, &[instance]), Value::Bool(true));
        assert_eq!(eval(&pred, &[Value::object::<&str, _>([])]), Value::Bool(false));
        assert_eq!(eval(&pred, &[Value::int(1)]), Value::Bool(false));
    }

    #[test]
    fn instance_of_non_function_fails() {
        let pred = Predicate::instance_of(Value::int(1));
        let err = Interpreter::new().call_predicate(&pred, &[Value::Null]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn prototype_is_uses_identity() {
        let proto = Value::new_object_ref([("k", Value::int(1))]);
        let lookalike = Value::object([("k", Value::int(1))]);
        let obj = Value::object_with_prototype(&proto, [("a", Value::int(2))]);
        let same = Predicate::prototype_is(Value::Object(proto.clone()));
        assert_eq!(eval(&same, &[obj.clone()]), Value::Bool(true));
        let other = Predicate::prototype_is(lookalike);
        assert_eq!(eval(&other, &[obj]), Value::Bool(false));
        let null = Predicate::prototype_is(Value::Null);
        assert_eq!(eval(&null, &[Value::object::<&str, _>([])]), Value::Bool(true));
    }
}

mod access {
    use super::*;

    fn point() -> Value {
        Value::object([("x", Value::int(3)), ("y", Value::int(4))])
    }

    #[test]
    fn named_property() {
        let pred = Predicate::property(Some("x"), None);
        assert_eq!(eval(&pred, &[point()]), Value::int(3));
        assert_eq!(
            eval(&Predicate::property(Some("z"), None), &[point()]),
            Value::Undefined
        );
    }

    #[test]
    fn property_key_from_cursor() {
        let pred = Predicate::property(None, None);
        assert_eq!(eval(&pred, &[point(), s("y")]), Value::int(4));
        let arr = Value::array(vec![s("a"), s("b")]);
        assert_eq!(eval(&pred, &[arr, Value::int(1)]), s("b"));
    }

    #[test]
    fn property_filter_runs_on_fresh_cursor() {
        let filter = Predicate::mul(Operand::Unset, Value::int(10));
        let pred = Predicate::property(Some("x"), Some(filter.into()));
        let interp = Interpreter::new();
        let args = [point(), Value::int(99)];
        let mut cursor = interp.cursor(&args);
        assert_eq!(interp.eval(&pred, &mut cursor).unwrap(), Value::Float(30.0));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn property_filter_callable() {
        let (func, calls) = recorder("check", 1, Value::Bool(true));
        let pred = Predicate::property(Some("y"), Some(Value::function(func).into()));
        assert_eq!(eval(&pred, &[point()]), Value::Bool(true));
        assert_eq!(*calls.lock(), vec![vec![Value::int(4)]]);
    }

    #[test]
    fn property_filter_literal_ignored() {
        let pred = Predicate::property(Some("x"), Some(Value::int(0).into()));
        assert_eq!(eval(&pred, &[point()]), Value::int(3));
    }

    #[test]
    fn property_on_non_object_fails() {
        let pred = Predicate::property(Some("x"), None);
        let interp = Interpreter::new();
        for arg in [Value::Undefined, Value::int(1), s("str")] {
            let err = interp.call_predicate(&pred, &[arg.clone()]).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::NotObject {
                    got: arg.type_name().to_string()
                }
            );
        }
    }

    #[test]
    fn member_lookup() {
        let pred = Predicate::member(point());
        assert_eq!(eval(&pred, &[s("y")]), Value::int(4));
        assert_eq!(eval(&pred, &[s("missing")]), Value::Undefined);
        let list = Predicate::member(Value::array(vec![s("zero")]));
        assert_eq!(eval(&list, &[Value::int(0)]), s("zero"));
    }
}

mod threading {
    use super::*;

    #[test]
    fn shift_skips_arguments() {
        let pred = Predicate::shift(2, Predicate::string("c"));
        assert_eq!(eval(&pred, &[s("a"), s("b"), s("cat")]), Value::Bool(true));
    }

    #[test]
    fn shift_within_combinator() {
        // Second operand ignores the argument meant for the first.
        let pred = Predicate::and([
            Operand::from(Predicate::int()),
            Operand::from(Predicate::shift(1, Predicate::string_type())),
        ]);
        assert_eq!(eval(&pred, &[Value::int(1), Value::int(2), s("s")]), Value::Bool(true));
    }

    #[test]
    fn function_pulls_arity_args() {
        let (func, calls) = recorder("f", 2, s("done"));
        let this = Value::object([("self", Value::Bool(true))]);
        let seen_this = Arc::new(Mutex::new(None));
        let seen = Arc::clone(&seen_this);
        let bound = FunctionValue::new("bound", 2, move |this, args| {
            *seen.lock() = Some(this.clone());
            func.call(this, args)
        });
        let pred = Predicate::function(bound, this.clone());
        let interp = Interpreter::new();
        let args = [Value::int(1), Value::int(2), Value::int(3)];
        let mut cursor = interp.cursor(&args);
        assert_eq!(interp.eval(&pred, &mut cursor).unwrap(), s("done"));
        assert_eq!(cursor.position(), 2);
        assert_eq!(*calls.lock(), vec![vec![Value::int(1), Value::int(2)]]);
        assert_eq!(*seen_this.lock(), Some(this));
    }

    #[test]
    fn call_with_plain_callable() {
        let (func, calls) = recorder("direct", 0, Value::int(7));
        let target = Operand::Value(Value::function(func));
        let result = Interpreter::new().call(&target, &[Value::int(1), Value::int(2)]).unwrap();
        assert_eq!(result, Value::int(7));
        assert_eq!(*calls.lock(), vec![vec![Value::int(1), Value::int(2)]]);
    }

    #[test]
    fn call_with_literal_is_undefined() {
        let interp = Interpreter::new();
        assert_eq!(interp.call(&Operand::Value(Value::int(1)), &[]).unwrap(), Value::Undefined);
        assert_eq!(interp.call(&Operand::Unset, &[]).unwrap(), Value::Undefined);
    }

    #[test]
    fn value_passes_literals_through() {
        let interp = Interpreter::new();
        let args = [Value::int(1)];
        let mut cursor = interp.cursor(&args);
        let literal = Operand::Value(s("kept"));
        assert_eq!(interp.value(&literal, &mut cursor).unwrap(), s("kept"));
        assert_eq!(cursor.position(), 0);
        assert_eq!(interp.value(&Operand::Unset, &mut cursor).unwrap(), Value::int(1));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn value_continues_the_callers_cursor() {
        let interp = Interpreter::new();
        let args = [s("skip"), Value::int(5)];
        let mut cursor = interp.cursor(&args);
        cursor.shift().unwrap();
        let nested = Operand::from(Predicate::int());
        assert_eq!(interp.value(&nested, &mut cursor).unwrap(), Value::Bool(true));
    }
}

mod underflow {
    use super::*;

    #[test]
    fn fail_policy_errors() {
        let pred = Predicate::add(Operand::Unset, Operand::Unset);
        let err = Interpreter::new().call_predicate(&pred, &[Value::int(1)]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArgumentUnderflow {
                requested: 1,
                remaining: 0
            }
        );
    }

    #[test]
    fn fail_policy_function_arity() {
        let (func, calls) = recorder("f", 3, Value::Undefined);
        let pred = Predicate::function(func, Value::Undefined);
        let err = Interpreter::new().call_predicate(&pred, &[Value::int(1)]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArgumentUnderflow {
                requested: 3,
                remaining: 1
            }
        );
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn pad_policy_substitutes_undefined() {
        let interp = Interpreter::builder()
            .underflow(UnderflowPolicy::PadUndefined)
            .build();
        let pred = Predicate::add(Operand::Unset, Operand::Unset);
        let Value::Float(f) = interp.call_predicate(&pred, &[Value::int(1)]).unwrap() else {
            panic!("expected float");
        };
        assert!(f.is_nan());

        let (func, calls) = recorder("f", 2, Value::Undefined);
        let pred = Predicate::shift(3, Predicate::function(func, Value::Undefined));
        interp.call_predicate(&pred, &[Value::int(1)]).unwrap();
        assert_eq!(*calls.lock(), vec![vec![Value::Undefined, Value::Undefined]]);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn clone_survives_free_of_original() {
        let mut original = Predicate::and([
            Operand::from(Predicate::string("ab")),
            Operand::from(Predicate::regex("c+", RegexFlags::empty())),
        ]);
        assert_eq!(eval(&original, &[s("abc"), s("cc")]), Value::Bool(true));
        let copy = original.clone();
        original.free();
        assert!(original.is_unset());
        assert_eq!(eval(&copy, &[s("abc"), s("cc")]), Value::Bool(true));
        assert_eq!(eval(&copy, &[s("xbc"), s("cc")]), Value::Bool(false));
    }

    #[test]
    #[should_panic(expected = "eval called on an unset predicate")]
    fn eval_unset_panics() {
        let _ = Interpreter::new().call_predicate(&Predicate::Unset, &[]);
    }
}

fn leaf() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        Just(Predicate::int()),
        Just(Predicate::string("ab")),
        Just(Predicate::charset("123")),
        Just(Predicate::regex("a", RegexFlags::empty())),
        Just(Predicate::equal(Value::int(1))),
        Just(Predicate::member(Value::object([("1", Value::int(2))]))),
        (0usize..3).prop_map(|arity| {
            let func = FunctionValue::new("f", arity, |_, _| Ok(Value::Undefined));
            Predicate::function(func, Value::Undefined)
        }),
    ]
}

/// Operands never supply a literal, so every argument slot is counted.
fn operand(inner: BoxedStrategy<Predicate>) -> impl Strategy<Value = Operand> {
    prop_oneof![Just(Operand::Unset), inner.prop_map(Operand::from)]
}

/// Trees without short-circuiting combinators.
fn tree() -> impl Strategy<Value = Predicate> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        let inner = inner.boxed();
        prop_oneof![
            (operand(inner.clone()), operand(inner.clone())).prop_map(|(l, r)| Predicate::pow(l, r)),
            operand(inner.clone()).prop_map(Predicate::bnot),
            prop::collection::vec(operand(inner.clone()), 0..4).prop_map(Predicate::xor),
            (0usize..3, operand(inner)).prop_map(|(n, o)| Predicate::shift(n, o)),
        ]
    })
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::float),
        "[a-z]{0,4}".prop_map(Value::string),
        Just(Value::symbol("s")),
        Just(Value::bytes(vec![1, 2])),
        Just(Value::array(vec![])),
        Just(Value::object::<&str, _>([])),
        Just(Value::function(FunctionValue::new("g", 0, |_, _| Ok(Value::Undefined)))),
    ]
}

proptest! {
    #[test]
    fn type_mask_matches_category(mask in any::<u32>(), value in any_value()) {
        let flags = TypeFlags::from_bits_truncate(mask);
        let expected = value.type_flags().intersects(flags);
        let result = eval(&Predicate::type_of(flags), &[value]);
        prop_assert_eq!(result, Value::Bool(expected));
    }

    #[test]
    fn arg_count_matches_consumption(pred in tree()) {
        let count = pred.recursive_arg_count();
        let args = vec![Value::int(1); count + 3];
        let interp = Interpreter::new();
        let mut cursor = interp.cursor(&args);
        interp.eval(&pred, &mut cursor).unwrap();
        prop_assert_eq!(cursor.position(), count);
    }
}
