//! Integration tests for placeholder-based partial application.
//!
//! Covers substitution of positional and named placeholders, index shifting
//! across calls, and invocation once every hole is filled.

#![cfg(feature = "compose")]

use pointfree::args;
use pointfree::compose::{Argument, DeferredCall, Placeholder, Step, bind};
use pointfree::value::{Arguments, Function, Value};
use pointfree::CallError;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns every positional argument as a tuple, followed by a tuple of the
/// keyword values in name order.
fn record(calls: Arc<AtomicUsize>) -> Function {
    Function::new("record", move |arguments: Arguments| {
        calls.fetch_add(1, Ordering::SeqCst);
        let (positional, keyword) = arguments.into_parts();
        Ok(Value::from((
            Value::Tuple(positional),
            Value::Tuple(keyword.into_values().collect()),
        )))
    })
}

fn hole(index: usize) -> Argument {
    Argument::Hole(Placeholder::index(index))
}

fn named(name: &str) -> Argument {
    Argument::Hole(Placeholder::named(name))
}

fn bound(value: impl Into<Value>) -> Argument {
    Argument::Bound(value.into())
}

// =============================================================================
// Full supply
// =============================================================================

#[rstest]
fn test_call_without_placeholders_invokes_immediately() {
    let calls = Arc::new(AtomicUsize::new(0));
    let call = bind(record(Arc::clone(&calls)), [bound(1), bound("x")], []);

    let step = call.apply(&Arguments::new()).unwrap();

    assert_eq!(
        step,
        Step::Done(Value::from((
            Value::tuple([Value::Int(1), Value::from("x")]),
            Value::tuple([]),
        )))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_full_supply_matches_direct_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let target = record(Arc::clone(&calls));
    let call = bind(target.clone(), [hole(0), bound(2)], [("k".to_string(), named("k"))]);

    let deferred = call.apply(&args![1; k = 3]).unwrap().done();
    let direct = target.call(args![1, 2; k = 3]).unwrap();

    assert_eq!(deferred, Some(direct));
}

// =============================================================================
// Positional shifting
// =============================================================================

#[rstest]
fn test_out_of_range_index_shifts_by_supplied_count() {
    let call = bind(record(Arc::new(AtomicUsize::new(0))), [hole(2)], []);

    let pending = call.apply(&args!["a", "b"]).unwrap().pending().unwrap();

    assert_eq!(pending.positional(), &[hole(0)]);
}

#[rstest]
fn test_shifted_placeholder_is_filled_by_next_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let call = bind(record(Arc::clone(&calls)), [hole(2)], []);

    let pending = call.apply(&args!["a", "b"]).unwrap().pending().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let result = pending.apply(&args!["c"]).unwrap().done().unwrap();
    assert_eq!(
        result,
        Value::from((Value::tuple([Value::from("c")]), Value::tuple([])))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case(0, Step::Done(Value::Int(10)))]
#[case(1, Step::Done(Value::Int(20)))]
fn test_index_selects_supplied_argument(#[case] index: usize, #[case] expected: Step<DeferredCall>) {
    let first = Function::new("first", |arguments| Ok(arguments.value("first", 0)?.clone()));
    let call = bind(first, [hole(index)], []);

    assert_eq!(call.apply(&args![10, 20]), Ok(expected));
}

#[rstest]
fn test_same_index_twice_receives_same_value() {
    let calls = Arc::new(AtomicUsize::new(0));
    let call = bind(record(calls), [hole(0), hole(0)], []);

    let result = call.apply(&args![7]).unwrap().done().unwrap();

    assert_eq!(
        result,
        Value::from((Value::from((7, 7)), Value::tuple([])))
    );
}

// =============================================================================
// Named placeholders
// =============================================================================

#[rstest]
fn test_absent_name_keeps_placeholder() {
    let call = bind(
        record(Arc::new(AtomicUsize::new(0))),
        [named("x")],
        [("y".to_string(), named("y"))],
    );

    let pending = call.apply(&args![; x = 1]).unwrap().pending().unwrap();

    assert_eq!(pending.positional(), &[bound(1)]);
    assert_eq!(pending.keywords().get("y"), Some(&named("y")));
    assert_eq!(pending.holes().collect::<Vec<_>>(), vec![&Placeholder::named("y")]);
}

#[rstest]
fn test_named_placeholder_ignores_positional_arguments() {
    let call = bind(record(Arc::new(AtomicUsize::new(0))), [named("x")], []);

    let pending = call.apply(&args![1, 2, 3]).unwrap().pending().unwrap();

    assert_eq!(pending.positional(), &[named("x")]);
}

#[rstest]
fn test_unused_keywords_are_not_forwarded() {
    let calls = Arc::new(AtomicUsize::new(0));
    let call = bind(record(calls), [named("x")], []);

    let result = call.apply(&args![; x = 1, unused = 2]).unwrap().done().unwrap();

    assert_eq!(
        result,
        Value::from((Value::tuple([Value::Int(1)]), Value::tuple([])))
    );
}

#[rstest]
fn test_greeting_is_completed_over_two_calls() {
    let greet = Function::new("greet", |arguments| {
        Ok(Value::from(format!(
            "{} {}",
            arguments.string("greet", 0)?,
            arguments.keyword_value("greet", "name")?
        )))
    });
    let call = DeferredCall::new(greet)
        .hole(Placeholder::index(0))
        .keyword_hole("name", Placeholder::named("who"));

    let waiting = call.apply(&args!["Hello"]).unwrap().pending().unwrap();
    let greeting = waiting.apply(&args![; who = "Bob"]).unwrap().done();

    assert_eq!(greeting, Some(Value::from("Hello Bob")));
}

// =============================================================================
// Immutability and errors
// =============================================================================

#[rstest]
fn test_original_call_is_unchanged_by_application() {
    let call = bind(record(Arc::new(AtomicUsize::new(0))), [hole(0), named("x")], []);
    let snapshot = call.clone();

    let _ = call.apply(&args![1]).unwrap();
    let _ = call.apply(&args![; x = 2]).unwrap();

    assert_eq!(call, snapshot);
}

#[rstest]
fn test_target_error_propagates() {
    let failing = Function::new("failing", |_| Err(CallError::failed("failing", "boom")));
    let call = bind(failing, [hole(0)], []);

    assert_eq!(
        call.apply(&args![1]),
        Err(CallError::failed("failing", "boom"))
    );
}

#[rstest]
fn test_pending_call_as_function_returns_function_value() {
    let call = bind(record(Arc::new(AtomicUsize::new(0))), [named("x")], []);
    let function = Function::from(call);

    let result = function.call(Arguments::new()).unwrap();

    assert!(result.is_function());
    assert!(result.call(args![; x = 1]).is_ok());
}

#[rstest]
fn test_display_renders_placeholders() {
    let call = bind(
        record(Arc::new(AtomicUsize::new(0))),
        [bound(1), hole(0)],
        [("rate".to_string(), named("rate"))],
    );

    assert_eq!(call.to_string(), "record(1, _0, rate=_rate)");
}
