//! Tests for multi-level cursors.
//!
//! Deeper paths are built three ways, and all three must agree:
//!
//! - nested updaters: `outer.update(inner.update(f))`
//! - [`Cursor::compose`]: `outer.compose(inner).update(f)`
//! - the [`compose!`] / [`pipe!`] macros over single-level updaters

use peekpoke::cursor::{Cursor, into, prop_cursor};
use peekpoke::identical::Identical;
use peekpoke::value::{Record, Value};
use peekpoke::{compose, pipe, record};
use rstest::{fixture, rstest};

fn double(value: Option<Value>) -> Option<Value> {
    value
        .and_then(|value| value.as_f64())
        .map(|value| Value::from(2.0 * value))
}

#[fixture]
fn nested() -> Record {
    record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 }
}

fn expected() -> Record {
    record! { "foo" => record! { "a" => 1, "bar" => 6 }, "b" => 5 }
}

// =============================================================================
// Nested Updaters
// =============================================================================

#[rstest]
fn test_nested_updaters_double_foo_bar(nested: Record) {
    let double_bar = prop_cursor::<Option<Value>, _>("bar").update(double);
    let double_foo_bar = prop_cursor::<Record, _>("foo").update(double_bar);

    assert_eq!(double_foo_bar(nested), expected());
}

#[rstest]
fn test_nested_updaters_keep_siblings_shared(nested: Record) {
    let sibling = record! { "deep" => 1 };
    let parent = nested.with("sibling", sibling.clone());

    let double_foo_bar =
        prop_cursor::<Record, _>("foo").update(prop_cursor::<Option<Value>, _>("bar").update(double));
    let output = double_foo_bar(parent);

    match output.get("sibling") {
        Some(Value::Record(shared)) => assert!(shared.identical(&sibling)),
        other => panic!("unexpected sibling: {other:?}"),
    }
}

#[rstest]
fn test_inner_no_op_returns_top_level_parent(nested: Record) {
    let untouched =
        prop_cursor::<Record, _>("foo").update(prop_cursor::<Option<Value>, _>("bar").update(|v| v));

    let output = untouched(nested.clone());
    assert!(output.identical(&nested));
}

#[test]
fn test_nested_updaters_create_missing_levels() {
    let set_bar = prop_cursor::<Record, _>("foo")
        .update(prop_cursor::<Option<Value>, _>("bar").update(|_| Some(Value::from("set"))));

    assert_eq!(
        set_bar(record! { "b" => 5 }),
        record! { "b" => 5, "foo" => record! { "bar" => "set" } }
    );
}

// =============================================================================
// Cursor::compose
// =============================================================================

#[rstest]
fn test_composed_cursor_doubles_foo_bar(nested: Record) {
    let foo_bar = prop_cursor::<Record, _>("foo").compose(prop_cursor::<Option<Value>, _>("bar"));

    assert_eq!(foo_bar.peek(&nested), Some(Value::from(3)));
    assert_eq!(foo_bar.modify(nested, double), expected());
}

#[rstest]
fn test_composed_cursor_matches_nested_updaters(nested: Record) {
    let composed = prop_cursor::<Record, _>("foo")
        .compose(prop_cursor::<Option<Value>, _>("bar"))
        .update(double);
    let nested_updater =
        prop_cursor::<Record, _>("foo").update(prop_cursor::<Option<Value>, _>("bar").update(double));

    assert_eq!(composed(nested.clone()), nested_updater(nested));
}

#[rstest]
fn test_composed_cursor_identity_returns_parent(nested: Record) {
    let unchanged = prop_cursor::<Record, _>("foo")
        .compose(prop_cursor::<Option<Value>, _>("bar"))
        .update_identity();

    assert!(unchanged(nested.clone()).identical(&nested));
}

#[test]
fn test_three_level_composition() {
    let a_b_c = prop_cursor::<Record, _>("a")
        .compose(prop_cursor::<Option<Value>, _>("b"))
        .compose(prop_cursor::<Option<Value>, _>("c"));

    let parent = record! { "a" => record! { "b" => record! { "c" => 1, "d" => 2 } } };

    assert_eq!(a_b_c.peek(&parent), Some(Value::from(1)));
    assert_eq!(
        a_b_c.modify(parent.clone(), |_| None),
        record! { "a" => record! { "b" => record! { "d" => 2 } } }
    );
    assert!(a_b_c.modify(parent.clone(), |c| c).identical(&parent));
}

#[test]
fn test_composed_cursor_on_missing_path_is_a_no_op() {
    let foo_bar = prop_cursor::<Record, _>("foo").compose(prop_cursor::<Option<Value>, _>("bar"));
    let parent = record! { "b" => 5 };

    assert_eq!(foo_bar.peek(&parent), None);
    assert!(foo_bar.modify(parent.clone(), double).identical(&parent));
}

// =============================================================================
// compose! / pipe!
// =============================================================================

#[rstest]
fn test_compose_macro_chains_updaters_at_one_level(nested: Record) {
    let double_foo_bar =
        prop_cursor::<Record, _>("foo").update(prop_cursor::<Option<Value>, _>("bar").update(double));
    let bump_b = prop_cursor::<Record, _>("b")
        .update(|b: Option<Value>| b.and_then(|b| b.as_f64()).map(|b| Value::from(b + 1.0)));

    let both = compose!(bump_b, double_foo_bar);

    assert_eq!(
        both(nested),
        record! { "foo" => record! { "a" => 1, "bar" => 6 }, "b" => 6 }
    );
}

#[rstest]
fn test_compose_macro_builds_deeper_transform(nested: Record) {
    // compose! applied to the transforms of a single nested updater
    let inner = prop_cursor::<Option<Value>, _>("bar").update(double);
    let tag = into::<Option<Value>, _>("tagged").update(|_| Value::from(true));
    let foo = prop_cursor::<Record, _>("foo").update(compose!(tag, inner));

    assert_eq!(
        foo(nested),
        record! { "foo" => record! { "a" => 1, "bar" => 6, "tagged" => true }, "b" => 5 }
    );
}

#[rstest]
fn test_pipe_through_updaters(nested: Record) {
    let double_foo_bar =
        prop_cursor::<Record, _>("foo").update(prop_cursor::<Option<Value>, _>("bar").update(double));
    let drop_b = prop_cursor::<Record, _>("b").update(|_| None);

    assert_eq!(
        pipe!(nested, double_foo_bar, drop_b),
        record! { "foo" => record! { "a" => 1, "bar" => 6 } }
    );
}

#[rstest]
fn test_pipe_of_no_ops_returns_parent(nested: Record) {
    let keep_foo = prop_cursor::<Record, _>("foo").update_identity();
    let keep_b = prop_cursor::<Record, _>("b").update_identity();

    let output = pipe!(nested.clone(), keep_foo, keep_b);
    assert!(output.identical(&nested));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_composed_cursor_over_a_sequence() {
    let double_foo_bar = prop_cursor::<Record, _>("foo")
        .compose(prop_cursor::<Option<Value>, _>("bar"))
        .update(double);

    let outputs: Vec<Record> = vec![
        record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 },
        record! { "foo" => record! { "a" => 2, "bar" => 5 }, "b" => 7 },
    ]
    .into_iter()
    .map(double_foo_bar)
    .collect();

    assert_eq!(
        outputs,
        vec![
            record! { "foo" => record! { "a" => 1, "bar" => 6 }, "b" => 5 },
            record! { "foo" => record! { "a" => 2, "bar" => 10 }, "b" => 7 },
        ]
    );
}
