//! Unit tests for the core cursor factory.
//!
//! - [`FunctionCursor`]: cursors built from `peek` and `poke` closures
//! - [`Cursor`] provided methods: `modify`, `modify_with`, `update`,
//!   `update_with`, `update_identity`
//! - [`field_cursor!`] macro: cursors on struct fields

use std::cell::Cell;
use std::sync::Arc;

use peekpoke::cursor::{Cursor, FunctionCursor, cursor, passthrough};
use peekpoke::field_cursor;
use peekpoke::identical::Identical;
use peekpoke::record;
use peekpoke::value::Value;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Document {
    title: Arc<str>,
    revision: u32,
}

fn peek_foo_bar(parent: &Value) -> Option<Value> {
    parent.get("foo").and_then(|foo| foo.get("bar")).cloned()
}

fn poke_foo_bar(parent: Value, bar: Option<Value>) -> Value {
    let foo = parent.get("foo").cloned().unwrap_or_default();
    parent.with("foo", foo.with_option("bar", bar))
}

fn double(value: Option<Value>) -> Option<Value> {
    value
        .and_then(|value| value.as_f64())
        .map(|value| Value::from(2.0 * value))
}

// =============================================================================
// FunctionCursor Tests
// =============================================================================

/// The foo.bar cursor from hand-written peek/poke functions
#[test]
fn test_generic_cursor_doubles_nested_value() {
    let foo_bar = cursor(peek_foo_bar, poke_foo_bar);
    let output = foo_bar.modify(
        Value::from(record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 }),
        double,
    );
    assert_eq!(
        output,
        Value::from(record! { "foo" => record! { "a" => 1, "bar" => 6 }, "b" => 5 })
    );
}

#[test]
fn test_generic_cursor_over_a_sequence() {
    let double_foo_bar = cursor(peek_foo_bar, poke_foo_bar).update(double);

    let outputs: Vec<String> = [
        record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 },
        record! { "foo" => record! { "a" => 2, "bar" => 5 }, "b" => 7 },
    ]
    .into_iter()
    .map(Value::from)
    .map(double_foo_bar)
    .map(|output| output.to_string())
    .collect();

    assert_eq!(
        outputs,
        vec![
            "{ b: 5, foo: { a: 1, bar: 6 } }",
            "{ b: 7, foo: { a: 2, bar: 10 } }",
        ]
    );
}

#[test]
fn test_generic_cursor_tolerates_missing_path() {
    let foo_bar = cursor(peek_foo_bar, poke_foo_bar);
    let parent = Value::from(record! { "b" => 5 });

    assert_eq!(foo_bar.peek(&parent), None);
    // double(None) is None: nothing changes
    let output = foo_bar.modify(parent.clone(), double);
    assert!(output.identical(&parent));
}

#[test]
fn test_generic_cursor_on_null_parent() {
    let foo_bar = cursor(peek_foo_bar, poke_foo_bar);
    let output = foo_bar.modify(Value::Null, |_| Some(Value::from(1)));
    assert_eq!(
        output,
        Value::from(record! { "foo" => record! { "bar" => 1 } })
    );
}

#[test]
fn test_function_cursor_does_not_modify_original() {
    let x = FunctionCursor::new(
        |point: &Point| point.x,
        |point: Point, x: i32| Point { x, ..point },
    );

    let point = Point { x: 10, y: 20 };
    let updated = x.modify(point.clone(), |x| x + 1);
    assert_eq!(point, Point { x: 10, y: 20 });
    assert_eq!(updated, Point { x: 11, y: 20 });
}

#[test]
fn test_poke_is_skipped_when_child_is_unchanged() {
    let pokes = Cell::new(0);
    let title = FunctionCursor::new(
        |document: &Document| Arc::clone(&document.title),
        |document: Document, title: Arc<str>| {
            pokes.set(pokes.get() + 1);
            Document { title, ..document }
        },
    );

    let document = Document {
        title: Arc::from("draft"),
        revision: 1,
    };

    let same = title.modify(document.clone(), |title| title);
    assert_eq!(pokes.get(), 0);
    assert!(same.title.identical(&document.title));

    // equal contents but a new allocation: not identical, so poke runs
    let rebuilt = title.modify(document.clone(), |title| Arc::from(&*title));
    assert_eq!(pokes.get(), 1);
    assert_eq!(rebuilt, document);
    assert!(!rebuilt.title.identical(&document.title));
}

#[test]
fn test_peek_only_passthrough() {
    let observed = Cell::new(None);
    let x = FunctionCursor::peek_only(|point: &Point| point.x);

    let output = x.modify(Point { x: 4, y: 5 }, |x| {
        observed.set(Some(x));
        x * 10
    });

    assert_eq!(observed.get(), Some(4));
    assert_eq!(output, Point { x: 4, y: 5 });
}

#[test]
fn test_passthrough_returns_parent() {
    assert_eq!(passthrough(Point { x: 1, y: 2 }, 99), Point { x: 1, y: 2 });
}

// =============================================================================
// Updater Tests
// =============================================================================

#[test]
fn test_update_is_reusable() {
    let increment = field_cursor!(Point, x).update(|x| x + 1);
    assert_eq!(increment(Point { x: 0, y: 0 }), Point { x: 1, y: 0 });
    assert_eq!(increment(Point { x: 41, y: 0 }), Point { x: 42, y: 0 });
}

#[test]
fn test_update_identity_returns_parent() {
    let parent = Value::from(record! { "foo" => record! { "bar" => 1 } });
    let unchanged = cursor(peek_foo_bar, poke_foo_bar).update_identity();
    assert!(unchanged(parent.clone()).identical(&parent));
}

#[test]
fn test_update_identity_skips_poke_for_nan_child() {
    let pokes = Cell::new(0);
    let first = FunctionCursor::new(
        |pair: &(f64, i32)| pair.0,
        |pair: (f64, i32), first: f64| {
            pokes.set(pokes.get() + 1);
            (first, pair.1 + 1)
        },
    );

    let (value, counter) = first.update_identity()((f64::NAN, 0));

    assert!(value.is_nan());
    assert_eq!(counter, 0);
    assert_eq!(pokes.get(), 0);
}

#[test]
fn test_modify_with_forwards_context() {
    let y = field_cursor!(Point, y);
    let output = y.modify_with(Point { x: 0, y: 3 }, (2, 1), |y, (times, plus)| y * times + plus);
    assert_eq!(output, Point { x: 0, y: 7 });
}

#[test]
fn test_update_with_uses_extra_argument_per_call() {
    let scale = field_cursor!(Point, x).update_with(|x: i32, factor: i32| x * factor);

    let outputs: Vec<Point> = vec![Point { x: 1, y: 0 }, Point { x: 2, y: 0 }]
        .into_iter()
        .zip([10, 100])
        .map(|(point, factor)| scale(point, factor))
        .collect();

    assert_eq!(outputs, vec![Point { x: 10, y: 0 }, Point { x: 200, y: 0 }]);
}

#[test]
#[should_panic(expected = "transform failed")]
fn test_transform_panic_propagates() {
    let x = field_cursor!(Point, x);
    let _ = x.modify(Point { x: 0, y: 0 }, |_| -> i32 { panic!("transform failed") });
}

// =============================================================================
// field_cursor! Tests
// =============================================================================

#[rstest]
#[case(i32::MAX)]
#[case(i32::MIN)]
#[case(0)]
fn test_field_cursor_peek(#[case] value: i32) {
    let x = field_cursor!(Point, x);
    assert_eq!(x.peek(&Point { x: value, y: 1 }), value);
}

#[rstest]
#[case(1, 2, 3)]
#[case(-5, 5, 0)]
fn test_field_cursor_modify(#[case] x: i32, #[case] add: i32, #[case] expected: i32) {
    let cursor = field_cursor!(Point, x);
    let output = cursor.modify(Point { x, y: 9 }, |x| x + add);
    assert_eq!(output, Point { x: expected, y: 9 });
}

#[test]
fn test_field_cursor_with_string_field() {
    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        name: String,
        age: u32,
    }

    let name = field_cursor!(Person, name);
    let person = Person {
        name: "alice".to_string(),
        age: 30,
    };

    let upper = name.modify(person, |name| name.to_uppercase());
    assert_eq!(upper.name, "ALICE");
    assert_eq!(upper.age, 30);
}
