//! # Dynamic Pair Tests
//!
//! The same behaviours as `properties.rs`, driven through `DynPair` where
//! capabilities are probed at runtime instead of checked by the compiler.

use product_pair::dynamic::{DynPair, Value};
use product_pair::{Capabilities, Capability, CapabilityError, Show};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("product_pair=trace")
        .with_test_writer()
        .try_init();
}

fn p(fst: impl Into<Value>, snd: impl Into<Value>) -> DynPair {
    DynPair::new(fst.into(), snd.into())
}

fn sqrt() -> Value {
    Value::function(|v| Value::from(v.as_number().map_or(f64::NAN, f64::sqrt)))
}

fn words(v: Value) -> Vec<Value> {
    v.as_str()
        .unwrap_or_default()
        .split_whitespace()
        .map(Value::from)
        .collect()
}

// ============================================================================
// Capability probing
// ============================================================================

#[test]
fn capabilities_fixed_at_construction() {
    init_tracing();

    let full = p("abc", vec![1, 2, 3]);
    assert_eq!(full.capabilities(), Capabilities::all());
    assert!(full.supports_chain());

    let ordered = p(1, true);
    assert!(ordered.capabilities().contains(Capability::Ord));
    assert!(!ordered.capabilities().contains(Capability::Semigroup));
    assert!(!ordered.supports_chain());
}

#[test]
fn nested_pairs_report_their_own_capabilities() {
    let inner = p("k", Value::function(|v| v));
    let outer = p(inner, "v");
    assert!(!outer.capabilities().contains(Capability::Setoid));
    // The inner function empties the intersection.
    assert!(!outer.capabilities().contains(Capability::Semigroup));
}

#[test]
fn equality_absent_when_slot_lacks_it() {
    init_tracing();

    let opaque = p(Value::function(|v| v), Value::function(|v| v));
    let err = opaque.equals(&opaque.clone()).unwrap_err();
    assert_eq!(err, CapabilityError::missing("equals", Capability::Setoid));
    assert_eq!(
        err.to_string(),
        "equals requires Setoid, which this value does not satisfy"
    );
}

#[test]
fn concat_absent_for_numbers() {
    let err = p("abc", 1).concat(p("xyz", 2)).unwrap_err();
    assert_eq!(err, CapabilityError::missing("concat", Capability::Semigroup));
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn equality_and_order() {
    let x = p("abc", vec![1, 2, 3]);
    assert!(x.equals(&p("abc", vec![1, 2, 3])).unwrap());
    assert!(!x.equals(&p("abc", vec![3, 2, 1])).unwrap());

    let bound = p("b", 2);
    let mut kept = Vec::new();
    for k in ["a", "b", "c"] {
        for n in 1..=3 {
            let candidate = p(k, n);
            if candidate.lte(&bound).unwrap() {
                kept.push(candidate.show());
            }
        }
    }
    assert_eq!(
        kept,
        vec![
            r#"Pair ("a") (1)"#,
            r#"Pair ("a") (2)"#,
            r#"Pair ("a") (3)"#,
            r#"Pair ("b") (1)"#,
            r#"Pair ("b") (2)"#,
        ]
    );
}

#[test]
fn compose_and_concat() {
    let f = p("a", 0);
    let g = p(vec![1, 2, 3], "b");
    assert_eq!(g.compose(f).show(), "Pair ([1, 2, 3]) (0)");

    let joined = p("abc", vec![1, 2, 3]).concat(p("xyz", vec![4, 5, 6])).unwrap();
    assert_eq!(joined.show(), r#"Pair ("abcxyz") ([1, 2, 3, 4, 5, 6])"#);
}

#[test]
fn map_bimap_ap_chain() {
    let upper = |v: Value| Value::from(v.as_str().unwrap_or_default().to_uppercase());
    let root = |v: Value| Value::from(v.as_number().map_or(f64::NAN, f64::sqrt));

    assert_eq!(p("abc", 256).map(root).show(), r#"Pair ("abc") (16)"#);
    assert_eq!(p("abc", 256).bimap(upper, root).show(), r#"Pair ("ABC") (16)"#);

    let applied = p("xyz", 256).ap(p("abc", sqrt())).unwrap();
    assert_eq!(applied.show(), r#"Pair ("abcxyz") (16)"#);

    let chained = p("abc", 256)
        .chain(|n| {
            let shown = n.show();
            DynPair::new(Value::from(shown), root(n))
        })
        .unwrap();
    assert_eq!(chained.show(), r#"Pair ("abc256") (16)"#);
}

#[test]
fn reduce_traverse_extend_extract() {
    let folded = p("abc", vec![4, 5, 6]).reduce(
        |acc: Value, xs| acc.concat(xs.clone()).unwrap_or(Value::Null),
        Value::from(vec![1, 2, 3]),
    );
    assert_eq!(folded.show(), "[1, 2, 3, 4, 5, 6]");

    let traversed: Vec<String> = p(123, "foo bar baz")
        .traverse(words)
        .iter()
        .map(Show::show)
        .collect();
    assert_eq!(
        traversed,
        vec![
            r#"Pair (123) ("foo")"#,
            r#"Pair (123) ("bar")"#,
            r#"Pair (123) ("baz")"#,
        ]
    );

    assert_eq!(p("abc", vec![1, 2, 3]).extract().show(), "[1, 2, 3]");

    let extended = p("abc", 99).extend(|w| {
        w.reduce(|acc: f64, v| acc + v.as_number().unwrap_or(0.0), 1.0)
            .into()
    });
    assert_eq!(extended.show(), r#"Pair ("abc") (100)"#);
}

#[test]
fn swap_reprobes_capabilities() {
    let original = p("abc", 1);
    assert!(original.supports_chain());

    let swapped = original.swap();
    assert!(!swapped.supports_chain());
    assert_eq!(swapped.swap().show(), r#"Pair ("abc") (1)"#);
}

#[test]
fn curried_construction() {
    let make = DynPair::of(Value::from("abc"));
    let built = make(Value::from(vec![1, 2, 3]));
    assert_eq!(built.show(), r#"Pair ("abc") ([1, 2, 3])"#);
    assert!(built.equals(&p("abc", vec![1, 2, 3])).unwrap());
    assert_eq!(built.capabilities(), Capabilities::all());
}

#[test]
fn arrays_order_lexicographically() {
    let short = p("k", vec![1]);
    let long = p("k", vec![1, 0]);
    assert!(short.lte(&long).unwrap());
    assert!(!long.lte(&short).unwrap());
    assert!(!p("k", vec![2]).lte(&p("k", vec![1, 5])).unwrap());
    assert!(p("k", Vec::<i32>::new()).lte(&short).unwrap());
}

#[test]
fn nested_pairs_compare_and_combine() {
    let a = p(p("a", vec![1]), "x");
    let b = p(p("a", vec![1, 0]), "y");
    assert_eq!(a.capabilities(), Capabilities::all());

    assert!(a.equals(&a.clone()).unwrap());
    assert!(!a.equals(&b).unwrap());
    assert!(a.lte(&b).unwrap());
    assert!(!b.lte(&a).unwrap());

    let joined = a.concat(b).unwrap();
    assert_eq!(joined.show(), r#"Pair (Pair ("aa") ([1, 1, 0])) ("xy")"#);
}
