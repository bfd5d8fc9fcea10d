//! Smoke tests for the core crate.
//!
//! These tests verify that the basic vocabulary works:
//! - Standard types are setoids and totally ordered
//! - Strings, vectors and options combine associatively
//! - Capability sets respect the `Ord` implies `Setoid` refinement
//! - Absent operations render readable errors

use product_core::{
    Capabilities, Capability, CapabilityError, Functor, Orderable, Semigroup, Setoid, Show,
};

// ============================================================================
// Class Tests
// ============================================================================

#[test]
fn smoke_setoid_instances() {
    assert!(String::from("abc").equals(&String::from("abc")));
    assert!(vec![1, 2, 3].equals(&vec![1, 2, 3]));
    assert!(!vec![1, 2, 3].equals(&vec![3, 2, 1]));
    assert!(Some('x').equals(&Some('x')));
    assert!(f64::NAN.equals(&f64::NAN));
}

#[test]
fn smoke_total_order_on_vectors() {
    let mut samples = vec![vec![2], vec![1, 5], vec![], vec![1]];
    samples.sort_by(|a, b| {
        if a.equals(b) {
            std::cmp::Ordering::Equal
        } else if a.lte(b) {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        }
    });
    assert_eq!(samples, vec![vec![], vec![1], vec![1, 5], vec![2]]);
}

#[test]
fn smoke_nan_sorts_first() {
    assert!(f64::NAN.lte(&f64::NEG_INFINITY));
    assert!(!f64::NEG_INFINITY.lte(&f64::NAN));
    assert!(0.0_f64.lte(&-0.0) && (-0.0_f64).lte(&0.0));
}

#[test]
fn smoke_semigroup_associativity() {
    let (a, b, c) = (String::from("ab"), String::from(""), String::from("c"));
    let left = a.clone().concat(b.clone()).concat(c.clone());
    let right = a.concat(b.concat(c));
    assert_eq!(left, right);

    let left = Some(vec![1]).concat(None).concat(Some(vec![2]));
    assert_eq!(left, Some(vec![1, 2]));
}

#[test]
fn smoke_show_formats() {
    assert_eq!(256.0_f64.sqrt().show(), "16");
    assert_eq!((-0.0_f64).show(), "-0");
    assert_eq!(f64::NEG_INFINITY.show(), "-Infinity");
    assert_eq!("say \"hi\"".show(), r#""say \"hi\"""#);
    assert_eq!(vec![Some(1), None].show(), "[Just (1), Nothing]");
}

#[test]
fn smoke_functor_instances() {
    assert_eq!(vec![1, 2, 3].fmap(|n| n * 10), vec![10, 20, 30]);
    assert_eq!(Some(4).fmap(|n: i32| n.to_string()), Some(String::from("4")));

    let failed: Result<i32, &str> = Err("nope");
    assert_eq!(failed.fmap(|n| n + 1), Err("nope"));
}

// ============================================================================
// Capability Tests
// ============================================================================

#[test]
fn smoke_capability_refinement() {
    let caps: Capabilities = [Capability::Ord, Capability::Semigroup].into_iter().collect();
    assert_eq!(caps, Capabilities::all());
    assert_eq!(caps.to_string(), "{Setoid, Ord, Semigroup}");
}

#[test]
fn smoke_capability_intersection() {
    let strings = Capabilities::all();
    let numbers = Capabilities::none().with(Capability::Ord);
    let both = strings.intersection(numbers);

    assert!(both.contains(Capability::Setoid));
    assert!(!both.contains(Capability::Semigroup));
    assert!(both.intersection(Capabilities::none()).is_empty());
}

#[test]
fn smoke_error_messages() {
    let err = CapabilityError::missing("concat", Capability::Semigroup);
    assert_eq!(
        err.to_string(),
        "concat requires Semigroup, which this value does not satisfy"
    );

    let err = CapabilityError::NotCallable {
        operation: "ap",
        found: "Number",
    };
    assert_eq!(err.to_string(), "ap expected a function, found Number");
}

#[cfg(feature = "serde")]
#[test]
fn smoke_capabilities_serde() {
    let caps = Capabilities::none().with(Capability::Semigroup);
    let json = serde_json::to_string(&caps).unwrap();
    let back: Capabilities = serde_json::from_str(&json).unwrap();
    assert_eq!(back, caps);
}
