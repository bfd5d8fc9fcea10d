//! # Law Tests
//!
//! Runs every law checker over a small grid of sample pairs. The samples
//! mix empty and non-empty slots so that identity-like inputs are covered.

use product_pair::laws;
use product_pair::Pair;

fn string_pairs() -> Vec<Pair<String, Vec<i32>>> {
    vec![
        Pair::new(String::new(), vec![]),
        Pair::new(String::from("a"), vec![1]),
        Pair::new(String::from("a"), vec![1, 2]),
        Pair::new(String::from("bc"), vec![0]),
    ]
}

fn number_pairs() -> Vec<Pair<String, i32>> {
    vec![
        Pair::new(String::from("x"), -1),
        Pair::new(String::from("x"), 0),
        Pair::new(String::from("y"), 7),
    ]
}

fn each_triple<T>(samples: &[T], mut check: impl FnMut(&T, &T, &T)) {
    for a in samples {
        for b in samples {
            for c in samples {
                check(a, b, c);
            }
        }
    }
}

#[test]
fn setoid_laws() {
    each_triple(&string_pairs(), |a, b, c| laws::setoid(a, b, c).unwrap());
}

#[test]
fn ord_laws() {
    each_triple(&number_pairs(), |a, b, c| laws::ord(a, b, c).unwrap());
    each_triple(&string_pairs(), |a, b, c| laws::ord(a, b, c).unwrap());
}

#[test]
fn ord_laws_with_nan_slots() {
    let samples = [
        Pair::new(f64::NAN, 1.0),
        Pair::new(f64::NAN, f64::NAN),
        Pair::new(0.0, -0.0),
        Pair::new(-0.0, 2.0),
    ];
    each_triple(&samples, |a, b, c| laws::ord(a, b, c).unwrap());
}

#[test]
fn semigroup_associativity() {
    each_triple(&string_pairs(), |a, b, c| {
        laws::semigroup_associativity(a, b, c).unwrap()
    });
}

#[test]
fn semigroupoid_associativity() {
    let a = Pair::new(String::from("a"), 1);
    let b = Pair::new(2, 'b');
    let c = Pair::new('c', vec![3]);
    laws::semigroupoid_associativity(&a, &b, &c).unwrap();
}

#[test]
fn functor_laws() {
    for p in number_pairs() {
        laws::functor_identity(&p).unwrap();
        laws::functor_composition(&p, |n| n * 2, |n| n - 1).unwrap();
    }
}

#[test]
fn bifunctor_laws() {
    for p in number_pairs() {
        laws::bifunctor_identity(&p).unwrap();
        laws::bifunctor_composition(
            &p,
            |s: usize| s + 1,
            |s: String| s.len(),
            |n: i64| n * 3,
            |n: i32| i64::from(n),
        )
        .unwrap();
    }
}

#[test]
fn apply_composition() {
    fn double(n: i32) -> i32 {
        n * 2
    }
    fn describe(n: i32) -> String {
        format!("n={}", n)
    }

    let v = Pair::new(String::from("v"), 21);
    let u = Pair::new(String::from("u"), double as fn(i32) -> i32);
    let a = Pair::new(String::from("a"), describe as fn(i32) -> String);
    laws::apply_composition(&v, &u, &a).unwrap();
}

#[test]
fn chain_associativity() {
    for m in number_pairs() {
        laws::chain_associativity(
            &m,
            |n| Pair::new(format!("f{}", n), n + 1),
            |n| Pair::new(format!("g{}", n), vec![n]),
        )
        .unwrap();
    }
}

#[test]
fn foldable() {
    for p in string_pairs() {
        laws::foldable(&p, |acc: usize, xs: &Vec<i32>| acc + xs.len(), 10).unwrap();
    }
}

#[test]
fn traversable_laws() {
    for p in number_pairs() {
        laws::traversable_identity(&p).unwrap();
    }
    laws::traversable_naturality(&Pair::new(String::from("k"), Some(1))).unwrap();
    laws::traversable_naturality(&Pair::new(String::from("k"), None::<i32>)).unwrap();
}

#[test]
fn extend_and_comonad_laws() {
    for w in number_pairs() {
        laws::extend_associativity(
            &w,
            |p: &Pair<String, usize>| *p.snd() + p.fst().len(),
            |p: &Pair<String, i32>| p.snd().unsigned_abs() as usize,
        )
        .unwrap();
        laws::comonad_left_identity(&w).unwrap();
        laws::comonad_right_identity(&w, |p| p.fst().clone()).unwrap();
    }
}
