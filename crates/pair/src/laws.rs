//! # Law Checkers
//!
//! Every operation on [`Pair`] is governed by an algebraic law. These
//! functions check one law against concrete sample values and report the
//! first violation, in the style of a property test that the caller
//! feeds with inputs.
//!
//! ```
//! use product_pair::{laws, Pair};
//!
//! let a = Pair::new(String::from("a"), vec![1]);
//! let b = Pair::new(String::from("b"), vec![2]);
//! let c = Pair::new(String::from("c"), vec![3]);
//!
//! laws::semigroup_associativity(&a, &b, &c).unwrap();
//! laws::setoid(&a, &b, &c).unwrap();
//! ```
//!
//! Checks emit `tracing` events: `debug` for each law checked, `warn`
//! when one fails.

use std::fmt::Debug;

use thiserror::Error;

use product_core::{Orderable, Semigroup, Setoid};

use crate::Pair;

/// A law that did not hold for the supplied samples.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{law} violated: {detail}")]
pub struct LawViolation {
    /// Name of the law, e.g. `"Semigroup associativity"`.
    pub law: &'static str,
    /// The values involved.
    pub detail: String,
}

fn verdict(
    law: &'static str,
    holds: bool,
    detail: impl FnOnce() -> String,
) -> Result<(), LawViolation> {
    if holds {
        tracing::debug!(law, "law holds");
        return Ok(());
    }
    let detail = detail();
    tracing::warn!(law, %detail, "law violated");
    Err(LawViolation { law, detail })
}

// ============================================================================
// Setoid / Ord
// ============================================================================

/// Reflexivity, symmetry and transitivity of `equals`.
pub fn setoid<T: Setoid + Debug>(a: &T, b: &T, c: &T) -> Result<(), LawViolation> {
    verdict("Setoid reflexivity", a.equals(a), || format!("{:?}", a))?;
    verdict("Setoid symmetry", a.equals(b) == b.equals(a), || {
        format!("{:?}, {:?}", a, b)
    })?;
    let chained = a.equals(b) && b.equals(c);
    verdict("Setoid transitivity", !chained || a.equals(c), || {
        format!("{:?}, {:?}, {:?}", a, b, c)
    })
}

/// Totality, antisymmetry and transitivity of `lte`.
pub fn ord<T: Orderable + Debug>(a: &T, b: &T, c: &T) -> Result<(), LawViolation> {
    verdict("Ord totality", a.lte(b) || b.lte(a), || format!("{:?}, {:?}", a, b))?;
    let both = a.lte(b) && b.lte(a);
    verdict("Ord antisymmetry", !both || a.equals(b), || {
        format!("{:?}, {:?}", a, b)
    })?;
    let chained = a.lte(b) && b.lte(c);
    verdict("Ord transitivity", !chained || a.lte(c), || {
        format!("{:?}, {:?}, {:?}", a, b, c)
    })
}

// ============================================================================
// Semigroupoid / Semigroup
// ============================================================================

/// `(a ∘ b) ∘ c ≡ a ∘ (b ∘ c)` for pair composition.
pub fn semigroupoid_associativity<A, B, C, D>(
    a: &Pair<A, B>,
    b: &Pair<B, C>,
    c: &Pair<C, D>,
) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone,
    C: Clone,
    D: Clone + Setoid + Debug,
{
    let lhs = a.clone().compose(b.clone()).compose(c.clone());
    let rhs = a.clone().compose(b.clone().compose(c.clone()));
    verdict("Semigroupoid associativity", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

/// `(a ++ b) ++ c ≡ a ++ (b ++ c)`.
pub fn semigroup_associativity<T>(a: &T, b: &T, c: &T) -> Result<(), LawViolation>
where
    T: Semigroup + Setoid + Clone + Debug,
{
    let lhs = a.clone().concat(b.clone()).concat(c.clone());
    let rhs = a.clone().concat(b.clone().concat(c.clone()));
    verdict("Semigroup associativity", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

// ============================================================================
// Functor / Bifunctor
// ============================================================================

/// `p.map(id) ≡ p`.
pub fn functor_identity<A, B>(p: &Pair<A, B>) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone + Setoid + Debug,
{
    let mapped = p.clone().map(|x| x);
    verdict("Functor identity", mapped.equals(p), || format!("{:?}", p))
}

/// `p.map(|x| g(f(x))) ≡ p.map(f).map(g)`.
pub fn functor_composition<A, B, C, D>(
    p: &Pair<A, B>,
    f: impl Fn(B) -> C,
    g: impl Fn(C) -> D,
) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone,
    D: Setoid + Debug,
{
    let lhs = p.clone().map(|x| g(f(x)));
    let rhs = p.clone().map(&f).map(&g);
    verdict("Functor composition", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

/// `p.bimap(id, id) ≡ p`.
pub fn bifunctor_identity<A, B>(p: &Pair<A, B>) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone + Setoid + Debug,
{
    let mapped = p.clone().bimap(|x| x, |y| y);
    verdict("Bifunctor identity", mapped.equals(p), || format!("{:?}", p))
}

/// `p.bimap(|a| f(g(a)), |b| h(i(b))) ≡ p.bimap(g, i).bimap(f, h)`.
pub fn bifunctor_composition<A, B, C, D, E, G>(
    p: &Pair<A, B>,
    f: impl Fn(C) -> E,
    g: impl Fn(A) -> C,
    h: impl Fn(D) -> G,
    i: impl Fn(B) -> D,
) -> Result<(), LawViolation>
where
    A: Clone,
    B: Clone,
    E: Setoid + Debug,
    G: Setoid + Debug,
{
    let lhs = p.clone().bimap(|a| f(g(a)), |b| h(i(b)));
    let rhs = p.clone().bimap(&g, &i).bimap(&f, &h);
    verdict("Bifunctor composition", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

// ============================================================================
// Apply / Chain
// ============================================================================

/// `v.ap(u.ap(a.map(compose))) ≡ v.ap(u).ap(a)`.
///
/// Functions are passed as `fn` pointers so the samples can be cloned.
pub fn apply_composition<A, X, Y, Z>(
    v: &Pair<A, X>,
    u: &Pair<A, fn(X) -> Y>,
    a: &Pair<A, fn(Y) -> Z>,
) -> Result<(), LawViolation>
where
    A: Semigroup + Setoid + Clone + Debug,
    X: Clone,
    Z: Setoid + Debug,
{
    let composed = a
        .clone()
        .map(|f: fn(Y) -> Z| move |g: fn(X) -> Y| move |x: X| f(g(x)));
    let lhs = v.clone().ap(u.clone().ap(composed));
    let rhs = v.clone().ap(u.clone()).ap(a.clone());
    verdict("Apply composition", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

/// `m.chain(f).chain(g) ≡ m.chain(|x| f(x).chain(g))`.
pub fn chain_associativity<A, B, C, D>(
    m: &Pair<A, B>,
    f: impl Fn(B) -> Pair<A, C>,
    g: impl Fn(C) -> Pair<A, D>,
) -> Result<(), LawViolation>
where
    A: Semigroup + Setoid + Clone + Debug,
    B: Clone,
    D: Setoid + Debug,
{
    let lhs = m.clone().chain(&f).chain(&g);
    let rhs = m.clone().chain(|x| f(x).chain(&g));
    verdict("Chain associativity", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

// ============================================================================
// Foldable / Traversable
// ============================================================================

/// `p.reduce(f, x)` agrees with folding the one-element sequence `[snd]`.
pub fn foldable<A, B, C>(
    p: &Pair<A, B>,
    f: impl Fn(C, &B) -> C,
    initial: C,
) -> Result<(), LawViolation>
where
    C: Clone + Setoid + Debug,
{
    let lhs = p.reduce(&f, initial.clone());
    let rhs = std::iter::once(p.snd()).fold(initial, &f);
    verdict("Foldable", lhs.equals(&rhs), || format!("{:?} ≠ {:?}", lhs, rhs))
}

/// Traversing into `Option` with `Some` is the same as wrapping in `Some`.
pub fn traversable_identity<A, B>(p: &Pair<A, B>) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone + Setoid + Debug,
{
    let traversed = p.clone().traverse(Some);
    let wrapped = Some(p.clone());
    verdict("Traversable identity", traversed.equals(&wrapped), || {
        format!("{:?} ≠ {:?}", traversed, wrapped)
    })
}

/// Naturality against the `Option → Vec` transformation:
/// `t(u.traverse(id)) ≡ u.traverse(t)`.
pub fn traversable_naturality<A, B>(u: &Pair<A, Option<B>>) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone + Setoid + Debug,
{
    fn to_vec<T>(opt: Option<T>) -> Vec<T> {
        opt.into_iter().collect()
    }

    let lhs = to_vec(u.clone().traverse(|x| x));
    let rhs = u.clone().traverse(to_vec);
    verdict("Traversable naturality", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

// ============================================================================
// Extend / Comonad
// ============================================================================

/// `w.extend(g).extend(f) ≡ w.extend(|w| f(&w.extend(g)))`.
pub fn extend_associativity<A, B, C, D>(
    w: &Pair<A, B>,
    f: impl Fn(&Pair<A, C>) -> D,
    g: impl Fn(&Pair<A, B>) -> C,
) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone,
    D: Setoid + Debug,
{
    let lhs = w.clone().extend(&g).extend(&f);
    let rhs = w.clone().extend(|inner| f(&inner.clone().extend(&g)));
    verdict("Extend associativity", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}

/// `w.extend(extract) ≡ w`.
pub fn comonad_left_identity<A, B>(w: &Pair<A, B>) -> Result<(), LawViolation>
where
    A: Clone + Setoid + Debug,
    B: Clone + Setoid + Debug,
{
    let lhs = w.clone().extend(|inner| inner.clone().extract());
    verdict("Comonad left identity", lhs.equals(w), || {
        format!("{:?} ≠ {:?}", lhs, w)
    })
}

/// `w.extend(f).extract() ≡ f(w)`.
pub fn comonad_right_identity<A, B, C>(
    w: &Pair<A, B>,
    f: impl Fn(&Pair<A, B>) -> C,
) -> Result<(), LawViolation>
where
    A: Clone,
    B: Clone,
    C: Setoid + Debug,
{
    let lhs = w.clone().extend(&f).extract();
    let rhs = f(w);
    verdict("Comonad right identity", lhs.equals(&rhs), || {
        format!("{:?} ≠ {:?}", lhs, rhs)
    })
}
