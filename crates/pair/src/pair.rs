//! # Pair - The Canonical Product Type
//!
//! A `Pair<A, B>` always holds exactly two values: one of type `A` (`fst`)
//! and one of type `B` (`snd`). It never changes after construction; every
//! "update" builds a new pair.
//!
//! ## Conditional Capabilities
//!
//! Which operations a pair offers depends on what its slots offer:
//!
//! | Operation | Available when |
//! |-----------|----------------|
//! | `equals` ([`Setoid`]) | `A: Setoid` and `B: Setoid` |
//! | `lte` ([`Orderable`]) | `A: Orderable` and `B: Orderable` |
//! | `concat` ([`Semigroup`]) | `A: Semigroup` and `B: Semigroup` |
//! | `ap`, `chain` | `A: Semigroup` |
//! | everything else | always |
//!
//! The compiler decides this once per instantiation. Asking for an absent
//! operation does not compile:
//!
//! ```compile_fail
//! use product_pair::{Pair, Setoid};
//!
//! struct Opaque;
//!
//! let p = Pair::new(Opaque, Opaque);
//! p.equals(&p);
//! ```
//!
//! ```compile_fail
//! use product_pair::{Pair, Semigroup};
//!
//! // Numbers have no canonical combination.
//! let p = Pair::new(String::from("abc"), 1);
//! p.concat(Pair::new(String::from("xyz"), 2));
//! ```
//!
//! ## Example
//!
//! ```
//! use product_pair::{Pair, Semigroup, Show};
//!
//! let p = Pair::new(String::from("abc"), vec![1, 2, 3]);
//! let q = Pair::new(String::from("xyz"), vec![4, 5, 6]);
//!
//! assert_eq!(p.concat(q).show(), r#"Pair ("abcxyz") ([1, 2, 3, 4, 5, 6])"#);
//! ```

use std::fmt;

use product_core::{Functor, Orderable, Semigroup, Setoid, Show};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The product of `A` and `B`.
///
/// The derived std traits (`PartialEq`, `Ord`, `Hash`, ...) are gated on the
/// slot types in the same way as the class implementations below; the derived
/// ordering is lexicographic, first slot first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<A, B> {
    fst: A,
    snd: B,
}

impl<A, B> Pair<A, B> {
    /// Create a pair from both slots.
    pub const fn new(fst: A, snd: B) -> Self {
        Self { fst, snd }
    }

    /// Curried construction: fix `fst` now, supply `snd` later.
    ///
    /// ```
    /// use product_pair::Pair;
    ///
    /// let tagged = Pair::of("id");
    /// assert_eq!(tagged(7), Pair::new("id", 7));
    /// ```
    pub fn of(fst: A) -> impl FnOnce(B) -> Pair<A, B> {
        move |snd| Pair::new(fst, snd)
    }

    /// Borrow the first slot.
    pub fn fst(&self) -> &A {
        &self.fst
    }

    /// Borrow the second slot.
    pub fn snd(&self) -> &B {
        &self.snd
    }

    /// Take both slots back out.
    pub fn into_parts(self) -> (A, B) {
        (self.fst, self.snd)
    }

    /// Exchange the slots.
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.snd, self.fst)
    }

    /// Semigroupoid composition, treating a pair as an arrow `A → B`.
    ///
    /// `self.compose(other)` keeps the outer slots and drops the shared
    /// middle: `Pair(x)(y).compose(Pair(v)(w))` is `Pair(x)(w)`. In
    /// function-application order, `compose(f)(g)` is `g.compose(f)`.
    pub fn compose<C>(self, other: Pair<B, C>) -> Pair<A, C> {
        Pair::new(self.fst, other.snd)
    }

    /// Transform the second slot.
    pub fn map<C>(self, f: impl FnOnce(B) -> C) -> Pair<A, C> {
        Pair::new(self.fst, f(self.snd))
    }

    /// Transform both slots independently.
    pub fn bimap<C, D>(self, f: impl FnOnce(A) -> C, g: impl FnOnce(B) -> D) -> Pair<C, D> {
        Pair::new(f(self.fst), g(self.snd))
    }

    /// Apply the function held by `other` to this pair's second slot.
    ///
    /// The first slots are combined as `other.fst ++ self.fst`.
    pub fn ap<C, F>(self, other: Pair<A, F>) -> Pair<A, C>
    where
        A: Semigroup,
        F: FnOnce(B) -> C,
    {
        Pair::new(other.fst.concat(self.fst), (other.snd)(self.snd))
    }

    /// Sequence a pair-producing function, accumulating first slots
    /// left to right.
    pub fn chain<C>(self, f: impl FnOnce(B) -> Pair<A, C>) -> Pair<A, C>
    where
        A: Semigroup,
    {
        let other = f(self.snd);
        Pair::new(self.fst.concat(other.fst), other.snd)
    }

    /// Fold over the second slot, the only element a pair contains.
    pub fn reduce<C>(&self, f: impl FnOnce(C, &B) -> C, initial: C) -> C {
        f(initial, &self.snd)
    }

    /// Run an effectful function on the second slot and re-wrap the
    /// first slot inside the resulting effect.
    ///
    /// The effect context is whatever [`Functor`] `f` returns. The first
    /// slot is cloned into each produced pair.
    ///
    /// ```
    /// use product_pair::Pair;
    ///
    /// let words = Pair::new(123, "foo bar").traverse(|s| s.split(' ').collect::<Vec<_>>());
    /// assert_eq!(words, vec![Pair::new(123, "foo"), Pair::new(123, "bar")]);
    /// ```
    pub fn traverse<F>(self, f: impl FnOnce(B) -> F) -> F::Mapped<Pair<A, F::Item>>
    where
        A: Clone,
        F: Functor,
    {
        let Pair { fst, snd } = self;
        f(snd).fmap(move |c| Pair::new(fst.clone(), c))
    }

    /// Recompute the second slot from the whole pair.
    pub fn extend<C>(self, f: impl FnOnce(&Self) -> C) -> Pair<A, C> {
        let snd = f(&self);
        Pair::new(self.fst, snd)
    }

    /// The focused value: the second slot.
    pub fn extract(self) -> B {
        self.snd
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Case-fold a pair: `pair(f)(Pair(x)(y))` is `f(x, y)`.
pub fn pair<A, B, C>(f: impl FnOnce(A, B) -> C) -> impl FnOnce(Pair<A, B>) -> C {
    move |p| f(p.fst, p.snd)
}

/// The first slot.
pub fn fst<A, B>(p: Pair<A, B>) -> A {
    p.fst
}

/// The second slot.
pub fn snd<A, B>(p: Pair<A, B>) -> B {
    p.snd
}

/// `swap(Pair(x)(y))` is `Pair(y)(x)`.
pub fn swap<A, B>(p: Pair<A, B>) -> Pair<B, A> {
    p.swap()
}

// ============================================================================
// Class instances
// ============================================================================

impl<A: Setoid, B: Setoid> Setoid for Pair<A, B> {
    fn equals(&self, other: &Self) -> bool {
        self.fst.equals(&other.fst) && self.snd.equals(&other.snd)
    }
}

// First slot decides unless equal.
impl<A: Orderable, B: Orderable> Orderable for Pair<A, B> {
    fn lte(&self, other: &Self) -> bool {
        if self.fst.equals(&other.fst) {
            self.snd.lte(&other.snd)
        } else {
            self.fst.lte(&other.fst)
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Pair<A, B> {
    fn concat(self, other: Self) -> Self {
        Pair::new(self.fst.concat(other.fst), self.snd.concat(other.snd))
    }
}

impl<A: Show, B: Show> Show for Pair<A, B> {
    fn show(&self) -> String {
        format!("Pair ({}) ({})", self.fst.show(), self.snd.show())
    }
}

impl<A, B> Functor for Pair<A, B> {
    type Item = B;
    type Mapped<U> = Pair<A, U>;

    fn fmap<U, F>(self, f: F) -> Pair<A, U>
    where
        F: FnMut(B) -> U,
    {
        self.map(f)
    }
}

impl<A: Show, B: Show> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((fst, snd): (A, B)) -> Self {
        Pair::new(fst, snd)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(p: Pair<A, B>) -> Self {
        p.into_parts()
    }
}

/// A homogeneous pair iterates `fst` then `snd`.
impl<T> IntoIterator for Pair<T, T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.fst, self.snd].into_iter()
    }
}
