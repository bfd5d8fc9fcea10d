//! # Pair - The Canonical Product Type
//!
//! A value of type `Pair<A, B>` always contains exactly two values: one of
//! type `A`, one of type `B`. On top of that sits a fixed set of operations,
//! each governed by a law:
//!
//! | Class | Operations | Requires |
//! |-------|------------|----------|
//! | Setoid | `equals` | both slots Setoid |
//! | Ord | `lte` | both slots Ord |
//! | Semigroupoid | `compose` | - |
//! | Semigroup | `concat` | both slots Semigroup |
//! | Functor, Bifunctor | `map`, `bimap` | - |
//! | Apply, Chain | `ap`, `chain` | first slot Semigroup |
//! | Foldable, Traversable | `reduce`, `traverse` | - |
//! | Extend, Comonad | `extend`, `extract` | - |
//!
//! - [`mod@pair`]: the statically-typed [`Pair`], gated by trait bounds
//! - [`dynamic`]: [`DynPair`](dynamic::DynPair), gated by capabilities
//!   probed at construction
//! - [`laws`]: checkers for the laws above
//!
//! ## Example
//!
//! ```rust
//! use product_pair::{fst, snd, swap, Pair, Show};
//!
//! let p = Pair::new("abc", vec![1, 2, 3]);
//! assert_eq!(p.show(), r#"Pair ("abc") ([1, 2, 3])"#);
//! assert_eq!(swap(p.clone()), Pair::new(vec![1, 2, 3], "abc"));
//! assert_eq!(fst(p.clone()), "abc");
//! assert_eq!(snd(p), vec![1, 2, 3]);
//! ```

pub mod dynamic;
pub mod laws;
pub mod pair;

// Re-export key types at crate root for convenience
pub use dynamic::{DynPair, Value};
pub use laws::LawViolation;
pub use pair::{fst, pair, snd, swap, Pair};
pub use product_core::{
    Capabilities, Capability, CapabilityError, Functor, Orderable, Semigroup, Setoid, Show,
};
