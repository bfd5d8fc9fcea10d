//! # Runtime Capabilities
//!
//! The static API expresses capabilities as trait bounds: a `Pair<A, B>`
//! has `equals` exactly when `A: Setoid` and `B: Setoid`. Dynamically-typed
//! values cannot be checked by the compiler, so they carry a small set of
//! flags instead, computed once when the value is built.
//!
//! ## Design
//!
//! - [`Capability`]: one optional interface (Setoid, Ord, Semigroup)
//! - [`Capabilities`]: an immutable set of them
//!
//! `Ord` is a refinement of `Setoid`, so a set that contains `Ord` always
//! contains `Setoid` too:
//!
//! ```
//! use product_core::{Capabilities, Capability};
//!
//! let caps = Capabilities::none().with(Capability::Ord);
//! assert!(caps.contains(Capability::Setoid));
//! assert!(!caps.contains(Capability::Semigroup));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One optional interface a value may satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Capability {
    /// Structural equality.
    Setoid,
    /// Total ordering (implies `Setoid`).
    Ord,
    /// Associative combination.
    Semigroup,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Capability; 3] = [Capability::Setoid, Capability::Ord, Capability::Semigroup];

    fn bit(self) -> u8 {
        match self {
            Capability::Setoid => 0b001,
            Capability::Ord => 0b010,
            Capability::Semigroup => 0b100,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Setoid => "Setoid",
            Capability::Ord => "Ord",
            Capability::Semigroup => "Semigroup",
        };
        f.write_str(name)
    }
}

/// An immutable set of [`Capability`] flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    bits: u8,
}

impl Capabilities {
    /// The empty set.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Every capability.
    pub fn all() -> Self {
        Capability::ALL
            .into_iter()
            .fold(Self::none(), |caps, cap| caps.with(cap))
    }

    /// Return a copy of this set with `cap` added.
    ///
    /// Adding `Ord` also adds `Setoid`.
    pub fn with(self, cap: Capability) -> Self {
        let mut bits = self.bits | cap.bit();
        if cap == Capability::Ord {
            bits |= Capability::Setoid.bit();
        }
        Self { bits }
    }

    /// Check membership.
    pub fn contains(self, cap: Capability) -> bool {
        self.bits & cap.bit() != 0
    }

    /// Capabilities present in both sets.
    pub fn intersection(self, other: Capabilities) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Check if no capability is present.
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |cap| self.contains(*cap))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|cap| cap.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
