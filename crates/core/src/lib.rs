//! # Core - Law-Governed Type Classes
//!
//! This crate provides the vocabulary that product types are built on:
//!
//! - **Classes**: `Setoid`, `Orderable`, `Semigroup`, `Show`, `Functor`
//!   with instances for standard library types
//! - **Capabilities**: runtime flags for values whose type the compiler
//!   cannot see
//! - **Errors**: first-class "absent operation" failures
//!
//! ## Design Philosophy
//!
//! An operation is available on a value exactly when the value's parts
//! support it. Statically that is a trait bound; dynamically it is a
//! [`Capabilities`] set consulted before delegating.

pub mod capability;
pub mod class;
pub mod error;

// Re-export key types at crate root for convenience
pub use capability::{Capabilities, Capability};
pub use class::{Functor, Orderable, Semigroup, Setoid, Show};
pub use error::CapabilityError;
