//! # Error Types
//!
//! Errors here are "absent operations": a value was asked for a capability
//! (equality, ordering, combination) that it does not have. In the static API
//! these are compile errors; the dynamic API reports them as values.
//!
//! This aligns with the type-class view: `concat` is only defined on a
//! semigroup. Asking a function to `concat` is not a data error, it is a
//! call to an operation that was never attached.

use thiserror::Error;

use crate::capability::Capability;

/// Errors raised when a capability-gated operation is invoked without
/// the capability it needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The receiver does not expose the operation.
    #[error("{operation} requires {capability}, which this value does not satisfy")]
    Missing {
        operation: &'static str,
        capability: Capability,
    },

    /// A function was expected in a slot but something else was found.
    #[error("{operation} expected a function, found {found}")]
    NotCallable {
        operation: &'static str,
        found: &'static str,
    },

    /// Operands of a combination are of different kinds.
    #[error("{operation} cannot combine {expected} with {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl CapabilityError {
    /// Shorthand for [`CapabilityError::Missing`].
    pub fn missing(operation: &'static str, capability: Capability) -> Self {
        Self::Missing {
            operation,
            capability,
        }
    }
}
