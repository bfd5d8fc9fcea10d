//! # Dynamic Pairs
//!
//! The static [`Pair`](crate::Pair) lets the compiler decide which operations
//! exist. When slot types are only known at runtime (values decoded from
//! elsewhere, scripting hosts, heterogeneous collections) the same decision
//! has to be made by probing the values themselves.
//!
//! [`DynPair`] does that probe exactly once, in its constructor, and stores
//! the answer. Optional operations consult the stored [`Capabilities`] and
//! return [`CapabilityError::Missing`] when the operation was never exposed.
//! They never fall back to comparing identities.
//!
//! ```
//! use product_core::Capability;
//! use product_pair::dynamic::{DynPair, Value};
//!
//! let p = DynPair::new(Value::from("abc"), Value::function(|v| v));
//! assert!(!p.capabilities().contains(Capability::Setoid));
//! assert!(p.equals(&p).is_err());
//!
//! // `ap` and `chain` only need the first slot to combine.
//! assert!(p.supports_chain());
//! ```

use std::fmt;
use std::sync::Arc;

use product_core::{Capabilities, Capability, CapabilityError, Functor, Orderable, Setoid, Show};

/// A function stored in a [`Value`].
pub type Func = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A dynamically-typed value.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Pair(Box<DynPair>),
    /// Functions support none of the optional capabilities.
    Function(Func),
}

impl Value {
    /// Wrap a closure.
    pub fn function(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Value::Function(Arc::new(f))
    }

    /// Name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Pair(_) => "Pair",
            Value::Function(_) => "Function",
        }
    }

    /// Probe which optional capabilities this value satisfies.
    ///
    /// Arrays are always semigroups, and are setoids (or ordered) only
    /// when every element is.
    pub fn capabilities(&self) -> Capabilities {
        let ordered = Capabilities::none().with(Capability::Ord);
        match self {
            Value::Null | Value::Bool(_) | Value::Number(_) => ordered,
            Value::String(_) => Capabilities::all(),
            Value::Array(items) => items
                .iter()
                .fold(Capabilities::all(), |caps, item| {
                    caps.intersection(item.capabilities())
                })
                .with(Capability::Semigroup),
            Value::Pair(p) => p.capabilities(),
            Value::Function(_) => Capabilities::none(),
        }
    }

    /// Structural equality. Values of different variants are unequal.
    pub fn equals(&self, other: &Value) -> Result<bool, CapabilityError> {
        if !self.capabilities().contains(Capability::Setoid) {
            return Err(CapabilityError::missing("equals", Capability::Setoid));
        }
        Ok(self.equals_unchecked(other))
    }

    /// Total order within a variant; values of different variants are
    /// never `lte` each other.
    pub fn lte(&self, other: &Value) -> Result<bool, CapabilityError> {
        if !self.capabilities().contains(Capability::Ord) {
            return Err(CapabilityError::missing("lte", Capability::Ord));
        }
        Ok(self.lte_unchecked(other))
    }

    /// Combine two values of the same semigroup variant.
    pub fn concat(self, other: Value) -> Result<Value, CapabilityError> {
        if !self.capabilities().contains(Capability::Semigroup) {
            return Err(CapabilityError::missing("concat", Capability::Semigroup));
        }
        self.concat_unchecked(other)
    }

    /// Apply a function value to `arg`.
    pub fn call(&self, arg: Value) -> Result<Value, CapabilityError> {
        self.call_for("call", arg)
    }

    // The `*_unchecked` helpers assume the receiver's capabilities were
    // already checked at the top of the recursion.

    fn equals_unchecked(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x.equals(y),
            (Value::String(x), Value::String(y)) => x.equals(y),
            (Value::Array(xs), Value::Array(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.equals_unchecked(y))
            }
            (Value::Pair(p), Value::Pair(q)) => p.equals_unchecked(q),
            _ => false,
        }
    }

    fn lte_unchecked(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x <= y,
            (Value::Number(x), Value::Number(y)) => x.lte(y),
            (Value::String(x), Value::String(y)) => x.lte(y),
            (Value::Array(xs), Value::Array(ys)) => {
                for (x, y) in xs.iter().zip(ys) {
                    if !x.equals_unchecked(y) {
                        return x.lte_unchecked(y);
                    }
                }
                xs.len() <= ys.len()
            }
            (Value::Pair(p), Value::Pair(q)) => p.lte_unchecked(q),
            _ => false,
        }
    }

    fn concat_unchecked(self, other: Value) -> Result<Value, CapabilityError> {
        match (self, other) {
            (Value::String(mut x), Value::String(y)) => {
                x.push_str(&y);
                Ok(Value::String(x))
            }
            (Value::Array(mut xs), Value::Array(ys)) => {
                xs.extend(ys);
                Ok(Value::Array(xs))
            }
            (Value::Pair(p), Value::Pair(q)) => Ok(Value::from((*p).concat_unchecked(*q)?)),
            (x, y) => Err(CapabilityError::TypeMismatch {
                operation: "concat",
                expected: x.type_name(),
                found: y.type_name(),
            }),
        }
    }

    fn call_for(&self, operation: &'static str, arg: Value) -> Result<Value, CapabilityError> {
        match self {
            Value::Function(f) => Ok(f(arg)),
            other => Err(CapabilityError::NotCallable {
                operation,
                found: other.type_name(),
            }),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Show for Value {
    fn show(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.show(),
            Value::Number(n) => n.show(),
            Value::String(s) => s.show(),
            Value::Array(items) => items.show(),
            Value::Pair(p) => p.show(),
            Value::Function(_) => "function".to_string(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<DynPair> for Value {
    fn from(p: DynPair) -> Self {
        Value::Pair(Box::new(p))
    }
}

// ============================================================================
// DynPair
// ============================================================================

/// A pair of [`Value`]s whose optional operations were fixed when it was
/// built.
#[derive(Clone, Debug)]
pub struct DynPair {
    fst: Value,
    snd: Value,
    caps: Capabilities,
    chainable: bool,
}

impl DynPair {
    /// Build a pair, probing both slots once.
    pub fn new(fst: Value, snd: Value) -> Self {
        let fst_caps = fst.capabilities();
        let caps = fst_caps.intersection(snd.capabilities());
        let chainable = fst_caps.contains(Capability::Semigroup);
        tracing::trace!(
            fst = fst.type_name(),
            snd = snd.type_name(),
            %caps,
            chainable,
            "probed pair capabilities"
        );
        Self {
            fst,
            snd,
            caps,
            chainable,
        }
    }

    /// Curried construction.
    pub fn of(fst: Value) -> impl FnOnce(Value) -> DynPair {
        move |snd| DynPair::new(fst, snd)
    }

    pub fn fst(&self) -> &Value {
        &self.fst
    }

    pub fn snd(&self) -> &Value {
        &self.snd
    }

    pub fn into_parts(self) -> (Value, Value) {
        (self.fst, self.snd)
    }

    /// The capabilities recorded at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Whether `ap` and `chain` are exposed (the first slot combines).
    pub fn supports_chain(&self) -> bool {
        self.chainable
    }

    fn require(&self, operation: &'static str, cap: Capability) -> Result<(), CapabilityError> {
        if self.caps.contains(cap) {
            return Ok(());
        }
        tracing::debug!(operation, capability = %cap, caps = %self.caps, "operation not exposed");
        Err(CapabilityError::missing(operation, cap))
    }

    fn require_chain(&self, operation: &'static str) -> Result<(), CapabilityError> {
        if self.chainable {
            return Ok(());
        }
        tracing::debug!(
            operation,
            fst = self.fst.type_name(),
            "first slot is not a semigroup"
        );
        Err(CapabilityError::missing(operation, Capability::Semigroup))
    }

    /// Exchange the slots. Capabilities are probed afresh.
    pub fn swap(self) -> DynPair {
        DynPair::new(self.snd, self.fst)
    }

    pub fn equals(&self, other: &DynPair) -> Result<bool, CapabilityError> {
        self.require("equals", Capability::Setoid)?;
        Ok(self.equals_unchecked(other))
    }

    pub fn lte(&self, other: &DynPair) -> Result<bool, CapabilityError> {
        self.require("lte", Capability::Ord)?;
        Ok(self.lte_unchecked(other))
    }

    fn equals_unchecked(&self, other: &DynPair) -> bool {
        self.fst.equals_unchecked(&other.fst) && self.snd.equals_unchecked(&other.snd)
    }

    fn lte_unchecked(&self, other: &DynPair) -> bool {
        if self.fst.equals_unchecked(&other.fst) {
            self.snd.lte_unchecked(&other.snd)
        } else {
            self.fst.lte_unchecked(&other.fst)
        }
    }

    /// `Pair(x)(y).compose(Pair(v)(w))` is `Pair(x)(w)`.
    pub fn compose(self, other: DynPair) -> DynPair {
        DynPair::new(self.fst, other.snd)
    }

    pub fn concat(self, other: DynPair) -> Result<DynPair, CapabilityError> {
        self.require("concat", Capability::Semigroup)?;
        self.concat_unchecked(other)
    }

    fn concat_unchecked(self, other: DynPair) -> Result<DynPair, CapabilityError> {
        Ok(DynPair::new(
            self.fst.concat_unchecked(other.fst)?,
            self.snd.concat_unchecked(other.snd)?,
        ))
    }

    pub fn map(self, f: impl FnOnce(Value) -> Value) -> DynPair {
        DynPair::new(self.fst, f(self.snd))
    }

    pub fn bimap(
        self,
        f: impl FnOnce(Value) -> Value,
        g: impl FnOnce(Value) -> Value,
    ) -> DynPair {
        DynPair::new(f(self.fst), g(self.snd))
    }

    /// `other.snd` must hold a function; first slots combine as
    /// `other.fst ++ self.fst`.
    pub fn ap(self, other: DynPair) -> Result<DynPair, CapabilityError> {
        self.require_chain("ap")?;
        let snd = other.snd.call_for("ap", self.snd)?;
        Ok(DynPair::new(other.fst.concat(self.fst)?, snd))
    }

    pub fn chain(self, f: impl FnOnce(Value) -> DynPair) -> Result<DynPair, CapabilityError> {
        self.require_chain("chain")?;
        let other = f(self.snd);
        Ok(DynPair::new(self.fst.concat_unchecked(other.fst)?, other.snd))
    }

    pub fn reduce<C>(&self, f: impl FnOnce(C, &Value) -> C, initial: C) -> C {
        f(initial, &self.snd)
    }

    pub fn traverse<F>(self, f: impl FnOnce(Value) -> F) -> F::Mapped<DynPair>
    where
        F: Functor<Item = Value>,
    {
        let DynPair { fst, snd, .. } = self;
        f(snd).fmap(move |v| DynPair::new(fst.clone(), v))
    }

    pub fn extend(self, f: impl FnOnce(&DynPair) -> Value) -> DynPair {
        let snd = f(&self);
        DynPair::new(self.fst, snd)
    }

    pub fn extract(self) -> Value {
        self.snd
    }
}

impl Show for DynPair {
    fn show(&self) -> String {
        format!("Pair ({}) ({})", self.fst.show(), self.snd.show())
    }
}

impl fmt::Display for DynPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}
