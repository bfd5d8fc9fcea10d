//! # Type Classes
//!
//! The algebraic interfaces that product types build on:
//!
//! | Class | Operation | Law |
//! |-------|-----------|-----|
//! | [`Setoid`] | `equals` | reflexive, symmetric, transitive |
//! | [`Orderable`] | `lte` | total, antisymmetric, transitive |
//! | [`Semigroup`] | `concat` | associative |
//! | [`Functor`] | `fmap` | identity, composition |
//! | [`Show`] | `show` | renders a value the way it would be written |
//!
//! Each type opts in explicitly. There is no blanket implementation over
//! `PartialEq`/`PartialOrd` because floats need different rules here:
//! `NaN` equals itself and sorts before every other number, which keeps
//! `equals` reflexive and `lte` total.
//!
//! ```
//! use product_core::class::{Orderable, Semigroup, Setoid, Show};
//!
//! assert!(f64::NAN.equals(&f64::NAN));
//! assert!(f64::NAN.lte(&f64::NEG_INFINITY));
//! assert!(vec![1, 2].lte(&vec![1, 2, 0]));
//! assert_eq!(String::from("abc").concat(String::from("xyz")), "abcxyz");
//! assert_eq!(vec!["a", "b"].show(), r#"["a", "b"]"#);
//! ```

/// Types with a structural equality.
pub trait Setoid {
    /// `true` iff `self` and `other` are structurally equal.
    fn equals(&self, other: &Self) -> bool;
}

/// Setoids with a total order.
pub trait Orderable: Setoid {
    /// `true` iff `self` sorts at or before `other`.
    fn lte(&self, other: &Self) -> bool;
}

/// Types with an associative combination.
///
/// `concat` consumes both operands so that owned buffers (`String`, `Vec`)
/// can be extended in place.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn concat(self, other: Self) -> Self;
}

/// Canonical rendering: strings quoted, sequences bracketed.
pub trait Show {
    fn show(&self) -> String;
}

/// Containers whose elements can be mapped over.
///
/// This is the "effect context" a traversal re-wraps its results in.
pub trait Functor {
    /// The element type being mapped.
    type Item;
    /// The same container holding `U` instead.
    type Mapped<U>;

    fn fmap<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnMut(Self::Item) -> U;
}

// ============================================================================
// Setoid / Orderable: primitives
// ============================================================================

macro_rules! impl_total {
    ($($t:ty),* $(,)?) => {
        $(
            impl Setoid for $t {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Orderable for $t {
                fn lte(&self, other: &Self) -> bool {
                    self <= other
                }
            }
        )*
    };
}

impl_total!(bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Setoid for str {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

// Ordered by UTF-16 code units, not UTF-8 bytes.
impl Orderable for str {
    fn lte(&self, other: &Self) -> bool {
        self.encode_utf16().le(other.encode_utf16())
    }
}

impl Setoid for String {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Orderable for String {
    fn lte(&self, other: &Self) -> bool {
        self.as_str().lte(other.as_str())
    }
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Setoid for $t {
                fn equals(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self == other
                }
            }

            // NaN is the least element.
            impl Orderable for $t {
                fn lte(&self, other: &Self) -> bool {
                    self.is_nan() || self <= other
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// ============================================================================
// Setoid / Orderable: containers
// ============================================================================

impl<T: Setoid> Setoid for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(x, y)| x.equals(y))
    }
}

// Lexicographic; a proper prefix sorts first.
impl<T: Orderable> Orderable for [T] {
    fn lte(&self, other: &Self) -> bool {
        for (x, y) in self.iter().zip(other) {
            if !x.equals(y) {
                return x.lte(y);
            }
        }
        self.len() <= other.len()
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Orderable> Orderable for Vec<T> {
    fn lte(&self, other: &Self) -> bool {
        self.as_slice().lte(other.as_slice())
    }
}

impl<T: Setoid> Setoid for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.equals(y),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Orderable> Orderable for Option<T> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(x), Some(y)) => x.lte(y),
        }
    }
}

impl<T: Setoid + ?Sized> Setoid for Box<T> {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    fn lte(&self, other: &Self) -> bool {
        (**self).lte(&**other)
    }
}

impl<T: Setoid + ?Sized> Setoid for &T {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Orderable + ?Sized> Orderable for &T {
    fn lte(&self, other: &Self) -> bool {
        (**self).lte(*other)
    }
}

// ============================================================================
// Semigroup
// ============================================================================

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn concat(self, _other: Self) -> Self {}
}

// `None` is absorbed by the other side.
impl<T: Semigroup> Semigroup for Option<T> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Some(x), Some(y)) => Some(x.concat(y)),
            (x, None) => x,
            (None, y) => y,
        }
    }
}

// ============================================================================
// Show
// ============================================================================

macro_rules! impl_show_display {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_show_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_show_float {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let sign = if *self > 0.0 { "" } else { "-" };
                        format!("{}Infinity", sign)
                    } else if *self == 0.0 {
                        let sign = if self.is_sign_negative() { "-" } else { "" };
                        format!("{}0", sign)
                    } else if self.abs() >= 1e21 || self.abs() < 1e-6 {
                        exponential(&format!("{:e}", self))
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

impl_show_float!(f32, f64);

// `1e21` becomes `1e+21`; negative exponents are already signed.
fn exponential(lower_exp: &str) -> String {
    match lower_exp.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => lower_exp.to_string(),
    }
}

impl Show for str {
    fn show(&self) -> String {
        serde_json::Value::String(self.to_owned()).to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.as_str().show()
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string().show()
    }
}

impl<T: Show> Show for [T] {
    fn show(&self) -> String {
        let items: Vec<String> = self.iter().map(Show::show).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<T: Show> Show for Option<T> {
    fn show(&self) -> String {
        match self {
            Some(x) => format!("Just ({})", x.show()),
            None => "Nothing".to_string(),
        }
    }
}

impl<T: Show + ?Sized> Show for Box<T> {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

// ============================================================================
// Functor
// ============================================================================

impl<T> Functor for Vec<T> {
    type Item = T;
    type Mapped<U> = Vec<U>;

    fn fmap<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T> Functor for Option<T> {
    type Item = T;
    type Mapped<U> = Option<U>;

    fn fmap<U, F>(self, f: F) -> Option<U>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}

impl<T, E> Functor for Result<T, E> {
    type Item = T;
    type Mapped<U> = Result<U, E>;

    fn fmap<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}
