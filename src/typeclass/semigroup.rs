//! Types with an associative way to combine two values.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// An associative binary operation.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Semigroup;
///
/// assert_eq!(String::from("Hello").combine(String::from(" World")), "Hello World");
/// ```
pub trait Semigroup {
    /// Combines `self` with `other`, `self` first.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}
