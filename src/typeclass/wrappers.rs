//! Numeric newtypes that pick a combining operation.
//!
//! The same number can be combined by addition or by multiplication. Wrapping
//! it in [`Sum`] or [`Product`] selects which `Semigroup`/`Monoid` instance
//! applies, which is what [`Foldable::fold_map`](super::Foldable::fold_map)
//! needs to summarise a container.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Monoid, Product, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Product(3).combine(Product(4)), Product(12));
//! assert_eq!(Product::<i64>::empty(), Product(1));
//! ```

use std::fmt;

/// Combines numbers by addition. The identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::List;
/// use fpkit::typeclass::{Foldable, Sum};
///
/// let total: Sum<u32> = List::new(vec![1, 2, 3]).fold_map(Sum);
/// assert_eq!(total.into_inner(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A: fmt::Display> fmt::Display for Sum<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Sum({})", self.0)
    }
}

/// Combines numbers by multiplication. The identity is `Product(1)`.
///
/// There is no `Default`: zero is not the multiplicative identity. Use
/// [`Monoid::empty`](super::Monoid::empty) instead.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::List;
/// use fpkit::typeclass::{Foldable, Product};
///
/// let factorial: Product<u64> = List::new(vec![1, 2, 3, 4, 5]).fold_map(Product);
/// assert_eq!(factorial.into_inner(), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A: fmt::Display> fmt::Display for Product<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Product({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i32>::default(), Sum(0));
    }

    #[rstest]
    #[case(Sum(5), "Sum(5)")]
    #[case(Sum(-2), "Sum(-2)")]
    fn sum_display(#[case] value: Sum<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn product_from_and_into_inner() {
        let product = Product::from(2.5_f64);
        assert!((product.into_inner() - 2.5).abs() < f64::EPSILON);
        assert_eq!(Product::new(3).to_string(), "Product(3)");
    }
}
