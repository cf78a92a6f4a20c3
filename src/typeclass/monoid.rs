//! Semigroups with an identity element.
//!
//! ```text
//! concat(M::empty(), a) == a == concat(a, M::empty())
//! concat(concat(a, b), c) == concat(a, concat(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Monoid, concat};
//!
//! let greeting = concat(String::from("Hello"), concat(String::from(" World"), String::empty()));
//! assert_eq!(greeting, "Hello World");
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element: the empty string for `String`.
    fn empty() -> Self;

    /// Combines every item left to right, starting from [`Monoid::empty`].
    ///
    /// ```rust
    /// use fpkit::typeclass::Monoid;
    ///
    /// assert_eq!(String::combine_all(["a", "b", "c"].map(String::from)), "abc");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        items.into_iter().fold(Self::empty(), Semigroup::combine)
    }
}

/// Combines two values of a monoid, `left` first.
#[inline]
pub fn concat<M: Monoid>(left: M, right: M) -> M {
    left.combine(right)
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// The identity is `Product(1)`, for every numeric type that converts from `u8`.
impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("abc")]
    fn string_identity(#[case] value: &str) {
        let value = value.to_string();
        assert_eq!(concat(String::empty(), value.clone()), value);
        assert_eq!(concat(value.clone(), String::empty()), value);
    }

    #[rstest]
    fn string_concat_is_associative() {
        let left = concat(concat("a".to_string(), "b".to_string()), "c".to_string());
        let right = concat("a".to_string(), concat("b".to_string(), "c".to_string()));
        assert_eq!(left, "abc");
        assert_eq!(left, right);
    }

    #[rstest]
    fn combine_all_of_nothing_is_the_identity() {
        assert_eq!(String::combine_all(Vec::new()), String::empty());
        assert_eq!(Sum::<i64>::combine_all(Vec::new()), Sum(0));
        assert_eq!(Product::<u32>::combine_all(Vec::new()), Product(1));
    }

    #[rstest]
    fn numeric_identities() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Product::<u64>::empty(), Product(1));
        assert_eq!(Product::combine_all(vec![Product(2.0_f64), Product(4.0)]), Product(8.0));
    }
}
