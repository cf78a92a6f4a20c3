//! Mapping over the contents of a container.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa                               // identity
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))         // composition
//! ```
//!
//! A failed container stays failed and the function is not called.

use super::higher::TypeConstructor;

/// Mapping for containers holding at most one value.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Outcome;
/// use fpkit::typeclass::Functor;
///
/// let ok: Outcome<i32, String> = Outcome::Ok(5);
/// assert_eq!(ok.fmap(|value| value + 1), Outcome::Ok(6));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

/// Mapping for containers with any number of elements.
///
/// `function` is called once per element, left to right.
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}
