//! Sequencing computations where the next step depends on the last result.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   // left identity
//! m.flat_map(pure) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```

use super::applicative::Applicative;

/// Effects that can chain a dependent computation.
///
/// A failure short-circuits: `function` is never invoked and the failure is
/// returned as is.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Outcome;
/// use fpkit::typeclass::Monad;
///
/// fn checked_half(value: u32) -> Outcome<u32, &'static str> {
///     if value % 2 == 0 { Outcome::Ok(value / 2) } else { Outcome::Err("odd") }
/// }
///
/// assert_eq!(Monad::flat_map(Outcome::Ok(8), checked_half), Outcome::Ok(4));
/// assert_eq!(Monad::flat_map(Outcome::Ok(3), checked_half), Outcome::Err("odd"));
/// ```
pub trait Monad: Applicative {
    /// Feeds the held value to `function` and returns its effect.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}
