//! Outcome type - a computation that either succeeded or failed.
//!
//! `Outcome<T, E>` holds exactly one of `Ok(T)` or `Err(E)`. Every
//! transformation consumes the outcome and returns a new one; once an outcome
//! is `Err`, `map`, `ap` and `flat_map` pass the error through unchanged and
//! never call the supplied function.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Outcome;
//!
//! fn halve(value: i32) -> Outcome<i32, String> {
//!     if value % 2 == 0 {
//!         Outcome::Ok(value / 2)
//!     } else {
//!         Outcome::Err(format!("{value} is odd"))
//!     }
//! }
//!
//! assert_eq!(Outcome::of(20).flat_map(halve).flat_map(halve), Outcome::Ok(5));
//! assert_eq!(
//!     Outcome::of(6).flat_map(halve).flat_map(halve),
//!     Outcome::Err("3 is odd".to_string())
//! );
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};

/// The result of a computation: a success value or an error value.
///
/// Unlike [`Result`], `Outcome` implements the crate's capability traits
/// directly, so it can serve as the effect of
/// [`Traversable::traverse`](crate::typeclass::Traversable::traverse).
/// Conversions to and from `Result` are provided.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Outcome;
///
/// let parsed: Outcome<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
/// assert_eq!(parsed.map(|value| value + 1), Outcome::Ok(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A success value.
    Ok(T),
    /// An error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Lifts a plain value into a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Outcome;
    ///
    /// assert_eq!(Outcome::<_, ()>::of("value"), Outcome::Ok("value"));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Ok(value)
    }

    /// Returns `true` for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Converts into an `Option` of the success value, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an `Option` of the error value, discarding any success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success value. An `Err` is returned unchanged and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failed.map(|value| value * 2), Outcome::Err("boom"));
    /// assert_eq!(Outcome::<i32, &str>::Ok(2).map(|value| value * 2), Outcome::Ok(4));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error value. An `Ok` is returned unchanged.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies a function held in another outcome to this outcome's value.
    ///
    /// If `self` is `Err`, its error is returned. Otherwise, if `function` is
    /// `Err`, that error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Outcome;
    ///
    /// let add_one: Outcome<fn(i32) -> i32, &str> = Outcome::Ok(|value| value + 1);
    /// assert_eq!(Outcome::Ok(1).ap(add_one), Outcome::Ok(2));
    ///
    /// let missing: Outcome<fn(i32) -> i32, &str> = Outcome::Err("no function");
    /// assert_eq!(Outcome::Ok(1).ap(missing), Outcome::Err("no function"));
    /// assert_eq!(Outcome::<i32, _>::Err("no value").ap(missing), Outcome::Err("no value"));
    /// ```
    #[inline]
    pub fn ap<U, F>(self, function: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match (self, function) {
            (Self::Err(error), _) | (Self::Ok(_), Outcome::Err(error)) => Outcome::Err(error),
            (Self::Ok(value), Outcome::Ok(function)) => Outcome::Ok(function(value)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Outcome;
    ///
    /// let checked = |value: i32| {
    ///     if value > 0 { Outcome::Ok(value) } else { Outcome::Err("not positive") }
    /// };
    /// assert_eq!(Outcome::Ok(3).flat_map(checked), Outcome::Ok(3));
    /// assert_eq!(Outcome::Ok(-3).flat_map(checked), Outcome::Err("not positive"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(function)
    }

    /// Collapses both cases into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("bad");
    /// let message = failed.fold(|value| format!("got {value}"), |error| format!("failed: {error}"));
    /// assert_eq!(message, "failed: bad");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, ok_function: F, err_function: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Converts into a standard [`Result`], so `?` can be used on it.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn ap<A, B, F>(value: Outcome<A, E>, function: Outcome<F, E>) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        value.ap(function)
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Self::flat_map(self, function)
    }
}

impl<T, E> Foldable for Outcome<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Ok(value) => function(init, value),
            Self::Err(_) => init,
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<String, std::io::ErrorKind>: Send, Sync);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn double(value: i32) -> i32 {
        value * 2
    }

    #[rstest]
    #[case(Outcome::Ok(1), true)]
    #[case(Outcome::Err("bad"), false)]
    fn variant_predicates(#[case] outcome: Outcome<i32, &str>, #[case] expected_ok: bool) {
        assert_eq!(outcome.is_ok(), expected_ok);
        assert_eq!(outcome.is_err(), !expected_ok);
    }

    #[rstest]
    fn map_on_err_never_calls_function() {
        let calls = Cell::new(0);
        let failed: Outcome<i32, &str> = Outcome::Err("kept");
        let mapped = failed.map(|value| {
            calls.set(calls.get() + 1);
            double(value)
        });
        assert_eq!(mapped, Outcome::Err("kept"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_on_err_never_calls_function() {
        let calls = Cell::new(0);
        let failed: Outcome<i32, &str> = Outcome::Err("kept");
        let chained = failed.flat_map(|value| {
            calls.set(calls.get() + 1);
            Outcome::Ok(double(value))
        });
        assert_eq!(chained, Outcome::Err("kept"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Outcome::Ok(5), Outcome::Ok(double as fn(i32) -> i32), Outcome::Ok(10))]
    #[case(Outcome::Ok(5), Outcome::Err("function"), Outcome::Err("function"))]
    #[case(Outcome::Err("value"), Outcome::Ok(double as fn(i32) -> i32), Outcome::Err("value"))]
    #[case(Outcome::Err("value"), Outcome::Err("function"), Outcome::Err("value"))]
    fn ap_precedence(
        #[case] value: Outcome<i32, &'static str>,
        #[case] function: Outcome<fn(i32) -> i32, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        assert_eq!(value.ap(function), expected);
        assert_eq!(<Outcome<(), &str> as Applicative>::ap(value, function), expected);
    }

    #[rstest]
    fn map_err_leaves_ok_untouched() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(ok.map_err(str::len), Outcome::Ok(1));
        let failed: Outcome<i32, &str> = Outcome::Err("four");
        assert_eq!(failed.map_err(str::len), Outcome::Err(4));
    }

    #[rstest]
    fn unwrap_helpers() {
        let failed: Outcome<usize, &str> = Outcome::Err("abc");
        assert_eq!(failed.unwrap_or(7), 7);
        assert_eq!(failed.unwrap_or_else(str::len), 3);
        assert_eq!(Outcome::<usize, &str>::Ok(1).unwrap_or(7), 1);
    }

    #[rstest]
    fn option_projections() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(ok.ok(), Some(1));
        assert_eq!(ok.err(), None);
        assert_eq!(ok.as_ref(), Outcome::Ok(&1));
    }

    #[rstest]
    fn result_conversions_preserve_variant() {
        let outcome: Outcome<i32, String> = Err::<i32, _>("bad".to_string()).into();
        assert_eq!(outcome, Outcome::Err("bad".to_string()));
        assert_eq!(Outcome::<i32, String>::Ok(3).into_result(), Ok(3));
    }

    #[rstest]
    #[case(Outcome::Ok(6), "Ok(6)")]
    #[case(Outcome::Err("Failed".to_string()), "Err(Failed)")]
    fn display_shows_variant(#[case] outcome: Outcome<i32, String>, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[rstest]
    fn type_class_instances_agree_with_inherent_api() {
        let ok: Outcome<i32, &str> = Outcome::Ok(4);
        assert_eq!(Functor::fmap(ok, double), ok.map(double));
        assert_eq!(Monad::flat_map(ok, |value| Outcome::Ok(value + 1)), Outcome::Ok(5));
        assert_eq!(ok.fold_left(1, |accumulator, value| accumulator + value), 5);
        assert_eq!(Outcome::<i32, &str>::Err("none").fold_left(1, |accumulator, value| accumulator + value), 1);
    }
}
