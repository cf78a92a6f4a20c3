//! Lifting values and applying wrapped functions.
//!
//! `ap` receives the value-holder first and the function-holder second. When
//! both hold a failure, the value-holder's failure is returned. Traversal
//! uses the accumulator as the value-holder, which is why it reports the
//! first failure in element order.
//!
//! # Laws
//!
//! ```text
//! ap(v, pure(|x| x)) == v                        // identity
//! ap(pure(x), pure(f)) == pure(f(x))             // homomorphism
//! ap(pure(y), u) == ap(u, pure(|f| f(y)))        // interchange
//! ```

use super::functor::Functor;

/// Effects that can lift a value and apply a wrapped function.
///
/// Neither method takes `self`. The implementing type names the effect, so
/// generic code holding `G: Applicative` can call `G::ap` on
/// `G::WithType<X>` for any `X`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Outcome;
/// use fpkit::typeclass::Applicative;
///
/// type Effect = Outcome<(), String>;
///
/// let lifted: Outcome<i32, String> = Effect::pure(5);
/// let incremented = <Effect as Applicative>::ap(lifted, Effect::pure(|value: i32| value + 1));
/// assert_eq!(incremented, Outcome::Ok(6));
/// ```
pub trait Applicative: Functor {
    /// Wraps `value` as a success of this effect.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function held by `function` to the value held by `value`.
    ///
    /// The function runs only when both hold a success.
    fn ap<A, B, F>(value: Self::WithType<A>, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(A) -> B;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn ap<X, B, F>(value: Option<X>, function: Option<F>) -> Option<B>
    where
        F: FnOnce(X) -> B,
    {
        value.zip(function).map(|(value, function)| function(value))
    }
}

#[cfg(all(test, feature = "control", feature = "collection"))]
mod tests {
    use super::*;
    use crate::control::Outcome;
    use rstest::rstest;

    type Effect = Outcome<(), &'static str>;

    fn square(value: i32) -> i32 {
        value * value
    }

    #[rstest]
    fn pure_is_ok() {
        assert_eq!(Effect::pure('z'), Outcome::Ok('z'));
    }

    #[rstest]
    #[case(Outcome::Ok(3), Outcome::Ok(square as fn(i32) -> i32), Outcome::Ok(9))]
    #[case(Outcome::Ok(3), Outcome::Err("no function"), Outcome::Err("no function"))]
    #[case(Outcome::Err("no value"), Outcome::Err("no function"), Outcome::Err("no value"))]
    fn ap_through_the_effect(
        #[case] value: Outcome<i32, &'static str>,
        #[case] function: Outcome<fn(i32) -> i32, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        assert_eq!(<Effect as Applicative>::ap(value, function), expected);
    }

    #[rstest]
    fn homomorphism_holds_for_outcome() {
        let left: Outcome<i32, &str> = <Effect as Applicative>::ap(Effect::pure(7), Effect::pure(square));
        assert_eq!(left, Effect::pure(square(7)));
    }

    #[rstest]
    #[case(Some(3), Some(9))]
    #[case(None, None)]
    fn option_ap(#[case] value: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(<Option<()>>::ap(value, Some(square)), expected);
        assert_eq!(<Option<()>>::ap(Some(3), None::<fn(i32) -> i32>), None);
    }
}
