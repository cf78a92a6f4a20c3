//! Type constructors as a trait.
//!
//! A capability such as "can be mapped" belongs to `Outcome<_, E>` or
//! `TraversableList<_>`, not to one concrete `Outcome<i32, E>`. Rust has no
//! syntax for the bare constructor, so [`TypeConstructor`] names it through a
//! generic associated type: from any applied type you can reach the same
//! constructor applied to another element type.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::TraversableList;
//! use fpkit::typeclass::TypeConstructor;
//!
//! type Words = <TraversableList<i32> as TypeConstructor>::WithType<String>;
//!
//! let words: Words = TraversableList::new(vec!["one".to_string()]);
//! assert_eq!(words.len(), 1);
//! ```

/// A container type applied to one element type.
///
/// `WithType<Self::Inner>` is `Self` again. Implementations for the crate's
/// own containers live next to those containers.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Outcome<i32, String>`.
    type Inner;

    /// The same container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// `Option` takes part as an effect for traversal.
impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(all(test, feature = "control", feature = "collection"))]
mod tests {
    use super::*;
    use crate::collection::{List, TraversableList};
    use crate::control::Outcome;

    #[test]
    fn outcome_keeps_error_type_when_rebuilt() {
        fn rebuilt<T, E>() -> <Outcome<T, E> as TypeConstructor>::WithType<bool> {
            Outcome::Ok(true)
        }

        let value: Outcome<bool, String> = rebuilt::<u8, String>();
        assert_eq!(value, Outcome::Ok(true));
    }

    #[test]
    fn applying_inner_gives_back_the_container() {
        fn assert_round_trip<C>()
        where
            C: TypeConstructor<WithType<<C as TypeConstructor>::Inner> = C>,
        {
        }

        assert_round_trip::<List<char>>();
        assert_round_trip::<TraversableList<String>>();
        assert_round_trip::<Outcome<i32, &str>>();
    }

    #[test]
    fn nested_application_chains() {
        type Step = <<TraversableList<u8> as TypeConstructor>::WithType<i64> as TypeConstructor>::WithType<char>;

        let letters: Step = TraversableList::new(vec!['a']);
        assert_eq!(letters.into_vec(), vec!['a']);
    }
}
