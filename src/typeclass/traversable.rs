//! Mapping with an effect and collecting the effects.
//!
//! `traverse` turns a container inside out: a `TraversableList<A>` traversed
//! with `A -> Outcome<B, E>` becomes an `Outcome<TraversableList<B>, E>`.
//! It is generic over any [`Applicative`] effect `G`, fixed for the whole
//! traversal and resolved at compile time.
//!
//! Implementations start from `G::pure(empty)` and, for every element in
//! order, apply the element's effect (mapped to an "append" function) to the
//! accumulator with `G::ap`. The accumulator is the value-holder of `ap`, so
//! the result is the first failure in element order. The per-element
//! function still runs for elements after a failure.

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::FunctorMut;
use super::higher::TypeConstructor;

/// Containers that can be traversed with an effect.
///
/// # Laws
///
/// ```text
/// fa.traverse(|x| G::pure(f(x))) == G::pure(fa.fmap_mut(f))   // identity
/// ```
pub trait Traversable: FunctorMut + Foldable {
    /// Applies `function` to every element and sequences the effects.
    fn traverse<G, B, F>(self, function: F) -> G::WithType<Self::WithType<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(Self::Inner) -> G;

    /// Turns a container of effects into an effect of a container.
    ///
    /// Same as `traverse(|effect| effect)`.
    fn sequence<B>(self) -> <Self::Inner as TypeConstructor>::WithType<Self::WithType<B>>
    where
        Self: Sized,
        Self::Inner: Applicative<Inner = B>,
    {
        self.traverse(|effect| effect)
    }
}
