//! Reducing a container to a single summary value.

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Containers whose elements can be visited in order and accumulated.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::TraversableList;
/// use fpkit::typeclass::{Foldable, Sum};
///
/// let list = TraversableList::new(vec![1, 2, 3, 4]);
/// assert_eq!(list.clone().fold_left(0, |total, value| total + value), 10);
/// assert_eq!(list.fold_map(Sum), Sum(10));
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last, visiting each exactly once.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Maps every element into a [`Monoid`] and combines the results.
    ///
    /// An empty container yields `M::empty()`.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |summary, element| {
            summary.combine(function(element))
        })
    }
}
