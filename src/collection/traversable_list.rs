//! An immutable sequence that can be mapped and traversed with an effect.
//!
//! [`TraversableList::traverse`] runs an effectful function over every
//! element, left to right, and gathers the results into one effect holding
//! the rebuilt list. With [`Outcome`](crate::control::Outcome) as the effect
//! the result is `Ok` of all transformed elements, or the first `Err` in
//! element order.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::TraversableList;
//! use fpkit::control::Outcome;
//!
//! let numbers = TraversableList::new(vec![1, 2, 3]);
//! let checked = numbers.traverse(|value| {
//!     if value == 2 { Outcome::Err("bad") } else { Outcome::Ok(value) }
//! });
//! assert_eq!(checked, Outcome::Err("bad"));
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, FunctorMut, Traversable, TypeConstructor};

/// An immutable ordered sequence supporting `map` and `traverse`.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::TraversableList;
/// use fpkit::control::Outcome;
///
/// let list = TraversableList::new(vec![1, 2, 3]);
/// assert_eq!(list.map(|value| value * 2), TraversableList::new(vec![2, 4, 6]));
///
/// let incremented = TraversableList::new(vec![1, 2, 3])
///     .traverse(|value| Outcome::<i32, String>::Ok(value + 1));
/// assert_eq!(incremented, Outcome::Ok(TraversableList::new(vec![2, 3, 4])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TraversableList<T> {
    elements: Vec<T>,
}

impl<T> TraversableList<T> {
    /// Takes ownership of `elements`, preserving their order.
    #[inline]
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Transforms every element, producing a new list of the same length.
    pub fn map<B, F>(self, function: F) -> TraversableList<B>
    where
        F: FnMut(T) -> B,
    {
        self.fmap_mut(function)
    }

    /// Applies an effectful function to every element and collects the
    /// effects.
    ///
    /// `function` is called for every element in order, even after a
    /// failure. The result is the first failure in element order, or the
    /// rebuilt list inside the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::collection::TraversableList;
    ///
    /// let parsed: Option<TraversableList<u8>> =
    ///     TraversableList::new(vec!["4", "2"]).traverse(|text| text.parse().ok());
    /// assert_eq!(parsed, Some(TraversableList::new(vec![4, 2])));
    /// ```
    pub fn traverse<G, B, F>(self, function: F) -> G::WithType<TraversableList<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(T) -> G,
    {
        <Self as Traversable>::traverse(self, function)
    }

    /// Turns a list of effects into an effect of a list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::collection::TraversableList;
    /// use fpkit::control::Outcome;
    ///
    /// let effects = TraversableList::new(vec![Outcome::Ok(1), Outcome::Err("e1"), Outcome::Err("e2")]);
    /// assert_eq!(effects.sequence(), Outcome::Err("e1"));
    /// ```
    pub fn sequence<B>(self) -> <T as TypeConstructor>::WithType<TraversableList<B>>
    where
        T: Applicative<Inner = B>,
    {
        <Self as Traversable>::sequence(self)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gives back the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> From<Vec<T>> for TraversableList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for TraversableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

impl<T> IntoIterator for TraversableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TraversableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for TraversableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "TraversableList[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for TraversableList<T> {
    type Inner = T;
    type WithType<B> = TraversableList<B>;
}

impl<T> FunctorMut for TraversableList<T> {
    fn fmap_mut<B, F>(self, function: F) -> TraversableList<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }
}

impl<T> Foldable for TraversableList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }
}

impl<T> Traversable for TraversableList<T> {
    fn traverse<G, B, F>(self, mut function: F) -> G::WithType<TraversableList<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(T) -> G,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(elements = self.elements.len(), "traversing list");

        let capacity = self.elements.len();
        let initial = G::pure(TraversableList::new(Vec::with_capacity(capacity)));
        self.elements
            .into_iter()
            .fold(initial, |accumulator, element| {
                #[cfg(feature = "tracing")]
                tracing::trace!("folding element");

                let append = function(element).fmap(|value| {
                    move |mut list: TraversableList<B>| {
                        list.elements.push(value);
                        list
                    }
                });
                G::ap(accumulator, append)
            })
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for TraversableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.elements)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for TraversableList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(TraversableList<i32>: Send, Sync, Clone);
