//! An immutable, ordered sequence that can be folded.
//!
//! [`List`] owns its elements and never changes after construction. Its main
//! operation is [`List::reduce`], a strict left fold over borrowed elements.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::List;
//!
//! let list = List::new(vec![1, 2, 3, 4]);
//! assert_eq!(list.reduce(|accumulator, value| accumulator + value, 0), 10);
//!
//! let empty: List<i32> = List::default();
//! assert_eq!(empty.reduce(|accumulator, value| accumulator + value, 0), 0);
//! ```

use std::fmt;

use crate::typeclass::{Foldable, FunctorMut, TypeConstructor};

/// An immutable ordered sequence supporting a left fold.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::List;
///
/// let words: List<&str> = ["functional", "rust"].into_iter().collect();
/// let joined = words.reduce(|mut sentence, word| {
///     if !sentence.is_empty() {
///         sentence.push(' ');
///     }
///     sentence.push_str(word);
///     sentence
/// }, String::new());
/// assert_eq!(joined, "functional rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    /// Takes ownership of `elements`, preserving their order.
    #[inline]
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Folds the elements from left to right.
    ///
    /// Each element is visited exactly once, in order. An empty list returns
    /// `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::collection::List;
    ///
    /// let visited = List::new(vec!['a', 'b', 'c']).reduce(|mut seen, letter| {
    ///     seen.push(*letter);
    ///     seen
    /// }, String::new());
    /// assert_eq!(visited, "abc");
    /// ```
    pub fn reduce<B, F>(&self, function: F, initial: B) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.elements.iter().fold(initial, function)
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

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "List[")?;
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

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T> FunctorMut for List<T> {
    fn fmap_mut<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }
}

impl<T> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::new(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_impl_all!(List<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Monoid, Sum};
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4], 10)]
    #[case(vec![], 0)]
    #[case(vec![-5], -5)]
    fn reduce_sums(#[case] elements: Vec<i32>, #[case] expected: i32) {
        let list = List::new(elements);
        assert_eq!(list.reduce(|accumulator, value| accumulator + value, 0), expected);
    }

    #[rstest]
    fn reduce_empty_returns_initial_unchanged() {
        let empty: List<i32> = List::default();
        let initial = vec!["untouched"];
        assert_eq!(empty.reduce(|accumulator, _| accumulator, initial.clone()), initial);
    }

    #[rstest]
    fn reduce_visits_each_element_once_in_order() {
        let list = List::new(vec![3, 1, 2]);
        let mut visits = Vec::new();
        let count = list.reduce(
            |count, value| {
                visits.push(*value);
                count + 1
            },
            0,
        );
        assert_eq!(count, 3);
        assert_eq!(visits, vec![3, 1, 2]);
    }

    #[rstest]
    fn reduce_leaves_list_usable() {
        let list = List::new(vec![String::from("a"), String::from("b")]);
        let total = list.reduce(|length, value| length + value.len(), 0);
        assert_eq!(total, 2);
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn fmap_mut_preserves_order() {
        let list = List::new(vec![1, 2, 3]);
        assert_eq!(list.fmap_mut(|value| value * 10), List::new(vec![10, 20, 30]));
    }

    #[rstest]
    fn fold_map_into_sum() {
        let total: Sum<i32> = List::new(vec![1, 2, 3]).fold_map(Sum);
        assert_eq!(total, Sum(6));
        assert_eq!(List::<i32>::default().fold_map(Sum), Sum::empty());
    }

    #[rstest]
    fn display_lists_elements() {
        assert_eq!(List::new(vec![1, 2]).to_string(), "List[1, 2]");
        assert_eq!(List::<i32>::default().to_string(), "List[]");
    }
}
