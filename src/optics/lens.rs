//! Lenses: non-mutating read and update access to one field of a value.
//!
//! # Laws
//!
//! ```text
//! lens.set(source, lens.get(&source).clone()) == source      // GetSet
//! lens.get(&lens.set(source, value)) == &value               // SetGet
//! lens.set(lens.set(source, v1), v2) == lens.set(source, v2) // SetSet
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::lens;
//! use fpkit::optics::Lens;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let name = lens!(Person, name);
//! let john = Person { name: "John".to_string(), age: 30 };
//!
//! assert_eq!(name.get(&john), "John");
//! let johnny = name.set(john.clone(), "Johnny".to_string());
//! assert_eq!(johnny, Person { name: "Johnny".to_string(), age: 30 });
//! assert_eq!(john.name, "John");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Focuses on a single field `A` inside a structure `S`.
///
/// `set` consumes the source and returns the updated copy; every other field
/// is carried over unchanged.
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns `source` with the focused field replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with `function` applied to its current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::lens;
    /// use fpkit::optics::Lens;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Counter { hits: u64 }
    ///
    /// let hits = lens!(Counter, hits);
    /// assert_eq!(hits.modify(Counter { hits: 1 }, |count| count + 1), Counter { hits: 2 });
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`Lens::modify`], for functions that only need to borrow the field.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let updated = function(self.get(&source));
        self.set(source, updated)
    }
}

/// A lens built from a getter closure and a setter closure.
///
/// # Examples
///
/// ```rust
/// use fpkit::optics::{FunctionLens, Lens};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius { degrees: f64 }
///
/// let degrees = FunctionLens::new(
///     |reading: &Celsius| &reading.degrees,
///     |_reading: Celsius, degrees: f64| Celsius { degrees },
/// );
/// assert_eq!(degrees.set(Celsius { degrees: 1.5 }, 3.0), Celsius { degrees: 3.0 });
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Pairs a getter with a setter.
    ///
    /// The pair is expected to satisfy the lens laws; this is not checked.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .field("source", &std::any::type_name::<S>())
            .field("focus", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

/// Builds a lens from a getter and a setter.
///
/// # Examples
///
/// ```rust
/// use fpkit::optics::{Lens, lens};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Person { name: String, age: u32 }
///
/// let age = lens(
///     |person: &Person| &person.age,
///     |person: Person, age: u32| Person { age, ..person },
/// );
/// let john = Person { name: "John".to_string(), age: 30 };
/// assert_eq!(age.modify(john, |years| years + 1).age, 31);
/// ```
#[must_use]
pub const fn lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Creates a [`FunctionLens`] for a named field of a struct.
///
/// Accepts a plain type name, a generic type such as `Wrapper<T>`, or a
/// path such as `module::Type`.
///
/// # Examples
///
/// ```rust
/// use fpkit::lens;
/// use fpkit::optics::Lens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let x = lens!(Point, x);
/// let moved = x.set(Point { x: 1, y: 2 }, 10);
/// assert_eq!(moved, Point { x: 10, y: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
    ($source:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source<$($generic),+>| &source.$field,
            |mut source: $source<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($source:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}
