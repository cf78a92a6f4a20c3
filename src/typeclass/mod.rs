//! Capability traits and their instances for standard library types.
//!
//! - [`Functor`] / [`FunctorMut`]: mapping over contents
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Traversable`]: mapping with an effect and collecting the results
//! - [`Semigroup`] / [`Monoid`]: combining values
//!
//! Higher kinds are emulated with [`TypeConstructor`], a trait with a generic
//! associated type.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::TraversableList;
//! use fpkit::control::Outcome;
//! use fpkit::typeclass::{Foldable, Sum, Traversable};
//!
//! let list = TraversableList::new(vec![1, 2, 3]);
//! assert_eq!(list.clone().fold_map(Sum), Sum(6));
//!
//! let checked = Traversable::traverse(list, |value| Outcome::<i32, String>::Ok(value * 2));
//! assert_eq!(checked, Outcome::Ok(TraversableList::new(vec![2, 4, 6])));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::{Monoid, concat};
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
