//! # fpkit
//!
//! Small, law-abiding functional programming capabilities for Rust.
//!
//! ## Overview
//!
//! The crate expresses the classic type classes as independent traits and
//! provides a handful of containers that implement them:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Semigroup and Monoid
//! - **Control**: [`Outcome`](control::Outcome), a success-or-failure sum type
//! - **Collections**: [`List`](collection::List) (foldable) and
//!   [`TraversableList`](collection::TraversableList)
//! - **Optics**: Lens for non-mutating access to a single field
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The `Outcome` type
//! - `collection`: `List` and `TraversableList`
//! - `optics`: Lens
//! - `derive`: `#[derive(Lenses)]`
//! - `serde`: Serialization of the containers
//! - `tracing`: Trace events emitted by traversals
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let doubled = Outcome::<i32, String>::of(21).map(|value| value * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let incremented = TraversableList::new(vec![1, 2, 3])
//!     .traverse(|value| Outcome::<i32, String>::Ok(value + 1));
//! assert_eq!(incremented, Outcome::Ok(TraversableList::new(vec![2, 3, 4])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use fpkit_derive::Lenses;
