//! Control structures.
//!
//! - [`Outcome`]: a success-or-failure value that implements every
//!   capability trait in [`typeclass`](crate::typeclass)
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::TraversableList;
//! use fpkit::control::Outcome;
//!
//! let checked = TraversableList::new(vec![1_u32, 2, 3]).traverse(|value| {
//!     if value < 10 { Outcome::Ok(value * 10) } else { Outcome::Err(format!("{value} too big")) }
//! });
//! assert_eq!(checked, Outcome::Ok(TraversableList::new(vec![10, 20, 30])));
//! ```

mod outcome;

pub use outcome::Outcome;
