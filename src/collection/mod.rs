//! Immutable sequence wrappers.
//!
//! - [`List`]: a sequence that can be folded with [`List::reduce`]
//! - [`TraversableList`]: a sequence that can be mapped and traversed with
//!   any [`Applicative`](crate::typeclass::Applicative) effect

mod list;
mod traversable_list;

pub use list::List;
pub use traversable_list::TraversableList;
