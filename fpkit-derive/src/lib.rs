//! Derive macros for fpkit.
//!
//! # `#[derive(Lenses)]`
//!
//! For every named field `field: T` of a struct `S`, generates an associated
//! function `S::field_lens()` returning an `fpkit::optics::Lens<S, T>`.
//!
//! ```rust,ignore
//! use fpkit::Lenses;
//! use fpkit::optics::Lens;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let john = Person { name: "John".to_string(), age: 30 };
//! let johnny = Person::name_lens().set(john, "Johnny".to_string());
//! assert_eq!(johnny.name, "Johnny");
//! ```
//!
//! Enums, unions, tuple structs and unit structs are rejected with a
//! compile error pointing at the type name.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Generates a `<field>_lens()` constructor for each named field.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
