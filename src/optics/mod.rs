//! Optics for focused, non-mutating access to parts of a value.
//!
//! - [`Lens`]: get and set one field
//! - [`FunctionLens`]: a lens made from a getter and a setter
//! - [`lens`] and the [`lens!`](crate::lens) macro for building them
//!
//! With the `derive` feature, `#[derive(Lenses)]` generates a
//! `<field>_lens()` constructor for every named field of a struct.

mod lens;

pub use lens::{FunctionLens, Lens, lens};
