//! Text codec for Outset paddings.
//!
//! This crate converts between [`Padding`](outset_core::Padding) values and
//! their shorthand text encoding, including the embedded condition
//! expression language. Built on `nom` for composable clause parsing.

mod codec;
mod lexer;

pub mod condition;

pub use codec::{decode, decode_strict, encode};
