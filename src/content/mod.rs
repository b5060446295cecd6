//! Study content types
//!
//! The question model and its answer/diagnosis value types. Content is
//! authored and mutated elsewhere; the scoring core only reads it.

mod models;

pub use models::*;
