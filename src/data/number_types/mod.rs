//! # Number types
//!
//! Fixed size integers as building blocks and the exact rational numbers built from them.
pub mod integer;
pub mod rational;
