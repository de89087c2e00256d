//! # Reading and writing rational numbers
//!
//! Errors of the crate and text parsing. Rendering is done through `Display` on the number types.
pub mod error;
pub mod parse;
