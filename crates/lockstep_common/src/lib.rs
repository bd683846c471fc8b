//! Shared foundational types used across the lockstep equivalence-testing kit.
//!
//! This crate provides the fixed-width two's-complement [`Word`] used by the
//! RTL-style device implementations and the register file, together with its
//! width-validation error type.

#![warn(missing_docs)]

pub mod word;

pub use word::{Word, WordError, MAX_WIDTH, MIN_WIDTH};
