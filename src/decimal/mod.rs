//! Decimal number system primitives.
//!
//! This module provides the core types for working with the machine's
//! decimal registers:
//! - [`Digits`] - A fixed-width word of decimal digits (one dial row)
//! - [`arith`] - Powers of ten and modular wraparound helpers

mod digits;
pub mod arith;

pub use digits::Digits;
pub use arith::{pow10, wrap};
