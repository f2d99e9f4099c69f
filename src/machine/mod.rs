//! Machine model for the calculator.
//!
//! This module implements the complete register-level machine:
//! - Three decimal register banks (setting, counting, result)
//! - A six-position carriage selecting the turn's decimal weight
//! - A two-position crank selecting addition or subtraction

pub mod bank;
pub mod state;
pub mod engine;

pub use bank::Bank;
pub use state::{CalculatorState, Crank, StateUpdate};
pub use engine::{Curta, RangeError};
