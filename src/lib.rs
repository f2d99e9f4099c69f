//! # Curta Emulator
//!
//! A register-level emulator of the Curta, the handheld mechanical
//! pinwheel calculator introduced in 1948.
//!
//! The machine carries three banks of decimal registers: 8 setting dials
//! the operator composes a number on, a 6-digit counting register that
//! tallies crank turns, and an 11-digit result register. Each turn of the
//! crank adds the setting value into the result, shifted by the carriage
//! position; with the crank lifted, a turn subtracts instead. Overflow and
//! underflow wrap around the fixed register widths, which is how the real
//! machine performs subtraction by complements.
//!
//! The emulator is a pure in-memory value object with no I/O of its own.

pub mod decimal;
pub mod machine;

// Re-export commonly used types
pub use decimal::Digits;
pub use machine::{Bank, CalculatorState, Crank, Curta, RangeError, StateUpdate};
