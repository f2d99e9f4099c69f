//! Register bank addressing.
//!
//! The machine carries three banks of decimal dials, each with a fixed
//! digit capacity. Bank reads and writes are routed through this table
//! rather than through per-bank duplicated accessors.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::decimal::arith::pow10;

/// Number of setting (input dial) registers.
pub const SETTING_DIGITS: usize = 8;

/// Number of counting (turn tally) registers.
pub const COUNTING_DIGITS: usize = 6;

/// Number of result (accumulator) registers.
pub const RESULT_DIGITS: usize = 11;

/// One of the three decimal register banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    /// The input dials set by the operator before turning.
    Setting,
    /// The tally of crank turns, weighted by carriage position.
    Counting,
    /// The accumulated result.
    Result,
}

impl Bank {
    /// All banks in display order.
    pub const ALL: [Bank; 3] = [Bank::Setting, Bank::Counting, Bank::Result];

    /// Digit capacity of this bank.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Bank::Setting => SETTING_DIGITS,
            Bank::Counting => COUNTING_DIGITS,
            Bank::Result => RESULT_DIGITS,
        }
    }

    /// Decimal modulus of this bank: 10 to the power of its width.
    ///
    /// Bank values always live in `[0, modulus)`.
    #[inline]
    pub fn modulus(self) -> u64 {
        pow10(self.width() as u32)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::Setting => write!(f, "setting"),
            Bank::Counting => write!(f, "counting"),
            Bank::Result => write!(f, "result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_widths() {
        assert_eq!(Bank::Setting.width(), 8);
        assert_eq!(Bank::Counting.width(), 6);
        assert_eq!(Bank::Result.width(), 11);
    }

    #[test]
    fn test_bank_moduli() {
        assert_eq!(Bank::Setting.modulus(), 100_000_000);
        assert_eq!(Bank::Counting.modulus(), 1_000_000);
        assert_eq!(Bank::Result.modulus(), 100_000_000_000);
    }

    #[test]
    fn test_bank_names() {
        assert_eq!(format!("{}", Bank::Setting), "setting");
        assert_eq!(format!("{}", Bank::Counting), "counting");
        assert_eq!(format!("{}", Bank::Result), "result");
    }
}
