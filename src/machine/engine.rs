//! The register engine: every operation the operator can perform.
//!
//! Implements carriage and crank positioning, addressed reads and writes
//! of the register banks, clearing, and the turn operation that advances
//! the counting and result banks together.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::decimal::Digits;
use crate::decimal::arith::pow10;
use crate::machine::bank::Bank;
use crate::machine::state::{CalculatorState, Crank, StateUpdate, CARRIAGE_MAX, CARRIAGE_MIN};

/// The calculator engine.
///
/// Owns the register state and exposes the full operation surface. Every
/// mutating operation validates its arguments first and then replaces the
/// state wholesale in a single transition; a failed operation leaves the
/// state untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Curta {
    state: CalculatorState,
}

impl Curta {
    /// Create a machine in its delivery state: all banks zero, carriage
    /// at position 1, crank down.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// Snapshot of the current register state.
    ///
    /// The snapshot is a plain copy; later operations on the machine
    /// never change it.
    #[inline]
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    // ==================== Carriage ====================

    /// Current carriage position (1-6).
    #[inline]
    pub fn carriage(&self) -> u8 {
        self.state.carriage
    }

    /// Move the carriage to position `n`.
    ///
    /// Each step of the carriage multiplies a turn's contribution by a
    /// further power of ten.
    pub fn set_carriage(&mut self, n: u8) -> Result<(), RangeError> {
        if !(CARRIAGE_MIN..=CARRIAGE_MAX).contains(&n) {
            return Err(RangeError::Carriage { given: n });
        }

        self.state = self.state.apply(StateUpdate {
            carriage: Some(n),
            ..StateUpdate::default()
        });
        Ok(())
    }

    // ==================== Crank ====================

    /// Lift the crank: subsequent turns subtract. Idempotent.
    pub fn lift_crank(&mut self) {
        self.state = self.state.apply(StateUpdate {
            crank: Some(Crank::Up),
            ..StateUpdate::default()
        });
    }

    /// Lower the crank: subsequent turns add. Idempotent.
    pub fn lower_crank(&mut self) {
        self.state = self.state.apply(StateUpdate {
            crank: Some(Crank::Down),
            ..StateUpdate::default()
        });
    }

    /// True when the crank is in the additive rest position.
    #[inline]
    pub fn crank_is_down(&self) -> bool {
        self.state.crank.is_down()
    }

    // ==================== Register banks ====================

    /// Read a whole bank as its decimal integer value.
    #[inline]
    pub fn read(&self, bank: Bank) -> u64 {
        self.state.bank(bank)
    }

    /// Read the single digit at the 1-indexed `register` position of a
    /// bank (register 1 is the units dial).
    pub fn read_register(&self, bank: Bank, register: usize) -> Result<u8, RangeError> {
        let width = bank.width();
        if register < 1 || register > width {
            return Err(RangeError::Register { bank, given: register, width });
        }

        let digits = Digits::from_u64(self.state.bank(bank), width);
        Ok(digits.get(register - 1))
    }

    /// Value of the setting bank.
    #[inline]
    pub fn read_setting(&self) -> u64 {
        self.read(Bank::Setting)
    }

    /// Value of the counting bank.
    #[inline]
    pub fn read_counting(&self) -> u64 {
        self.read(Bank::Counting)
    }

    /// Value of the result bank.
    #[inline]
    pub fn read_result(&self) -> u64 {
        self.read(Bank::Result)
    }

    /// Digit of one setting dial (1 = units).
    #[inline]
    pub fn read_setting_register(&self, register: usize) -> Result<u8, RangeError> {
        self.read_register(Bank::Setting, register)
    }

    /// Digit of one counting dial (1 = units).
    #[inline]
    pub fn read_counting_register(&self, register: usize) -> Result<u8, RangeError> {
        self.read_register(Bank::Counting, register)
    }

    /// Digit of one result dial (1 = units).
    #[inline]
    pub fn read_result_register(&self, register: usize) -> Result<u8, RangeError> {
        self.read_register(Bank::Result, register)
    }

    /// Set one setting dial (1 = units) to a digit value.
    ///
    /// The setting bank is the only per-digit writable bank; the counting
    /// and result banks change only through turns and clears.
    pub fn set_register(&mut self, register: usize, value: u8) -> Result<(), RangeError> {
        self.write_register(Bank::Setting, register, value)
    }

    /// Table-driven digit write: decode the bank, replace one digit,
    /// re-encode, and merge.
    fn write_register(&mut self, bank: Bank, register: usize, value: u8) -> Result<(), RangeError> {
        let width = bank.width();
        if register < 1 || register > width {
            return Err(RangeError::Register { bank, given: register, width });
        }
        if value > 9 {
            return Err(RangeError::DigitValue { given: value });
        }

        let mut digits = Digits::from_u64(self.state.bank(bank), width);
        digits.set(register - 1, value);
        let merged = digits.to_u64();

        let update = match bank {
            Bank::Setting => StateUpdate {
                setting: Some(merged),
                ..StateUpdate::default()
            },
            Bank::Counting => StateUpdate {
                counting: Some(merged as i128),
                ..StateUpdate::default()
            },
            Bank::Result => StateUpdate {
                result: Some(merged as i128),
                ..StateUpdate::default()
            },
        };
        self.state = self.state.apply(update);
        Ok(())
    }

    // ==================== Clearing ====================

    /// Zero the counting bank.
    pub fn clear_counting(&mut self) {
        self.state = self.state.apply(StateUpdate {
            counting: Some(0),
            ..StateUpdate::default()
        });
    }

    /// Zero the result bank.
    pub fn clear_result(&mut self) {
        self.state = self.state.apply(StateUpdate {
            result: Some(0),
            ..StateUpdate::default()
        });
    }

    /// Zero the counting and result banks in one transition.
    pub fn clear(&mut self) {
        self.state = self.state.apply(StateUpdate {
            counting: Some(0),
            result: Some(0),
            ..StateUpdate::default()
        });
    }

    /// Return the whole machine to its delivery state: banks zero,
    /// carriage at 1, crank down.
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
    }

    // ==================== Turn ====================

    /// Turn the crank once.
    pub fn turn(&mut self) {
        self.apply_turns(1);
    }

    /// Turn the crank `turns` times in one motion.
    pub fn turn_by(&mut self, turns: u64) -> Result<(), RangeError> {
        if turns == 0 {
            return Err(RangeError::TurnCount);
        }

        self.apply_turns(turns);
        Ok(())
    }

    /// Advance the counting and result banks for a validated turn count.
    ///
    /// The counting bank moves by the carriage-weighted, crank-signed turn
    /// count; the result bank moves by the setting value times that same
    /// weight. Both land in one merged transition.
    fn apply_turns(&mut self, turns: u64) {
        let weight = turns as i128
            * pow10((self.state.carriage - 1) as u32) as i128
            * self.state.crank.signum() as i128;
        let value = self.state.setting as i128 * weight;

        self.state = self.state.apply(StateUpdate {
            counting: Some(self.state.counting as i128 + weight),
            result: Some(self.state.result as i128 + value),
            ..StateUpdate::default()
        });
    }
}

impl Default for Curta {
    fn default() -> Self {
        Self::new()
    }
}

/// Out-of-domain argument errors.
///
/// Every failure is reported synchronously to the caller and leaves the
/// register state completely unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("carriage setting {given} out of range (1-6)")]
    Carriage { given: u8 },

    #[error("{bank} register {given} out of range (1-{width})")]
    Register { bank: Bank, given: usize, width: usize },

    #[error("register value {given} out of range (0-9)")]
    DigitValue { given: u8 },

    #[error("turn count must be at least 1")]
    TurnCount,
}
