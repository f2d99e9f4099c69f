//! The calculator's register state.
//!
//! State is a plain value, never mutated in place: every operation builds
//! a replacement through [`CalculatorState::apply`], which is also where
//! register overflow and underflow wrap. A copy taken at any point is a
//! stable snapshot, unaffected by later operations on the machine.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::decimal::Digits;
use crate::decimal::arith::wrap;
use crate::machine::bank::Bank;

/// Lowest carriage position.
pub const CARRIAGE_MIN: u8 = 1;

/// Highest carriage position.
pub const CARRIAGE_MAX: u8 = 6;

/// Crank position.
///
/// Down is the rest position: each turn adds the setting value into the
/// result. Lifted, each turn subtracts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crank {
    /// Addition mode.
    Down,
    /// Subtraction mode.
    Up,
}

impl Crank {
    /// True when the crank is in the additive rest position.
    #[inline]
    pub const fn is_down(self) -> bool {
        matches!(self, Crank::Down)
    }

    /// Sign a turn contributes: +1 crank down, -1 crank up.
    #[inline]
    pub const fn signum(self) -> i64 {
        match self {
            Crank::Down => 1,
            Crank::Up => -1,
        }
    }
}

impl Default for Crank {
    fn default() -> Self {
        Crank::Down
    }
}

/// The complete register state of the machine.
///
/// Bank values are always reduced into their bank's range: `setting` below
/// 10^8, `counting` below 10^6, `result` below 10^11. The carriage is
/// always in [1, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Setting bank: the 8 input dials read as one number.
    pub setting: u64,
    /// Counting bank: the 6-digit turn tally.
    pub counting: u64,
    /// Result bank: the 11-digit accumulator.
    pub result: u64,
    /// Carriage position (1-6), the decimal weight of a turn.
    pub carriage: u8,
    /// Crank position.
    pub crank: Crank,
}

/// A partial state change, merged through [`CalculatorState::apply`].
///
/// Counting and result are carried as signed, unreduced values; `apply`
/// wraps them into their bank's range, so an update may sit arbitrarily
/// far outside it in either direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateUpdate {
    pub setting: Option<u64>,
    pub counting: Option<i128>,
    pub result: Option<i128>,
    pub carriage: Option<u8>,
    pub crank: Option<Crank>,
}

impl CalculatorState {
    /// The delivery state: all banks zero, carriage at 1, crank down.
    pub fn new() -> Self {
        Self {
            setting: 0,
            counting: 0,
            result: 0,
            carriage: CARRIAGE_MIN,
            crank: Crank::Down,
        }
    }

    /// Merge a partial update, returning the replacement state.
    ///
    /// Counting and result values are wrapped into their bank's range;
    /// fields absent from the update carry over unchanged. All register
    /// mutation in the crate funnels through here, so no caller ever
    /// observes a half-applied change.
    ///
    /// The carriage, if present, must already be validated to [1, 6].
    pub fn apply(self, update: StateUpdate) -> Self {
        if let Some(n) = update.carriage {
            debug_assert!(
                n >= CARRIAGE_MIN && n <= CARRIAGE_MAX,
                "Unvalidated carriage position: {}",
                n
            );
        }

        Self {
            setting: update.setting.unwrap_or(self.setting),
            counting: update
                .counting
                .map_or(self.counting, |v| wrap(v, Bank::Counting.modulus())),
            result: update
                .result
                .map_or(self.result, |v| wrap(v, Bank::Result.modulus())),
            carriage: update.carriage.unwrap_or(self.carriage),
            crank: update.crank.unwrap_or(self.crank),
        }
    }

    /// Raw integer value of a bank.
    #[inline]
    pub fn bank(&self, bank: Bank) -> u64 {
        match bank {
            Bank::Setting => self.setting,
            Bank::Counting => self.counting,
            Bank::Result => self.result,
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setting {} | counting {} | result {} | carriage {} | crank {}",
            Digits::from_u64(self.setting, Bank::Setting.width()),
            Digits::from_u64(self.counting, Bank::Counting.width()),
            Digits::from_u64(self.result, Bank::Result.width()),
            self.carriage,
            if self.crank.is_down() { "down" } else { "up" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = CalculatorState::new();
        assert_eq!(state.setting, 0);
        assert_eq!(state.counting, 0);
        assert_eq!(state.result, 0);
        assert_eq!(state.carriage, 1);
        assert!(state.crank.is_down());
    }

    #[test]
    fn test_apply_merges_only_given_fields() {
        let state = CalculatorState::new().apply(StateUpdate {
            setting: Some(25),
            carriage: Some(3),
            ..StateUpdate::default()
        });

        assert_eq!(state.setting, 25);
        assert_eq!(state.carriage, 3);
        assert_eq!(state.counting, 0);
        assert_eq!(state.result, 0);
        assert!(state.crank.is_down());
    }

    #[test]
    fn test_apply_wraps_negative_values() {
        let state = CalculatorState::new().apply(StateUpdate {
            counting: Some(-1),
            result: Some(-50),
            ..StateUpdate::default()
        });

        assert_eq!(state.counting, 999_999);
        assert_eq!(state.result, 99_999_999_950);
    }

    #[test]
    fn test_apply_wraps_overflow() {
        let state = CalculatorState::new().apply(StateUpdate {
            counting: Some(1_000_001),
            result: Some(300_000_000_000 + 7),
            ..StateUpdate::default()
        });

        assert_eq!(state.counting, 1);
        assert_eq!(state.result, 7);
    }

    #[test]
    fn test_apply_returns_new_value() {
        let before = CalculatorState::new();
        let after = before.apply(StateUpdate {
            counting: Some(42),
            ..StateUpdate::default()
        });

        assert_eq!(before.counting, 0);
        assert_eq!(after.counting, 42);
    }

    #[test]
    fn test_crank_signum() {
        assert_eq!(Crank::Down.signum(), 1);
        assert_eq!(Crank::Up.signum(), -1);
    }

    #[test]
    fn test_display_readout() {
        let state = CalculatorState::new().apply(StateUpdate {
            setting: Some(25),
            counting: Some(4),
            result: Some(20),
            ..StateUpdate::default()
        });

        assert_eq!(
            format!("{}", state),
            "setting 00000025 | counting 000004 | result 00000000020 | carriage 1 | crank down"
        );
    }
}
