//! Switch-driven pattern selection.

use crate::patterns::Pattern;
use crate::types::{ButtonState, SwitchState};

/// Returns the pattern a switch code selects.
///
/// Exactly one switch on selects Pattern2 through Pattern5; all switches off,
/// and every multi-switch combination, fall back to Pattern1.
pub const fn select(switches: SwitchState) -> Pattern {
    match switches.bits() {
        0x01 => Pattern::Pattern2,
        0x02 => Pattern::Pattern3,
        0x04 => Pattern::Pattern4,
        0x08 => Pattern::Pattern5,
        _ => Pattern::Pattern1,
    }
}

/// A sampled input pair and the pattern it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub buttons: ButtonState,
    pub switches: SwitchState,
    pub pattern: Pattern,
}

impl Selection {
    /// Selects a pattern for the given inputs.
    pub const fn new(buttons: ButtonState, switches: SwitchState) -> Self {
        Self {
            buttons,
            switches,
            pattern: select(switches),
        }
    }

    /// Returns true if the switches fell back to Pattern1 without selecting it.
    pub const fn is_fallback(&self) -> bool {
        self.switches.bits() != 0x00 && matches!(self.pattern, Pattern::Pattern1)
    }
}
