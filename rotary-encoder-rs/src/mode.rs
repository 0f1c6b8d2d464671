//! Latch modes and decoder configuration.

use crate::table::{DEFAULT_LATCHES_PER_REVOLUTION, LATCH0, LATCH3};

/// Which raw states count as a settled detent.
///
/// Mechanical encoders differ in how many quadrature steps lie between two
/// detents and in which raw state the knob rests. The mode decides when the
/// fine-grained internal count is committed to the reported position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchMode {
    /// 4 steps per detent, latch at raw state 3.
    FourLatchAt3,
    /// 4 steps per detent, latch at raw state 0 (reverse wiring).
    #[default]
    FourLatchAt0,
    /// 2 steps per detent, latch at raw states 0 and 3.
    TwoLatchAt0And3,
}

impl LatchMode {
    /// Arithmetic right shift converting the internal count to detents.
    pub const fn shift(self) -> u32 {
        match self {
            LatchMode::FourLatchAt3 | LatchMode::FourLatchAt0 => 2,
            LatchMode::TwoLatchAt0And3 => 1,
        }
    }

    /// Number of raw steps between two detents.
    pub const fn steps_per_detent(self) -> u32 {
        1 << self.shift()
    }

    /// Mask selecting the sub-detent phase of the internal count.
    pub const fn phase_mask(self) -> i32 {
        (1 << self.shift()) - 1
    }

    /// Returns `true` if `raw_state` is a latch state in this mode.
    pub const fn is_latch(self, raw_state: u8) -> bool {
        match self {
            LatchMode::FourLatchAt3 => raw_state == LATCH3,
            LatchMode::FourLatchAt0 => raw_state == LATCH0,
            LatchMode::TwoLatchAt0And3 => raw_state == LATCH0 || raw_state == LATCH3,
        }
    }
}

/// Decoder configuration.
///
/// `latches_per_revolution` only feeds the RPM estimate. It is a property
/// of the physical encoder (detents per turn for the four-step modes,
/// twice that for [`LatchMode::TwoLatchAt0And3`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Latch policy.
    pub mode: LatchMode,
    /// Latch events per full revolution. Default: 20.
    pub latches_per_revolution: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            mode: LatchMode::default(),
            latches_per_revolution: DEFAULT_LATCHES_PER_REVOLUTION,
        }
    }
}

impl EncoderConfig {
    /// Default configuration with the given latch mode.
    pub fn with_mode(mode: LatchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl From<LatchMode> for EncoderConfig {
    fn from(mode: LatchMode) -> Self {
        EncoderConfig::with_mode(mode)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_latches_at_zero() {
        assert_eq!(LatchMode::default(), LatchMode::FourLatchAt0);
    }

    #[test]
    fn shifts_and_masks() {
        assert_eq!(LatchMode::FourLatchAt3.shift(), 2);
        assert_eq!(LatchMode::FourLatchAt0.shift(), 2);
        assert_eq!(LatchMode::TwoLatchAt0And3.shift(), 1);

        assert_eq!(LatchMode::FourLatchAt0.phase_mask(), 0b11);
        assert_eq!(LatchMode::TwoLatchAt0And3.phase_mask(), 0b1);

        assert_eq!(LatchMode::FourLatchAt3.steps_per_detent(), 4);
        assert_eq!(LatchMode::TwoLatchAt0And3.steps_per_detent(), 2);
    }

    #[test]
    fn latch_states_per_mode() {
        let latched = |mode: LatchMode| {
            let mut states = [false; 4];
            for (s, slot) in states.iter_mut().enumerate() {
                *slot = mode.is_latch(s as u8);
            }
            states
        };

        assert_eq!(latched(LatchMode::FourLatchAt3), [false, false, false, true]);
        assert_eq!(latched(LatchMode::FourLatchAt0), [true, false, false, false]);
        assert_eq!(latched(LatchMode::TwoLatchAt0And3), [true, false, false, true]);
    }

    #[test]
    fn config_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.mode, LatchMode::FourLatchAt0);
        assert_eq!(config.latches_per_revolution, 20);

        let two = EncoderConfig::with_mode(LatchMode::TwoLatchAt0And3);
        assert_eq!(two.mode, LatchMode::TwoLatchAt0And3);
        assert_eq!(two.latches_per_revolution, 20);
    }
}
