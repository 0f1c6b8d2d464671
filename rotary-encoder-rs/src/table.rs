//! Quadrature transition table and raw-state constants.
//!
//! A raw state is the 2-bit combination of the two signal lines:
//! `pin_a | (pin_b << 1)`, where a HIGH level reads as 1. With both lines
//! pulled up, a knob resting in a detent reads as state 3.
//!
//! Turning the knob clockwise walks the raw states `3 → 1 → 0 → 2 → 3`;
//! counter-clockwise walks the same cycle backwards.

// ---------------------------------------------------------------------------
// Transition table
// ---------------------------------------------------------------------------

/// Position delta for every `(previous, current)` raw-state pair.
///
/// Indexed by `current | (previous << 2)`. Entries are `+1` for a step
/// forward, `-1` for a step backward, and `0` where nothing changed or
/// where both lines flipped at once. A double flip carries no direction
/// information, so it is absorbed as "no movement".
pub const KNOB_DIR: [i8; 16] = [
    0, -1, 1, 0, //
    1, 0, 0, -1, //
    -1, 0, 0, 1, //
    0, 1, -1, 0,
];

/// Look up the position delta for a transition between two raw states.
///
/// Both arguments are masked to 2 bits, so every input maps to a table
/// entry.
#[inline]
pub const fn transition_delta(previous: u8, current: u8) -> i8 {
    KNOB_DIR[((current & RAW_STATE_MASK) | ((previous & RAW_STATE_MASK) << 2)) as usize]
}

// ---------------------------------------------------------------------------
// Raw states
// ---------------------------------------------------------------------------

/// Mask selecting the two signal bits of a raw state.
pub const RAW_STATE_MASK: u8 = 0b11;

/// Raw state with both lines LOW.
pub const LATCH0: u8 = 0;

/// Raw state with both lines HIGH. The rest position of a pulled-up encoder.
pub const LATCH3: u8 = 3;

/// Raw state assumed at power-on, before the first sample.
pub const INITIAL_RAW_STATE: u8 = LATCH3;

// ---------------------------------------------------------------------------
// Speed estimation
// ---------------------------------------------------------------------------

/// Latch events per full revolution of the reference encoder (20 detents).
pub const DEFAULT_LATCHES_PER_REVOLUTION: u32 = 20;

/// Milliseconds per minute, the numerator of the RPM estimate.
pub const MILLIS_PER_MINUTE: f32 = 60_000.0;

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_state_has_no_delta() {
        for s in 0..4u8 {
            assert_eq!(transition_delta(s, s), 0);
        }
    }

    #[test]
    fn double_flips_have_no_delta() {
        // Both bits change: 0 <-> 3 and 1 <-> 2.
        assert_eq!(transition_delta(0, 3), 0);
        assert_eq!(transition_delta(3, 0), 0);
        assert_eq!(transition_delta(1, 2), 0);
        assert_eq!(transition_delta(2, 1), 0);
    }

    #[test]
    fn clockwise_cycle_counts_up() {
        let cycle = [3u8, 1, 0, 2, 3];
        for pair in cycle.windows(2) {
            assert_eq!(transition_delta(pair[0], pair[1]), 1, "{:?}", pair);
        }
    }

    #[test]
    fn counter_clockwise_cycle_counts_down() {
        let cycle = [3u8, 2, 0, 1, 3];
        for pair in cycle.windows(2) {
            assert_eq!(transition_delta(pair[0], pair[1]), -1, "{:?}", pair);
        }
    }

    #[test]
    fn out_of_range_inputs_are_masked() {
        assert_eq!(transition_delta(0b111, 0b101), transition_delta(3, 1));
    }
}
