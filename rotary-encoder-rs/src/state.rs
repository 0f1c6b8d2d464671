//! Pin-free quadrature state machine.
//!
//! [`QuadratureState`] holds everything the decoder knows about one
//! encoder: the last raw state, the fine-grained internal count, the
//! reported (latched) position, the direction snapshot and the timestamps
//! of the two most recent latch events. It never touches hardware; raw
//! states are pushed in by [`QuadratureDecoder`](crate::QuadratureDecoder)
//! or by any other sampling front end.

use crate::clock::Clock;
use crate::direction::Direction;
use crate::mode::{EncoderConfig, LatchMode};
use crate::table::{transition_delta, INITIAL_RAW_STATE, MILLIS_PER_MINUTE, RAW_STATE_MASK};

/// Quadrature decoding state for a single encoder.
///
/// All fields are fixed-size; no operation allocates or blocks.
///
/// # Example
///
/// ```
/// use rotary_encoder::{Direction, LatchMode, QuadratureState};
///
/// let clock = || 0u32;
/// let mut state = QuadratureState::new(LatchMode::FourLatchAt3.into());
///
/// // One clockwise detent: 3 -> 1 -> 0 -> 2 -> 3
/// for raw in [1, 0, 2, 3] {
///     state.update(raw, &clock);
/// }
/// assert_eq!(state.position(), 1);
/// assert_eq!(state.direction(), Direction::Clockwise);
/// assert_eq!(state.direction(), Direction::NoRotation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureState {
    config: EncoderConfig,
    /// Last observed raw state, always in `0..=3`.
    raw_state: u8,
    /// Accumulated raw steps. Wraps on overflow.
    position: i32,
    /// `position >> shift`, refreshed at latch states only.
    position_ext: i32,
    /// Snapshot consumed by [`direction()`](Self::direction).
    position_ext_prev: i32,
    /// Time of the most recent latch event (ms).
    latch_time: u32,
    /// Time of the latch event before that (ms).
    latch_time_prev: u32,
}

impl Default for QuadratureState {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl QuadratureState {
    /// Create a state machine at rest (raw state 3, position 0, both
    /// latch timestamps 0).
    pub const fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            raw_state: INITIAL_RAW_STATE,
            position: 0,
            position_ext: 0,
            position_ext_prev: 0,
            latch_time: 0,
            latch_time_prev: 0,
        }
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Active configuration.
    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Active latch mode.
    pub fn mode(&self) -> LatchMode {
        self.config.mode
    }

    // ── Sampling ─────────────────────────────────────────────────────

    /// Feed one raw sample (`pin_a | (pin_b << 1)`).
    ///
    /// A sample equal to the stored raw state is a no-op. Otherwise the
    /// transition delta is added to the internal count, and if `raw_state`
    /// is a latch state for the active mode the reported position is
    /// recomputed and `clock` is read to record the latch time. The stored
    /// raw state is updated in either case.
    ///
    /// Returns `true` if this sample was a latch event. Values above 3 are
    /// masked to their low two bits.
    pub fn update<C: Clock + ?Sized>(&mut self, raw_state: u8, clock: &C) -> bool {
        let raw_state = raw_state & RAW_STATE_MASK;
        if raw_state == self.raw_state {
            return false;
        }

        self.position = self
            .position
            .wrapping_add(i32::from(transition_delta(self.raw_state, raw_state)));
        self.raw_state = raw_state;

        let mode = self.config.mode;
        if !mode.is_latch(raw_state) {
            return false;
        }

        self.position_ext = self.position >> mode.shift();
        self.latch_time_prev = self.latch_time;
        self.latch_time = clock.now_millis();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "latch: state={} position={} t={}",
            raw_state,
            self.position_ext,
            self.latch_time
        );

        true
    }

    // ── Position ─────────────────────────────────────────────────────

    /// Reported position in detents.
    pub fn position(&self) -> i32 {
        self.position_ext
    }

    /// Raw-step count, finer than [`position()`](Self::position).
    pub fn internal_position(&self) -> i32 {
        self.position
    }

    /// Last observed raw state (`0..=3`).
    pub fn raw_state(&self) -> u8 {
        self.raw_state
    }

    /// Overwrite the reported position.
    ///
    /// Only the detent part of the internal count is replaced; its low
    /// `shift` bits (the phase between detents) are kept, so the next
    /// latch lands where the knob physically is. The direction snapshot is
    /// reset to `new_position`. Latch timestamps are untouched.
    pub fn set_position(&mut self, new_position: i32) {
        let mode = self.config.mode;
        self.position = (new_position << mode.shift()) | (self.position & mode.phase_mask());
        self.position_ext = new_position;
        self.position_ext_prev = new_position;

        #[cfg(feature = "defmt")]
        defmt::debug!("position set to {}", new_position);
    }

    // ── Direction ────────────────────────────────────────────────────

    /// Direction of travel since the previous call.
    ///
    /// Every call replaces the snapshot with the current position, so a
    /// second call without movement in between returns
    /// [`Direction::NoRotation`].
    pub fn direction(&mut self) -> Direction {
        let direction = Direction::between(self.position_ext_prev, self.position_ext);
        self.position_ext_prev = self.position_ext;
        direction
    }

    // ── Timing ───────────────────────────────────────────────────────

    /// Timestamp of the most recent latch event.
    pub fn last_latch_millis(&self) -> u32 {
        self.latch_time
    }

    /// Milliseconds between the two most recent latch events.
    ///
    /// Computed with wrapping subtraction, so a clock wrap between the two
    /// events still yields the true interval.
    pub fn millis_between_rotations(&self) -> u32 {
        self.latch_time.wrapping_sub(self.latch_time_prev)
    }

    /// Estimated speed in revolutions per minute at time `now_millis`.
    ///
    /// Uses the larger of the last latch-to-latch interval and the time
    /// since the last latch, so the estimate decays toward zero once the
    /// knob stops. Returns `None` when that interval (scaled by
    /// `latches_per_revolution`) is zero and the speed is undefined.
    pub fn rpm(&self, now_millis: u32) -> Option<u32> {
        let between = self.millis_between_rotations();
        let since_last = now_millis.wrapping_sub(self.latch_time);
        let t = between.max(since_last);

        let millis_per_revolution = t.wrapping_mul(self.config.latches_per_revolution);
        if millis_per_revolution == 0 {
            return None;
        }

        Some((MILLIS_PER_MINUTE / millis_per_revolution as f32) as u32)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
