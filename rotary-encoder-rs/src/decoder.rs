//! Pin-owning quadrature decoder.
//!
//! [`QuadratureDecoder`] samples two [`InputPin`]s on every
//! [`tick()`](QuadratureDecoder::tick) and feeds the combined raw state to
//! a [`QuadratureState`]. Call `tick()` from a polling loop or from a
//! pin-change interrupt, but not from both.

use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::direction::Direction;
use crate::error::EncoderError;
use crate::mode::{EncoderConfig, LatchMode};
use crate::state::QuadratureState;

/// Quadrature decoder for one rotary encoder.
///
/// Owns the two signal pins and a millisecond [`Clock`]. The pins are
/// expected to be configured as inputs with pull-ups by the HAL before
/// they are handed over, e.g. `Input::new(pin, Pull::Up)` on Embassy.
///
/// # Example
///
/// ```ignore
/// use embassy_rp::gpio::{Input, Pull};
/// use rotary_encoder::{EmbassyClock, LatchMode, QuadratureDecoder};
///
/// let pin_a = Input::new(p.PIN_2, Pull::Up);
/// let pin_b = Input::new(p.PIN_3, Pull::Up);
/// let mut encoder = QuadratureDecoder::new(pin_a, pin_b, EmbassyClock, LatchMode::FourLatchAt3);
///
/// loop {
///     encoder.tick().unwrap();
///     let position = encoder.position();
///     Timer::after_millis(1).await;
/// }
/// ```
pub struct QuadratureDecoder<A, B, C> {
    pin_a: A,
    pin_b: B,
    clock: C,
    state: QuadratureState,
}

impl<A, B, C> QuadratureDecoder<A, B, C>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
    C: Clock,
{
    /// Create a decoder with the given latch mode and the default 20
    /// latches per revolution.
    ///
    /// # Arguments
    /// * `pin_a` — first signal line (bit 0 of the raw state)
    /// * `pin_b` — second signal line (bit 1 of the raw state)
    /// * `clock` — millisecond clock used to timestamp latch events
    /// * `mode` — latch policy of the physical encoder
    pub fn new(pin_a: A, pin_b: B, clock: C, mode: LatchMode) -> Self {
        Self::with_config(pin_a, pin_b, clock, EncoderConfig::with_mode(mode))
    }

    /// Create a decoder with a full [`EncoderConfig`].
    ///
    /// No pin is read here; the decoder assumes the knob starts at rest
    /// (raw state 3).
    pub fn with_config(pin_a: A, pin_b: B, clock: C, config: EncoderConfig) -> Self {
        Self {
            pin_a,
            pin_b,
            clock,
            state: QuadratureState::new(config),
        }
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Read both pins and advance the state machine.
    ///
    /// Returns `Ok(true)` if the sample completed a detent (the reported
    /// position and latch timestamps were refreshed).
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if either pin read fails. The decoder state
    ///   is left untouched in that case.
    pub fn tick(&mut self) -> Result<bool, EncoderError<A::Error>> {
        let raw_state = self.read_raw_state()?;
        Ok(self.state.update(raw_state, &self.clock))
    }

    /// Sample the current raw state (`pin_a | (pin_b << 1)`) without
    /// updating the decoder.
    pub fn read_raw_state(&mut self) -> Result<u8, EncoderError<A::Error>> {
        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;
        Ok(u8::from(a) | (u8::from(b) << 1))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Reported position in detents.
    pub fn position(&self) -> i32 {
        self.state.position()
    }

    /// Direction since the previous call. Consumes the change: a second
    /// call without movement returns [`Direction::NoRotation`].
    pub fn direction(&mut self) -> Direction {
        self.state.direction()
    }

    /// Overwrite the reported position, keeping the sub-detent phase.
    pub fn set_position(&mut self, new_position: i32) {
        self.state.set_position(new_position);
    }

    /// Milliseconds between the two most recent detents.
    pub fn millis_between_rotations(&self) -> u32 {
        self.state.millis_between_rotations()
    }

    /// Estimated revolutions per minute, or `None` if undefined (two
    /// detents in the same millisecond, read in that millisecond).
    pub fn rpm(&self) -> Option<u32> {
        self.state.rpm(self.clock.now_millis())
    }

    /// Latch mode this decoder was created with.
    pub fn mode(&self) -> LatchMode {
        self.state.mode()
    }

    /// Full decoding state, for diagnostics.
    pub fn state(&self) -> &QuadratureState {
        &self.state
    }

    /// Give back the pins and the clock.
    pub fn release(self) -> (A, B, C) {
        (self.pin_a, self.pin_b, self.clock)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
