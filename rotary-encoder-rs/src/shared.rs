//! Critical-section wrapper for decoders shared between contexts.
//!
//! When `tick()` runs in one context (an interrupt handler, a polling task
//! on another executor) and the accessors in another, every multi-field
//! update and read has to be atomic. [`SharedDecoder`] puts the decoder
//! behind an [`embassy_sync::blocking_mutex::Mutex`]; each method holds the
//! lock for exactly one operation and never across an `.await`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::decoder::QuadratureDecoder;
use crate::direction::Direction;
use crate::error::EncoderError;

/// A [`QuadratureDecoder`] guarded by a blocking mutex.
///
/// Use `CriticalSectionRawMutex` when `tick()` may run in interrupt
/// context, `ThreadModeRawMutex` or `NoopRawMutex` when all access stays
/// on one executor.
///
/// ```ignore
/// static ENCODER: StaticCell<
///     SharedDecoder<CriticalSectionRawMutex, Input<'static>, Input<'static>, EmbassyClock>,
/// > = StaticCell::new();
///
/// let encoder = ENCODER.init(SharedDecoder::new(QuadratureDecoder::new(
///     pin_a, pin_b, EmbassyClock, LatchMode::FourLatchAt0,
/// )));
/// ```
pub struct SharedDecoder<M: RawMutex, A, B, C> {
    inner: Mutex<M, RefCell<QuadratureDecoder<A, B, C>>>,
}

impl<M, A, B, C> SharedDecoder<M, A, B, C>
where
    M: RawMutex,
    A: InputPin,
    B: InputPin<Error = A::Error>,
    C: Clock,
{
    /// Wrap a decoder.
    pub fn new(decoder: QuadratureDecoder<A, B, C>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(decoder)),
        }
    }

    /// Run `f` with exclusive access to the decoder inside one critical
    /// section.
    ///
    /// Keep `f` short; interrupts may be masked while it runs. Calling any
    /// other method of this `SharedDecoder` from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut QuadratureDecoder<A, B, C>) -> R) -> R {
        self.inner.lock(|decoder| f(&mut decoder.borrow_mut()))
    }

    /// See [`QuadratureDecoder::tick()`].
    pub fn tick(&self) -> Result<bool, EncoderError<A::Error>> {
        self.with(|decoder| decoder.tick())
    }

    /// See [`QuadratureDecoder::position()`].
    pub fn position(&self) -> i32 {
        self.with(|decoder| decoder.position())
    }

    /// See [`QuadratureDecoder::direction()`].
    pub fn direction(&self) -> Direction {
        self.with(|decoder| decoder.direction())
    }

    /// See [`QuadratureDecoder::set_position()`].
    pub fn set_position(&self, new_position: i32) {
        self.with(|decoder| decoder.set_position(new_position))
    }

    /// See [`QuadratureDecoder::millis_between_rotations()`].
    pub fn millis_between_rotations(&self) -> u32 {
        self.with(|decoder| decoder.millis_between_rotations())
    }

    /// See [`QuadratureDecoder::rpm()`]. Both latch timestamps and the
    /// clock are read in the same critical section.
    pub fn rpm(&self) -> Option<u32> {
        self.with(|decoder| decoder.rpm())
    }

    /// Unwrap the decoder.
    pub fn into_inner(self) -> QuadratureDecoder<A, B, C> {
        self.inner.into_inner().into_inner()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    use super::*;
    use crate::decoder::tests::Lines;
    use crate::mode::LatchMode;

    #[test]
    fn tick_and_read_through_lock() {
        let lines = Lines::at_rest();
        let (a, b) = lines.pins();
        let now = Cell::new(10u32);
        let shared: SharedDecoder<CriticalSectionRawMutex, _, _, _> = SharedDecoder::new(
            QuadratureDecoder::new(a, b, || now.get(), LatchMode::FourLatchAt3),
        );

        let mut latches = 0;
        for raw in [1, 0, 2, 3] {
            lines.set(raw);
            if shared.tick().unwrap() {
                latches += 1;
            }
        }

        assert_eq!(latches, 1);
        assert_eq!(shared.position(), 1);
        assert_eq!(shared.direction(), Direction::Clockwise);
        assert_eq!(shared.direction(), Direction::NoRotation);
        assert_eq!(shared.millis_between_rotations(), 10);

        now.set(20);
        // max(10, 10) ms * 20 latches = 200 ms per turn.
        assert_eq!(shared.rpm(), Some(300));
    }

    #[test]
    fn set_position_through_lock() {
        let lines = Lines::at_rest();
        let (a, b) = lines.pins();
        let shared: SharedDecoder<CriticalSectionRawMutex, _, _, _> =
            SharedDecoder::new(QuadratureDecoder::new(a, b, || 0u32, LatchMode::FourLatchAt0));

        shared.set_position(-12);
        assert_eq!(shared.position(), -12);
        assert_eq!(shared.direction(), Direction::NoRotation);
    }

    #[test]
    fn with_gives_a_consistent_snapshot() {
        let lines = Lines::at_rest();
        let (a, b) = lines.pins();
        let shared: SharedDecoder<CriticalSectionRawMutex, _, _, _> =
            SharedDecoder::new(QuadratureDecoder::new(a, b, || 0u32, LatchMode::TwoLatchAt0And3));

        lines.set(1);
        shared.tick().unwrap();
        lines.set(0);
        shared.tick().unwrap();

        let (position, internal) =
            shared.with(|decoder| (decoder.position(), decoder.state().internal_position()));
        assert_eq!(position, 1);
        assert_eq!(internal, 2);

        let decoder = shared.into_inner();
        assert_eq!(decoder.position(), 1);
    }
}
