//! Monotonic millisecond clock capability.

/// A monotonic millisecond clock that wraps modulo 2^32.
///
/// Only the differences between readings matter; the decoder subtracts
/// timestamps with wrapping arithmetic, so a wrap between two readings is
/// harmless.
///
/// Any `Fn() -> u32` closure is a clock, which keeps tests and
/// platform glue short:
///
/// ```
/// use rotary_encoder::Clock;
///
/// let clock = || 1234u32;
/// assert_eq!(clock.now_millis(), 1234);
/// ```
pub trait Clock {
    /// Current time in milliseconds.
    fn now_millis(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_millis(&self) -> u32 {
        self()
    }
}

/// [`Clock`] backed by the Embassy time driver.
///
/// Truncates [`embassy_time::Instant::now()`] to 32 bits, which wraps after
/// about 49.7 days.
#[cfg(feature = "task")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "task")]
impl Clock for EmbassyClock {
    fn now_millis(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
