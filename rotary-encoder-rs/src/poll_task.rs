//! Periodic polling task and its configuration.
//!
//! Contains the [`PollConfig`] struct and the [`encoder_poll_task`] async
//! function that samples a [`SharedDecoder`] at a fixed rate.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::shared::SharedDecoder;

/// Polling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Interval between two samples in microseconds. Must be shorter than
    /// the time the knob spends in one raw state at its fastest. Default:
    /// 1000 (1 kHz).
    pub period_us: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { period_us: 1000 }
    }
}

// ── Polling task ─────────────────────────────────────────────────────────

/// Periodic encoder polling loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn poll_task(
///     encoder: &'static SharedDecoder<CriticalSectionRawMutex, Input<'static>, Input<'static>, EmbassyClock>,
///     config: PollConfig,
/// ) {
///     encoder_poll_task(encoder, config).await;
/// }
/// ```
///
/// Each cycle ticks the decoder inside one critical section. A failed pin
/// read is logged and the loop carries on with the next cycle. Never
/// returns.
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn encoder_poll_task<M, A, B, C>(
    encoder: &'static SharedDecoder<M, A, B, C>,
    config: PollConfig,
)
where
    M: RawMutex,
    A: InputPin,
    B: InputPin<Error = A::Error>,
    C: Clock,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Encoder polling started, period={}us", config.period_us);

    let mut ticker = embassy_time::Ticker::every(embassy_time::Duration::from_micros(config.period_us));

    loop {
        ticker.next().await;

        match encoder.tick() {
            Ok(true) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Encoder position: {}", encoder.position());
            }
            Ok(false) => {}
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Encoder pin read failed: {}", _e);
            }
        }
    }
}
