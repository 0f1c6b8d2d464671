//! rotary-encoder-hw
//!
//! Encoder → SharedDecoder → log integration firmware for the Raspberry Pi
//! Pico 2. Runs the decoder the way a larger application would:
//!
//! 1. The polling task ticks a `SharedDecoder` at 1 kHz. Each tick reads
//!    both signal lines and updates the decoder inside one critical
//!    section.
//! 2. The report task wakes every 100 ms, reads position, direction and
//!    speed through the same mutex, and logs them when the knob moved.
//! 3. After 5 s without movement the report task re-homes the knob with
//!    `set_position(0)`, which keeps the sub-detent phase.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rotary_encoder::{
    encoder_poll_task, Clock, Direction, EmbassyClock, EncoderConfig, LatchMode, PollConfig,
    QuadratureDecoder, SharedDecoder,
};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Report task period.
const REPORT_PERIOD_MS: u64 = 100;

/// Idle time after which the position is reset to zero.
const HOME_AFTER_IDLE_MS: u32 = 5000;

/// Detents per revolution of the fitted encoder (PEC11R-4220F-S0024).
const LATCHES_PER_REVOLUTION: u32 = 24;

// ---------------------------------------------------------------------------
// Type aliases and static storage
// ---------------------------------------------------------------------------

/// Concrete decoder type, shared by the polling and report tasks.
type Encoder = SharedDecoder<CriticalSectionRawMutex, Input<'static>, Input<'static>, EmbassyClock>;

/// Shared decoder — ticked by the polling task, read by the report task.
static ENCODER: StaticCell<Encoder> = StaticCell::new();

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `encoder_poll_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn poll_task(encoder: &'static Encoder, config: PollConfig) {
    encoder_poll_task(encoder, config).await;
}

/// Periodic reporting task.
///
/// Reads the decoder through the shared mutex and logs a line whenever the
/// direction query reports movement. Each read holds the lock only for one
/// accessor call.
#[embassy_executor::task]
async fn report_task(encoder: &'static Encoder) {
    info!("Report task started");

    let mut ticker = Ticker::every(Duration::from_millis(REPORT_PERIOD_MS));
    let mut homed = true;

    loop {
        ticker.next().await;

        match encoder.direction() {
            Direction::NoRotation => {
                // Clock and latch timestamp read in one critical section.
                let idle_ms = encoder.with(|decoder| {
                    EmbassyClock.now_millis().wrapping_sub(decoder.state().last_latch_millis())
                });
                if !homed && idle_ms >= HOME_AFTER_IDLE_MS {
                    encoder.set_position(0);
                    homed = true;
                    info!("Idle for {} ms, position reset to 0", idle_ms);
                }
            }
            direction => {
                homed = false;
                info!(
                    "Position: {} ({}), interval={} ms, rpm={}",
                    encoder.position(),
                    direction,
                    encoder.millis_between_rotations(),
                    encoder.rpm(),
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("rotary-encoder-hw starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // ENC_A → GP2  (p.PIN_2)  pull-up enabled
    // ENC_B → GP3  (p.PIN_3)  pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);

    let config = EncoderConfig {
        mode: LatchMode::FourLatchAt3,
        latches_per_revolution: LATCHES_PER_REVOLUTION,
    };
    let decoder = QuadratureDecoder::with_config(pin_a, pin_b, EmbassyClock, config);
    let encoder = ENCODER.init(SharedDecoder::new(decoder));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    let poll_config = PollConfig::default(); // 1 kHz sampling

    spawner.spawn(unwrap!(poll_task(encoder, poll_config)));
    spawner.spawn(unwrap!(report_task(encoder)));

    info!("All tasks spawned");
}
