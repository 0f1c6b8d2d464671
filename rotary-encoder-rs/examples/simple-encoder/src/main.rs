//! Simple encoder example
//!
//! Demonstrates basic usage of the rotary-encoder crate on the Raspberry Pi
//! Pico 2. Polls one encoder every millisecond from `main` and logs the
//! position, direction and speed on every detent via defmt.
//!
//! # Wiring
//!
//! | Signal | Pico 2 Pin | Notes                          |
//! |--------|------------|--------------------------------|
//! | ENC A  | GP2        | Pull-up enabled, common to GND |
//! | ENC B  | GP3        | Pull-up enabled, common to GND |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use rotary_encoder::{EmbassyClock, LatchMode, QuadratureDecoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder signal lines (GP2 = A, GP3 = B), pulled up ---
    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);

    // Most 20-detent knobs rest with both lines high.
    let mut encoder = QuadratureDecoder::new(pin_a, pin_b, EmbassyClock, LatchMode::FourLatchAt3);

    info!("Encoder example started — rotate the knob to see position changes");

    // Main loop: sample at 1 kHz, log on every detent.
    let mut ticker = Ticker::every(Duration::from_millis(1));
    loop {
        ticker.next().await;

        match encoder.tick() {
            Ok(true) => {
                let direction = encoder.direction();
                info!(
                    "Position: {} ({}), {} ms since last detent, rpm={}",
                    encoder.position(),
                    direction,
                    encoder.millis_between_rotations(),
                    encoder.rpm(),
                );
            }
            Ok(false) => {}
            Err(e) => error!("Read failed: {}", e),
        }
    }
}
