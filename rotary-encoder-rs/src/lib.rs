//! Quadrature decoder for mechanical rotary encoders.
//!
//! Turns the two signal lines of a rotary encoder into a detent position,
//! a rotation direction and a speed estimate. Sampling is done by the
//! caller, from a polling loop or a pin-change interrupt.
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **[`QuadratureState`]** — the pin-free state machine. A 16-entry
//!   transition table turns raw 2-bit samples into steps, and the
//!   [`LatchMode`] decides at which raw states the step count is committed
//!   to the reported position.
//! - **[`QuadratureDecoder`]** — owns two [`embedded_hal`] input pins and a
//!   [`Clock`], and samples them on every `tick()`.
//! - **[`SharedDecoder`]** — a decoder behind an `embassy-sync` blocking
//!   mutex for access from several contexts.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_encoder::{EmbassyClock, LatchMode, QuadratureDecoder};
//!
//! // Pins come from the HAL already configured as pulled-up inputs
//! let mut encoder = QuadratureDecoder::new(pin_a, pin_b, EmbassyClock, LatchMode::FourLatchAt0);
//!
//! loop {
//!     encoder.tick()?;
//!     match encoder.direction() {
//!         Direction::Clockwise => volume += 1,
//!         Direction::CounterClockwise => volume -= 1,
//!         Direction::NoRotation => {}
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations on public types and
//!   structured logging of latch events.
//! - **`task`** — `EmbassyClock` and the `encoder_poll_task` async
//!   polling loop, built on `embassy-time`.

#![no_std]

pub use clock::Clock;
#[cfg(feature = "task")]
pub use clock::EmbassyClock;
pub use decoder::QuadratureDecoder;
pub use direction::Direction;
pub use error::EncoderError;
pub use mode::{EncoderConfig, LatchMode};
#[cfg(feature = "task")]
pub use poll_task::{encoder_poll_task, PollConfig};
pub use shared::SharedDecoder;
pub use state::QuadratureState;
pub use table::{DEFAULT_LATCHES_PER_REVOLUTION, KNOB_DIR};

mod clock;
mod decoder;
mod direction;
mod error;
mod mode;
#[cfg(feature = "task")]
mod poll_task;
mod shared;
mod state;
mod table;
