//! Error types for the encoder decoder.

use core::fmt;

/// Errors that can occur when sampling the encoder pins.
///
/// The decoding itself is total; only reading the hardware can fail. HALs
/// whose pins are infallible use [`core::convert::Infallible`] here, which
/// makes this error impossible to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// Reading one of the signal pins failed.
    Pin(E),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "Pin read error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "Pin read error: {}", defmt::Debug2Format(e)),
        }
    }
}
