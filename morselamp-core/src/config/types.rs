//! Configuration type definitions

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lamp on-time for a dot (ms)
pub const DOT_MS: u32 = 150;

/// Lamp on-time for a dash (ms)
pub const DASH_MS: u32 = 1000;

/// Rest after every symbol, and the full length of a gap (ms)
pub const SYMBOL_REST_MS: u32 = 500;

/// Extra rest between two letters (ms)
pub const LETTER_REST_MS: u32 = 1000;

/// Default lamp pin (BCM numbering)
pub const DEFAULT_LAMP_PIN: u8 = 21;

/// Emission timing
///
/// The four values are separate knobs even where the defaults coincide
/// (dash and letter rest are both 1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Lamp on-time for a dot (ms)
    pub dot_ms: u32,
    /// Lamp on-time for a dash (ms)
    pub dash_ms: u32,
    /// Rest after each symbol (ms)
    pub symbol_rest_ms: u32,
    /// Additional rest between letters (ms)
    pub letter_rest_ms: u32,
}

impl TimingConfig {
    /// Standard lamp timing: 150 ms dot, 1 s dash
    pub const fn standard() -> Self {
        Self {
            dot_ms: DOT_MS,
            dash_ms: DASH_MS,
            symbol_rest_ms: SYMBOL_REST_MS,
            letter_rest_ms: LETTER_REST_MS,
        }
    }

    /// Check that the timing can produce readable Morse
    ///
    /// Every duration must be non-zero and a dot must be shorter than a
    /// dash.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.dot_ms == 0
            || self.dash_ms == 0
            || self.symbol_rest_ms == 0
            || self.letter_rest_ms == 0
        {
            return Err(TimingError::ZeroDuration);
        }
        if self.dot_ms >= self.dash_ms {
            return Err(TimingError::DotNotShorterThanDash);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Invalid timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// A duration is zero
    ZeroDuration,
    /// Dot and dash would be indistinguishable
    DotNotShorterThanDash,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::ZeroDuration => f.write_str("timing durations must be non-zero"),
            TimingError::DotNotShorterThanDash => {
                f.write_str("dot duration must be shorter than dash duration")
            }
        }
    }
}

/// Lamp output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LampConfig {
    /// GPIO pin number (BCM numbering on the Pi)
    pub pin: u8,
    /// Lamp is lit when the pin is LOW
    pub inverted: bool,
}

impl LampConfig {
    /// Active-high lamp on `pin`
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Active-low lamp on `pin`
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

impl Default for LampConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LAMP_PIN)
    }
}
