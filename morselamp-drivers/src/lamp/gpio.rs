//! GPIO lamp output
//!
//! LED (or relay-driven lamp) on a single GPIO pin.

use embedded_hal::digital::OutputPin;
use morselamp_core::traits::Actuator;

/// Lamp wired to one digital output
///
/// `inverted` covers lamps that light when the pin sinks current (LED to
/// 3V3, or a low-trigger relay board). The pin is driven off as soon as
/// the lamp is built.
pub struct GpioLamp<P> {
    pin: P,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    /// Last commanded logical state (true = lit)
    lit: bool,
}

impl<P: OutputPin> GpioLamp<P> {
    /// Create a new GPIO lamp, switched off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, lamp is lit when pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, P::Error> {
        let mut lamp = Self {
            pin,
            inverted,
            lit: false,
        };
        lamp.drive(false)?;
        Ok(lamp)
    }

    /// Create a new GPIO lamp with active-high output
    pub fn new_active_high(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, false)
    }

    /// Create a new GPIO lamp with active-low output
    pub fn new_active_low(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, true)
    }

    /// Check if the lamp was last commanded on
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, lit: bool) -> Result<(), P::Error> {
        // Pin level is the lit state XOR the wiring polarity
        if lit != self.inverted {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.lit = lit;
        Ok(())
    }
}

impl<P: OutputPin> Actuator for GpioLamp<P> {
    type Error = P::Error;

    fn on(&mut self) -> Result<(), P::Error> {
        self.drive(true)
    }

    fn off(&mut self) -> Result<(), P::Error> {
        self.drive(false)
    }
}
