//! Lamp selection for the host
//!
//! The real lamp is an LED on a Pi GPIO pin. The simulated lamp logs
//! each change instead, for running the shell on a development machine.

use std::fmt::Debug;

use rppal::gpio::{Gpio, OutputPin};
use thiserror::Error;
use tracing::debug;

use morselamp_core::config::LampConfig;
use morselamp_core::traits::Actuator;
use morselamp_drivers::GpioLamp;

/// Lamp failure
#[derive(Debug, Error)]
pub enum LampError {
    #[error("failed to open GPIO")]
    Open(#[from] rppal::gpio::Error),
    #[error("GPIO write failed: {0}")]
    Write(String),
}

fn write_error<E: Debug>(e: E) -> LampError {
    LampError::Write(format!("{:?}", e))
}

/// Lamp that records state changes in the log
#[derive(Debug, Default)]
pub struct SimulatedLamp {
    lit: bool,
    /// Number of times the lamp was switched on
    flashes: u32,
}

impl Actuator for SimulatedLamp {
    type Error = LampError;

    fn on(&mut self) -> Result<(), LampError> {
        self.lit = true;
        self.flashes += 1;
        debug!(flash = self.flashes, "lamp on");
        Ok(())
    }

    fn off(&mut self) -> Result<(), LampError> {
        debug!(was_lit = self.lit, "lamp off");
        self.lit = false;
        Ok(())
    }
}

/// Lamp used by the binary
pub enum Lamp {
    Gpio(GpioLamp<OutputPin>),
    Simulated(SimulatedLamp),
}

impl Lamp {
    /// Open the GPIO pin named in `config` and switch the lamp off
    pub fn gpio(config: &LampConfig) -> Result<Self, LampError> {
        let pin = Gpio::new()?.get(config.pin)?.into_output();
        let lamp = GpioLamp::new(pin, config.inverted).map_err(write_error)?;
        Ok(Lamp::Gpio(lamp))
    }

    pub fn simulated() -> Self {
        Lamp::Simulated(SimulatedLamp::default())
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, Lamp::Simulated(_))
    }
}

impl Actuator for Lamp {
    type Error = LampError;

    fn on(&mut self) -> Result<(), LampError> {
        match self {
            Lamp::Gpio(lamp) => lamp.on().map_err(write_error),
            Lamp::Simulated(lamp) => lamp.on(),
        }
    }

    fn off(&mut self) -> Result<(), LampError> {
        match self {
            Lamp::Gpio(lamp) => lamp.off().map_err(write_error),
            Lamp::Simulated(lamp) => lamp.off(),
        }
    }
}
