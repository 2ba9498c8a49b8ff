//! Lamp output implementations

pub mod gpio;

pub use gpio::GpioLamp;
