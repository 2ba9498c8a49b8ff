//! Hardware driver implementations
//!
//! Concrete implementations of the capability traits defined in
//! morselamp-core, built on `embedded-hal` 1.0 so any HAL providing an
//! output pin and a delay can drive the lamp:
//!
//! - [`lamp::GpioLamp`]: lamp on a GPIO pin (active-high or active-low)
//! - [`clock::DelayClock`]: blocking clock over a `DelayNs` provider

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod lamp;

pub use clock::DelayClock;
pub use lamp::GpioLamp;
