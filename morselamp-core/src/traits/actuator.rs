//! Binary output trait

/// Binary output device (the lamp)
///
/// Implementations switch a physical or simulated output. The emitter
/// holds exclusive access for the duration of one message.
pub trait Actuator {
    /// Error raised by the underlying output
    type Error;

    /// Switch the output on
    fn on(&mut self) -> Result<(), Self::Error>;

    /// Switch the output off
    fn off(&mut self) -> Result<(), Self::Error>;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    type Error = T::Error;

    fn on(&mut self) -> Result<(), Self::Error> {
        (**self).on()
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        (**self).off()
    }
}
