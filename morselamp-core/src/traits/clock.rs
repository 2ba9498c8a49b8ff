//! Blocking delay trait

/// Source of blocking delays
///
/// `sleep_ms` must block for at least the requested duration. It is the
/// only suspension point during emission.
pub trait Clock {
    /// Error raised by the underlying timer
    type Error;

    /// Block for `duration_ms` milliseconds
    fn sleep_ms(&mut self, duration_ms: u32) -> Result<(), Self::Error>;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    type Error = T::Error;

    fn sleep_ms(&mut self, duration_ms: u32) -> Result<(), Self::Error> {
        (**self).sleep_ms(duration_ms)
    }
}
