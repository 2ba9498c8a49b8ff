//! Blocking clock over an `embedded-hal` delay

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use morselamp_core::traits::Clock;

/// Clock backed by any [`DelayNs`] provider
///
/// `embedded-hal` delays cannot fail, so neither can this clock.
pub struct DelayClock<D> {
    delay: D,
}

impl<D: DelayNs> DelayClock<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Release the delay provider
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Clock for DelayClock<D> {
    type Error = Infallible;

    fn sleep_ms(&mut self, duration_ms: u32) -> Result<(), Infallible> {
        self.delay.delay_ms(duration_ms);
        Ok(())
    }
}
