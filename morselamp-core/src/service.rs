//! Transmit service for a shell
//!
//! [`MorseService`] owns the lamp and clock and exposes a single
//! `submit(text)` call: validate, transcode, emit. Validation happens
//! strictly before any pulse, so rejected text never touches the lamp.
//!
//! `submit` takes `&mut self`. A second submission cannot start while
//! one is in flight; callers sharing a service across threads have to
//! serialize access themselves (e.g. a mutex or a channel).

use core::fmt;

use crate::config::TimingConfig;
use crate::emitter::{CancelToken, EmitError, Emitter};
use crate::traits::{Actuator, Clock};
use crate::transcoder::{transcode, Message, ValidationError};

/// Failure of a submitted message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubmitError<A, C> {
    /// Text rejected; the lamp was not touched
    Invalid(ValidationError),
    /// Emission aborted part-way
    Emit(EmitError<A, C>),
}

impl<A, C> From<ValidationError> for SubmitError<A, C> {
    fn from(e: ValidationError) -> Self {
        SubmitError::Invalid(e)
    }
}

impl<A, C> From<EmitError<A, C>> for SubmitError<A, C> {
    fn from(e: EmitError<A, C>) -> Self {
        SubmitError::Emit(e)
    }
}

impl<A: fmt::Debug, C: fmt::Debug> fmt::Display for SubmitError<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "invalid message: {}", e),
            SubmitError::Emit(e) => write!(f, "transmission aborted: {}", e),
        }
    }
}

/// Validate-then-emit service owning one lamp
pub struct MorseService<A, C> {
    actuator: A,
    clock: C,
    emitter: Emitter,
    sent: u32,
}

impl<A: Actuator, C: Clock> MorseService<A, C> {
    /// Create a service with the standard timing
    pub fn new(actuator: A, clock: C) -> Self {
        Self::with_timing(actuator, clock, TimingConfig::default())
    }

    /// Create a service with custom timing
    pub fn with_timing(actuator: A, clock: C, timing: TimingConfig) -> Self {
        Self {
            actuator,
            clock,
            emitter: Emitter::new(timing),
            sent: 0,
        }
    }

    /// Timing in use
    pub fn timing(&self) -> &TimingConfig {
        self.emitter.timing()
    }

    /// Number of messages played to completion
    pub fn sent(&self) -> u32 {
        self.sent
    }

    /// Transcode and play `text`
    pub fn submit(&mut self, text: &str) -> Result<(), SubmitError<A::Error, C::Error>> {
        let message = transcode(text)?;
        self.play(&message)?;
        Ok(())
    }

    /// Transcode and play `text`, stopping early if `cancel` is set
    pub fn submit_cancellable(
        &mut self,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<(), SubmitError<A::Error, C::Error>> {
        let message = transcode(text)?;
        self.play_cancellable(&message, cancel)?;
        Ok(())
    }

    /// Play an already transcoded message
    pub fn play(&mut self, message: &Message) -> Result<(), EmitError<A::Error, C::Error>> {
        self.emitter
            .emit(message, &mut self.actuator, &mut self.clock)?;
        self.sent = self.sent.wrapping_add(1);
        Ok(())
    }

    /// Play an already transcoded message, stopping early if `cancel` is set
    pub fn play_cancellable(
        &mut self,
        message: &Message,
        cancel: &CancelToken,
    ) -> Result<(), EmitError<A::Error, C::Error>> {
        self.emitter
            .emit_cancellable(message, &mut self.actuator, &mut self.clock, cancel)?;
        self.sent = self.sent.wrapping_add(1);
        Ok(())
    }

    /// Force the lamp off
    pub fn force_off(&mut self) -> Result<(), A::Error> {
        self.actuator.off()
    }

    /// Release the lamp and clock
    pub fn into_parts(self) -> (A, C) {
        (self.actuator, self.clock)
    }
}
