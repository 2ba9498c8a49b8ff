//! Timed emission of a message
//!
//! Drives an [`Actuator`] through a message's [`Schedule`], blocking on
//! the [`Clock`] for every step. Emission is strictly sequential: a step
//! starts only after the previous step's full duration has elapsed.
//!
//! Corrupted timing is worse than silence. Any actuator or clock failure
//! aborts the rest of the message and is returned unchanged; nothing is
//! retried, because a retry would replay pulses the receiver already saw.

pub mod cancel;
pub mod schedule;

use core::fmt;

pub use cancel::CancelToken;
pub use schedule::{Schedule, Step};

use crate::config::TimingConfig;
use crate::traits::{Actuator, Clock};
use crate::transcoder::Message;

/// Failure during emission
///
/// `A` is the actuator's error type, `C` the clock's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmitError<A, C> {
    /// The actuator failed to switch
    ActuatorFault(A),
    /// The clock failed to sleep
    ClockFault(C),
    /// Stopped through a [`CancelToken`]
    Cancelled,
}

impl<A: fmt::Debug, C: fmt::Debug> fmt::Display for EmitError<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::ActuatorFault(e) => write!(f, "actuator fault: {:?}", e),
            EmitError::ClockFault(e) => write!(f, "clock fault: {:?}", e),
            EmitError::Cancelled => f.write_str("emission cancelled"),
        }
    }
}

/// Message emitter with fixed timing
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    timing: TimingConfig,
}

impl Emitter {
    /// Create an emitter using `timing`
    pub const fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    /// Timing in use
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Play `message` to completion
    pub fn emit<A, C>(
        &self,
        message: &Message,
        actuator: &mut A,
        clock: &mut C,
    ) -> Result<(), EmitError<A::Error, C::Error>>
    where
        A: Actuator,
        C: Clock,
    {
        for step in message.schedule(&self.timing) {
            run_step(step, actuator, clock)?;
        }
        Ok(())
    }

    /// Play `message`, stopping early if `cancel` is set
    ///
    /// The flag is checked before every step. On cancel the lamp is
    /// already off (every mark ends with `off()`), and the message cannot
    /// be resumed.
    pub fn emit_cancellable<A, C>(
        &self,
        message: &Message,
        actuator: &mut A,
        clock: &mut C,
        cancel: &CancelToken,
    ) -> Result<(), EmitError<A::Error, C::Error>>
    where
        A: Actuator,
        C: Clock,
    {
        for step in message.schedule(&self.timing) {
            if cancel.is_cancelled() {
                return Err(EmitError::Cancelled);
            }
            run_step(step, actuator, clock)?;
        }
        Ok(())
    }
}

/// Play `message` with the standard timing
pub fn emit<A, C>(
    message: &Message,
    actuator: &mut A,
    clock: &mut C,
) -> Result<(), EmitError<A::Error, C::Error>>
where
    A: Actuator,
    C: Clock,
{
    Emitter::default().emit(message, actuator, clock)
}

fn run_step<A, C>(
    step: Step,
    actuator: &mut A,
    clock: &mut C,
) -> Result<(), EmitError<A::Error, C::Error>>
where
    A: Actuator,
    C: Clock,
{
    match step {
        Step::Mark { on_ms } => {
            actuator.on().map_err(EmitError::ActuatorFault)?;
            if let Err(e) = clock.sleep_ms(on_ms) {
                // Don't leave the lamp lit; the clock error is what gets reported
                let _ = actuator.off();
                return Err(EmitError::ClockFault(e));
            }
            actuator.off().map_err(EmitError::ActuatorFault)
        }
        Step::Space { ms } => clock.sleep_ms(ms).map_err(EmitError::ClockFault),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::transcode;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        On,
        Off,
        Sleep(u32),
    }

    /// Records actuator and clock calls into one shared trace
    #[derive(Default)]
    struct Trace {
        events: Vec<Event>,
        fail_on_call: Option<usize>,
        fail_sleep_on_call: Option<usize>,
        on_calls: usize,
        sleep_calls: usize,
    }

    struct TraceActuator<'a>(&'a core::cell::RefCell<Trace>);
    struct TraceClock<'a>(&'a core::cell::RefCell<Trace>);

    #[derive(Debug, PartialEq, Eq)]
    struct PinFault;

    #[derive(Debug, PartialEq, Eq)]
    struct TimerFault;

    impl Actuator for TraceActuator<'_> {
        type Error = PinFault;

        fn on(&mut self) -> Result<(), PinFault> {
            let mut trace = self.0.borrow_mut();
            trace.on_calls += 1;
            if trace.fail_on_call == Some(trace.on_calls) {
                return Err(PinFault);
            }
            trace.events.push(Event::On);
            Ok(())
        }

        fn off(&mut self) -> Result<(), PinFault> {
            self.0.borrow_mut().events.push(Event::Off);
            Ok(())
        }
    }

    impl Clock for TraceClock<'_> {
        type Error = TimerFault;

        fn sleep_ms(&mut self, duration_ms: u32) -> Result<(), TimerFault> {
            let mut trace = self.0.borrow_mut();
            trace.sleep_calls += 1;
            if trace.fail_sleep_on_call == Some(trace.sleep_calls) {
                return Err(TimerFault);
            }
            trace.events.push(Event::Sleep(duration_ms));
            Ok(())
        }
    }

    fn run(text: &str, trace: Trace) -> (Result<(), EmitError<PinFault, TimerFault>>, Vec<Event>) {
        let cell = core::cell::RefCell::new(trace);
        let message = transcode(text).unwrap();
        let result = emit(&message, &mut TraceActuator(&cell), &mut TraceClock(&cell));
        (result, cell.into_inner().events)
    }

    #[test]
    fn test_dot_trace() {
        let (result, events) = run("e", Trace::default());
        assert_eq!(result, Ok(()));
        assert_eq!(
            events,
            [Event::On, Event::Sleep(150), Event::Off, Event::Sleep(500)]
        );
    }

    #[test]
    fn test_dash_trace() {
        let (result, events) = run("t", Trace::default());
        assert_eq!(result, Ok(()));
        assert_eq!(
            events,
            [Event::On, Event::Sleep(1000), Event::Off, Event::Sleep(500)]
        );
    }

    #[test]
    fn test_letter_rest_only_between_letters() {
        let (_, events) = run("et", Trace::default());
        assert_eq!(
            events,
            [
                Event::On,
                Event::Sleep(150),
                Event::Off,
                Event::Sleep(500),
                Event::Sleep(1000),
                Event::On,
                Event::Sleep(1000),
                Event::Off,
                Event::Sleep(500),
            ]
        );
    }

    #[test]
    fn test_sos_pulse_counts() {
        let (_, events) = run("sos", Trace::default());
        let ons = events.iter().filter(|e| **e == Event::On).count();
        let offs = events.iter().filter(|e| **e == Event::Off).count();
        let dashes = events.iter().filter(|e| **e == Event::Sleep(1000)).count();

        assert_eq!(ons, 9);
        assert_eq!(offs, 9);
        // 3 dash pulses + 2 letter rests
        assert_eq!(dashes, 5);
    }

    #[test]
    fn test_actuator_fault_stops_emission() {
        // Fail on the 2nd `on()`: first dot of "s" plays, nothing after
        let trace = Trace {
            fail_on_call: Some(2),
            ..Trace::default()
        };
        let (result, events) = run("sos", trace);

        assert_eq!(result, Err(EmitError::ActuatorFault(PinFault)));
        assert_eq!(
            events,
            [Event::On, Event::Sleep(150), Event::Off, Event::Sleep(500)]
        );
    }

    #[test]
    fn test_clock_fault_during_mark_turns_lamp_off() {
        let trace = Trace {
            fail_sleep_on_call: Some(1),
            ..Trace::default()
        };
        let (result, events) = run("t", trace);

        assert_eq!(result, Err(EmitError::ClockFault(TimerFault)));
        assert_eq!(events, [Event::On, Event::Off]);
    }

    #[test]
    fn test_clock_fault_during_rest_stops_emission() {
        let trace = Trace {
            fail_sleep_on_call: Some(2),
            ..Trace::default()
        };
        let (result, events) = run("ee", trace);

        assert_eq!(result, Err(EmitError::ClockFault(TimerFault)));
        assert_eq!(events, [Event::On, Event::Sleep(150), Event::Off]);
    }

    #[test]
    fn test_cancel_before_start() {
        let cell = core::cell::RefCell::new(Trace::default());
        let message = transcode("sos").unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = Emitter::default().emit_cancellable(
            &message,
            &mut TraceActuator(&cell),
            &mut TraceClock(&cell),
            &cancel,
        );

        assert_eq!(result, Err(EmitError::Cancelled));
        assert!(cell.into_inner().events.is_empty());
    }

    #[test]
    fn test_cancel_mid_message() {
        /// Clock that cancels after a number of sleeps
        struct CancellingClock<'a> {
            cancel: &'a CancelToken,
            remaining: u32,
            sleeps: Vec<u32>,
        }

        impl Clock for CancellingClock<'_> {
            type Error = TimerFault;

            fn sleep_ms(&mut self, duration_ms: u32) -> Result<(), TimerFault> {
                self.sleeps.push(duration_ms);
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.cancel.cancel();
                }
                Ok(())
            }
        }

        let cell = core::cell::RefCell::new(Trace::default());
        let cancel = CancelToken::new();
        let mut clock = CancellingClock {
            cancel: &cancel,
            remaining: 2,
            sleeps: Vec::new(),
        };
        let message = transcode("sos").unwrap();

        let result = Emitter::default().emit_cancellable(
            &message,
            &mut TraceActuator(&cell),
            &mut clock,
            &cancel,
        );

        assert_eq!(result, Err(EmitError::Cancelled));
        assert_eq!(clock.sleeps, [150, 500]);
        // Lamp ended off
        assert_eq!(cell.into_inner().events, [Event::On, Event::Off]);
    }

    #[test]
    fn test_custom_timing() {
        let cell = core::cell::RefCell::new(Trace::default());
        let emitter = Emitter::new(TimingConfig {
            dot_ms: 50,
            dash_ms: 150,
            symbol_rest_ms: 50,
            letter_rest_ms: 150,
        });
        let message = transcode("e").unwrap();

        emitter
            .emit(&message, &mut TraceActuator(&cell), &mut TraceClock(&cell))
            .unwrap();

        assert_eq!(
            cell.into_inner().events,
            [Event::On, Event::Sleep(50), Event::Off, Event::Sleep(50)]
        );
    }
}
