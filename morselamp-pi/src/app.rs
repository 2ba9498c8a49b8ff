//! Application context and terminal shell
//!
//! [`App`] is built once in `main` and owns everything the shell needs:
//! the transmit service, the shutdown token set by the signal handler, and
//! the status line shown after each message.

use std::fmt::Debug;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use morselamp_core::traits::{Actuator, Clock};
use morselamp_core::{transcode, CancelToken, EmitError, MorseService, ValidationError};

pub const PROMPT: &str = "Enter message: ";
pub const IDLE_STATUS: &str = "Communicate in morse code... ";
pub const INVALID_STATUS: &str = "Message must be 12 alphabet characters or less";

/// Shell commands that leave the prompt. Never valid messages, since
/// they are not alphabetic.
const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

/// How often the idle prompt checks for shutdown
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Result of one submitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Rejected(ValidationError),
    /// Shutdown requested; the message was cut short and the lamp is off
    Cancelled,
}

/// Errors that end the shell
#[derive(Debug, Error)]
pub enum AppError {
    #[error("transmission aborted: {0}")]
    Fault(String),
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

/// Application context
pub struct App<A, C> {
    service: MorseService<A, C>,
    shutdown: Arc<CancelToken>,
    status: &'static str,
}

impl<A, C> App<A, C>
where
    A: Actuator,
    C: Clock,
    A::Error: Debug,
    C::Error: Debug,
{
    /// `shutdown` is checked between steps of every message and while
    /// waiting at the prompt
    pub fn new(service: MorseService<A, C>, shutdown: Arc<CancelToken>) -> Self {
        Self {
            service,
            shutdown,
            status: IDLE_STATUS,
        }
    }

    /// Status line for the last message
    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Number of messages sent this session
    pub fn sent(&self) -> u32 {
        self.service.sent()
    }

    /// Validate and flash one message
    ///
    /// Validation failures are reported through the status line and the
    /// shell keeps going. A shutdown request stops the message between
    /// steps. A lamp or clock fault is returned as an error: the message
    /// cannot be resumed. The lamp is forced off in both cases.
    pub fn submit(&mut self, text: &str) -> Result<Outcome, AppError> {
        let message = match transcode(text) {
            Ok(message) => message,
            Err(reason) => {
                self.status = INVALID_STATUS;
                warn!(text, %reason, "message rejected");
                return Ok(Outcome::Rejected(reason));
            }
        };

        info!(
            text,
            morse = %message,
            duration_ms = message.duration_ms(self.service.timing()),
            "transmitting"
        );

        match self.service.play_cancellable(&message, &self.shutdown) {
            Ok(()) => {
                self.status = IDLE_STATUS;
                info!(sent = self.service.sent(), "message sent");
                Ok(Outcome::Sent)
            }
            Err(EmitError::Cancelled) => {
                warn!(text, "transmission interrupted");
                self.lamp_off();
                Ok(Outcome::Cancelled)
            }
            Err(fault) => {
                error!(%fault, "transmission aborted");
                self.lamp_off();
                Err(AppError::Fault(fault.to_string()))
            }
        }
    }

    /// Run the interactive prompt until EOF, a quit command or shutdown
    ///
    /// Input is read on its own thread so a shutdown request is noticed
    /// while the prompt is waiting. Lines that are not valid UTF-8 are
    /// rejected like any other non-alphabetic text.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), AppError>
    where
        R: BufRead + Send + 'static,
        W: Write,
    {
        let lines = spawn_reader(input);
        self.prompt(&mut output)?;

        loop {
            if self.shutdown.is_cancelled() {
                info!("shutdown requested at prompt");
                break;
            }

            let line = match lines.recv_timeout(SHUTDOWN_POLL) {
                Ok(line) => line?,
                Err(RecvTimeoutError::Timeout) => continue,
                // EOF
                Err(RecvTimeoutError::Disconnected) => break,
            };
            let text = line.trim_end_matches('\r');
            if QUIT_COMMANDS.contains(&text) {
                break;
            }

            if self.submit(text)? == Outcome::Cancelled {
                break;
            }
            self.prompt(&mut output)?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Switch the lamp off and release the service
    pub fn shutdown(mut self) -> MorseService<A, C> {
        match self.service.force_off() {
            Ok(()) => info!(sent = self.sent(), "lamp off, shutting down"),
            Err(e) => error!(error = ?e, "failed to switch lamp off on shutdown"),
        }
        self.service
    }

    fn prompt<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", self.status())?;
        write!(output, "{}", PROMPT)?;
        output.flush()
    }

    fn lamp_off(&mut self) {
        if let Err(e) = self.service.force_off() {
            error!(error = ?e, "failed to switch lamp off");
        }
    }
}

/// Forward input lines over a channel until EOF or a read error
fn spawn_reader<R>(input: R) -> Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in input.split(b'\n') {
            let failed = line.is_err();
            let line = line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}
