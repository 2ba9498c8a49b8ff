//! Board-agnostic core logic for the Morse lamp
//!
//! This crate contains everything that does not depend on a specific
//! board or GPIO library:
//!
//! - Symbol and letter-pattern definitions (static lookup table)
//! - Text validation and transcoding into a [`Message`]
//! - Timed emission of a message through an [`Actuator`] and [`Clock`]
//! - A [`MorseService`] composing both for a shell
//! - Configuration type definitions
//!
//! # Pipeline
//!
//! ```text
//! "sos" ──transcode──▶ Message ──schedule──▶ [Mark 150][Space 500]... ──emit──▶ Actuator
//!                      [...][---][...]                                         + Clock
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod code;
pub mod config;
pub mod emitter;
pub mod service;
pub mod traits;
pub mod transcoder;

pub use code::{pattern_for, SignalPattern, Symbol, GAP_PATTERN};
pub use config::{LampConfig, TimingConfig};
pub use emitter::{emit, CancelToken, EmitError, Emitter, Schedule, Step};
pub use service::{MorseService, SubmitError};
pub use traits::{Actuator, Clock};
pub use transcoder::{transcode, Message, ValidationError, MAX_MESSAGE_LEN};
