//! Text validation and transcoding
//!
//! Turns user text into a [`Message`]: one [`SignalPattern`] per input
//! character, in input order.

use core::fmt;

use heapless::Vec;

use crate::code::{pattern_for, SignalPattern};
use crate::config::TimingConfig;
use crate::emitter::Schedule;

/// Longest accepted message (characters)
pub const MAX_MESSAGE_LEN: usize = 11;

/// Reasons text is rejected before any lamp activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// No characters
    Empty,
    /// 12 or more characters
    TooLong,
    /// Contains a character that is not a Latin letter
    NonAlphabetic,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => f.write_str("message is empty"),
            ValidationError::TooLong => {
                write!(f, "message longer than {} characters", MAX_MESSAGE_LEN)
            }
            ValidationError::NonAlphabetic => {
                f.write_str("message contains characters outside the alphabet")
            }
        }
    }
}

/// Transcoded message, ready for emission
///
/// Immutable once built. Holds exactly one pattern per input character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message {
    patterns: Vec<SignalPattern, MAX_MESSAGE_LEN>,
}

impl Message {
    /// Build a message without validation, using the gap fallback for
    /// unsupported characters
    #[cfg(test)]
    pub(crate) fn from_text_unchecked(text: &str) -> Self {
        let mut patterns = Vec::new();
        for c in text.chars().take(MAX_MESSAGE_LEN) {
            let _ = patterns.push(pattern_for(c));
        }
        Self { patterns }
    }

    /// Patterns in emission order
    pub fn patterns(&self) -> &[SignalPattern] {
        &self.patterns
    }

    /// Number of patterns (equals the input character count)
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the message has no patterns
    ///
    /// Never true for a message returned by [`transcode`].
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Timed steps the emitter will execute for this message
    pub fn schedule<'a>(&'a self, timing: &'a TimingConfig) -> Schedule<'a> {
        Schedule::new(self, timing)
    }

    /// Total emission time (ms) under `timing`
    pub fn duration_ms(&self, timing: &TimingConfig) -> u32 {
        self.schedule(timing)
            .map(|step| step.duration_ms())
            .fold(0u32, u32::saturating_add)
    }
}

impl fmt::Display for Message {
    /// Dot/dash rendering, letters separated by one space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

/// Validate `text` and convert it into a [`Message`]
///
/// Length is checked before content, so a 12-character string of digits
/// reports [`ValidationError::TooLong`]. Case is folded before lookup.
pub fn transcode(text: &str) -> Result<Message, ValidationError> {
    let len = text.chars().count();
    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong);
    }
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NonAlphabetic);
    }

    let mut patterns = Vec::new();
    for c in text.chars() {
        patterns
            .push(pattern_for(c))
            .map_err(|_| ValidationError::TooLong)?;
    }

    Ok(Message { patterns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Symbol, GAP_PATTERN};

    const DOT: Symbol = Symbol::Dot;
    const DASH: Symbol = Symbol::Dash;

    #[test]
    fn test_sos() {
        let message = transcode("sos").unwrap();

        assert_eq!(message.len(), 3);
        assert_eq!(message.patterns()[0].symbols(), &[DOT, DOT, DOT]);
        assert_eq!(message.patterns()[1].symbols(), &[DASH, DASH, DASH]);
        assert_eq!(message.patterns()[2].symbols(), &[DOT, DOT, DOT]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(transcode("SOS"), transcode("sos"));
        assert_eq!(transcode("HeLLo"), transcode("hello"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(transcode(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_length_boundary() {
        assert!(transcode("abcdefghijk").is_ok()); // 11
        assert_eq!(transcode("abcdefghijkl"), Err(ValidationError::TooLong)); // 12
    }

    #[test]
    fn test_length_checked_before_content() {
        assert_eq!(transcode("123456789012"), Err(ValidationError::TooLong));
        assert_eq!(transcode("hello world!"), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_non_alphabetic() {
        assert_eq!(transcode("sos1"), Err(ValidationError::NonAlphabetic));
        assert_eq!(transcode("hi there"), Err(ValidationError::NonAlphabetic));
        assert_eq!(transcode("café"), Err(ValidationError::NonAlphabetic));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 11 chars, 22 bytes: too short to be TooLong
        assert_eq!(
            transcode("ééééééééééé"),
            Err(ValidationError::NonAlphabetic)
        );
    }

    #[test]
    fn test_validated_input_never_uses_gap() {
        let message = transcode("TheQuickFox").unwrap();
        assert!(message.patterns().iter().all(|p| *p != GAP_PATTERN));
    }

    #[test]
    fn test_display() {
        let message = transcode("sos").unwrap();
        assert_eq!(message.to_string(), "... --- ...");

        let message = transcode("Hi").unwrap();
        assert_eq!(message.to_string(), ".... ..");
    }

    #[test]
    fn test_duration() {
        let timing = TimingConfig::default();

        // e: 150 on + 500 rest
        assert_eq!(transcode("e").unwrap().duration_ms(&timing), 650);

        // et: 650 + 1000 letter rest + 1000 on + 500 rest
        assert_eq!(transcode("et").unwrap().duration_ms(&timing), 3150);
    }
}
