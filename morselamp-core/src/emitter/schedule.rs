//! Message timing schedule
//!
//! Expands a [`Message`] into the flat sequence of timed steps the
//! emitter executes. Rests are never merged, so every step maps to
//! exactly one `sleep_ms` call.

use crate::code::Symbol;
use crate::config::TimingConfig;
use crate::transcoder::Message;

/// One timed step of emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Lamp on for `on_ms`, then off
    Mark { on_ms: u32 },
    /// Lamp stays off for `ms`
    Space { ms: u32 },
}

impl Step {
    /// Time this step occupies (ms)
    pub const fn duration_ms(&self) -> u32 {
        match self {
            Step::Mark { on_ms } => *on_ms,
            Step::Space { ms } => *ms,
        }
    }
}

/// Position within the current symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next step is the symbol's mark (or its rest, for a gap)
    Symbol,
    /// Mark emitted, rest still pending
    Rest,
    /// Pattern finished, letter rest pending
    LetterRest,
}

/// Iterator over the [`Step`]s of a message
///
/// For each symbol: dot or dash yields a mark then a symbol rest, a gap
/// yields only the symbol rest. A letter rest follows every pattern
/// except the last.
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    message: &'a Message,
    timing: &'a TimingConfig,
    pattern_index: usize,
    symbol_index: usize,
    phase: Phase,
}

impl<'a> Schedule<'a> {
    /// Create a schedule for `message`
    pub fn new(message: &'a Message, timing: &'a TimingConfig) -> Self {
        Self {
            message,
            timing,
            pattern_index: 0,
            symbol_index: 0,
            phase: Phase::Symbol,
        }
    }

    fn advance_symbol(&mut self) {
        self.symbol_index += 1;
        let pattern_len = self.message.patterns()[self.pattern_index].len();
        if self.symbol_index >= pattern_len {
            self.phase = Phase::LetterRest;
        } else {
            self.phase = Phase::Symbol;
        }
    }
}

impl Iterator for Schedule<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let pattern = self.message.patterns().get(self.pattern_index)?;

            match self.phase {
                Phase::Symbol => {
                    let Some(symbol) = pattern.symbols().get(self.symbol_index) else {
                        self.phase = Phase::LetterRest;
                        continue;
                    };
                    return Some(match symbol {
                        Symbol::Dot => {
                            self.phase = Phase::Rest;
                            Step::Mark {
                                on_ms: self.timing.dot_ms,
                            }
                        }
                        Symbol::Dash => {
                            self.phase = Phase::Rest;
                            Step::Mark {
                                on_ms: self.timing.dash_ms,
                            }
                        }
                        Symbol::Gap => {
                            self.advance_symbol();
                            Step::Space {
                                ms: self.timing.symbol_rest_ms,
                            }
                        }
                    });
                }
                Phase::Rest => {
                    self.advance_symbol();
                    return Some(Step::Space {
                        ms: self.timing.symbol_rest_ms,
                    });
                }
                Phase::LetterRest => {
                    self.pattern_index += 1;
                    self.symbol_index = 0;
                    self.phase = Phase::Symbol;
                    if self.pattern_index < self.message.len() {
                        return Some(Step::Space {
                            ms: self.timing.letter_rest_ms,
                        });
                    }
                }
            }
        }
    }
}
