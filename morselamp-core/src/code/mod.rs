//! Morse symbols and the letter lookup table

pub mod symbol;
pub mod table;

pub use symbol::{SignalPattern, Symbol};
pub use table::{pattern_for, GAP_PATTERN, LETTER_PATTERNS};
