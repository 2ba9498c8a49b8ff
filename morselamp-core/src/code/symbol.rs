//! Symbol and pattern types

use core::fmt;

/// One atomic timed unit of Morse signaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short pulse
    Dot,
    /// Long pulse
    Dash,
    /// Rest with the lamp off, used for unsupported characters
    Gap,
}

impl Symbol {
    /// Character used when rendering the symbol as text
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
            Symbol::Gap => ' ',
        }
    }

    /// Check if this symbol lights the lamp
    pub const fn is_mark(self) -> bool {
        matches!(self, Symbol::Dot | Symbol::Dash)
    }
}

/// Fixed ordered sequence of symbols representing one character
///
/// Patterns only ever point into the static lookup table, so they are
/// `Copy` and compare by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalPattern(&'static [Symbol]);

impl SignalPattern {
    pub(crate) const fn from_static(symbols: &'static [Symbol]) -> Self {
        Self(symbols)
    }

    /// Symbols in emission order
    pub const fn symbols(&self) -> &'static [Symbol] {
        self.0
    }

    /// Number of symbols in the pattern
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for table patterns; provided for API symmetry
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the symbols
    pub fn iter(&self) -> core::slice::Iter<'static, Symbol> {
        self.0.iter()
    }
}

impl fmt::Display for SignalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl IntoIterator for SignalPattern {
    type Item = &'static Symbol;
    type IntoIter = core::slice::Iter<'static, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
