//! Static letter-to-pattern lookup table
//!
//! International Morse for the 26 Latin letters, indexed by
//! `letter - 'a'`. Anything outside `a..=z` (after case folding) maps to
//! [`GAP_PATTERN`].

use super::symbol::{SignalPattern, Symbol};

const O: Symbol = Symbol::Dot;
const A: Symbol = Symbol::Dash;

/// Pattern used for characters with no table entry
pub const GAP_PATTERN: SignalPattern = SignalPattern::from_static(&[Symbol::Gap]);

/// Patterns for `a` through `z`
pub const LETTER_PATTERNS: [SignalPattern; 26] = [
    SignalPattern::from_static(&[O, A]),       // a
    SignalPattern::from_static(&[A, O, O, O]), // b
    SignalPattern::from_static(&[A, O, A, O]), // c
    SignalPattern::from_static(&[A, O, O]),    // d
    SignalPattern::from_static(&[O]),          // e
    SignalPattern::from_static(&[O, O, A, O]), // f
    SignalPattern::from_static(&[A, A, O]),    // g
    SignalPattern::from_static(&[O, O, O, O]), // h
    SignalPattern::from_static(&[O, O]),       // i
    SignalPattern::from_static(&[O, A, A, A]), // j
    SignalPattern::from_static(&[A, O, A]),    // k
    SignalPattern::from_static(&[O, A, O, O]), // l
    SignalPattern::from_static(&[A, A]),       // m
    SignalPattern::from_static(&[A, O]),       // n
    SignalPattern::from_static(&[A, A, A]),    // o
    SignalPattern::from_static(&[O, A, A, O]), // p
    SignalPattern::from_static(&[A, A, O, A]), // q
    SignalPattern::from_static(&[O, A, O]),    // r
    SignalPattern::from_static(&[O, O, O]),    // s
    SignalPattern::from_static(&[A]),          // t
    SignalPattern::from_static(&[O, O, A]),    // u
    SignalPattern::from_static(&[O, O, O, A]), // v
    SignalPattern::from_static(&[O, A, A]),    // w
    SignalPattern::from_static(&[A, O, O, A]), // x
    SignalPattern::from_static(&[A, O, A, A]), // y
    SignalPattern::from_static(&[A, A, O, O]), // z
];

/// Look up the pattern for a character
///
/// Case is folded before lookup. Characters outside `a..=z` return
/// [`GAP_PATTERN`].
pub fn pattern_for(c: char) -> SignalPattern {
    let folded = c.to_ascii_lowercase();
    if folded.is_ascii_lowercase() {
        LETTER_PATTERNS[(folded as u8 - b'a') as usize]
    } else {
        GAP_PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_two_letters_share_a_pattern() {
        for (i, a) in LETTER_PATTERNS.iter().enumerate() {
            for (j, b) in LETTER_PATTERNS.iter().enumerate().skip(i + 1) {
                assert_ne!(a, b, "letters {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_letter_patterns_have_no_gaps() {
        for pattern in LETTER_PATTERNS.iter() {
            assert!(!pattern.is_empty());
            assert!(pattern.len() <= 4);
            assert!(pattern.iter().all(|s| s.is_mark()));
        }
    }

    #[test]
    fn test_known_letters() {
        assert_eq!(pattern_for('e').symbols(), &[Symbol::Dot]);
        assert_eq!(pattern_for('t').symbols(), &[Symbol::Dash]);
        assert_eq!(
            pattern_for('b').symbols(),
            &[Symbol::Dash, Symbol::Dot, Symbol::Dot, Symbol::Dot]
        );
        assert_eq!(
            pattern_for('q').symbols(),
            &[Symbol::Dash, Symbol::Dash, Symbol::Dot, Symbol::Dash]
        );
    }

    #[test]
    fn test_case_folding() {
        for c in 'a'..='z' {
            assert_eq!(pattern_for(c), pattern_for(c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn test_fallback_is_gap() {
        assert_eq!(pattern_for(' '), GAP_PATTERN);
        assert_eq!(pattern_for('7'), GAP_PATTERN);
        assert_eq!(pattern_for('é'), GAP_PATTERN);
        assert_eq!(GAP_PATTERN.symbols(), &[Symbol::Gap]);
    }

    #[test]
    fn test_display() {
        assert_eq!(pattern_for('a').to_string(), ".-");
        assert_eq!(pattern_for('y').to_string(), "-.--");
        assert_eq!(GAP_PATTERN.to_string(), " ");
    }
}
