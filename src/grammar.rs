//! The fixed grammar: a four-symbol alphabet and its two production rules.
//!
//! Only the forward symbols rewrite. Each expands into a 43-symbol sequence that
//! contains more forward symbols, so the curve refines itself every generation.
//! The turn symbols are terminal and map to themselves.

use crate::error::RibbonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token of the grammar alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Draw forward; rewrites with the `L` production (`L`, code 0).
    ForwardA,
    /// Draw forward; rewrites with the `R` production (`R`, code 1).
    ForwardB,
    /// Increment the heading (`+`, code 2).
    TurnLeft,
    /// Decrement the heading (`-`, code 3).
    TurnRight,
}

use self::Symbol::{ForwardA as L, ForwardB as R, TurnLeft as P, TurnRight as M};

/// Length shared by both forward productions.
pub const PRODUCTION_LEN: usize = 43;

/// Production for [`Symbol::ForwardA`].
pub const FORWARD_A_RULE: [Symbol; PRODUCTION_LEN] = [
    L, L, M, R, M, R, P, L, P, L, M, R, M, R, L, P, R, P, L, L, R, M, L, P, R, P, L, L, P, R, M, L,
    R, M, R, M, L, P, L, P, R, R, M,
];

/// Production for [`Symbol::ForwardB`].
pub const FORWARD_B_RULE: [Symbol; PRODUCTION_LEN] = [
    P, L, L, M, R, M, R, P, L, P, L, R, P, L, M, R, R, M, L, M, R, P, L, R, R, M, L, M, R, L, P, L,
    P, R, M, R, M, L, P, L, P, R, R,
];

static TURN_LEFT_RULE: [Symbol; 1] = [P];
static TURN_RIGHT_RULE: [Symbol; 1] = [M];

impl Symbol {
    /// All symbols in integer-code order.
    pub const ALL: [Symbol; 4] = [L, R, P, M];

    /// Returns the sequence this symbol is replaced with in one generation.
    pub fn production(self) -> &'static [Symbol] {
        match self {
            Symbol::ForwardA => &FORWARD_A_RULE,
            Symbol::ForwardB => &FORWARD_B_RULE,
            Symbol::TurnLeft => &TURN_LEFT_RULE,
            Symbol::TurnRight => &TURN_RIGHT_RULE,
        }
    }

    /// True for the two symbols that move the turtle.
    pub fn is_forward(self) -> bool {
        matches!(self, Symbol::ForwardA | Symbol::ForwardB)
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::ForwardA => 'L',
            Symbol::ForwardB => 'R',
            Symbol::TurnLeft => '+',
            Symbol::TurnRight => '-',
        }
    }

    /// Decodes one character of the textual notation.
    ///
    /// `position` is only used to make the error point at the offending character.
    pub fn from_char(c: char, position: usize) -> Result<Self, RibbonError> {
        match c {
            'L' => Ok(Symbol::ForwardA),
            'R' => Ok(Symbol::ForwardB),
            '+' => Ok(Symbol::TurnLeft),
            '-' => Ok(Symbol::TurnRight),
            symbol => Err(RibbonError::MalformedSymbol { symbol, position }),
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = RibbonError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Symbol::ALL
            .get(code as usize)
            .copied()
            .ok_or(RibbonError::UnknownSymbolCode(code))
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        match symbol {
            Symbol::ForwardA => 0,
            Symbol::ForwardB => 1,
            Symbol::TurnLeft => 2,
            Symbol::TurnRight => 3,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parses a sequence written in the `L R + -` notation.
///
/// Whitespace is skipped so rules can be written with spacing. Any other
/// character fails the whole parse; nothing is silently dropped.
pub fn parse_sequence(text: &str) -> Result<Vec<Symbol>, RibbonError> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| Symbol::from_char(c, i))
        .collect()
}

/// Formats a sequence back into the textual notation.
pub fn format_sequence(sequence: &[Symbol]) -> String {
    sequence.iter().map(|s| s.to_char()).collect()
}
