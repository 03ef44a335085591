//! Single three-valued logic digit (trit).
//!
//! A trit holds one of False, Unknown or True.
//! Storage uses a fixed 2-bit encoding:
//! - `0b00` = Unknown
//! - `0b01` = False
//! - `0b10` = True
//! - `0b11` = Invalid (never stored)
//!
//! Unknown being all-zero means a freshly zeroed storage word reads back
//! as sixteen Unknowns.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single Kleene trit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trit {
    /// Definitely false
    False = 0b01,
    /// Absent / don't know
    #[default]
    Unknown = 0b00,
    /// Definitely true
    True = 0b10,
}

impl Trit {
    /// All possible trit values in order: False, Unknown, True
    pub const ALL: [Trit; 3] = [Trit::False, Trit::Unknown, Trit::True];

    /// Decode a trit from the low two bits of `bits`.
    ///
    /// In debug mode, panics on the reserved pattern (0b11).
    /// In release mode, normalizes it to Unknown.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Trit::Unknown,
            0b01 => Trit::False,
            0b10 => Trit::True,
            _ => {
                #[cfg(debug_assertions)]
                panic!("Invalid trit encoding: 0b{:02b}", bits & 0b11);
                #[cfg(not(debug_assertions))]
                Trit::Unknown
            }
        }
    }

    /// Get the 2-bit storage pattern.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self as u32
    }

    /// Kleene negation (False ↔ True, Unknown stays Unknown).
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Trit::False => Trit::True,
            Trit::Unknown => Trit::Unknown,
            Trit::True => Trit::False,
        }
    }

    /// Kleene conjunction: False dominates, then Unknown.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Trit::False, _) | (_, Trit::False) => Trit::False,
            (Trit::True, Trit::True) => Trit::True,
            _ => Trit::Unknown,
        }
    }

    /// Kleene disjunction: True dominates, then Unknown.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Trit::True, _) | (_, Trit::True) => Trit::True,
            (Trit::False, Trit::False) => Trit::False,
            _ => Trit::Unknown,
        }
    }

    /// Returns true if this trit is Unknown.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Trit::Unknown)
    }

    /// Returns true if this trit is False or True.
    #[inline]
    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    /// The single-character form used by `Display` and string parsing.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Trit::False => 'F',
            Trit::Unknown => 'U',
            Trit::True => 'T',
        }
    }

    /// Parse a single character.
    ///
    /// Accepts `T t 1 +` for True, `F f 0 -` for False and `U u ? .`
    /// for Unknown.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'T' | 't' | '1' | '+' => Some(Trit::True),
            'F' | 'f' | '0' | '-' => Some(Trit::False),
            'U' | 'u' | '?' | '.' => Some(Trit::Unknown),
            _ => None,
        }
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::False => write!(f, "False"),
            Trit::Unknown => write!(f, "Unknown"),
            Trit::True => write!(f, "True"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::ops::Not for Trit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Trit::not(self)
    }
}

impl std::ops::BitAnd for Trit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl std::ops::BitOr for Trit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl From<bool> for Trit {
    fn from(value: bool) -> Self {
        if value { Trit::True } else { Trit::False }
    }
}

impl From<Option<bool>> for Trit {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Trit::Unknown, Trit::from)
    }
}

impl From<Trit> for Option<bool> {
    fn from(trit: Trit) -> Self {
        match trit {
            Trit::False => Some(false),
            Trit::Unknown => None,
            Trit::True => Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Trit::{False as F, True as T, Unknown as U};

    #[test]
    fn test_negation_involution() {
        for t in Trit::ALL {
            assert_eq!(!!t, t, "not(not({:?})) should equal {:?}", t, t);
        }
    }

    #[test]
    fn test_and_table() {
        let expected = [
            [F, F, F],
            [F, U, U],
            [F, U, T],
        ];
        for (i, a) in Trit::ALL.into_iter().enumerate() {
            for (j, b) in Trit::ALL.into_iter().enumerate() {
                assert_eq!(a & b, expected[i][j], "{:?} & {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_or_table() {
        let expected = [
            [F, U, T],
            [U, U, T],
            [T, T, T],
        ];
        for (i, a) in Trit::ALL.into_iter().enumerate() {
            for (j, b) in Trit::ALL.into_iter().enumerate() {
                assert_eq!(a | b, expected[i][j], "{:?} | {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_commutativity() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(a & b, b & a);
                assert_eq!(a | b, b | a);
            }
        }
    }

    #[test]
    fn test_de_morgan() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(!(a & b), !a | !b);
                assert_eq!(!(a | b), !a & !b);
            }
        }
    }

    #[test]
    fn test_reserved_pattern_unused() {
        for t in Trit::ALL {
            assert_ne!(t.to_bits(), 0b11);
            assert_eq!(Trit::from_bits(t.to_bits()), t);
        }
        assert_eq!(Trit::default(), U);
        assert_eq!(U.to_bits(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid trit encoding")]
    fn test_reserved_pattern_panics_in_debug() {
        Trit::from_bits(0b11);
    }

    #[test]
    fn test_char_forms() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_char(t.to_char()), Some(t));
        }
        assert_eq!(Trit::from_char('+'), Some(T));
        assert_eq!(Trit::from_char('0'), Some(F));
        assert_eq!(Trit::from_char('?'), Some(U));
        assert_eq!(Trit::from_char('x'), None);
    }

    #[test]
    fn test_option_bool_conversions() {
        assert_eq!(Trit::from(true), T);
        assert_eq!(Trit::from(Some(false)), F);
        assert_eq!(Trit::from(None::<bool>), U);
        assert_eq!(Option::<bool>::from(U), None);
        assert_eq!(Option::<bool>::from(T), Some(true));
    }
}
