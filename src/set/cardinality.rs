//! Per-value trit counts.

use std::collections::HashMap;
use std::ops::Index;
use serde::{Serialize, Deserialize};
use crate::ternary::Trit;

/// How many times each trit value occurs in `[0, length)` of a set.
///
/// The three counts always sum to the set's logical length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardinality {
    #[serde(rename = "false")]
    pub false_count: usize,
    #[serde(rename = "unknown")]
    pub unknown_count: usize,
    #[serde(rename = "true")]
    pub true_count: usize,
}

impl Cardinality {
    /// Count for a single value.
    pub const fn get(&self, value: Trit) -> usize {
        match value {
            Trit::False => self.false_count,
            Trit::Unknown => self.unknown_count,
            Trit::True => self.true_count,
        }
    }

    /// Sum of all three counts.
    pub const fn total(&self) -> usize {
        self.false_count + self.unknown_count + self.true_count
    }

    /// `(value, count)` pairs in the order of [`Trit::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (Trit, usize)> + '_ {
        Trit::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

impl Index<Trit> for Cardinality {
    type Output = usize;

    fn index(&self, value: Trit) -> &usize {
        match value {
            Trit::False => &self.false_count,
            Trit::Unknown => &self.unknown_count,
            Trit::True => &self.true_count,
        }
    }
}

impl From<Cardinality> for HashMap<Trit, usize> {
    fn from(card: Cardinality) -> Self {
        card.iter().collect()
    }
}
