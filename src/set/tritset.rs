//! Demand-grown set of Kleene trits.
//!
//! A [`TritSet`] pairs a [`TritBuffer`] with a logical length: one past the
//! highest index holding a non-Unknown trit. Every index at or beyond the
//! length reads as Unknown, and the storage behind those indices is always
//! zero. The word-level operators below rely on that.
//!
//! Memory is allocated only when a known value is written past the current
//! capacity, and released only by [`TritSet::shrink`] and [`TritSet::trim`].

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Index, Not};
use std::str::FromStr;

use crate::error::{Result, TritSetError};
use crate::set::buffer::{TritBuffer, Word, FALSE_BITS, TRUE_BITS};
use crate::set::{Cardinality, TritHolder};
use crate::ternary::{KleeneOps, Trit};

/// A packed, growable sequence of trits indexed from zero.
///
/// ```
/// use tritset::{Trit, TritSet};
///
/// let mut set = TritSet::with_size(1000);
/// assert_eq!(set.capacity(), 0);
///
/// set.set(20, Trit::True);
/// assert_eq!(set.len(), 21);
/// assert_eq!(set[20], Trit::True);
/// assert_eq!(set[5000], Trit::Unknown);
/// ```
#[derive(Clone, Default)]
pub struct TritSet {
    buffer: TritBuffer,
    length: usize,
}

impl TritSet {
    /// Create an empty set. Nothing is allocated.
    pub const fn new() -> Self {
        Self { buffer: TritBuffer::new(), length: 0 }
    }

    /// Create an empty set for roughly `size` trits.
    ///
    /// The size is advisory only: allocation happens on the first write of
    /// a known value, so the new set has zero length and zero capacity.
    pub const fn with_size(size: usize) -> Self {
        let _ = size;
        Self::new()
    }

    /// Build a set whose `i`-th trit is `trits[i]`.
    pub fn from_trits(trits: &[Trit]) -> Self {
        trits.iter().copied().collect()
    }

    /// Number of trits up to and including the highest non-Unknown one.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if every trit is Unknown.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of allocated storage words (not trits).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Read the trit at `index`. Never allocates.
    #[inline]
    pub fn get(&self, index: usize) -> Trit {
        if index >= self.length {
            return Trit::Unknown;
        }
        self.buffer.get(index)
    }

    /// Write `value` at `index` and return it.
    ///
    /// Chained assignment is two calls: `a.set(i, b.set(j, Trit::True))`.
    ///
    /// # Panics
    /// Panics if the storage needed for `index` cannot be allocated. Use
    /// [`try_set`](Self::try_set) to handle that case.
    pub fn set(&mut self, index: usize, value: Trit) -> Trit {
        match self.try_set(index, value) {
            Ok(written) => written,
            Err(e) => panic!("{}", e),
        }
    }

    /// Write `value` at `index`, reporting allocation failure.
    ///
    /// - Unknown past the length is a no-op.
    /// - Unknown at the last known index pulls the length back to the next
    ///   known trit below it. Capacity is left alone.
    /// - A known value grows the buffer to the minimum covering `index` and
    ///   extends the length to `index + 1` if needed.
    ///
    /// On error the set is unchanged.
    pub fn try_set(&mut self, index: usize, value: Trit) -> Result<Trit> {
        if value.is_unknown() {
            if index < self.length {
                self.buffer.set(index, Trit::Unknown);
                if index + 1 == self.length {
                    self.length = self.known_length_below(index);
                }
            }
            return Ok(value);
        }

        let min_slots = index
            .checked_add(1)
            .ok_or(TritSetError::CapacityOverflow { index })?;
        self.buffer.grow_to(min_slots)?;
        self.buffer.set(index, value);
        self.length = self.length.max(min_slots);
        Ok(value)
    }

    /// Reserve storage for at least `min_len` trits without writing any.
    ///
    /// Length is unchanged. On error the set is unchanged.
    pub fn try_grow(&mut self, min_len: usize) -> Result<()> {
        self.buffer.grow_to(min_len)
    }

    /// Proxy for reading or writing the trit at `index`.
    pub fn at(&mut self, index: usize) -> TritHolder<'_> {
        TritHolder::new(self, index)
    }

    /// Release storage not needed to hold the current length.
    pub fn shrink(&mut self) {
        self.buffer.shrink_to(self.length);
    }

    /// Forget every trit at or beyond `n`, then shrink.
    ///
    /// Never increases the length. The length is re-tightened to the
    /// highest known trit below `n`, so a trimmed set whose trit `n - 1` is
    /// known ends up with length exactly `n`. The shrink runs even when
    /// `n >= len()`, so spare capacity is released in that case too.
    pub fn trim(&mut self, n: usize) {
        if n < self.length {
            tracing::debug!(from_length = self.length, to_length = n, "trimming trit set");
            self.buffer.clear_from(n);
            self.length = self.known_length_below(n);
        }
        self.shrink();
    }

    /// Count of each trit value over `[0, len())`.
    pub fn cardinality(&self) -> Cardinality {
        let (mut false_count, mut true_count) = (0usize, 0usize);
        for &w in self.buffer.words() {
            false_count += (w & FALSE_BITS).count_ones() as usize;
            true_count += (w & TRUE_BITS).count_ones() as usize;
        }
        Cardinality {
            false_count,
            unknown_count: self.length - false_count - true_count,
            true_count,
        }
    }

    /// Count of a single trit value over `[0, len())`.
    pub fn cardinality_of(&self, value: Trit) -> usize {
        self.cardinality().get(value)
    }

    /// Iterate over the trits in `[0, len())`.
    pub fn iter(&self) -> impl Iterator<Item = Trit> + '_ {
        (0..self.length).map(move |i| self.buffer.get(i))
    }

    /// Length implied by the highest known trit strictly below `end`.
    fn known_length_below(&self, end: usize) -> usize {
        self.buffer.last_known_before(end).map_or(0, |i| i + 1)
    }

    /// Combine two sets word by word into a fresh set.
    ///
    /// The result is allocated at the larger of the two capacities, even if
    /// its trimmed length would fit in less.
    fn combine(&self, other: &TritSet, op: fn(Word, Word) -> Word) -> TritSet {
        let words = self.capacity().max(other.capacity());
        let mut buffer = match TritBuffer::with_words(words) {
            Ok(buffer) => buffer,
            Err(e) => panic!("{}", e),
        };
        for (i, w) in buffer.words_mut().iter_mut().enumerate() {
            *w = op(self.buffer.word(i), other.buffer.word(i));
        }
        let length = buffer.last_known_before(buffer.slots()).map_or(0, |i| i + 1);
        TritSet { buffer, length }
    }

    /// In-place form of [`combine`](Self::combine).
    fn combine_assign(&mut self, other: &TritSet, op: fn(Word, Word) -> Word) {
        if let Err(e) = self.buffer.grow_to_words(other.capacity()) {
            panic!("{}", e);
        }
        for (i, w) in self.buffer.words_mut().iter_mut().enumerate() {
            *w = op(*w, other.buffer.word(i));
        }
        self.length = self.known_length_below(self.buffer.slots());
    }
}

/// Trim length for a signed request: negatives trim everything.
pub fn clamp_trim(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

// Word-level Kleene logic over the 2-bit encoding (low bit False, high bit
// True). A slot never has both bits set, so these never produce 0b11.

#[inline]
fn and_words(a: Word, b: Word) -> Word {
    ((a | b) & FALSE_BITS) | (a & b & TRUE_BITS)
}

#[inline]
fn or_words(a: Word, b: Word) -> Word {
    ((a | b) & TRUE_BITS) | (a & b & FALSE_BITS)
}

#[inline]
fn not_word(a: Word) -> Word {
    ((a & FALSE_BITS) << 1) | ((a & TRUE_BITS) >> 1)
}

impl KleeneOps for TritSet {
    type Output = TritSet;

    fn kleene_not(&self) -> TritSet {
        let mut result = self.clone();
        for w in result.buffer.words_mut() {
            *w = not_word(*w);
        }
        result
    }

    fn kleene_and(&self, other: &Self) -> TritSet {
        self.combine(other, and_words)
    }

    fn kleene_or(&self, other: &Self) -> TritSet {
        self.combine(other, or_words)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $word_op:ident) => {
        impl $trait<&TritSet> for &TritSet {
            type Output = TritSet;

            fn $method(self, rhs: &TritSet) -> TritSet {
                self.combine(rhs, $word_op)
            }
        }

        impl $trait<TritSet> for TritSet {
            type Output = TritSet;

            fn $method(self, rhs: TritSet) -> TritSet {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&TritSet> for TritSet {
            type Output = TritSet;

            fn $method(self, rhs: &TritSet) -> TritSet {
                (&self).$method(rhs)
            }
        }

        impl $trait<TritSet> for &TritSet {
            type Output = TritSet;

            fn $method(self, rhs: TritSet) -> TritSet {
                self.$method(&rhs)
            }
        }

        impl $assign_trait<&TritSet> for TritSet {
            fn $assign_method(&mut self, rhs: &TritSet) {
                self.combine_assign(rhs, $word_op);
            }
        }

        impl $assign_trait<TritSet> for TritSet {
            fn $assign_method(&mut self, rhs: TritSet) {
                self.combine_assign(&rhs, $word_op);
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and_words);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or_words);

impl Not for &TritSet {
    type Output = TritSet;

    fn not(self) -> TritSet {
        self.kleene_not()
    }
}

impl Not for TritSet {
    type Output = TritSet;

    fn not(mut self) -> TritSet {
        for w in self.buffer.words_mut() {
            *w = not_word(*w);
        }
        self
    }
}

impl PartialEq for TritSet {
    /// Trit-wise comparison; positions past either length count as Unknown.
    fn eq(&self, other: &Self) -> bool {
        let words = self.capacity().max(other.capacity());
        (0..words).all(|i| self.buffer.word(i) == other.buffer.word(i))
    }
}

impl Eq for TritSet {}

impl PartialEq<[Trit]> for TritSet {
    fn eq(&self, other: &[Trit]) -> bool {
        let end = self.length.max(other.len());
        (0..end).all(|i| self.get(i) == other.get(i).copied().unwrap_or(Trit::Unknown))
    }
}

impl<const N: usize> PartialEq<[Trit; N]> for TritSet {
    fn eq(&self, other: &[Trit; N]) -> bool {
        *self == other[..]
    }
}

impl Index<usize> for TritSet {
    type Output = Trit;

    fn index(&self, index: usize) -> &Trit {
        match self.get(index) {
            Trit::False => &Trit::False,
            Trit::Unknown => &Trit::Unknown,
            Trit::True => &Trit::True,
        }
    }
}

impl FromIterator<Trit> for TritSet {
    fn from_iter<I: IntoIterator<Item = Trit>>(iter: I) -> Self {
        let mut set = TritSet::new();
        for (i, trit) in iter.into_iter().enumerate() {
            set.set(i, trit);
        }
        set
    }
}

impl FromStr for TritSet {
    type Err = TritSetError;

    /// Parse one trit per character (`T`/`F`/`U` and their aliases).
    /// Whitespace and `_` separators are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut set = TritSet::new();
        let mut index = 0;
        for (position, c) in s.chars().enumerate() {
            if c.is_whitespace() || c == '_' {
                continue;
            }
            let trit = Trit::from_char(c)
                .ok_or(TritSetError::InvalidChar { position, found: c })?;
            set.try_set(index, trit)?;
            index += 1;
        }
        Ok(set)
    }
}

impl fmt::Display for TritSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trit in self.iter() {
            write!(f, "{}", trit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TritSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TritSet")
            .field("length", &self.length)
            .field("capacity", &self.capacity())
            .field("trits", &format_args!("{}", self))
            .finish()
    }
}
