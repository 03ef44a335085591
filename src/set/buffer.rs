//! Bit-packed trit storage.
//!
//! A [`TritBuffer`] owns a contiguous run of `u32` words, each holding
//! [`TRITS_PER_WORD`] two-bit trit slots. Slot `i` lives in word
//! `i / TRITS_PER_WORD` at bit offset `2 * (i % TRITS_PER_WORD)`.
//!
//! The buffer knows nothing about logical length. It only tracks how many
//! words are allocated and reallocates when told to. Every allocated word is
//! zero-initialized, and zero is the Unknown pattern, so fresh storage
//! reads as Unknown without any extra bookkeeping.

use crate::error::{Result, TritSetError};
use crate::ternary::Trit;

/// Storage unit of the buffer.
pub type Word = u32;

/// Number of 2-bit trit slots packed into one [`Word`].
pub const TRITS_PER_WORD: usize = Word::BITS as usize / 2;

/// Mask selecting the low ("false") bit of every slot in a word.
pub(crate) const FALSE_BITS: Word = 0x5555_5555;

/// Mask selecting the high ("true") bit of every slot in a word.
pub(crate) const TRUE_BITS: Word = 0xAAAA_AAAA;

/// Owned block of packed trit words.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TritBuffer {
    words: Vec<Word>,
}

impl TritBuffer {
    /// Create an empty buffer. Nothing is allocated.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create a buffer of exactly `words` zeroed words.
    pub fn with_words(words: usize) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.resize_words(words)?;
        Ok(buffer)
    }

    /// Number of words needed to hold `slots` trits.
    #[inline]
    pub const fn words_for(slots: usize) -> usize {
        slots.div_ceil(TRITS_PER_WORD)
    }

    /// Number of allocated words.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Number of addressable trit slots.
    #[inline]
    pub fn slots(&self) -> usize {
        self.words.len() * TRITS_PER_WORD
    }

    /// The packed words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The packed words, mutably. Callers must never store `0b11` in a slot.
    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Word at `index`, or zero (all Unknown) past the allocation.
    #[inline]
    pub fn word(&self, index: usize) -> Word {
        self.words.get(index).copied().unwrap_or(0)
    }

    /// Read slot `index`. Slots past the allocation read as Unknown.
    #[inline]
    pub fn get(&self, index: usize) -> Trit {
        let (word, shift) = locate(index);
        match self.words.get(word) {
            Some(&w) => Trit::from_bits(w >> shift),
            None => Trit::Unknown,
        }
    }

    /// Write slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`slots`](Self::slots). Grow first.
    #[inline]
    pub fn set(&mut self, index: usize, value: Trit) {
        assert!(
            index < self.slots(),
            "Trit slot {} out of allocated range (0-{})",
            index,
            self.slots().saturating_sub(1)
        );
        let (word, shift) = locate(index);
        let cell = &mut self.words[word];
        *cell = (*cell & !(0b11 << shift)) | (value.to_bits() << shift);
    }

    /// Grow to the smallest word count covering `min_slots`. Never shrinks.
    ///
    /// On failure the buffer is left exactly as it was.
    pub fn grow_to(&mut self, min_slots: usize) -> Result<()> {
        let needed = Self::words_for(min_slots);
        if needed <= self.words.len() {
            return Ok(());
        }
        self.resize_words(needed)
    }

    /// Grow to at least `words` words. Never shrinks.
    pub fn grow_to_words(&mut self, words: usize) -> Result<()> {
        if words <= self.words.len() {
            return Ok(());
        }
        self.resize_words(words)
    }

    /// Reallocate to the smallest word count covering `min_slots`, even if
    /// that is smaller than the current allocation. The retained prefix of
    /// words is kept; the memory of dropped words is released.
    pub fn shrink_to(&mut self, min_slots: usize) {
        let needed = Self::words_for(min_slots);
        if needed >= self.words.len() {
            return;
        }
        tracing::trace!(from_words = self.words.len(), to_words = needed, "shrinking trit buffer");
        self.words.truncate(needed);
        self.words.shrink_to_fit();
    }

    /// Zero every slot at or beyond `from`, leaving the allocation as is.
    pub fn clear_from(&mut self, from: usize) {
        let (word, shift) = locate(from);
        if word >= self.words.len() {
            return;
        }
        let mut rest = word;
        if shift > 0 {
            self.words[word] &= (1 << shift) - 1;
            rest += 1;
        }
        for w in &mut self.words[rest..] {
            *w = 0;
        }
    }

    /// Index of the highest non-Unknown slot strictly below `end`, if any.
    ///
    /// Scans downward, skipping whole zero words.
    pub fn last_known_before(&self, end: usize) -> Option<usize> {
        let end = end.min(self.slots());
        if end == 0 {
            return None;
        }
        let (last_word, shift) = locate(end);
        // Partial word containing `end`: keep only slots below it.
        if shift > 0 {
            let masked = self.words[last_word] & ((1 << shift) - 1);
            if masked != 0 {
                return Some(highest_slot(last_word, masked));
            }
        }
        self.words[..last_word]
            .iter()
            .rposition(|&w| w != 0)
            .map(|word| highest_slot(word, self.words[word]))
    }

    fn resize_words(&mut self, words: usize) -> Result<()> {
        let additional = words.saturating_sub(self.words.len());
        self.words
            .try_reserve_exact(additional)
            .map_err(|_| TritSetError::AllocationFailed { words })?;
        tracing::trace!(from_words = self.words.len(), to_words = words, "growing trit buffer");
        self.words.resize(words, 0);
        Ok(())
    }
}

impl std::fmt::Debug for TritBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TritBuffer")
            .field("capacity", &self.words.len())
            .field("nonzero_words", &self.words.iter().filter(|&&w| w != 0).count())
            .finish()
    }
}

/// Word index and bit shift of slot `index`.
#[inline]
const fn locate(index: usize) -> (usize, usize) {
    (index / TRITS_PER_WORD, (index % TRITS_PER_WORD) * 2)
}

/// Slot index of the highest occupied slot in a non-zero word.
#[inline]
fn highest_slot(word: usize, bits: Word) -> usize {
    let top_bit = (Word::BITS - 1 - bits.leading_zeros()) as usize;
    word * TRITS_PER_WORD + top_bit / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_unallocated() {
        let buffer = TritBuffer::new();
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.slots(), 0);
        assert_eq!(buffer.get(0), Trit::Unknown);
        assert_eq!(buffer.get(usize::MAX), Trit::Unknown);
    }

    #[test]
    fn test_words_for() {
        assert_eq!(TritBuffer::words_for(0), 0);
        assert_eq!(TritBuffer::words_for(1), 1);
        assert_eq!(TritBuffer::words_for(TRITS_PER_WORD), 1);
        assert_eq!(TritBuffer::words_for(TRITS_PER_WORD + 1), 2);
    }

    #[test]
    fn test_grow_is_exact_and_monotonic() {
        let mut buffer = TritBuffer::new();
        buffer.grow_to(16).unwrap();
        assert_eq!(buffer.capacity(), 1);
        buffer.grow_to(17).unwrap();
        assert_eq!(buffer.capacity(), 2);
        buffer.grow_to(3).unwrap();
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_get_set_roundtrip_across_words() {
        let mut buffer = TritBuffer::new();
        buffer.grow_to(40).unwrap();
        buffer.set(0, Trit::True);
        buffer.set(15, Trit::False);
        buffer.set(16, Trit::True);
        buffer.set(39, Trit::False);

        assert_eq!(buffer.get(0), Trit::True);
        assert_eq!(buffer.get(1), Trit::Unknown);
        assert_eq!(buffer.get(15), Trit::False);
        assert_eq!(buffer.get(16), Trit::True);
        assert_eq!(buffer.get(39), Trit::False);

        buffer.set(15, Trit::True);
        assert_eq!(buffer.get(15), Trit::True);
        assert_eq!(buffer.get(16), Trit::True);
        buffer.set(15, Trit::Unknown);
        assert_eq!(buffer.get(15), Trit::Unknown);
    }

    #[test]
    #[should_panic(expected = "out of allocated range")]
    fn test_set_without_growth_panics() {
        let mut buffer = TritBuffer::new();
        buffer.set(0, Trit::True);
    }

    #[test]
    fn test_shrink_keeps_prefix() {
        let mut buffer = TritBuffer::new();
        buffer.grow_to(64).unwrap();
        buffer.set(3, Trit::False);
        buffer.set(60, Trit::True);

        buffer.shrink_to(10);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.get(3), Trit::False);
        assert_eq!(buffer.get(60), Trit::Unknown);

        buffer.shrink_to(100);
        assert_eq!(buffer.capacity(), 1);

        buffer.shrink_to(0);
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_clear_from_mid_word() {
        let mut buffer = TritBuffer::new();
        buffer.grow_to(32).unwrap();
        for i in 0..32 {
            buffer.set(i, Trit::True);
        }
        buffer.clear_from(5);
        assert_eq!(buffer.get(4), Trit::True);
        assert_eq!(buffer.get(5), Trit::Unknown);
        assert_eq!(buffer.get(20), Trit::Unknown);
        assert_eq!(buffer.words()[1], 0);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_last_known_before() {
        let mut buffer = TritBuffer::new();
        assert_eq!(buffer.last_known_before(100), None);

        buffer.grow_to(48).unwrap();
        buffer.set(2, Trit::False);
        buffer.set(17, Trit::True);
        buffer.set(40, Trit::False);

        assert_eq!(buffer.last_known_before(48), Some(40));
        assert_eq!(buffer.last_known_before(40), Some(17));
        assert_eq!(buffer.last_known_before(18), Some(17));
        assert_eq!(buffer.last_known_before(17), Some(2));
        assert_eq!(buffer.last_known_before(2), None);
        assert_eq!(buffer.last_known_before(usize::MAX), Some(40));
    }

    #[test]
    fn test_word_past_allocation_is_unknown() {
        let buffer = TritBuffer::with_words(2).unwrap();
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.word(1), 0);
        assert_eq!(buffer.word(1000), 0);
    }
}
