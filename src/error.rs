//! Error types for trit set operations.

use thiserror::Error;

/// Result type alias for trit set operations.
pub type Result<T> = std::result::Result<T, TritSetError>;

/// Errors that can occur while growing or parsing a trit set.
///
/// Out-of-range indices are never errors: reads past the logical length
/// yield Unknown and writes grow the set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TritSetError {
    /// `index + 1` trits cannot be addressed by a word count.
    #[error("trit index {index} exceeds the addressable capacity")]
    CapacityOverflow { index: usize },

    /// The allocator refused to provide the requested storage.
    #[error("failed to allocate {words} storage words")]
    AllocationFailed { words: usize },

    /// A character outside the trit alphabet was found while parsing.
    #[error("invalid trit character {found:?} at position {position}")]
    InvalidChar { position: usize, found: char },
}
