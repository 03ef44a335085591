//! # TritSet
//!
//! A bit-packed container of three-valued (Kleene) trits.
//!
//! Each trit is False, Unknown or True and takes two bits of storage.
//! Memory grows only when a known value is written past the current
//! capacity, and is given back only by [`TritSet::shrink`] and
//! [`TritSet::trim`]. Indices are unbounded: reads past the end are
//! Unknown and writes grow the set.

pub mod ternary;
pub mod set;
pub mod grid;
pub mod error;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Trit, KleeneOps};
pub use set::{TritSet, TritHolder, TritBuffer, Cardinality, clamp_trim};
pub use grid::{Plane, Point};
pub use error::{TritSetError, Result};
