//! Packed trit containers.
//!
//! - [`TritBuffer`] - raw 2-bit slot storage and reallocation
//! - [`TritSet`] - logical length tracking and Kleene operators
//! - [`TritHolder`] - assignment proxy returned by [`TritSet::at`]
//! - [`Cardinality`] - per-value counts

pub mod buffer;
mod cardinality;
mod holder;
mod tritset;

pub use buffer::{TritBuffer, Word, TRITS_PER_WORD};
pub use cardinality::Cardinality;
pub use holder::TritHolder;
pub use tritset::{clamp_trim, TritSet};
