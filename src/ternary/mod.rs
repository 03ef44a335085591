//! Three-valued logic primitives.
//!
//! This module provides the core value type:
//! - [`Trit`] - A single Kleene trit (False, Unknown, True)
//! - [`KleeneOps`] - Trit-wise AND/OR/NOT shared with [`crate::TritSet`]

mod trit;
mod ops;

pub use trit::Trit;
pub use ops::{KleeneOps, implies};
