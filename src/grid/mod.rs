//! Bounded rectangular grid helper.
//!
//! Stateless distance and 4-neighbor lookup. It shares nothing with the
//! trit containers.

mod plane;

pub use plane::{Plane, Point};
