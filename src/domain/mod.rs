//! Domain logic and core data structures
//!
//! Pure rectangle geometry on the integer plane.

pub mod core;
pub mod query;
