//! Deterministic random number generation
//!
//! Uses the xorshift64* engine for fast, reproducible draws and the
//! `rand` / `rand_distr` distributions on top of it.
//! CRITICAL: same seed + same sequence of calls → same values.

pub mod bounds;
mod source;
mod xorshift;

pub use bounds::{normal_boundary, normal_max, normal_min};
pub use source::{RandomSource, NORMAL_REJECTION_LIMIT};
pub use xorshift::Xorshift64Star;
