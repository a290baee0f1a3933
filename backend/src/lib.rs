//! Random Source Core - seeded sampling for simulations
//!
//! A single stateful object, [`RandomSource`], wraps a deterministic engine
//! and exposes the distributions interactive simulations use most.
//!
//! # Architecture
//!
//! - **rng**: xorshift64* engine, `RandomSource`, normal bound helpers
//! - **config**: defaults table and normal-draw options
//! - **error**: `RandomError`
//! - **shared**: explicitly installed per-thread source
//!
//! # Critical Invariants
//!
//! 1. Same seed + same calls → same values
//! 2. The stored seed only changes through `new` / `set_seed`
//! 3. Broken preconditions are returned as `RandomError`, never swallowed

// Module declarations
pub mod config;
pub mod error;
pub mod rng;
pub mod shared;

// Re-exports for convenience
pub use config::{NormalOptions, SamplingDefaults};
pub use error::RandomError;
pub use rng::{RandomSource, Xorshift64Star, NORMAL_REJECTION_LIMIT};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn random_source_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyRandom>()?;
    Ok(())
}
