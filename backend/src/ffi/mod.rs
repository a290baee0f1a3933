//! Python bindings
//!
//! Thin PyO3 layer over [`RandomSource`](crate::RandomSource). Every
//! `RandomError` surfaces as `ValueError`.

pub mod random;
