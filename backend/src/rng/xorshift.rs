//! xorshift64* engine
//!
//! Fast, deterministic 64-bit generator that backs every [`RandomSource`].
//! It implements [`RngCore`] so the `rand` / `rand_distr` distributions can
//! draw from it directly.
//!
//! # Algorithm
//!
//! xorshift64* passes TestU01's BigCrush and keeps a single `u64` of state.
//! The state must never be zero, otherwise the stream is stuck at zero.
//!
//! # Seeding
//!
//! Seeds are 32-bit. A seed is expanded through one splitmix64 step before
//! it becomes the state, so consecutive seeds (12345, 12346, ...) start on
//! unrelated states.
//!
//! [`RandomSource`]: crate::rng::RandomSource

use rand_core::{impls, Error, RngCore};
use serde::{Deserialize, Serialize};

/// splitmix64 increment (golden ratio)
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64* output multiplier
const OUTPUT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Deterministic random engine using xorshift64*
///
/// # Example
/// ```
/// use random_source_core_rs::rng::Xorshift64Star;
/// use rand_core::RngCore;
///
/// let mut a = Xorshift64Star::from_seed_u32(12345);
/// let mut b = Xorshift64Star::from_seed_u32(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64Star {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl Xorshift64Star {
    /// Create an engine from a 32-bit seed
    ///
    /// Same seed → same stream, on every platform.
    pub fn from_seed_u32(seed: u32) -> Self {
        Self::from_state(splitmix64(u64::from(seed)))
    }

    /// Create an engine from a raw state value
    ///
    /// Used to resume from [`get_state`](Self::get_state). A zero state is
    /// replaced by 1.
    pub fn from_state(state: u64) -> Self {
        let state = if state == 0 { 1 } else { state };
        Self { state }
    }

    /// Get current engine state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use random_source_core_rs::rng::Xorshift64Star;
    /// use rand_core::RngCore;
    ///
    /// let mut rng = Xorshift64Star::from_seed_u32(7);
    /// rng.next_u64();
    ///
    /// let mut resumed = Xorshift64Star::from_state(rng.get_state());
    /// assert_eq!(rng.next_u64(), resumed.next_u64());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // Top 53 bits → mantissa
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    fn step(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(OUTPUT_MULTIPLIER)
    }
}

impl RngCore for Xorshift64Star {
    fn next_u32(&mut self) -> u32 {
        // High bits of xorshift64* are the strongest
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// One splitmix64 step, used to spread 32-bit seeds over the 64-bit state.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
