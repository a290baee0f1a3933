//! Seeded random source
//!
//! [`RandomSource`] pairs a stored seed with a live [`Xorshift64Star`]
//! engine and exposes the distributions simulations reach for: uniform
//! ints/floats, clamped normals, Bernoulli trials and weighted picks.
//!
//! # Seed vs. engine
//!
//! The stored seed and the engine can diverge. `use_random_seed` re-seeds the
//! engine from the clock but keeps the stored seed, so `use_default_seed`
//! can always rewind to the start of the stored seed's stream.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, trace, warn};
use rand::distributions::{Bernoulli, Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::config::{NormalOptions, SamplingDefaults};
use crate::error::RandomError;
use crate::rng::bounds;
use crate::rng::xorshift::Xorshift64Star;

/// Consecutive out-of-bound normal draws tolerated before giving up
pub const NORMAL_REJECTION_LIMIT: u32 = 10;

/// Seeded random source
///
/// # Example
/// ```
/// use random_source_core_rs::RandomSource;
///
/// let mut random = RandomSource::new(12345);
/// let roll = random.range_int(1, 6);
/// assert!((1..=6).contains(&roll));
///
/// // Rewind to the start of the seed's stream
/// random.use_default_seed();
/// assert_eq!(random.range_int(1, 6), roll);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSource {
    /// Seed the engine is reset to by `use_default_seed`
    seed: u32,

    engine: Xorshift64Star,

    #[serde(default, deserialize_with = "validated_defaults")]
    defaults: SamplingDefaults,
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_time()
    }
}

impl RandomSource {
    /// Create a source with a fixed seed
    pub fn new(seed: u32) -> Self {
        debug!("random source created with seed {}", seed);
        Self {
            seed,
            engine: Xorshift64Star::from_seed_u32(seed),
            defaults: SamplingDefaults::default(),
        }
    }

    /// Create a source seeded from the wall clock (second resolution)
    pub fn from_time() -> Self {
        Self::new(Self::random_seed())
    }

    /// Create a source with a fixed seed and a custom defaults table
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `defaults` fails [`SamplingDefaults::validate`].
    pub fn with_defaults(seed: u32, defaults: SamplingDefaults) -> Result<Self, RandomError> {
        defaults.validate()?;
        let mut source = Self::new(seed);
        source.defaults = defaults;
        Ok(source)
    }

    /// Re-seed the engine from the clock, keeping the stored seed
    pub fn use_random_seed(&mut self) {
        let seed = Self::random_seed();
        debug!("engine re-seeded from clock ({}), stored seed stays {}", seed, self.seed);
        self.engine = Xorshift64Star::from_seed_u32(seed);
    }

    /// Reset the engine to the start of the stored seed's stream
    pub fn use_default_seed(&mut self) {
        debug!("engine reset to stored seed {}", self.seed);
        self.engine = Xorshift64Star::from_seed_u32(self.seed);
    }

    /// Stored seed (not changed by `use_random_seed`)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Store a new seed and reset the engine to it
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.use_default_seed();
    }

    /// Current wall-clock time in seconds, truncated to 32 bits
    ///
    /// A clock set before the Unix epoch yields 0.
    pub fn random_seed() -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0)
    }

    pub fn defaults(&self) -> &SamplingDefaults {
        &self.defaults
    }

    /// Replace the defaults table; an invalid table leaves the current one in place
    pub fn set_defaults(&mut self, defaults: SamplingDefaults) -> Result<(), RandomError> {
        defaults.validate()?;
        self.defaults = defaults;
        Ok(())
    }

    /// Live engine (for checkpoint inspection)
    pub fn engine(&self) -> &Xorshift64Star {
        &self.engine
    }

    // ------------------------------------------------------------------------
    // Uniform
    // ------------------------------------------------------------------------

    /// Uniform integer in `[min, max]`, both ends inclusive
    ///
    /// Reversed bounds are swapped.
    pub fn range_int(&mut self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.engine.gen_range(low..=high)
    }

    /// Uniform float in `[min, max)`, upper bound exclusive
    ///
    /// Reversed bounds are swapped; `min == max` returns `min`. Spans wider
    /// than `f32::MAX` (e.g. `-f32::MAX..f32::MAX`) are sampled at half scale.
    ///
    /// # Panics
    /// Panics if either bound is not finite.
    pub fn range_float(&mut self, min: f32, max: f32) -> f32 {
        assert!(
            min.is_finite() && max.is_finite(),
            "range bounds must be finite"
        );

        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        if low == high {
            return low;
        }
        if (high - low).is_finite() {
            return self.engine.gen_range(low..high);
        }

        // high - low overflows; halving is exact for values this large
        let (half_low, half_high) = (low / 2.0, high / 2.0);
        loop {
            let unit: f32 = self.engine.gen();
            let value = (half_low + (half_high - half_low) * unit) * 2.0;
            if value >= low && value < high {
                return value;
            }
        }
    }

    pub fn range_int_default(&mut self) -> i32 {
        self.range_int(self.defaults.uniform_int_min, self.defaults.uniform_int_max)
    }

    pub fn range_float_default(&mut self) -> f32 {
        self.range_float(
            self.defaults.uniform_float_min,
            self.defaults.uniform_float_max,
        )
    }

    // ------------------------------------------------------------------------
    // Normal
    // ------------------------------------------------------------------------

    /// Normal draw, optionally clamped by rejection sampling
    ///
    /// Unclamped draws are returned as-is (about 0.3% fall beyond 3 sigma).
    /// Clamped draws outside [`NormalOptions::bounds`] are redrawn; the
    /// 10th consecutive rejection fails.
    ///
    /// # Errors
    ///
    /// - `InvalidStdDev` if `stddev` is negative or not finite
    /// - `RejectionBudgetExhausted` if no draw landed inside the bounds
    ///   within [`NORMAL_REJECTION_LIMIT`] attempts
    ///
    /// # Example
    /// ```
    /// use random_source_core_rs::{NormalOptions, RandomSource};
    ///
    /// let mut random = RandomSource::new(42);
    /// let value = random.normal_range(&NormalOptions::new(5.0, 2.0)).unwrap();
    /// assert!((-1.0..=11.0).contains(&value));
    /// ```
    pub fn normal_range(&mut self, options: &NormalOptions) -> Result<f32, RandomError> {
        let distribution = normal_distribution(options.mean, options.stddev)?;
        let mut value = distribution.sample(&mut self.engine);

        if !options.clamp {
            return Ok(value);
        }

        let (min, max) = options.bounds();
        let mut rejections = 0;

        // NaN is never contained, so a NaN draw counts as a rejection
        while !(min..=max).contains(&value) {
            rejections += 1;
            trace!(
                "normal draw {} outside [{}, {}] (rejection {})",
                value,
                min,
                max,
                rejections
            );

            if rejections >= NORMAL_REJECTION_LIMIT {
                warn!(
                    "normal(mean={}, stddev={}) exhausted {} draws against [{}, {}]",
                    options.mean, options.stddev, rejections, min, max
                );
                return Err(RandomError::RejectionBudgetExhausted {
                    attempts: rejections,
                    min,
                    max,
                });
            }

            value = distribution.sample(&mut self.engine);
        }

        Ok(value)
    }

    /// Normal draw clamped to `[min, max]`
    ///
    /// Mean is the midpoint and stddev is a third of the half-width, so the
    /// bounds sit at 3 sigma.
    ///
    /// # Errors
    ///
    /// `InvalidStdDev` when `min > max` (the derived stddev is negative), plus
    /// the errors of [`normal_range`](Self::normal_range).
    pub fn normal_range_min_max(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        // Halve before adding so wide finite bounds cannot overflow
        let mean = min / 2.0 + max / 2.0;
        let stddev = (max / 2.0 - min / 2.0) / bounds::SIGMA_BOUND;

        self.normal_range(&NormalOptions::bounded(mean, stddev, min, max))
    }

    pub fn normal_range_default(&mut self) -> Result<f32, RandomError> {
        let options = self.defaults.normal_options();
        self.normal_range(&options)
    }

    pub fn normal_range_min_max_default(&mut self) -> Result<f32, RandomError> {
        let (min, max) = self.defaults.normal_options().bounds();
        self.normal_range_min_max(min, max)
    }

    /// See [`bounds::normal_boundary`]
    pub fn normal_boundary(stddev: f32) -> f32 {
        bounds::normal_boundary(stddev)
    }

    /// See [`bounds::normal_min`]
    pub fn normal_min(mean: f32, stddev: f32) -> f32 {
        bounds::normal_min(mean, stddev)
    }

    /// See [`bounds::normal_max`]
    pub fn normal_max(mean: f32, stddev: f32) -> f32 {
        bounds::normal_max(mean, stddev)
    }

    // ------------------------------------------------------------------------
    // Bernoulli / discrete
    // ------------------------------------------------------------------------

    /// `true` with the given probability
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `probability` is outside `[0, 1]` or NaN.
    pub fn coin_toss(&mut self, probability: f32) -> Result<bool, RandomError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RandomError::InvalidProbability { probability });
        }

        let distribution = Bernoulli::new(f64::from(probability))
            .map_err(|_| RandomError::InvalidProbability { probability })?;
        Ok(distribution.sample(&mut self.engine))
    }

    pub fn coin_toss_default(&mut self) -> Result<bool, RandomError> {
        self.coin_toss(self.defaults.bernoulli_probability)
    }

    /// Index into `weights`, picked with probability `weights[i] / sum`
    ///
    /// Zero weights are allowed as long as one weight is positive; their
    /// index is never returned.
    ///
    /// # Errors
    ///
    /// - `EmptyWeights` for an empty slice
    /// - `InvalidWeight` for a negative, NaN or infinite weight
    /// - `WeightTotalOverflow` if the sum is not finite
    /// - `AllWeightsZero` if every weight is zero
    ///
    /// # Example
    /// ```
    /// use random_source_core_rs::RandomSource;
    ///
    /// let mut random = RandomSource::new(7);
    /// let index = random.discrete_int(&[0.0, 3.0, 0.0]).unwrap();
    /// assert_eq!(index, 1);
    /// ```
    pub fn discrete_int(&mut self, weights: &[f64]) -> Result<usize, RandomError> {
        if weights.is_empty() {
            return Err(RandomError::EmptyWeights);
        }

        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RandomError::InvalidWeight { index, weight });
        }

        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(RandomError::WeightTotalOverflow);
        }
        if total == 0.0 {
            return Err(RandomError::AllWeightsZero);
        }

        let distribution: WeightedIndex<f64> =
            WeightedIndex::new(weights).map_err(|_| RandomError::AllWeightsZero)?;
        Ok(distribution.sample(&mut self.engine))
    }
}

fn validated_defaults<'de, D>(deserializer: D) -> Result<SamplingDefaults, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let defaults = SamplingDefaults::deserialize(deserializer)?;
    defaults.validate().map_err(serde::de::Error::custom)?;
    Ok(defaults)
}

fn normal_distribution(mean: f32, stddev: f32) -> Result<Normal<f32>, RandomError> {
    if !stddev.is_finite() || stddev < 0.0 {
        return Err(RandomError::InvalidStdDev { stddev });
    }
    Normal::new(mean, stddev).map_err(|_| RandomError::InvalidStdDev { stddev })
}
