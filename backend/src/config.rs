//! Sampling defaults and normal-distribution options
//!
//! The constants below are the recognized defaults of every convenience
//! method. [`SamplingDefaults`] carries them per [`RandomSource`] and can be
//! loaded from JSON; [`NormalOptions`] is the full parameter set of a clamped
//! normal draw.
//!
//! # Example
//!
//! ```
//! use random_source_core_rs::config::SamplingDefaults;
//!
//! let defaults = SamplingDefaults::from_json(r#"{ "uniform_int_max": 6 }"#).unwrap();
//! assert_eq!(defaults.uniform_int_min, 0);
//! assert_eq!(defaults.uniform_int_max, 6);
//! ```
//!
//! [`RandomSource`]: crate::rng::RandomSource

use serde::{Deserialize, Serialize};

use crate::error::RandomError;
use crate::rng::bounds::{normal_max, normal_min, SIGMA_BOUND};

pub const DEFAULT_UNI_MIN_I: i32 = 0;
pub const DEFAULT_UNI_MAX_I: i32 = 10000;
pub const DEFAULT_UNI_MIN_F: f32 = 0.0;
pub const DEFAULT_UNI_MAX_F: f32 = 1.0;
pub const DEFAULT_NOR_MEAN: f32 = 0.0;
pub const DEFAULT_NOR_STDDEV: f32 = 0.33333;
pub const DEFAULT_NOR_MIN: f32 = DEFAULT_NOR_MEAN - DEFAULT_NOR_STDDEV * SIGMA_BOUND;
pub const DEFAULT_NOR_MAX: f32 = DEFAULT_NOR_MEAN + DEFAULT_NOR_STDDEV * SIGMA_BOUND;
pub const DEFAULT_BER_PERC: f32 = 0.5;

/// Default parameters used by the `*_default` sampling methods
///
/// Missing JSON fields fall back to the tabulated constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingDefaults {
    /// Lower bound of `range_int_default` (inclusive)
    pub uniform_int_min: i32,

    /// Upper bound of `range_int_default` (inclusive)
    pub uniform_int_max: i32,

    /// Lower bound of `range_float_default` (inclusive)
    pub uniform_float_min: f32,

    /// Upper bound of `range_float_default` (exclusive)
    pub uniform_float_max: f32,

    pub normal_mean: f32,
    pub normal_stddev: f32,

    /// Probability of `true` for `coin_toss_default`
    pub bernoulli_probability: f32,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            uniform_int_min: DEFAULT_UNI_MIN_I,
            uniform_int_max: DEFAULT_UNI_MAX_I,
            uniform_float_min: DEFAULT_UNI_MIN_F,
            uniform_float_max: DEFAULT_UNI_MAX_F,
            normal_mean: DEFAULT_NOR_MEAN,
            normal_stddev: DEFAULT_NOR_STDDEV,
            bernoulli_probability: DEFAULT_BER_PERC,
        }
    }
}

impl SamplingDefaults {
    /// Parse defaults from JSON and validate them
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidConfig` if the JSON is malformed or a
    /// value fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        let defaults: Self =
            serde_json::from_str(json).map_err(|e| RandomError::InvalidConfig(e.to_string()))?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check that every value can drive its distribution
    pub fn validate(&self) -> Result<(), RandomError> {
        if self.uniform_int_min > self.uniform_int_max {
            return Err(RandomError::InvalidConfig(format!(
                "uniform_int_min {} exceeds uniform_int_max {}",
                self.uniform_int_min, self.uniform_int_max
            )));
        }

        if !self.uniform_float_min.is_finite()
            || !self.uniform_float_max.is_finite()
            || self.uniform_float_min > self.uniform_float_max
        {
            return Err(RandomError::InvalidConfig(format!(
                "uniform float range [{}, {}) is not a finite ascending range",
                self.uniform_float_min, self.uniform_float_max
            )));
        }

        if !self.normal_mean.is_finite() {
            return Err(RandomError::InvalidConfig(format!(
                "normal_mean must be finite, got {}",
                self.normal_mean
            )));
        }

        if !self.normal_stddev.is_finite() || self.normal_stddev < 0.0 {
            return Err(RandomError::InvalidConfig(format!(
                "normal_stddev must be finite and non-negative, got {}",
                self.normal_stddev
            )));
        }

        if !(0.0..=1.0).contains(&self.bernoulli_probability) {
            return Err(RandomError::InvalidConfig(format!(
                "bernoulli_probability must be within [0, 1], got {}",
                self.bernoulli_probability
            )));
        }

        Ok(())
    }

    /// Normal options for the configured mean/stddev, clamped at 3 sigma
    pub fn normal_options(&self) -> NormalOptions {
        NormalOptions::new(self.normal_mean, self.normal_stddev)
    }
}

/// Parameters of a (possibly clamped) normal draw
///
/// When `clamp` is set, draws outside `[min, max]` are rejected and redrawn.
/// With `calculate_min_max` the bounds are recomputed as `mean ∓ 3·stddev`
/// and the stored `min`/`max` are ignored.
///
/// # Example
/// ```
/// use random_source_core_rs::config::NormalOptions;
///
/// let options = NormalOptions::bounded(5.0, 2.0, 0.0, 10.0);
/// assert_eq!(options.bounds(), (0.0, 10.0));
///
/// let auto = NormalOptions::new(5.0, 2.0);
/// assert_eq!(auto.bounds(), (-1.0, 11.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalOptions {
    pub mean: f32,
    pub stddev: f32,
    pub clamp: bool,
    pub calculate_min_max: bool,
    pub min: f32,
    pub max: f32,
}

impl Default for NormalOptions {
    fn default() -> Self {
        Self {
            mean: DEFAULT_NOR_MEAN,
            stddev: DEFAULT_NOR_STDDEV,
            clamp: true,
            calculate_min_max: true,
            min: DEFAULT_NOR_MIN,
            max: DEFAULT_NOR_MAX,
        }
    }
}

impl NormalOptions {
    /// Clamped at `mean ∓ 3·stddev`
    pub fn new(mean: f32, stddev: f32) -> Self {
        Self {
            mean,
            stddev,
            clamp: true,
            calculate_min_max: true,
            min: normal_min(mean, stddev),
            max: normal_max(mean, stddev),
        }
    }

    /// Clamped at caller-supplied bounds
    pub fn bounded(mean: f32, stddev: f32, min: f32, max: f32) -> Self {
        Self {
            mean,
            stddev,
            clamp: true,
            calculate_min_max: false,
            min,
            max,
        }
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Bounds the rejection loop checks against
    pub fn bounds(&self) -> (f32, f32) {
        if self.calculate_min_max {
            (
                normal_min(self.mean, self.stddev),
                normal_max(self.mean, self.stddev),
            )
        } else {
            (self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let defaults = SamplingDefaults::default();
        assert_eq!(defaults.uniform_int_min, 0);
        assert_eq!(defaults.uniform_int_max, 10000);
        assert_eq!(defaults.uniform_float_min, 0.0);
        assert_eq!(defaults.uniform_float_max, 1.0);
        assert_eq!(defaults.normal_mean, 0.0);
        assert_eq!(defaults.normal_stddev, 0.33333);
        assert_eq!(defaults.bernoulli_probability, 0.5);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_default_normal_options_match_constants() {
        let options = NormalOptions::default();
        assert!(options.clamp);
        assert!(options.calculate_min_max);
        assert_eq!(options.min, DEFAULT_NOR_MIN);
        assert_eq!(options.max, DEFAULT_NOR_MAX);
        assert_eq!(options, SamplingDefaults::default().normal_options());
    }

    #[test]
    fn test_auto_bounds_ignore_stored_min_max() {
        let mut options = NormalOptions::new(5.0, 2.0);
        options.min = 100.0;
        options.max = 200.0;
        assert_eq!(options.bounds(), (-1.0, 11.0));

        options.calculate_min_max = false;
        assert_eq!(options.bounds(), (100.0, 200.0));
    }

    #[test]
    fn test_with_clamp() {
        let options = NormalOptions::new(0.0, 1.0).with_clamp(false);
        assert!(!options.clamp);
        assert!(options.calculate_min_max);
    }
}
