//! Practical bounds of a normal distribution
//!
//! 68% of values are within 1 standard deviation of the mean, 95% within 2
//! and 99.7% within 3. The "practical" outer bound used for clamping is the
//! 3-sigma distance.

/// Number of standard deviations treated as the outer bound
pub const SIGMA_BOUND: f32 = 3.0;

/// Distance from the mean to the practical outer bound (`3 * stddev`)
///
/// # Example
/// ```
/// use random_source_core_rs::rng::normal_boundary;
///
/// assert_eq!(normal_boundary(2.0), 6.0);
/// ```
pub fn normal_boundary(stddev: f32) -> f32 {
    stddev * SIGMA_BOUND
}

/// Lower practical bound: `mean - 3 * stddev`
pub fn normal_min(mean: f32, stddev: f32) -> f32 {
    mean - normal_boundary(stddev)
}

/// Upper practical bound: `mean + 3 * stddev`
pub fn normal_max(mean: f32, stddev: f32) -> f32 {
    mean + normal_boundary(stddev)
}
