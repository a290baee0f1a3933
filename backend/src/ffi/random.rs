//! PyO3 wrapper for RandomSource
//!
//! # Example (from Python)
//!
//! ```python
//! from random_source_core_rs import Random
//!
//! random = Random(12345)
//! roll = random.range_int(1, 6)
//! height = random.normal_range_min_max(150.0, 200.0)
//!
//! saved = random.snapshot()
//! restored = Random.restore(saved)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{
    NormalOptions, DEFAULT_BER_PERC, DEFAULT_NOR_MAX, DEFAULT_NOR_MEAN, DEFAULT_NOR_MIN,
    DEFAULT_NOR_STDDEV, DEFAULT_UNI_MAX_F, DEFAULT_UNI_MAX_I, DEFAULT_UNI_MIN_F, DEFAULT_UNI_MIN_I,
};
use crate::error::RandomError;
use crate::rng::RandomSource;

fn to_py_err(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Rust RandomSource
#[pyclass(name = "Random")]
pub struct PyRandom {
    inner: RandomSource,
}

#[pymethods]
impl PyRandom {
    /// Create a source; without a seed the wall clock is used
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u32>) -> Self {
        let inner = match seed {
            Some(seed) => RandomSource::new(seed),
            None => RandomSource::from_time(),
        };
        PyRandom { inner }
    }

    fn use_random_seed(&mut self) {
        self.inner.use_random_seed();
    }

    fn use_default_seed(&mut self) {
        self.inner.use_default_seed();
    }

    #[getter]
    fn seed(&self) -> u32 {
        self.inner.seed()
    }

    #[setter]
    fn set_seed(&mut self, seed: u32) {
        self.inner.set_seed(seed);
    }

    #[staticmethod]
    fn random_seed() -> u32 {
        RandomSource::random_seed()
    }

    #[pyo3(signature = (min=DEFAULT_UNI_MIN_I, max=DEFAULT_UNI_MAX_I))]
    fn range_int(&mut self, min: i32, max: i32) -> i32 {
        self.inner.range_int(min, max)
    }

    #[pyo3(signature = (min=DEFAULT_UNI_MIN_F, max=DEFAULT_UNI_MAX_F))]
    fn range_float(&mut self, min: f32, max: f32) -> PyResult<f32> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PyValueError::new_err("range bounds must be finite"));
        }
        Ok(self.inner.range_float(min, max))
    }

    #[pyo3(signature = (
        mean=DEFAULT_NOR_MEAN,
        stddev=DEFAULT_NOR_STDDEV,
        is_clamp=true,
        calculate_min_max=true,
        min=DEFAULT_NOR_MIN,
        max=DEFAULT_NOR_MAX
    ))]
    fn normal_range(
        &mut self,
        mean: f32,
        stddev: f32,
        is_clamp: bool,
        calculate_min_max: bool,
        min: f32,
        max: f32,
    ) -> PyResult<f32> {
        let options = NormalOptions {
            mean,
            stddev,
            clamp: is_clamp,
            calculate_min_max,
            min,
            max,
        };
        self.inner.normal_range(&options).map_err(to_py_err)
    }

    #[pyo3(signature = (min=DEFAULT_NOR_MIN, max=DEFAULT_NOR_MAX))]
    fn normal_range_min_max(&mut self, min: f32, max: f32) -> PyResult<f32> {
        self.inner.normal_range_min_max(min, max).map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (stddev=DEFAULT_NOR_STDDEV))]
    fn normal_boundary(stddev: f32) -> f32 {
        RandomSource::normal_boundary(stddev)
    }

    #[staticmethod]
    #[pyo3(signature = (mean=DEFAULT_NOR_MEAN, stddev=DEFAULT_NOR_STDDEV))]
    fn normal_min(mean: f32, stddev: f32) -> f32 {
        RandomSource::normal_min(mean, stddev)
    }

    #[staticmethod]
    #[pyo3(signature = (mean=DEFAULT_NOR_MEAN, stddev=DEFAULT_NOR_STDDEV))]
    fn normal_max(mean: f32, stddev: f32) -> f32 {
        RandomSource::normal_max(mean, stddev)
    }

    #[pyo3(signature = (probability=DEFAULT_BER_PERC))]
    fn coin_toss(&mut self, probability: f32) -> PyResult<bool> {
        self.inner.coin_toss(probability).map_err(to_py_err)
    }

    fn discrete_int(&mut self, weights: Vec<f64>) -> PyResult<usize> {
        self.inner.discrete_int(&weights).map_err(to_py_err)
    }

    /// Serialize the full source (seed, engine, defaults) to JSON
    fn snapshot(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| {
            PyValueError::new_err(format!("Failed to serialize random source: {}", e))
        })
    }

    /// Rebuild a source from `snapshot()` output
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let inner: RandomSource = serde_json::from_str(json).map_err(|e| {
            PyValueError::new_err(format!("Failed to restore random source: {}", e))
        })?;
        Ok(PyRandom { inner })
    }
}
