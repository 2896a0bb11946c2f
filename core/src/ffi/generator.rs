//! PyO3 wrapper for Arc4Rng

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::checkpoint::GeneratorCheckpoint;
use crate::config::{GeneratorConfig, DEFAULT_DISCARD};
use crate::rng::{Arc4Rng, DeterministicRng};
use crate::sampling::weighted_random_index;
use crate::stats::update_running_mean;

/// Python wrapper for a seeded generator
///
/// # Example (from Python)
///
/// ```python
/// from seedkit_core import Generator
///
/// rng = Generator(9281)
/// roll = rng.range(1, 7)
/// pick = rng.weighted_index([1, 3])
/// saved = rng.checkpoint_json()
/// resumed = Generator.from_checkpoint_json(saved)
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Arc4Rng,
}

#[pymethods]
impl PyGenerator {
    #[new]
    #[pyo3(signature = (seed, discard = None))]
    fn new(seed: u64, discard: Option<usize>) -> PyResult<Self> {
        let config = GeneratorConfig {
            seed,
            discard: discard.unwrap_or(DEFAULT_DISCARD),
        };
        let inner =
            Arc4Rng::with_config(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyGenerator { inner })
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Float in [0.0, 1.0)
    fn next_float(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Integer in [low, high)
    fn range(&mut self, low: i64, high: i64) -> PyResult<i64> {
        if low >= high {
            return Err(PyValueError::new_err(format!(
                "empty range: low ({}) must be less than high ({})",
                low, high
            )));
        }
        Ok(self.inner.uniform_in_range(low..high))
    }

    /// Index chosen proportionally to `weights`, or None if all are zero
    fn weighted_index(&mut self, weights: Vec<u64>) -> PyResult<Option<usize>> {
        let overflow = weights
            .iter()
            .try_fold(0u64, |total, &w| total.checked_add(w))
            .is_none();
        if overflow {
            return Err(PyValueError::new_err("total weight overflows u64"));
        }
        Ok(weighted_random_index(&mut self.inner, &weights))
    }

    fn checkpoint_json(&self) -> PyResult<String> {
        self.inner
            .checkpoint()
            .to_json()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    #[staticmethod]
    fn from_checkpoint_json(json: &str) -> PyResult<Self> {
        let checkpoint =
            GeneratorCheckpoint::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let inner =
            Arc4Rng::restore(&checkpoint).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyGenerator { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "Generator(seed={}, bytes_drawn={})",
            self.inner.seed(),
            self.inner.bytes_drawn()
        )
    }
}

/// Mean over `count + 1` observations after folding in `value`
#[pyfunction]
#[pyo3(name = "update_running_mean")]
pub fn py_update_running_mean(mean: f64, count: usize, value: f64) -> f64 {
    update_running_mean(mean, count, value)
}
