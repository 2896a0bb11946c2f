//! Seedkit Core - deterministic randomness for UI code
//!
//! Seeded random number generation plus the sampling and statistics helpers
//! built on top of it.
//!
//! # Architecture
//!
//! - **rng**: ARC4 keystream generator and uniform range sampling
//! - **sampling**: Weighted and uniform selection over slices, shuffling
//! - **stats**: Incremental running mean
//! - **config**: Generator configuration (seed, keystream discard)
//! - **checkpoint**: Resume a generator by reseeding and redrawing
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, across runs and architectures
//! 2. No global generator: randomness is always passed in by `&mut`
//! 3. Invalid ranges are programmer errors and panic

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod sampling;
pub mod stats;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorCheckpoint, MAX_REPLAY_BYTES};
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{derive_stream_seed, Arc4Rng, DeterministicRng, SampleRange};
pub use sampling::{
    random_element, shuffle, weighted_random_element, weighted_random_elements,
    weighted_random_index,
};
pub use stats::{arithmetic_mean, update_running_mean, MeanScalar, RunningMean};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seedkit_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::py_update_running_mean, m)?)?;
    Ok(())
}
