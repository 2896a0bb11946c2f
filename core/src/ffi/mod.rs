//! Python bindings (feature `pyo3`)
//!
//! Contract violations that would panic in Rust (empty ranges, overflowing
//! weights) are checked here first and raised as `ValueError`.

pub mod generator;

pub use generator::{py_update_running_mean, PyGenerator};
