//! Running statistics
//!
//! Incremental mean maintenance for streams where the history of values is
//! not retained.

mod running_mean;

pub use running_mean::{arithmetic_mean, update_running_mean, MeanScalar, RunningMean};
