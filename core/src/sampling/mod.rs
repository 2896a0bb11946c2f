//! Sampling over collections
//!
//! Every function takes the generator by `&mut` and consumes draws from it;
//! the same generator state and element order always yield the same result.
//!
//! - **weighted**: integer-weighted picks (linear cumulative scan)
//! - **collection**: uniform element choice and shuffling

mod collection;
mod weighted;

pub use collection::{random_element, shuffle};
pub use weighted::{weighted_random_element, weighted_random_elements, weighted_random_index};
