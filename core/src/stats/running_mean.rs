//! Incremental (online) mean
//!
//! `mean(n+1) = mean(n) + (value - mean(n)) / (n+1)`
//!
//! The mean is never recomputed from a sum, so long streams do not
//! accumulate a large intermediate total.

use std::ops::{Add, Div, Sub};

use serde::{Deserialize, Serialize};

/// Floating point types the running mean operates on
pub trait MeanScalar:
    Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Div<Output = Self>
{
    const ZERO: Self;

    /// Observation count as this float type
    fn from_count(count: usize) -> Self;
}

impl MeanScalar for f32 {
    const ZERO: Self = 0.0;

    fn from_count(count: usize) -> Self {
        count as f32
    }
}

impl MeanScalar for f64 {
    const ZERO: Self = 0.0;

    fn from_count(count: usize) -> Self {
        count as f64
    }
}

/// Fold `new_value` into a mean over `count_so_far` observations
///
/// Returns the mean over `count_so_far + 1` observations. With
/// `count_so_far == 0` the result is `new_value`.
///
/// # Example
/// ```
/// use seedkit_core::update_running_mean;
///
/// // mean of [1, 2, 3] is 2.0; adding 5 gives 11 / 4
/// let mean = update_running_mean(2.0f64, 3, 5.0);
/// assert_eq!(mean, 2.75);
/// ```
pub fn update_running_mean<F: MeanScalar>(mean_so_far: F, count_so_far: usize, new_value: F) -> F {
    mean_so_far + (new_value - mean_so_far) / F::from_count(count_so_far + 1)
}

/// Direct arithmetic mean, `None` for an empty slice
pub fn arithmetic_mean<F: MeanScalar>(values: &[F]) -> Option<F> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(F::ZERO, |acc, &v| acc + v);
    Some(sum / F::from_count(values.len()))
}

/// Mean paired with the number of observations folded into it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningMean<F> {
    mean: F,
    count: usize,
}

impl<F: MeanScalar> RunningMean<F> {
    pub fn new() -> Self {
        Self {
            mean: F::ZERO,
            count: 0,
        }
    }

    /// Resume from a previously observed mean and count
    pub fn from_parts(mean: F, count: usize) -> Self {
        Self { mean, count }
    }

    pub fn push(&mut self, value: F) {
        self.mean = update_running_mean(self.mean, self.count, value);
        self.count += 1;
    }

    /// `None` until at least one value has been pushed
    pub fn mean(&self) -> Option<F> {
        (self.count > 0).then_some(self.mean)
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<F: MeanScalar> Default for RunningMean<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: MeanScalar> Extend<F> for RunningMean<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<F: MeanScalar> FromIterator<F> for RunningMean<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut running = Self::new();
        running.extend(iter);
        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_becomes_mean() {
        assert_eq!(update_running_mean(123.0f64, 0, 7.5), 7.5);
        assert_eq!(update_running_mean(0.0f32, 0, -2.0), -2.0);
    }

    #[test]
    fn test_arithmetic_mean_empty() {
        assert_eq!(arithmetic_mean::<f64>(&[]), None);
        assert_eq!(arithmetic_mean(&[1.0f32, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_accumulator_starts_empty() {
        let running = RunningMean::<f64>::default();
        assert_eq!(running.mean(), None);
        assert_eq!(running.count(), 0);
    }

    #[test]
    fn test_accumulator_from_iter() {
        let running: RunningMean<f64> = [1.0, 2.0, 3.0, 5.0].into_iter().collect();
        assert_eq!(running.count(), 4);
        assert_eq!(running.mean(), Some(2.75));
    }

    #[test]
    fn test_accumulator_resume_from_parts() {
        let mut running = RunningMean::from_parts(2.0f64, 3);
        running.push(5.0);
        assert_eq!(running.mean(), Some(2.75));
        assert_eq!(running.count(), 4);
    }
}
