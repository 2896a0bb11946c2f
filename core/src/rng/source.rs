//! The `DeterministicRng` trait shared by every generator and sampler.

use super::SampleRange;

/// Source of reproducible 64-bit draws.
///
/// Implementors supply `next_u64`; everything else is derived from it, so a
/// scripted source in tests exercises exactly the same sampling paths as
/// `Arc4Rng`.
pub trait DeterministicRng {
    /// Advance the state and return the next 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Next 32-bit value (upper half of a 64-bit draw).
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate random f64 in range [0.0, 1.0)
    fn next_f64(&mut self) -> f64 {
        // 53 bits of mantissa, divided by 2^53
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f32 in range [0.0, 1.0)
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / ((1u32 << 24) as f32))
    }

    fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }

    /// Uniform value in `[0, bound)` without modulo bias.
    ///
    /// Draws below `2^64 mod bound` are rejected so every residue is equally
    /// likely.
    ///
    /// # Panics
    /// Panics if `bound == 0`
    fn uniform_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "cannot sample empty range");

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    /// Uniform value over `range`, honoring `..` vs `..=` bounds exactly.
    ///
    /// # Panics
    /// Panics if the range is empty or a float bound is not finite
    ///
    /// # Example
    /// ```
    /// use seedkit_core::{Arc4Rng, DeterministicRng};
    ///
    /// let mut rng = Arc4Rng::new(9281);
    /// let die = rng.uniform_in_range(1..=6u32);
    /// assert!((1..=6).contains(&die));
    ///
    /// let any = rng.uniform_in_range(i64::MIN..=i64::MAX);
    /// let _ = any;
    /// ```
    fn uniform_in_range<T, S>(&mut self, range: S) -> T
    where
        S: SampleRange<T>,
    {
        range.sample_single(self)
    }
}
