//! Uniform sampling over `Range` and `RangeInclusive`.
//!
//! Integers are sampled by mapping the range onto an unsigned offset and
//! drawing that offset with `uniform_below`, so every value is equally
//! likely. Floats scale a unit draw and never escape the requested bounds.

use std::ops::{Range, RangeInclusive};

use super::DeterministicRng;

/// A range that `DeterministicRng::uniform_in_range` can draw from
pub trait SampleRange<T> {
    /// Draw one value from this range
    ///
    /// # Panics
    /// Panics if the range is empty
    fn sample_single<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> T;

    /// True when no value lies inside the range
    fn is_empty_range(&self) -> bool;
}

macro_rules! impl_int_range {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl SampleRange<$ty> for Range<$ty> {
            fn sample_single<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> $ty {
                assert!(!self.is_empty_range(), "cannot sample empty range");

                let span = (self.end as $unsigned).wrapping_sub(self.start as $unsigned) as u64;
                let offset = rng.uniform_below(span) as $unsigned;
                (self.start as $unsigned).wrapping_add(offset) as $ty
            }

            fn is_empty_range(&self) -> bool {
                self.start >= self.end
            }
        }

        impl SampleRange<$ty> for RangeInclusive<$ty> {
            fn sample_single<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> $ty {
                assert!(!self.is_empty_range(), "cannot sample empty range");
                let (low, high) = self.into_inner();

                let span = (high as $unsigned).wrapping_sub(low as $unsigned) as u64;
                // span + 1 only overflows for the full 64-bit domain
                let offset = match span.checked_add(1) {
                    Some(bound) => rng.uniform_below(bound),
                    None => rng.next_u64(),
                } as $unsigned;
                (low as $unsigned).wrapping_add(offset) as $ty
            }

            fn is_empty_range(&self) -> bool {
                self.start() > self.end()
            }
        }
    )*};
}

impl_int_range! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}

macro_rules! impl_float_range {
    ($($ty:ty => $unit:ident, $unit_inclusive:ident, $lerp:ident),* $(,)?) => {$(
        impl SampleRange<$ty> for Range<$ty> {
            fn sample_single<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> $ty {
                let (low, high) = (self.start, self.end);
                assert!(low.is_finite() && high.is_finite(), "range bounds must be finite");
                assert!(!self.is_empty_range(), "cannot sample empty range");

                loop {
                    // Rounding can land exactly on `high`; redraw when it does
                    let value = $lerp(low, high, $unit(rng));
                    if value < high {
                        return value;
                    }
                }
            }

            fn is_empty_range(&self) -> bool {
                !(self.start < self.end)
            }
        }

        impl SampleRange<$ty> for RangeInclusive<$ty> {
            fn sample_single<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> $ty {
                assert!(
                    self.start().is_finite() && self.end().is_finite(),
                    "range bounds must be finite"
                );
                assert!(!self.is_empty_range(), "cannot sample empty range");

                let (low, high) = self.into_inner();
                $lerp(low, high, $unit_inclusive(rng)).clamp(low, high)
            }

            fn is_empty_range(&self) -> bool {
                !(self.start() <= self.end())
            }
        }
    )*};
}

/// `low + (high - low) * unit`, halving both bounds when the width
/// overflows (e.g. `f64::MIN..f64::MAX`)
fn lerp_f64(low: f64, high: f64, unit: f64) -> f64 {
    let scale = high - low;
    if scale.is_finite() {
        low + scale * unit
    } else {
        let half_low = low / 2.0;
        (half_low + (high / 2.0 - half_low) * unit) * 2.0
    }
}

fn lerp_f32(low: f32, high: f32, unit: f32) -> f32 {
    let scale = high - low;
    if scale.is_finite() {
        low + scale * unit
    } else {
        let half_low = low / 2.0;
        (half_low + (high / 2.0 - half_low) * unit) * 2.0
    }
}

fn unit_f64<R: DeterministicRng + ?Sized>(rng: &mut R) -> f64 {
    rng.next_f64()
}

/// [0.0, 1.0] with both endpoints reachable
fn unit_inclusive_f64<R: DeterministicRng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 / ((1u64 << 53) - 1) as f64
}

fn unit_f32<R: DeterministicRng + ?Sized>(rng: &mut R) -> f32 {
    rng.next_f32()
}

fn unit_inclusive_f32<R: DeterministicRng + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() >> 8) as f32 / ((1u32 << 24) - 1) as f32
}

impl_float_range! {
    f64 => unit_f64, unit_inclusive_f64, lerp_f64,
    f32 => unit_f32, unit_inclusive_f32, lerp_f32,
}
