//! Weighted random selection
//!
//! Draws `r` uniformly from `[0, W)` where `W` is the total weight, then scans
//! the elements accumulating weight until the running sum exceeds `r`. O(n)
//! per draw, no precomputed tables.
//!
//! # Example
//!
//! ```
//! use seedkit_core::{weighted_random_element, Arc4Rng};
//!
//! let palette = [("red", 1u64), ("green", 3), ("blue", 0)];
//! let mut rng = Arc4Rng::new(42);
//!
//! let (name, _) = weighted_random_element(&mut rng, &palette, |(_, w)| *w).unwrap();
//! assert_ne!(*name, "blue");
//! ```

use crate::rng::DeterministicRng;

/// Sum of all weights
///
/// # Panics
/// Panics if the sum overflows `u64`
fn total_weight<T, F>(elements: &[T], weight_of: &F) -> u64
where
    F: Fn(&T) -> u64,
{
    elements.iter().fold(0u64, |total, element| {
        total
            .checked_add(weight_of(element))
            .unwrap_or_else(|| panic!("total weight overflows u64"))
    })
}

/// One draw against a precomputed total (must be > 0)
fn pick_index<R, T, F>(rng: &mut R, elements: &[T], weight_of: &F, total: u64) -> Option<usize>
where
    R: DeterministicRng,
    F: Fn(&T) -> u64,
{
    let target = rng.uniform_below(total);

    let mut cumulative = 0u64;
    for (index, element) in elements.iter().enumerate() {
        cumulative += weight_of(element);
        // Strict: a zero-weight element never moves `cumulative` past `target`
        if cumulative > target {
            return Some(index);
        }
    }
    None
}

/// Pick one element with probability proportional to its weight
///
/// Returns `None` when `elements` is empty or every weight is zero.
///
/// # Arguments
/// * `rng` - Generator to draw from
/// * `elements` - Candidates, in the order that defines cumulative boundaries
/// * `weight_of` - Non-negative integer weight of each element
///
/// # Panics
/// Panics if the total weight overflows `u64`
pub fn weighted_random_element<'a, R, T, F>(
    rng: &mut R,
    elements: &'a [T],
    weight_of: F,
) -> Option<&'a T>
where
    R: DeterministicRng,
    F: Fn(&T) -> u64,
{
    let total = total_weight(elements, &weight_of);
    if total == 0 {
        return None;
    }
    pick_index(rng, elements, &weight_of, total).map(|index| &elements[index])
}

/// Pick `count` elements independently (with replacement)
///
/// The total weight is computed once up front. Returns `None` if `elements`
/// is empty, if every weight is zero, or if any individual draw fails.
///
/// # Panics
/// Panics if the total weight overflows `u64`
pub fn weighted_random_elements<'a, R, T, F>(
    rng: &mut R,
    elements: &'a [T],
    weight_of: F,
    count: usize,
) -> Option<Vec<&'a T>>
where
    R: DeterministicRng,
    F: Fn(&T) -> u64,
{
    if elements.is_empty() {
        return None;
    }
    let total = total_weight(elements, &weight_of);
    if total == 0 {
        return None;
    }

    (0..count)
        .map(|_| pick_index(rng, elements, &weight_of, total).map(|index| &elements[index]))
        .collect()
}

/// Index into `weights` chosen proportionally to its value
pub fn weighted_random_index<R: DeterministicRng>(rng: &mut R, weights: &[u64]) -> Option<usize> {
    let total = total_weight(weights, &|w: &u64| *w);
    if total == 0 {
        return None;
    }
    pick_index(rng, weights, &|w: &u64| *w, total)
}
