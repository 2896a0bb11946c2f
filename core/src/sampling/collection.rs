//! Uniform choice and shuffling over slices.

use crate::rng::DeterministicRng;

/// Uniformly chosen element, or `None` for an empty slice
pub fn random_element<'a, R, T>(rng: &mut R, elements: &'a [T]) -> Option<&'a T>
where
    R: DeterministicRng,
{
    if elements.is_empty() {
        return None;
    }
    let index = rng.uniform_below(elements.len() as u64) as usize;
    elements.get(index)
}

/// Fisher-Yates shuffle in place, walking from the back
///
/// # Example
/// ```
/// use seedkit_core::{shuffle, Arc4Rng};
///
/// let mut deck: Vec<u32> = (0..10).collect();
/// shuffle(&mut Arc4Rng::new(3), &mut deck);
///
/// let mut sorted = deck.clone();
/// sorted.sort();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>());
/// ```
pub fn shuffle<R, T>(rng: &mut R, elements: &mut [T])
where
    R: DeterministicRng,
{
    for i in (1..elements.len()).rev() {
        let j = rng.uniform_below(i as u64 + 1) as usize;
        elements.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arc4Rng;

    #[test]
    fn test_random_element_empty() {
        let mut rng = Arc4Rng::new(1);
        let empty: [i32; 0] = [];
        assert_eq!(random_element(&mut rng, &empty), None);
    }

    #[test]
    fn test_random_element_single() {
        let mut rng = Arc4Rng::new(1);
        for _ in 0..20 {
            assert_eq!(random_element(&mut rng, &["only"]), Some(&"only"));
        }
    }

    #[test]
    fn test_random_element_reaches_every_index() {
        let mut rng = Arc4Rng::new(2024);
        let items = [0usize, 1, 2, 3, 4];
        let mut seen = [false; 5];
        for _ in 0..500 {
            let item = random_element(&mut rng, &items).unwrap();
            seen[*item] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        shuffle(&mut Arc4Rng::new(11), &mut a);
        shuffle(&mut Arc4Rng::new(11), &mut b);
        assert_eq!(a, b);
        assert_ne!(a, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut rng = Arc4Rng::new(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut one = [9u8];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, [9]);
        assert_eq!(rng.bytes_drawn(), 0);
    }
}
