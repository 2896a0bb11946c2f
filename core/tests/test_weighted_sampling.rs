//! Weighted sampling - distribution and edge cases
//!
//! Critical invariants tested:
//! - Selection frequency proportional to weight
//! - Empty / all-zero collections yield absence, not a panic
//! - Same seed + same element order → same picks

use seedkit_core::{
    weighted_random_element, weighted_random_elements, weighted_random_index, Arc4Rng,
};

#[derive(Debug, Clone, PartialEq)]
struct Tile {
    name: &'static str,
    weight: u64,
}

fn tiles() -> Vec<Tile> {
    vec![
        Tile { name: "grass", weight: 6 },
        Tile { name: "water", weight: 3 },
        Tile { name: "void", weight: 0 },
        Tile { name: "rock", weight: 1 },
    ]
}

// ============================================================================
// Distribution
// ============================================================================

#[test]
fn test_one_to_three_ratio() {
    let mut rng = Arc4Rng::new(9281);
    let elements = ["light", "heavy"];
    let weights = [1u64, 3];

    let mut heavy = 0u32;
    let draws = 100_000;
    for _ in 0..draws {
        let pick = weighted_random_index(&mut rng, &weights).unwrap();
        if elements[pick] == "heavy" {
            heavy += 1;
        }
    }

    let light = draws - heavy;
    let ratio = heavy as f64 / light as f64;
    assert!(
        (ratio - 3.0).abs() < 0.15,
        "Expected ~3:1 heavy:light, got {} ({} vs {})",
        ratio,
        heavy,
        light
    );
}

#[test]
fn test_multi_draw_frequencies_track_weights() {
    let mut rng = Arc4Rng::new(2024);
    let tiles = tiles();

    let picks = weighted_random_elements(&mut rng, &tiles, |t| t.weight, 50_000).unwrap();
    assert_eq!(picks.len(), 50_000);

    let count = |name: &str| picks.iter().filter(|t| t.name == name).count() as f64 / 50_000.0;
    assert!((count("grass") - 0.6).abs() < 0.02);
    assert!((count("water") - 0.3).abs() < 0.02);
    assert!((count("rock") - 0.1).abs() < 0.02);
    assert_eq!(count("void"), 0.0, "Zero-weight tile was selected");
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_collection_is_absent() {
    let mut rng = Arc4Rng::new(1);
    let empty: Vec<Tile> = Vec::new();

    assert!(weighted_random_element(&mut rng, &empty, |t| t.weight).is_none());
    assert!(weighted_random_elements(&mut rng, &empty, |t| t.weight, 5).is_none());
}

#[test]
fn test_all_zero_weights_are_absent() {
    let mut rng = Arc4Rng::new(1);
    let zeros = vec![
        Tile { name: "a", weight: 0 },
        Tile { name: "b", weight: 0 },
    ];

    assert!(weighted_random_element(&mut rng, &zeros, |t| t.weight).is_none());
    assert!(weighted_random_elements(&mut rng, &zeros, |t| t.weight, 5).is_none());
}

#[test]
fn test_single_positive_element_always_chosen() {
    let mut rng = Arc4Rng::new(1);
    let only = vec![Tile { name: "only", weight: 7 }];

    for _ in 0..1000 {
        let pick = weighted_random_element(&mut rng, &only, |t| t.weight).unwrap();
        assert_eq!(pick.name, "only");
    }
}

#[test]
fn test_single_positive_among_zeros() {
    let mut rng = Arc4Rng::new(99);
    let weights = [0u64, 0, 5, 0];

    for _ in 0..1000 {
        assert_eq!(weighted_random_index(&mut rng, &weights), Some(2));
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_picks() {
    let tiles = tiles();
    let run = || {
        let mut rng = Arc4Rng::new(555);
        weighted_random_elements(&mut rng, &tiles, |t| t.weight, 200)
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_order_changes_winner_not_distribution() {
    let forward = [1u64, 1, 2];
    let backward = [2u64, 1, 1];

    let mut rng = Arc4Rng::new(8);
    let mut forward_heavy = 0;
    for _ in 0..40_000 {
        if weighted_random_index(&mut rng, &forward) == Some(2) {
            forward_heavy += 1;
        }
    }

    let mut rng = Arc4Rng::new(8);
    let mut backward_heavy = 0;
    for _ in 0..40_000 {
        if weighted_random_index(&mut rng, &backward) == Some(0) {
            backward_heavy += 1;
        }
    }

    let f = forward_heavy as f64 / 40_000.0;
    let b = backward_heavy as f64 / 40_000.0;
    assert!((f - 0.5).abs() < 0.02);
    assert!((b - 0.5).abs() < 0.02);
}
