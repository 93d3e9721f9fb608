//! Shared helpers for the demo drivers and tests.

use rand::Rng;

/// Number of positions where two equal-length vectors differ.
pub fn hamming_distance(a: &[f64], b: &[f64]) -> usize {
    assert_eq!(a.len(), b.len(), "vectors must have same length");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Generate `count` random bipolar patterns of `units` values each.
pub fn random_bipolar_patterns(count: usize, units: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| {
            (0..units)
                .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
                .collect()
        })
        .collect()
}

/// Generate `count` random byte strings of `len` bytes each.
pub fn random_items(count: usize, len: usize, rng: &mut impl Rng) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let mut item = vec![0u8; len];
            rng.fill_bytes(&mut item);
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hamming_distance() {
        let a = [1.0, -1.0, 1.0, -1.0];
        let b = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(hamming_distance(&a, &a), 0);
        assert_eq!(hamming_distance(&a, &b), 2);
    }

    #[test]
    fn test_random_patterns_are_bipolar() {
        let mut rng = StdRng::seed_from_u64(3);
        let patterns = random_bipolar_patterns(5, 32, &mut rng);
        assert_eq!(patterns.len(), 5);
        for p in &patterns {
            assert_eq!(p.len(), 32);
            assert!(p.iter().all(|&v| v == 1.0 || v == -1.0));
        }
    }

    #[test]
    fn test_random_items_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = random_items(4, 16, &mut rng);
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.len() == 16));
    }
}
