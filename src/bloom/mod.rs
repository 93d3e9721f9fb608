//! Bloom filter with k hash probes over an m-bit array.
//!
//! Probe positions come from double hashing: two keyed SipHash-1-3
//! instantiations over the item bytes yield `h1` and `h2`, and probe `i`
//! lands at `(h1 + i*h2) mod m`. Static helpers derive the optimal bit
//! count and probe count for a target item count and false-positive
//! budget.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::error::{Error, Result};

const WORD_BITS: usize = 64;

// Distinct fixed keys for the two base hashes. Any two independent
// well-distributed keyed hashes work; indices are only required to be
// deterministic for identical item bytes and identical keys.
const H1_KEYS: (u64, u64) = (0x736f6d6570736575, 0x646f72616e646f6d);
const H2_KEYS: (u64, u64) = (0x6c7967656e657261, 0x7465646279746573);

/// Probabilistic set-membership filter over byte-string items.
///
/// Never reports a false negative: once an item is added, `contains`
/// stays true for it. False positives occur at a rate tunable via
/// [`BloomFilter::optimal_bits`] and [`BloomFilter::optimal_hashes`].
/// Items cannot be removed.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    words: Vec<u64>,
    bits: usize,
    hashes: usize,
    inserted: usize,
}

impl BloomFilter {
    /// Create a filter with `bits` addressable bits and `hashes` probes
    /// per item, all bits clear.
    pub fn new(bits: usize, hashes: usize) -> Result<Self> {
        if bits == 0 || hashes == 0 {
            return Err(Error::InvalidParameter(
                "bit count and hash count must be positive".into(),
            ));
        }
        Ok(Self {
            words: vec![0u64; (bits + WORD_BITS - 1) / WORD_BITS],
            bits,
            hashes,
            inserted: 0,
        })
    }

    /// Optimal bit count for `items` insertions at a target
    /// false-positive rate: `ceil(-n * ln(p) / ln(2)^2)`, at least 1.
    pub fn optimal_bits(items: usize, target_fp: f64) -> Result<usize> {
        if items == 0 {
            return Err(Error::InvalidParameter(
                "item count must be positive".into(),
            ));
        }
        if !(target_fp > 0.0 && target_fp < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "target false-positive rate must be in (0, 1), got {target_fp}"
            )));
        }
        let m = -(items as f64) * target_fp.ln() / std::f64::consts::LN_2.powi(2);
        Ok((m.ceil() as usize).max(1))
    }

    /// Optimal probe count for a filter of `bits` bits expected to hold
    /// `items` items: `round((m / n) * ln 2)`, at least 1.
    pub fn optimal_hashes(bits: usize, items: usize) -> Result<usize> {
        if bits == 0 || items == 0 {
            return Err(Error::InvalidParameter(
                "bit count and item count must be positive".into(),
            ));
        }
        let k = (bits as f64 / items as f64) * std::f64::consts::LN_2;
        Ok((k.round() as usize).max(1))
    }

    /// Number of addressable bits (m).
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of probes per item (k).
    pub fn hashes(&self) -> usize {
        self.hashes
    }

    /// Number of `add` calls so far.
    pub fn count(&self) -> usize {
        self.inserted
    }

    fn base_hashes(item: &[u8]) -> (u64, u64) {
        let mut h1 = SipHasher13::new_with_keys(H1_KEYS.0, H1_KEYS.1);
        h1.write(item);
        let mut h2 = SipHasher13::new_with_keys(H2_KEYS.0, H2_KEYS.1);
        h2.write(item);
        (h1.finish(), h2.finish())
    }

    fn set_bit(&mut self, idx: usize) {
        self.words[idx / WORD_BITS] |= 1u64 << (idx % WORD_BITS);
    }

    fn get_bit(&self, idx: usize) -> bool {
        self.words[idx / WORD_BITS] >> (idx % WORD_BITS) & 1 == 1
    }

    /// Record an item: sets all k probe bits. Empty items are legal.
    pub fn add(&mut self, item: &[u8]) {
        let (h1, h2) = Self::base_hashes(item);
        let m = self.bits as u64;
        for i in 0..self.hashes as u64 {
            let idx = (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize;
            self.set_bit(idx);
        }
        self.inserted += 1;
    }

    /// True iff all k probe bits for `item` are set. A `true` answer may
    /// be a false positive; `false` is always definitive.
    pub fn contains(&self, item: &[u8]) -> bool {
        let (h1, h2) = Self::base_hashes(item);
        let m = self.bits as u64;
        (0..self.hashes as u64)
            .all(|i| self.get_bit((h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize))
    }

    /// Theoretical false-positive rate `(1 - e^{-kn/m})^k` after `n`
    /// insertions, `n` defaulting to the number of `add` calls so far.
    /// Usable for planning before any item is added.
    pub fn estimate_fp_rate(&self, inserted: Option<usize>) -> f64 {
        let n = inserted.unwrap_or(self.inserted) as f64;
        let m = self.bits as f64;
        let k = self.hashes as f64;
        (1.0 - (-(k * n) / m).exp()).powf(k)
    }
}

/// Measure the false-positive rate empirically: add every `present`
/// item, then count how many `absent` items probe positive.
pub fn empirical_false_positive_rate(
    filter: &mut BloomFilter,
    present: &[Vec<u8>],
    absent: &[Vec<u8>],
) -> f64 {
    for item in present {
        filter.add(item);
    }
    let false_positives = absent.iter().filter(|item| filter.contains(item)).count();
    false_positives as f64 / absent.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(BloomFilter::new(0, 3).is_err());
        assert!(BloomFilter::new(1024, 0).is_err());
    }

    #[test]
    fn test_optimal_bits_known_values() {
        // 1000 items at 1% -> 9586 bits, 7 hashes
        let m = BloomFilter::optimal_bits(1000, 0.01).unwrap();
        assert_eq!(m, 9586);
        let k = BloomFilter::optimal_hashes(m, 1000).unwrap();
        assert_eq!(k, 7);
    }

    #[test]
    fn test_optimal_params_reject_out_of_range() {
        assert!(BloomFilter::optimal_bits(0, 0.01).is_err());
        assert!(BloomFilter::optimal_bits(1000, 0.0).is_err());
        assert!(BloomFilter::optimal_bits(1000, 1.0).is_err());
        assert!(BloomFilter::optimal_hashes(0, 1000).is_err());
        assert!(BloomFilter::optimal_hashes(1024, 0).is_err());
    }

    #[test]
    fn test_optimal_params_floor_at_one() {
        // Absurdly loose budget still yields usable parameters.
        assert!(BloomFilter::optimal_bits(1, 0.999).unwrap() >= 1);
        assert!(BloomFilter::optimal_hashes(1, 1_000_000).unwrap() >= 1);
    }

    #[test]
    fn test_empty_item_is_legal() {
        let mut filter = BloomFilter::new(64, 2).unwrap();
        assert!(!filter.contains(b""));
        filter.add(b"");
        assert!(filter.contains(b""));
    }

    #[test]
    fn test_single_bit_filter_degrades() {
        // With one bit every item aliases to index 0.
        let mut filter = BloomFilter::new(1, 1).unwrap();
        filter.add(b"anything");
        assert!(filter.contains(b"something else entirely"));
    }

    #[test]
    fn test_count_tracks_adds() {
        let mut filter = BloomFilter::new(256, 3).unwrap();
        assert_eq!(filter.count(), 0);
        filter.add(b"a");
        filter.add(b"a");
        assert_eq!(filter.count(), 2);
    }

    #[test]
    fn test_estimate_defaults_to_internal_count() {
        let mut filter = BloomFilter::new(1024, 3).unwrap();
        assert_eq!(filter.estimate_fp_rate(None), 0.0);
        filter.add(b"a");
        filter.add(b"b");
        let implicit = filter.estimate_fp_rate(None);
        let explicit = filter.estimate_fp_rate(Some(2));
        assert_eq!(implicit, explicit);
        assert!(implicit > 0.0 && implicit < 1.0);
    }

    #[test]
    fn test_empirical_rate_bounded() {
        let mut filter = BloomFilter::new(4096, 3).unwrap();
        let present: Vec<Vec<u8>> = vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];
        let absent: Vec<Vec<u8>> = vec![b"x".to_vec(), b"y".to_vec(), b"z".to_vec()];
        let rate = empirical_false_positive_rate(&mut filter, &present, &absent);
        assert!((0.0..=1.0).contains(&rate));
        assert_eq!(filter.count(), 3);
    }
}
