//! Weighted categorical sampling.
//!
//! One table type serves every weighted draw in the generator: payment
//! method, amount tier and hour of day. A table is validated once when it
//! is built, so sampling itself cannot fail.

use crate::{
    error::{GenError, GenResult},
    rng::GenRng,
};

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Build a table from (value, weight) pairs.
    ///
    /// `name` only appears in error messages. Rejects an empty table,
    /// negative or non-finite weights, and a zero total.
    pub fn new(name: &'static str, entries: Vec<(T, f64)>) -> GenResult<Self> {
        if entries.is_empty() {
            return Err(GenError::InvalidWeights {
                table: name,
                reason: "table is empty".into(),
            });
        }
        if let Some((_, w)) = entries.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(GenError::InvalidWeights {
                table: name,
                reason: format!("weight {w} is not a finite non-negative number"),
            });
        }
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(GenError::InvalidWeights {
                table: name,
                reason: "weights sum to zero".into(),
            });
        }
        Ok(Self { entries, total })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(T, f64)> {
        self.entries.iter()
    }

    /// Share of the total weight carried by entry `i`.
    pub fn share(&self, i: usize) -> f64 {
        self.entries[i].1 / self.total
    }

    /// Draw one value. Long-run frequency of each entry converges to
    /// weight / total.
    pub fn sample(&self, rng: &mut GenRng) -> &T {
        let r = rng.next_f64() * self.total;
        self.pick(r)
    }

    /// Walk cumulative weights and return the first entry covering `r`.
    /// Zero-weight entries cover nothing, even at `r == 0`.
    /// Falls back to the last entry if float accumulation undershoots.
    fn pick(&self, r: f64) -> &T {
        let mut upto = 0.0;
        for (value, weight) in &self.entries {
            if *weight > 0.0 && upto + weight >= r {
                return value;
            }
            upto += weight;
        }
        &self.entries[self.entries.len() - 1].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightedTable<char> {
        WeightedTable::new("abc", vec![('a', 1.0), ('b', 2.0), ('c', 1.0)]).unwrap()
    }

    #[test]
    fn pick_uses_inclusive_cumulative_bounds() {
        let t = abc();
        assert_eq!(*t.pick(0.0), 'a');
        assert_eq!(*t.pick(1.0), 'a');
        assert_eq!(*t.pick(1.0001), 'b');
        assert_eq!(*t.pick(3.0), 'b');
        assert_eq!(*t.pick(3.5), 'c');
    }

    #[test]
    fn pick_past_total_falls_back_to_last() {
        let t = abc();
        assert_eq!(*t.pick(4.0 + 1e-9), 'c');
        assert_eq!(*t.pick(f64::MAX), 'c');
    }

    #[test]
    fn zero_weight_entry_not_picked_at_zero() {
        let t = WeightedTable::new("z", vec![("never", 0.0), ("always", 5.0)]).unwrap();
        assert_eq!(*t.pick(0.0), "always");
    }

    #[test]
    fn zero_weight_entry_is_never_sampled() {
        let t = WeightedTable::new("z", vec![("never", 0.0), ("always", 5.0)]).unwrap();
        let mut rng = GenRng::seeded(1);
        for _ in 0..10_000 {
            assert_eq!(*t.sample(&mut rng), "always");
        }
    }

    #[test]
    fn frequencies_converge_to_shares() {
        let t = abc();
        let mut rng = GenRng::seeded(42);
        let n = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            match t.sample(&mut rng) {
                'a' => counts[0] += 1,
                'b' => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }
        for (i, c) in counts.iter().enumerate() {
            let observed = *c as f64 / n as f64;
            assert!(
                (observed - t.share(i)).abs() < 0.01,
                "entry {i}: observed {observed:.4}, expected {:.4}",
                t.share(i)
            );
        }
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(WeightedTable::<u8>::new("empty", vec![]).is_err());
        assert!(WeightedTable::new("neg", vec![(1, -1.0), (2, 3.0)]).is_err());
        assert!(WeightedTable::new("nan", vec![(1, f64::NAN)]).is_err());
        assert!(WeightedTable::new("zero", vec![(1, 0.0), (2, 0.0)]).is_err());
    }
}
