use serde::{Deserialize, Serialize};

/// A contiguous humidity sub-interval [x0, x1) and the number of records
/// falling in it. The final bin of a partition is closed on both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: u64,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Partition `domain` into `bin_count` equal-width half-open intervals and
/// count the values landing in each. A value on a boundary belongs to the
/// bin starting at that boundary; the domain maximum lands in the last bin.
/// Values outside the domain are dropped (none exist after nice rounding,
/// which only expands the domain).
pub fn bin_values(values: &[f64], domain: (f64, f64), bin_count: usize) -> Vec<Bin> {
    if bin_count == 0 {
        return Vec::new();
    }
    let (lo, hi) = domain;
    let width = (hi - lo) / bin_count as f64;
    let mut counts = vec![0u64; bin_count];
    for &v in values {
        if v < lo || v > hi || !v.is_finite() {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bin {
            x0: lo + i as f64 * width,
            x1: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_partition_the_domain() {
        let bins = bin_values(&[0.4, 0.5, 0.6], (0.0, 1.2), 12);
        assert_eq!(bins.len(), 12);
        assert_eq!(bins[0].x0, 0.0);
        assert!((bins[11].x1 - 1.2).abs() < 1e-9);
        for pair in bins.windows(2) {
            assert!((pair[0].x1 - pair[1].x0).abs() < 1e-9); // contiguous
            assert!(pair[0].x0 < pair[1].x0); // increasing
        }
    }

    #[test]
    fn counts_sum_to_in_domain_records() {
        let values = [0.35, 0.41, 0.42, 0.55, 0.90, 0.93];
        let bins = bin_values(&values, (0.3, 0.95), 12);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len() as u64);
    }

    #[test]
    fn domain_maximum_lands_in_last_bin() {
        let bins = bin_values(&[1.0], (0.0, 1.0), 12);
        assert_eq!(bins[11].count, 1);
    }

    #[test]
    fn boundary_value_belongs_to_bin_starting_there() {
        // domain [0, 12), width 1: 3.0 sits on the boundary of bins 2|3
        let bins = bin_values(&[3.0], (0.0, 12.0), 12);
        assert_eq!(bins[3].count, 1);
        assert_eq!(bins[2].count, 0);
    }

    #[test]
    fn out_of_domain_values_are_dropped() {
        let bins = bin_values(&[-1.0, 0.5, 2.0], (0.0, 1.0), 12);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn zero_bins_yields_empty() {
        assert!(bin_values(&[0.5], (0.0, 1.0), 0).is_empty());
    }
}
