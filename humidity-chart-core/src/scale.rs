use serde::{Deserialize, Serialize};

/// Affine mapping from a numeric domain interval to a pixel range interval.
/// The range may be inverted (range start > range end) for Y axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Step size for roughly `count` readable ticks across [start, stop],
/// snapped to a 1/2/5 x 10^k ladder.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start) / count.max(1) as f64;
    let power = step0.log10().floor();
    let error = step0 / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range. A zero-width domain maps
    /// everything to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Round the domain endpoints outward to readable boundaries.
    /// Endpoints only ever move outward, so no data value leaves the
    /// domain. A degenerate (zero-width) domain gets half a unit of
    /// breathing room on each side so the scale cannot collapse.
    pub fn nice(mut self, count: usize) -> Self {
        let (lo, hi) = self.domain;
        if !(hi > lo) {
            self.domain = (lo - 0.5, hi + 0.5);
            return self;
        }
        let step = tick_step(lo, hi, count);
        self.domain = ((lo / step).floor() * step, (hi / step).ceil() * step);
        self
    }

    /// Readable tick values inside the domain, in increasing order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        if !(hi > lo) {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        let start = (lo / step).ceil();
        let stop = (hi / step).floor();
        if stop < start {
            return Vec::new();
        }
        let n = (stop - start) as usize + 1;
        (0..n).map(|i| (start + i as f64) * step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_only_expands_outward() {
        let s = LinearScale::new((0.37, 0.93), (0.0, 540.0)).nice(10);
        let (lo, hi) = s.domain();
        assert!(lo <= 0.37);
        assert!(hi >= 0.93);
    }

    #[test]
    fn nice_rounds_to_readable_boundaries() {
        let s = LinearScale::new((0.37, 0.93), (0.0, 540.0)).nice(10);
        // step for this span is 0.05; endpoints land on multiples of it
        let (lo, hi) = s.domain();
        assert!((lo / 0.05 - (lo / 0.05).round()).abs() < 1e-9);
        assert!((hi / 0.05 - (hi / 0.05).round()).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_gets_nonzero_width() {
        let s = LinearScale::new((45.0, 45.0), (0.0, 540.0)).nice(10);
        let (lo, hi) = s.domain();
        assert!(hi > lo);
        assert!(lo < 45.0 && 45.0 < hi);
    }

    #[test]
    fn scale_maps_endpoints_to_range() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 540.0));
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(1.0), 540.0);
        assert_eq!(s.scale(0.5), 270.0);
    }

    #[test]
    fn inverted_range_decreases_with_value() {
        // Y scale: larger counts draw taller bars upward from the baseline
        let s = LinearScale::new((0.0, 10.0), (280.0, 0.0));
        assert_eq!(s.scale(0.0), 280.0);
        assert_eq!(s.scale(10.0), 0.0);
        assert!(s.scale(3.0) > s.scale(7.0));
    }

    #[test]
    fn ticks_are_increasing_and_inside_domain() {
        let s = LinearScale::new((0.35, 0.95), (0.0, 540.0)).nice(10);
        let (lo, hi) = s.domain();
        let ticks = s.ticks(10);
        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(ticks[0] >= lo - 1e-9);
        assert!(*ticks.last().unwrap() <= hi + 1e-9);
    }
}
