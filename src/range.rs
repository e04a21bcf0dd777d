//! Linear remapping of scalars between two ranges
//!
//! Used to derive receptor geometry from the circle-size difficulty scalar.
//! Values outside the domain extrapolate; nothing is clamped.

use serde::{Deserialize, Serialize};

/// Remap `value` from `[domain_low, domain_high]` onto `[range_low, range_high]`
#[inline]
pub fn remap(value: f64, domain_low: f64, domain_high: f64, range_low: f64, range_high: f64) -> f64 {
    range_low + (range_high - range_low) * (value - domain_low) / (domain_high - domain_low)
}

/// A fixed linear mapping from one scalar range to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRange {
    pub domain_low: f64,
    pub domain_high: f64,
    pub range_low: f64,
    pub range_high: f64,
}

impl LinearRange {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_low: domain.0,
            domain_high: domain.1,
            range_low: range.0,
            range_high: range.1,
        }
    }

    #[inline]
    pub fn remap(&self, value: f64) -> f64 {
        remap(
            value,
            self.domain_low,
            self.domain_high,
            self.range_low,
            self.range_high,
        )
    }
}

/// Receptor width from circle size: harder maps narrower
pub const DETECTOR_WIDTH: LinearRange = LinearRange::new((1.0, 10.0), (230.0, 25.0));

/// Progress indicator fill from circle size
pub const DETECTOR_RADIUS: LinearRange = LinearRange::new((2.0, 7.0), (0.15, 0.05));

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_width_endpoints() {
        assert!(approx(DETECTOR_WIDTH.remap(1.0), 230.0));
        assert!(approx(DETECTOR_WIDTH.remap(10.0), 25.0));
    }

    #[test]
    fn test_radius_endpoints() {
        assert!(approx(DETECTOR_RADIUS.remap(2.0), 0.15));
        assert!(approx(DETECTOR_RADIUS.remap(7.0), 0.05));
    }

    #[test]
    fn test_extrapolates_outside_domain() {
        // One domain step past the high end keeps the same slope
        let slope = (25.0 - 230.0) / 9.0;
        assert!(approx(DETECTOR_WIDTH.remap(11.0), 25.0 + slope));
        assert!(approx(DETECTOR_WIDTH.remap(0.0), 230.0 - slope));
        assert!(DETECTOR_RADIUS.remap(12.0) < 0.0);
    }

    #[test]
    fn test_free_fn_matches_struct() {
        assert!(approx(remap(5.5, 1.0, 10.0, 230.0, 25.0), DETECTOR_WIDTH.remap(5.5)));
    }

    proptest! {
        #[test]
        fn prop_width_monotonically_decreasing(a in 1.0f64..10.0, b in 1.0f64..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(DETECTOR_WIDTH.remap(lo) >= DETECTOR_WIDTH.remap(hi));
        }

        #[test]
        fn prop_width_stays_in_range_inside_domain(cs in 1.0f64..=10.0) {
            let w = DETECTOR_WIDTH.remap(cs);
            prop_assert!((25.0 - 1e-9..=230.0 + 1e-9).contains(&w));
        }
    }
}
