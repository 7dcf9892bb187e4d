use serde::Serialize;

use crate::error::{PlotError, PlotResult};

/// Inclusive `[lower, upper]` interval in data coordinates.
///
/// Construction sorts unordered bounds and rejects non-finite input, so any
/// `Range` reachable from an axis or decimation config is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Default for Range {
    /// The unit range `[0, 1]`, the range every fresh axis starts with.
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

impl Range {
    pub fn new(a: f64, b: f64) -> PlotResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(PlotError::InvalidRange { lower: a, upper: b });
        }

        if a <= b {
            Ok(Self { lower: a, upper: b })
        } else {
            Ok(Self { lower: b, upper: a })
        }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Range) -> Range {
        Range {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_bounds() {
        let range = Range::new(10.0, -3.0).expect("range");
        assert_eq!(range.lower(), -3.0);
        assert_eq!(range.upper(), 10.0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(Range::new(f64::NAN, 1.0).is_err());
        assert!(Range::new(0.0, f64::INFINITY).is_err());
        assert!(Range::new(f64::NEG_INFINITY, f64::NAN).is_err());
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = Range::new(-1.0, 2.0).expect("range");
        assert!(range.contains(-1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(0.5));
        assert!(!range.contains(2.0000001));
    }

    #[test]
    fn union_covers_both_inputs() {
        let a = Range::new(0.0, 5.0).expect("range");
        let b = Range::new(-2.0, 3.0).expect("range");
        let u = a.union(b);
        assert_eq!(u.lower(), -2.0);
        assert_eq!(u.upper(), 5.0);
    }

    #[test]
    fn degenerate_range_is_legal_and_detected() {
        let range = Range::new(4.0, 4.0).expect("range");
        assert!(range.is_degenerate());
        assert_eq!(range.span(), 0.0);
    }
}
