//! Numbers spaced evenly on a log scale: `logspace`

use crate::linear::{LinearSpace, Spacing};
use gspaces_core::prelude::*;
use tracing::debug;

/// `base ** x` for each `x` of a linear space of exponents.
///
/// `start` and `stop` are exponents: the sequence runs from `base ** start`
/// to `base ** stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSpace<F> {
    base: F,
    exponents: LinearSpace<F>,
}

impl<F: Real> LogSpace<F> {
    pub fn new(start: F, stop: F, count: i64, endpoint: bool, base: F) -> Result<Self> {
        let exponents = LinearSpace::new(start, stop, Spacing::Count(count), endpoint)?;
        debug!(%base, count = exponents.len(), "log space");
        Ok(Self { base, exponents })
    }

    /// Exponent of the first element
    pub fn start(&self) -> F {
        self.exponents.start()
    }

    /// Exponent of the last element (when the endpoint is included)
    pub fn stop(&self) -> F {
        self.exponents.stop()
    }

    pub fn endpoint(&self) -> bool {
        self.exponents.endpoint()
    }

    pub fn base(&self) -> F {
        self.base
    }
}

impl<F: Real> Space for LogSpace<F> {
    type Value = F;

    fn len(&self) -> usize {
        self.exponents.len()
    }

    fn get(&self, index: usize) -> Result<F> {
        Ok(self.base.powf(self.exponents.get(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_decades() {
        let s = LogSpace::new(0.0, 3.0, 4, true, 10.0).unwrap();
        assert_eq!(s.len(), 4);
        let expected = [1.0, 10.0, 100.0, 1000.0];
        for (got, want) in s.iter().zip(expected) {
            assert!(close(got, want), "{} != {}", got, want);
        }
    }

    #[test]
    fn test_matches_powers_of_linear() {
        let lin = LinearSpace::new(0.5, 10.5, Spacing::Count(4), true).unwrap();
        let log = LogSpace::new(0.5, 10.5, 4, true, 10.0).unwrap();
        for i in 0..4 {
            assert_eq!(log.get(i).unwrap(), 10f64.powf(lin.get(i).unwrap()));
        }
    }

    #[test]
    fn test_base_two_exclusive() {
        let s = LogSpace::new(0.0, 4.0, 4, false, 2.0).unwrap();
        let v: Vec<f64> = s.iter().collect();
        assert_eq!(v, vec![1.0, 2.0, 4.0, 8.0]);
        assert_eq!(s.base(), 2.0);
        assert!(!s.endpoint());
    }

    #[test]
    fn test_inherits_construction_failure() {
        let err = LogSpace::<f64>::new(0.0, 10.0, -1, true, 10.0).unwrap_err();
        assert!(matches!(err, SpaceError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty() {
        let s = LogSpace::<f64>::new(0.0, 10.0, 0, true, 10.0).unwrap();
        assert!(s.is_empty());
        assert!(matches!(s.get(0), Err(SpaceError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_exponent_accessors() {
        let s = LogSpace::new(1.0, 3.0, 3, true, 10.0).unwrap();
        assert_eq!(s.start(), 1.0);
        assert_eq!(s.stop(), 3.0);
    }
}
