//! Geometric progressions with exact endpoints: `geomspace`

use crate::log::LogSpace;
use gspaces_core::from_f64;
use gspaces_core::prelude::*;
use tracing::{debug, trace};

/// Numbers spaced evenly on a log scale between two actual endpoints.
///
/// Values are computed as `10 ** x` over a linear space of `log10`
/// exponents. That round trip drifts in floating point, so the first
/// element and (for an inclusive space) the last element return `start`
/// and `stop` bit-for-bit instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomSpace<F> {
    start: F,
    stop: F,
    inner: LogSpace<F>,
}

impl<F: Real> GeomSpace<F> {
    pub fn new(start: F, stop: F, count: i64, endpoint: bool) -> Result<Self> {
        if start.is_zero() || stop.is_zero() {
            return Err(SpaceError::domain_error("Geometric sequence cannot include zero"));
        }

        let log_start = checked_log10(start)?;
        let log_stop = checked_log10(stop)?;
        let inner = LogSpace::new(log_start, log_stop, count, endpoint, from_f64(10.0)?)?;

        debug!(%start, %stop, count = inner.len(), endpoint, "geometric space");

        Ok(Self { start, stop, inner })
    }

    pub fn start(&self) -> F {
        self.start
    }

    pub fn stop(&self) -> F {
        self.stop
    }

    pub fn endpoint(&self) -> bool {
        self.inner.endpoint()
    }
}

fn checked_log10<F: Real>(x: F) -> Result<F> {
    let y = x.log10();
    if y.is_finite() {
        Ok(y)
    } else {
        Err(SpaceError::domain_error(format!(
            "logarithm undefined for endpoint {}",
            x
        )))
    }
}

impl<F: Real> Space for GeomSpace<F> {
    type Value = F;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Result<F> {
        let count = self.len();
        if index >= count {
            return Err(SpaceError::index_out_of_range(index, count));
        }
        if index == 0 {
            return Ok(self.start);
        }
        if count > 1 && self.endpoint() && index == count - 1 {
            trace!(index, "geometric endpoint override");
            return Ok(self.stop);
        }
        self.inner.get(index)
    }
}
