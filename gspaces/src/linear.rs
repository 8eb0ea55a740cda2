//! Arithmetic progressions: `arange` and `linspace`

use gspaces_core::prelude::*;
use gspaces_core::{ceil_count, from_index, require_count};
use tracing::debug;

/// Which parameter sizes a [`LinearSpace`]; the other one is derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing<F> {
    /// Number of samples; the step is derived from the interval
    Count(i64),
    /// Distance between samples; the count is derived from the interval
    Step(F),
}

/// Evenly spaced values over `[start, stop]` or `[start, stop)`.
///
/// Element `i` is `start + i * step`, except that the final element of an
/// endpoint-inclusive space is `stop` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpace<F> {
    start: F,
    stop: F,
    count: usize,
    step: Option<F>,
    endpoint: bool,
}

impl<F: Real> LinearSpace<F> {
    /// Reconcile `spacing` against the interval.
    ///
    /// With [`Spacing::Count`] the step is `(stop - start) / divisor`, where
    /// the divisor is `count - 1` for an inclusive endpoint and `count`
    /// otherwise; it stays undefined when the divisor is not positive.
    /// With [`Spacing::Step`] the count is `ceil((stop - start) / step)`,
    /// plus one for an inclusive endpoint.
    pub fn new(start: F, stop: F, spacing: Spacing<F>, endpoint: bool) -> Result<Self> {
        let (count, step) = match spacing {
            Spacing::Count(count) => {
                let count = require_count(count)?;
                let divisor = if endpoint { count.checked_sub(1) } else { Some(count) };
                let step = match divisor {
                    Some(d) if d > 0 => Some((stop - start) / from_index::<F>(d)?),
                    _ => None,
                };
                (count, step)
            }
            Spacing::Step(step) => {
                if step.is_zero() || step.is_nan() {
                    return Err(SpaceError::invalid_argument(format!(
                        "step must be non-zero, got {}",
                        step
                    )));
                }
                let raw = ceil_count((stop - start) / step)?;
                let count = if endpoint { raw.checked_add(1) } else { Some(raw) };
                let count = count.ok_or_else(|| {
                    SpaceError::invalid_argument("element count overflows")
                })?;
                (require_count(count)?, Some(step))
            }
        };

        debug!(%start, %stop, count, ?step, endpoint, "linear space");

        Ok(Self {
            start,
            stop,
            count,
            step,
            endpoint,
        })
    }

    pub fn start(&self) -> F {
        self.start
    }

    pub fn stop(&self) -> F {
        self.stop
    }

    pub fn endpoint(&self) -> bool {
        self.endpoint
    }
}

impl<F: Real> Space for LinearSpace<F> {
    type Value = F;

    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Result<F> {
        if index >= self.count {
            return Err(SpaceError::index_out_of_range(index, self.count));
        }
        if self.endpoint && index == self.count - 1 {
            return Ok(self.stop);
        }
        // step is only undefined for an inclusive space of one element,
        // whose sole index is handled above
        match self.step {
            Some(step) => Ok(self.start + from_index::<F>(index)? * step),
            None => Ok(self.start),
        }
    }
}

impl<F: Real> StepSpace for LinearSpace<F> {
    fn step(&self) -> Option<F> {
        self.step
    }
}
