//! Floating-point bound shared by every sequence, plus checked conversions

use crate::error::{Result, SpaceError};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Scalar type a sequence is computed in (`f32`, `f64`)
pub trait Real: Float + Debug + Display + Send + Sync + 'static {}

impl<T> Real for T where T: Float + Debug + Display + Send + Sync + 'static {}

/// Convert an element index into the scalar type
pub fn from_index<F: Real>(index: usize) -> Result<F> {
    F::from(index).ok_or_else(|| {
        SpaceError::invalid_argument(format!("index {} is not representable", index))
    })
}

/// Convert an `f64` literal (defaults, bases) into the scalar type
pub fn from_f64<F: Real>(value: f64) -> Result<F> {
    F::from(value).ok_or_else(|| {
        SpaceError::invalid_argument(format!("{} is not representable", value))
    })
}

/// Round a reconciled element count up to an integer.
///
/// Fails for NaN and infinite inputs, which arise from a zero step or
/// non-finite endpoints.
pub fn ceil_count<F: Real>(raw: F) -> Result<i64> {
    if !raw.is_finite() {
        return Err(SpaceError::invalid_argument(format!(
            "element count {} is not finite",
            raw
        )));
    }
    raw.ceil().to_i64().ok_or_else(|| {
        SpaceError::invalid_argument(format!("element count {} is too large", raw))
    })
}

/// Validate a signed count and narrow it to `usize`
pub fn require_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(SpaceError::invalid_argument(format!(
            "Number of samples, {}, must be non-negative",
            count
        )));
    }
    usize::try_from(count).map_err(|_| {
        SpaceError::invalid_argument(format!("Number of samples, {}, is too large", count))
    })
}
