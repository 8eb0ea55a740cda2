//! gspaces - lazily evaluated numeric ranges
//!
//! Linear (`arange`, `linspace`), logarithmic (`logspace`) and geometric
//! (`geomspace`) ranges. Each factory returns a value implementing
//! [`Space`] that computes element `i` on demand from a closed-form formula;
//! nothing is materialized. Linear spaces also implement [`StepSpace`],
//! which pairs each value with the spacing.
//!
//! ```
//! use gspaces::prelude::*;
//!
//! let xs = gspaces::linspace(0.0, 10.0, 5)?;
//! assert_eq!(xs.iter().collect::<Vec<f64>>(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
//!
//! let ys = gspaces::arange(0.0, 10.0, 3.0)?;
//! assert_eq!(ys.len(), 4);
//! # Ok::<(), SpaceError>(())
//! ```

mod geometric;
mod linear;
mod log;
mod options;

pub use geometric::GeomSpace;
pub use gspaces_core::{codes, ErrorReport, Iter, Real, Result, Space, SpaceError, StepIter, StepSpace};
pub use linear::{LinearSpace, Spacing};
pub use log::LogSpace;
pub use options::{
    GeomspaceOptions, LinspaceOptions, LogspaceOptions, DEFAULT_BASE, DEFAULT_COUNT,
    DEFAULT_ENDPOINT,
};

/// Re-export core types plus the factories
pub mod prelude {
    pub use gspaces_core::prelude::*;
    pub use crate::{
        GeomSpace, GeomspaceOptions, LinearSpace, LinspaceOptions, LogSpace, LogspaceOptions,
        Spacing,
    };
}

use gspaces_core::from_f64;

/// Values in the half-open interval `[start, stop)`, `step` apart.
///
/// The length is `ceil((stop - start) / step)`; a step pointing away from
/// `stop` yields a negative length and fails with `InvalidArgument`.
pub fn arange<F: Real>(start: F, stop: F, step: F) -> Result<LinearSpace<F>> {
    LinearSpace::new(start, stop, Spacing::Step(step), false)
}

/// `count` evenly spaced samples over the closed interval `[start, stop]`
pub fn linspace<F: Real>(start: F, stop: F, count: i64) -> Result<LinearSpace<F>> {
    linspace_with(start, stop, LinspaceOptions::default().with_count(count))
}

/// `linspace` with every option spelled out
pub fn linspace_with<F: Real>(start: F, stop: F, options: LinspaceOptions) -> Result<LinearSpace<F>> {
    LinearSpace::new(start, stop, Spacing::Count(options.count), options.endpoint)
}

/// `linspace` returning the samples together with their spacing.
///
/// The step is `None` when it is undefined (fewer than two samples over a
/// closed interval, or no samples at all). Per-element `(value, step)`
/// pairs come from [`StepSpace::get_with_step`] / [`StepSpace::iter_with_step`].
pub fn linspace_with_step<F: Real>(
    start: F,
    stop: F,
    options: LinspaceOptions,
) -> Result<(LinearSpace<F>, Option<F>)> {
    let space = linspace_with(start, stop, options)?;
    let step = space.step();
    Ok((space, step))
}

/// `count` samples from `10 ** start` to `10 ** stop`
pub fn logspace<F: Real>(start: F, stop: F, count: i64) -> Result<LogSpace<F>> {
    logspace_with(start, stop, LogspaceOptions::default().with_count(count))
}

pub fn logspace_with<F: Real>(start: F, stop: F, options: LogspaceOptions) -> Result<LogSpace<F>> {
    LogSpace::new(start, stop, options.count, options.endpoint, from_f64(options.base)?)
}

/// `count` samples of a geometric progression from `start` to `stop`.
///
/// Fails with `DomainError` when either endpoint is zero.
pub fn geomspace<F: Real>(start: F, stop: F, count: i64) -> Result<GeomSpace<F>> {
    geomspace_with(start, stop, GeomspaceOptions::default().with_count(count))
}

pub fn geomspace_with<F: Real>(start: F, stop: F, options: GeomspaceOptions) -> Result<GeomSpace<F>> {
    GeomSpace::new(start, stop, options.count, options.endpoint)
}
