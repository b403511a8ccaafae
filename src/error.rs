//! Library errors.
//!
//! Every condition here is recoverable by the caller and deterministic for
//! a given input; retrying reproduces the identical error. No function in
//! this crate panics on bad input.

use crate::tile::ForwardSolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An accumulate kernel (SRC_ACC or CUB_ACC) was asked to scale up.
    /// Those kernels only support downscale or unity ratios.
    InvalidScaleRatio { coeff: i32, precision: i32 },
    /// The solved output interval came out empty after clamping.
    ///
    /// Carries the best-effort clamped solution: the hardware path treats
    /// this as a logged warning rather than an abort, so callers decide
    /// whether the condition is fatal.
    DegenerateInterval(ForwardSolution),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScaleRatio { coeff, precision } => write!(
                f,
                "scale-up requested on a downscale-only kernel (coeff {} > precision {})",
                coeff, precision
            ),
            Self::DegenerateInterval(sol) => write!(
                f,
                "degenerate output interval [{}, {}]",
                sol.out.start, sol.out.end
            ),
        }
    }
}

impl std::error::Error for Error {}
