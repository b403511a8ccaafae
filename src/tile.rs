//! Tile-window coordinate solver for the resampler.
//!
//! A frame is processed as tiles; on each axis the pipeline needs two
//! mappings per tile:
//!
//! - **backward**: given the output interval a tile must produce, which
//!   input interval does the resampler have to fetch (kernel support
//!   margins included)?
//! - **forward**: given a fetched input interval, which output interval
//!   does the resampler actually produce, and at what sub-pixel phase do
//!   its taps start?
//!
//! All arithmetic is exact fixed point. The scale ratio is
//! `coeff / precision`; crop offsets carry a 20-bit sub-pixel fraction
//! ([`SUBPIXEL_BITS`]). Three kernel families share one parameterized
//! routine per direction; only their margin/alignment policy differs.

use strum::{Display, EnumIter};

use crate::error::Error;
use crate::intops::floor_div_rem;

/// Fixed-point bits of `ScaleConfig::crop_frac`.
pub const SUBPIXEL_BITS: u32 = 20;

/// Substituted for any negative `crop_frac` before rescaling: "maximal
/// negative sub-pixel crop". The exact bit pattern is load-bearing for the
/// downstream hardware; do not "simplify" it.
const CROP_FRAC_NEGATIVE: i64 = -0xFFFFF;

/// Inclusive pixel interval on one axis. Axes are solved independently;
/// the caller runs the solver once for X and once for Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisInterval {
    pub start: i32,
    pub end: i32,
}

/// Whether the solved interval must land on an even start / odd end.
///
/// Kernels that process pixel pairs per cycle need the left edge even and
/// the right edge odd; which families that applies to is fixed by the
/// hardware generation, so the caller sets it per family when building the
/// config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Any,
    EvenRequired,
}

/// Per-axis scale and crop configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScaleConfig {
    /// Fixed-point scale numerator.
    pub coeff: i32,
    /// Fixed-point scale denominator.
    pub precision: i32,
    /// Integer crop offset, in input pixels.
    pub crop: i32,
    /// Sub-pixel crop offset in `1 / 2^SUBPIXEL_BITS` units. Any negative
    /// value is treated as the maximal negative sub-pixel crop.
    pub crop_frac: i32,
    /// Last valid coordinate on this axis (inclusive).
    pub max: i32,
    pub align: Alignment,
}

/// Integer/fractional tap phase at the fixed output start, for the luma
/// and chroma sampler address generators. Fractions are in `precision`
/// units, normalized to `[0, precision)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapDescriptor {
    pub luma_int: i32,
    pub luma_frac: i32,
    pub chroma_int: i32,
    pub chroma_frac: i32,
}

/// Result of the forward mapping: the produced output interval plus the
/// tap phase at its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardSolution {
    pub out: AxisInterval,
    pub tap: TapDescriptor,
}

/// The three resampling algorithms the hardware implements. Each carries
/// its own support-window margins and ratio restrictions; the solver
/// arithmetic is otherwise shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum KernelFamily {
    /// 6-tap polyphase filter, any ratio.
    SixTap,
    /// Single-tap accumulator ("1n tap"), downscale-or-unity only. Runs
    /// in a 2x-accumulation mode, so the backward pass doubles numerator
    /// and denominator to stay exact without an extra division.
    SrcAcc,
    /// 4-tap cubic ("4n tap"), downscale-or-unity only.
    CubAcc,
}

struct KernelPolicy {
    /// Input pixels of support to the left of the mapped start.
    margin_before: i64,
    /// Input pixels of support to the right of the mapped end.
    margin_after: i64,
    /// Double every product and the divisor in the backward pass,
    /// mirroring the kernel's 2x accumulation domain. Numerator and
    /// denominator scale together, so the truncated quotients are
    /// unchanged; the flag keeps the arithmetic in the domain the
    /// hardware computes in, it does not alter the mapping.
    double_acc: bool,
    /// Reject `coeff > precision`.
    downscale_only: bool,
}

impl KernelFamily {
    fn policy(self) -> KernelPolicy {
        match self {
            Self::SixTap => KernelPolicy {
                margin_before: 3,
                margin_after: 5,
                double_acc: false,
                downscale_only: false,
            },
            Self::SrcAcc => KernelPolicy {
                margin_before: 1,
                margin_after: 5,
                double_acc: true,
                downscale_only: true,
            },
            Self::CubAcc => KernelPolicy {
                margin_before: 2,
                margin_after: 2,
                double_acc: false,
                downscale_only: true,
            },
        }
    }

    /// The accumulate kernels rescale `crop_frac` by `coeff`; the 6-tap
    /// kernel by `precision`.
    fn crop_frac_base(self, cfg: &ScaleConfig) -> i64 {
        match self {
            Self::SixTap => cfg.precision as i64,
            Self::SrcAcc | Self::CubAcc => cfg.coeff as i64,
        }
    }
}

/// Shared preprocessing: substitute the negative sentinel, then bring
/// `crop_frac` from 20-bit sub-pixel units into the family's fixed-point
/// base.
fn scaled_crop_frac(family: KernelFamily, cfg: &ScaleConfig) -> i64 {
    let mut frac = cfg.crop_frac as i64;
    if frac < 0 {
        frac = CROP_FRAC_NEGATIVE;
    }
    (frac * family.crop_frac_base(cfg)) >> SUBPIXEL_BITS
}

fn check_ratio(family: KernelFamily, cfg: &ScaleConfig) -> Result<(), Error> {
    if family.policy().downscale_only && cfg.coeff > cfg.precision {
        log::error!(
            "{} kernel cannot scale up: coeff {} > precision {}",
            family,
            cfg.coeff,
            cfg.precision
        );
        return Err(Error::InvalidScaleRatio {
            coeff: cfg.coeff,
            precision: cfg.precision,
        });
    }
    Ok(())
}

/// Map an output-tile interval back to the input interval the resampler
/// must fetch, including the kernel's support margins.
pub fn backward(
    family: KernelFamily,
    out: AxisInterval,
    cfg: &ScaleConfig,
) -> Result<AxisInterval, Error> {
    debug_assert!(cfg.coeff > 0 && cfg.precision > 0);
    check_ratio(family, cfg)?;
    let p = family.policy();

    let coeff = cfg.coeff as i64;
    let precision = cfg.precision as i64;
    let crop_term = cfg.crop as i64 * precision + scaled_crop_frac(family, cfg);
    let mul: i64 = if p.double_acc { 2 } else { 1 };
    let denom = mul * precision;

    let start_raw = mul * (out.start as i64 * coeff + crop_term);
    let start = if start_raw <= p.margin_before * denom {
        0
    } else {
        let mut s = start_raw / denom - p.margin_before;
        if cfg.align == Alignment::EvenRequired && s & 1 == 1 {
            s -= 1;
        }
        s
    };

    let end_raw = mul * (out.end as i64 * coeff + crop_term) + p.margin_after * denom;
    let end = if end_raw > cfg.max as i64 * denom {
        cfg.max as i64
    } else {
        let mut e = end_raw / denom;
        if cfg.align == Alignment::EvenRequired && e & 1 == 0 {
            e += 1;
        }
        e
    };

    Ok(AxisInterval {
        start: start as i32,
        end: end as i32,
    })
}

/// Map a fetched input interval forward to the output interval it
/// produces and the tap phase at the (caller-pinned) output start.
///
/// `fixed_out_start` is the start the backward pass already solved for
/// this tile; it is never recomputed here. `at_input_boundary` marks the
/// last tile on the axis: when the input end sits on `cfg.max` the output
/// end snaps straight to `out_max` instead of being derived.
pub fn forward(
    family: KernelFamily,
    input: AxisInterval,
    cfg: &ScaleConfig,
    out_max: i32,
    fixed_out_start: i32,
    at_input_boundary: bool,
) -> Result<ForwardSolution, Error> {
    debug_assert!(cfg.coeff > 0 && cfg.precision > 0);
    check_ratio(family, cfg)?;
    let p = family.policy();

    let coeff = cfg.coeff as i64;
    let precision = cfg.precision as i64;
    let crop_term = cfg.crop as i64 * precision + scaled_crop_frac(family, cfg);

    let mut end = if at_input_boundary && input.end == cfg.max {
        out_max as i64
    } else {
        let num = (input.end as i64 - (p.margin_after - 1)) * precision - crop_term;
        let (mut e, rem) = floor_div_rem(num, coeff);
        // The mapping is ceiling-style; an exact division means the last
        // full output sample is one before the quotient.
        if rem == 0 {
            e -= 1;
        }
        if cfg.align == Alignment::EvenRequired && e & 1 == 0 {
            e -= 1;
        }
        e
    };
    if end > out_max as i64 {
        end = out_max as i64;
    }

    // Tap phase at the pinned output start, relative to the fetched input
    // start. Chroma planes are read at half the luma phase.
    let offset = fixed_out_start as i64 * coeff + crop_term - input.start as i64 * precision;
    let (luma_int, luma_frac) = floor_div_rem(offset, precision);
    let (chroma_int, chroma_frac) = floor_div_rem(offset.div_euclid(2), precision);

    let solution = ForwardSolution {
        out: AxisInterval {
            start: fixed_out_start,
            end: end as i32,
        },
        tap: TapDescriptor {
            luma_int: luma_int as i32,
            luma_frac: luma_frac as i32,
            chroma_int: chroma_int as i32,
            chroma_frac: chroma_frac as i32,
        },
    };
    if solution.out.start > solution.out.end {
        log::error!(
            "{} forward solve produced empty output [{}, {}]",
            family,
            solution.out.start,
            solution.out.end
        );
        return Err(Error::DegenerateInterval(solution));
    }
    Ok(solution)
}
