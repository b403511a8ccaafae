//! AV1 film grain synthesis.
//!
//! Produces, from the frame's grain metadata: a luma noise plane, two
//! chroma noise planes, three 256-entry scaling LUTs, and the four packed
//! parameter words the grain hardware block consumes.
//!
//! The noise path is the AV1 algorithm bit for bit: an 11-bit LFSR index
//! into the fixed Gaussian table, then an in-place causal auto-regressive
//! filter. The filter reads its own output for earlier neighbors on
//! purpose; visit order is part of the conformance contract, so it must
//! never be rewritten as a double-buffered convolution.

use crate::intops::round2;
use crate::random::RandomState;
use crate::tables::GAUSSIAN_SEQUENCE;

pub const GRAIN_WIDTH: usize = 82;
pub const GRAIN_HEIGHT: usize = 73;

/// Subsampled chroma planes are 44x38; 4:4:4 chroma is full size.
const SUB_GRAIN_WIDTH: usize = 44;
const SUB_GRAIN_HEIGHT: usize = 38;

/// Untouched border of the auto-regressive filter, every edge.
const AR_PAD: usize = 3;

const MAX_SCALING_POINTS: usize = 16;

/// Noise plane. Subsampled chroma only occupies the top-left 44x38
/// corner; the remainder of the buffer is left untouched.
pub type GrainPlane = [[i16; GRAIN_WIDTH]; GRAIN_HEIGHT];

/// AV1 film grain metadata, as parsed from the frame header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilmGrainParams {
    pub grain_seed: u32,
    pub apply_grain: bool,
    pub update_grain: bool,
    pub num_y_points: u8,
    pub point_y_value: [u8; MAX_SCALING_POINTS],
    pub point_y_scaling: [u8; MAX_SCALING_POINTS],
    pub num_cb_points: u8,
    pub point_cb_value: [u8; MAX_SCALING_POINTS],
    pub point_cb_scaling: [u8; MAX_SCALING_POINTS],
    pub num_cr_points: u8,
    pub point_cr_value: [u8; MAX_SCALING_POINTS],
    pub point_cr_scaling: [u8; MAX_SCALING_POINTS],
    pub chroma_scaling_from_luma: bool,
    /// AV1 `grain_scaling_minus_8` plus 8; the strength quantizer the
    /// scaling LUT output is applied with.
    pub scaling_shift: u8,
    pub ar_coeff_lag: u8,
    pub ar_coeffs_y: [i32; 25],
    pub ar_coeffs_cb: [i32; 25],
    pub ar_coeffs_cr: [i32; 25],
    pub ar_coeff_shift: u8,
    pub grain_scale_shift: u8,
    pub cb_mult: u8,
    pub cb_luma_mult: u8,
    pub cb_offset: u16,
    pub cr_mult: u8,
    pub cr_luma_mult: u8,
    pub cr_offset: u16,
    pub overlap_flag: bool,
    pub clip_to_restricted_range: bool,
}

impl Default for FilmGrainParams {
    fn default() -> Self {
        Self {
            grain_seed: 0,
            apply_grain: false,
            update_grain: true,
            num_y_points: 0,
            point_y_value: [0; MAX_SCALING_POINTS],
            point_y_scaling: [0; MAX_SCALING_POINTS],
            num_cb_points: 0,
            point_cb_value: [0; MAX_SCALING_POINTS],
            point_cb_scaling: [0; MAX_SCALING_POINTS],
            num_cr_points: 0,
            point_cr_value: [0; MAX_SCALING_POINTS],
            point_cr_scaling: [0; MAX_SCALING_POINTS],
            chroma_scaling_from_luma: false,
            scaling_shift: 8,
            ar_coeff_lag: 0,
            ar_coeffs_y: [0; 25],
            ar_coeffs_cb: [0; 25],
            ar_coeffs_cr: [0; 25],
            ar_coeff_shift: 6,
            grain_scale_shift: 0,
            cb_mult: 0,
            cb_luma_mult: 0,
            cb_offset: 0,
            cr_mult: 0,
            cr_luma_mult: 0,
            cr_offset: 0,
            overlap_flag: false,
            clip_to_restricted_range: false,
        }
    }
}

/// Per-channel grain-strength lookup tables, one `u32` entry per pixel
/// intensity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalingLut {
    pub y: [u32; 256],
    pub cb: [u32; 256],
    pub cr: [u32; 256],
}

impl Default for ScalingLut {
    fn default() -> Self {
        Self {
            y: [0; 256],
            cb: [0; 256],
            cr: [0; 256],
        }
    }
}

// ============================================================================
// Grain plane synthesis
// ============================================================================

fn fill_plane(buf: &mut GrainPlane, w: usize, h: usize, seed: u32, shift: u8) {
    let mut rng = RandomState::new(seed);
    for row in &mut buf[..h] {
        for entry in &mut row[..w] {
            let value = rng.next_bits(11);
            *entry = round2(GAUSSIAN_SEQUENCE[value as usize] as i32, shift) as i16;
        }
    }
}

struct ArFilter<'a> {
    coeffs: &'a [i32; 25],
    lag: usize,
    shift: u8,
    grain_min: i32,
    grain_max: i32,
    /// Luma plane plus subsampling, for the cross-channel term at the
    /// chroma centre tap. `None` on the luma plane itself, or when luma
    /// has no scaling points.
    luma: Option<(&'a GrainPlane, usize, usize)>,
}

impl ArFilter<'_> {
    /// In-place causal filter over `buf`, leaving an `AR_PAD` border.
    /// Row-major; earlier pixels in the same pass are read back at their
    /// already-filtered values.
    fn apply(&self, buf: &mut GrainPlane, w: usize, h: usize) {
        let lag = self.lag;
        if lag == 0 {
            return;
        }
        for y in 0..h - AR_PAD {
            for x in 0..w - 2 * AR_PAD {
                let mut coeff_idx = 0usize;
                let mut sum: i32 = 0;
                for dy in (AR_PAD - lag)..=AR_PAD {
                    for dx in (AR_PAD - lag)..=(AR_PAD + lag) {
                        if dx == AR_PAD && dy == AR_PAD {
                            // Centre tap: on chroma, fold in the
                            // co-sited luma samples once, then stop.
                            if let Some((luma, subx, suby)) = self.luma {
                                let ly = (y << suby) + AR_PAD;
                                let lx = (x << subx) + AR_PAD;
                                let mut v: i32 = 0;
                                for i in 0..1 + suby {
                                    for j in 0..1 + subx {
                                        v += luma[ly + i][lx + j] as i32;
                                    }
                                }
                                v = round2(v, (subx + suby) as u8);
                                sum += v * self.coeffs[coeff_idx];
                            }
                            break;
                        }
                        sum += self.coeffs[coeff_idx] * buf[y + dy][x + dx] as i32;
                        coeff_idx += 1;
                    }
                }
                let grain = buf[y + AR_PAD][x + AR_PAD] as i32 + round2(sum, self.shift);
                buf[y + AR_PAD][x + AR_PAD] =
                    grain.clamp(self.grain_min, self.grain_max) as i16;
            }
        }
    }
}

/// Synthesize the three grain planes and the three scaling LUTs.
///
/// Gating on `apply_grain && update_grain` is the caller's business: the
/// call site decides whether this frame re-derives grain at all, and this
/// function synthesizes unconditionally.
///
/// `bit_depth` must be 8..=12. A plane whose scaling-point count is zero
/// (and, for chroma, with `chroma_scaling_from_luma` off) is zero-filled;
/// its scaling LUT is zero so any grain would be scaled away regardless.
pub fn synthesize(
    params: &FilmGrainParams,
    is_yuv_444: bool,
    bit_depth: u8,
    out_y: &mut GrainPlane,
    out_cb: &mut GrainPlane,
    out_cr: &mut GrainPlane,
    out_scaling: &mut ScalingLut,
) {
    debug_assert!((8..=12).contains(&bit_depth));

    let shift = (12 - bit_depth as i32 + params.grain_scale_shift as i32) as u8;
    let grain_ctr = 128i32 << (bit_depth - 8);
    let grain_min = -grain_ctr;
    let grain_max = grain_ctr - 1;
    let lag = (params.ar_coeff_lag & 3) as usize;

    let (sub, cw, ch) = if is_yuv_444 {
        (0usize, GRAIN_WIDTH, GRAIN_HEIGHT)
    } else {
        (1, SUB_GRAIN_WIDTH, SUB_GRAIN_HEIGHT)
    };

    if params.num_y_points == 0 {
        *out_y = [[0; GRAIN_WIDTH]; GRAIN_HEIGHT];
    } else {
        fill_plane(out_y, GRAIN_WIDTH, GRAIN_HEIGHT, params.grain_seed, shift);
        ArFilter {
            coeffs: &params.ar_coeffs_y,
            lag,
            shift: params.ar_coeff_shift,
            grain_min,
            grain_max,
            luma: None,
        }
        .apply(out_y, GRAIN_WIDTH, GRAIN_HEIGHT);
    }

    let luma_ref = (params.num_y_points > 0).then_some((&*out_y, sub, sub));
    let chroma = [
        (out_cb, 0xb524u32, &params.ar_coeffs_cb, params.num_cb_points),
        (out_cr, 0x49d8u32, &params.ar_coeffs_cr, params.num_cr_points),
    ];
    for (buf, seed_xor, coeffs, num_points) in chroma {
        if num_points == 0 && !params.chroma_scaling_from_luma {
            *buf = [[0; GRAIN_WIDTH]; GRAIN_HEIGHT];
            continue;
        }
        fill_plane(buf, cw, ch, params.grain_seed ^ seed_xor, shift);
        ArFilter {
            coeffs,
            lag,
            shift: params.ar_coeff_shift,
            grain_min,
            grain_max,
            luma: luma_ref,
        }
        .apply(buf, cw, ch);
    }

    fill_scaling_luts(params, out_scaling);
}

// ============================================================================
// Scaling LUTs
// ============================================================================

fn fill_scaling_lut(
    lut: &mut [u32; 256],
    num_points: usize,
    values: &[u8; MAX_SCALING_POINTS],
    scalings: &[u8; MAX_SCALING_POINTS],
) {
    *lut = [0; 256];
    if num_points == 0 {
        return;
    }

    // Flat extrapolation below the first control point.
    for entry in &mut lut[..values[0] as usize] {
        *entry = scalings[0] as u32;
    }

    for point in 0..num_points - 1 {
        let base_x = values[point] as i64;
        let base_y = scalings[point] as i64;
        let delta_x = values[point + 1] as i64 - base_x;
        let delta_y = scalings[point + 1] as i64 - base_y;
        // Duplicate control point: no steps to write, but keep the slope
        // division defined.
        let div = if delta_x == 0 { 1 } else { delta_x };
        let delta = delta_y * ((65536 + div / 2) / div);
        for x in 0..delta_x {
            lut[(base_x + x) as usize] = (base_y + ((x * delta + 32768) >> 16)) as u32;
        }
    }

    // Flat extrapolation above the last control point.
    let last = num_points - 1;
    for entry in &mut lut[values[last] as usize..] {
        *entry = scalings[last] as u32;
    }
}

fn fill_scaling_luts(params: &FilmGrainParams, out: &mut ScalingLut) {
    fill_scaling_lut(
        &mut out.y,
        params.num_y_points as usize,
        &params.point_y_value,
        &params.point_y_scaling,
    );
    if params.chroma_scaling_from_luma {
        out.cb = out.y;
        out.cr = out.y;
        return;
    }
    fill_scaling_lut(
        &mut out.cb,
        params.num_cb_points as usize,
        &params.point_cb_value,
        &params.point_cb_scaling,
    );
    fill_scaling_lut(
        &mut out.cr,
        params.num_cr_points as usize,
        &params.point_cr_value,
        &params.point_cr_scaling,
    );
}

// ============================================================================
// Packed parameter words
// ============================================================================

/// Seed and flag word: seed in bits 0-15, `chroma_scaling_from_luma` at
/// bit 16, `overlap_flag` at bit 24, `clip_to_restricted_range` at
/// bit 28.
pub fn pack_pps0(params: &FilmGrainParams) -> u32 {
    (params.grain_seed & 0xffff)
        | (params.chroma_scaling_from_luma as u32) << 16
        | (params.overlap_flag as u32) << 24
        | (params.clip_to_restricted_range as u32) << 28
}

/// Cb blend word: `cb_mult`, `cb_luma_mult` at bit 8, `cb_offset` at
/// bit 16.
pub fn pack_pps1(params: &FilmGrainParams) -> u32 {
    params.cb_mult as u32 | (params.cb_luma_mult as u32) << 8 | (params.cb_offset as u32) << 16
}

/// Cr blend word, same layout as [`pack_pps1`].
pub fn pack_pps2(params: &FilmGrainParams) -> u32 {
    params.cr_mult as u32 | (params.cr_luma_mult as u32) << 8 | (params.cr_offset as u32) << 16
}

/// Scaling word: `scaling_shift` nibble, matrix selector at bit 4
/// (0: MC_IDENTITY, 1: BT709, 6: BT601 — hard-wired to BT601 here), point
/// counts at bits 12/16/20.
pub fn pack_pps3(params: &FilmGrainParams) -> u32 {
    params.scaling_shift as u32
        | 6 << 4
        | (params.num_y_points as u32) << 12
        | (params.num_cb_points as u32) << 16
        | (params.num_cr_points as u32) << 20
}
