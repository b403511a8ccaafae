//! Randomized invariant sweeps for the tile coordinate solver.

use mml_dsp::{backward, forward, Alignment, AxisInterval, KernelFamily, ScaleConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

const UNITY: i32 = 1 << 20;

/// Random legal config for a family: downscale-or-unity ratios for the
/// accumulate kernels, anything for 6-tap.
fn random_cfg(rng: &mut StdRng, family: KernelFamily, align: Alignment) -> ScaleConfig {
    let precision = UNITY;
    let coeff = match family {
        KernelFamily::SixTap => rng.gen_range(UNITY / 8..=4 * UNITY),
        _ => rng.gen_range(UNITY / 8..=UNITY),
    };
    ScaleConfig {
        coeff,
        precision,
        crop: rng.gen_range(0..64),
        crop_frac: rng.gen_range(0..1 << 20),
        max: rng.gen_range(256..8192),
        align,
    }
}

/// Random output interval that maps inside `[0, max]` with room for the
/// widest support margins, so the clamp branches stay out of the sweep.
fn random_out_interval(rng: &mut StdRng, cfg: &ScaleConfig) -> AxisInterval {
    let usable = (cfg.max - cfg.crop - 8) as i64;
    let limit = (usable * cfg.precision as i64 / cfg.coeff as i64 - 2) as i32;
    let mut start = rng.gen_range(0..limit.min(512));
    let mut end = rng.gen_range(start + 1..=(start + 256).min(limit));
    if cfg.align == Alignment::EvenRequired {
        // Legal tiles on an even-aligned axis have even starts and odd
        // ends.
        start &= !1;
        end |= 1;
    }
    AxisInterval { start, end }
}

#[test]
fn backward_intervals_are_ordered() {
    let mut rng = StdRng::seed_from_u64(1);
    for family in KernelFamily::iter() {
        for _ in 0..1000 {
            let cfg = random_cfg(&mut rng, family, Alignment::Any);
            let out = random_out_interval(&mut rng, &cfg);
            let input = backward(family, out, &cfg).unwrap();
            assert!(
                input.start <= input.end,
                "{family}: {out:?} {cfg:?} -> {input:?}"
            );
            assert!(input.start >= 0);
        }
    }
}

#[test]
fn even_alignment_forces_even_start_odd_end() {
    let mut rng = StdRng::seed_from_u64(2);
    for family in KernelFamily::iter() {
        for _ in 0..1000 {
            let cfg = random_cfg(&mut rng, family, Alignment::EvenRequired);
            let out = random_out_interval(&mut rng, &cfg);
            let input = backward(family, out, &cfg).unwrap();
            if input.start != 0 {
                assert_eq!(input.start & 1, 0, "{family}: odd start {input:?}");
            }
            if input.end != cfg.max {
                assert_eq!(input.end & 1, 1, "{family}: even end {input:?}");
            }
        }
    }
}

#[test]
fn backward_end_is_monotonic_in_out_end() {
    let mut rng = StdRng::seed_from_u64(3);
    for family in KernelFamily::iter() {
        for _ in 0..1000 {
            let cfg = random_cfg(&mut rng, family, Alignment::Any);
            let out = random_out_interval(&mut rng, &cfg);
            let wider = AxisInterval {
                start: out.start,
                end: out.end + rng.gen_range(1..64),
            };
            let a = backward(family, out, &cfg).unwrap();
            let b = backward(family, wider, &cfg).unwrap();
            assert!(b.end >= a.end, "{family}: {out:?} -> {a:?}, {wider:?} -> {b:?}");
        }
    }
}

#[test]
fn forward_covers_the_backward_request() {
    // backward() fetches enough input that forward() can produce at
    // least the originally requested output interval.
    let mut rng = StdRng::seed_from_u64(4);
    for family in KernelFamily::iter() {
        for align in [Alignment::Any, Alignment::EvenRequired] {
            for _ in 0..1000 {
                let cfg = random_cfg(&mut rng, family, align);
                let out = random_out_interval(&mut rng, &cfg);
                let input = backward(family, out, &cfg).unwrap();
                let out_max = out.end + 512;
                let at_boundary = input.end == cfg.max;
                let sol = forward(family, input, &cfg, out_max, out.start, at_boundary)
                    .unwrap_or_else(|e| {
                        panic!("{family}: {out:?} {cfg:?} -> {input:?}: {e}")
                    });
                assert_eq!(sol.out.start, out.start);
                assert!(
                    sol.out.end >= out.end,
                    "{family}: requested {out:?}, produced {:?} from {input:?} ({cfg:?})",
                    sol.out
                );
                // The sweep stays off the clamp and boundary branches, so
                // an even-aligned axis must come back with an odd end.
                if align == Alignment::EvenRequired {
                    assert_eq!(
                        sol.out.end & 1,
                        1,
                        "{family}: even produced end {:?} from {input:?} ({cfg:?})",
                        sol.out
                    );
                }
                // Tap fractions are normalized.
                assert!(sol.tap.luma_frac >= 0 && sol.tap.luma_frac < cfg.precision);
                assert!(sol.tap.chroma_frac >= 0 && sol.tap.chroma_frac < cfg.precision);
            }
        }
    }
}

#[test]
fn boundary_clamp_literal_case() {
    let cfg = ScaleConfig {
        coeff: 65536,
        precision: 65536,
        crop: 0,
        crop_frac: 0,
        max: 4095,
        align: Alignment::Any,
    };
    let out = AxisInterval { start: 0, end: 31 };
    let input = backward(KernelFamily::SixTap, out, &cfg).unwrap();
    assert_eq!(input.start, 0);
}
