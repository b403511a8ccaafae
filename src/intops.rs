//! Small integer helpers shared by the solver and the grain engine.

/// Round-half-up power-of-two division. `shift == 0` returns `x` unchanged.
///
/// This rounds half away from zero toward positive infinity, not to nearest
/// even; the grain pipeline depends on the exact rounding direction.
#[inline(always)]
pub fn round2(x: i32, shift: u8) -> i32 {
    (x + (1i32 << shift >> 1)) >> shift
}

/// Floor division with a non-negative remainder.
///
/// Plain `/` truncates toward zero, so a negative numerator needs the
/// borrow step to land in `[0, d)`.
#[inline(always)]
pub fn floor_div_rem(n: i64, d: i64) -> (i64, i64) {
    debug_assert!(d > 0);
    let mut q = n / d;
    let mut r = n - q * d;
    if r < 0 {
        q -= 1;
        r += d;
    }
    (q, r)
}
