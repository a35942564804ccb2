// Antigravity curve for the MESS gate
use num_bigint::BigUint;

/// Denominator paired with every numerator the curve produces; the
/// multiplier `N(x) / CURVE_DENOMINATOR` equals exactly 1 at `x = 0`.
pub const CURVE_DENOMINATOR: u64 = 128;

/// Ceiling on the time delta; `floor(8000 * pi)`.
pub const XCAP: u64 = 25_132;

/// Curve amplitude.
pub const AMPL: u64 = 15;

/// Vertical scale of the ramp: `CURVE_DENOMINATOR * AMPL * 2`.
pub const HEIGHT: u64 = CURVE_DENOMINATOR * AMPL * 2;

/// Numerator of the antigravity multiplier for a time delta of `x` seconds.
///
/// The sine approximator `y = 3x^2 - 2x^3` rescaled to `HEIGHT` over
/// `[0, XCAP]`, evaluated entirely in integers:
///
/// ```text
/// N(x) = CURVE_DENOMINATOR + (3x^2 - 2x^3 / XCAP) * HEIGHT / XCAP^2
/// ```
///
/// with `x` clamped to `XCAP` and `/` denoting floor division. The ordering
/// is fixed: the difference is formed first, then scaled by `HEIGHT`, then
/// divided by `XCAP^2`. Intermediate products exceed 64 bits for large
/// subchain difficulties downstream, so the result stays in `BigUint`.
pub fn polynomial_v(x: u64) -> BigUint {
    let x = BigUint::from(x.min(XCAP));
    let xcap = BigUint::from(XCAP);

    // 3 * x^2
    let a = &x * &x * 3u32;

    // 2 * x^3 // xcap
    let b = &x * &x * &x * 2u32 / &xcap;

    // (3 * x^2 - 2 * x^3 // xcap) * height // xcap^2
    let p = (a - b) * HEIGHT / (&xcap * &xcap);

    p + CURVE_DENOMINATOR
}

/// Exponential reference curve `1.0001^x`. Not part of the consensus gate.
pub fn exp_a(x: f64) -> f64 {
    1.0001f64.powf(x)
}

/// Exponential reference curve `x^(x * 0.00002)`. Not part of the
/// consensus gate.
pub fn exp_b(x: f64) -> f64 {
    x.powf(x * 0.00002)
}

/// Sinusoidal reference curve, amplitude 15, period divisor 8000, capped at
/// its first peak. Not part of the consensus gate.
pub fn sinusoidal_a(x: f64) -> f64 {
    let ampl = 15.0;
    let period_divisor = 8_000.0;
    let phase_shift = std::f64::consts::PI * period_divisor * 1.5;
    let peak_x = std::f64::consts::PI * period_divisor;
    let x = x.min(peak_x);
    ampl * ((x + phase_shift) / period_divisor).sin() + ampl + 1.0
}
