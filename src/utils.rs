/// The largest value the 12 bit converters can represent, used for both ADC inputs and DAC/PWM outputs
pub const FULL_SCALE: u16 = 4095;

/// `linear_interp(y0, y1, frac)` is linear interpolation of `y0` and `y1` with fraction `frac`
///
/// # Arguments:
///
/// * `y0`, `y1` - The two y-values, a straight line can be drawn through these with an x-distance of 1.0
///
/// * `frac` - The fractional x-distance, in `[0.0, 1.0]`
pub fn linear_interp(y0: f32, y1: f32, frac: f32) -> f32 {
    y0 + ((y1 - y0) * frac)
}

/// Returns the base 2 logarithm of the number, rounded down.
///
/// When `x` is zero the result is undefined
pub const fn ilog_2(x: usize) -> u32 {
    let mut x_ = x;
    let mut res = 0;
    while 1 < x_ {
        x_ /= 2;
        res += 1;
    }
    res
}

/// `normalize(raw)` is the raw 12 bit ADC reading `raw` as a number in `[0.0, 1.0]`
///
/// Readings above full scale are clamped.
pub fn normalize(raw: u16) -> f32 {
    raw.min(FULL_SCALE) as f32 / FULL_SCALE as f32
}

/// `to_converter(v)` is the value `v` truncated into the 12 bit DAC/PWM range `[0, 4095]`
///
/// Negative values and NaN map to zero, values above full scale saturate.
pub fn to_converter(v: f32) -> u16 {
    if v >= FULL_SCALE as f32 {
        FULL_SCALE
    } else if v > 0.0 {
        v as u16
    } else {
        0
    }
}

/// `is_almost(v1, v2, e)` is true iff `v1` is within `e` of `v2`
pub fn is_almost(v1: f32, v2: f32, eps: f32) -> bool {
    fabs(v1 - v2) <= eps
}

/// `fabs(v)` is the absolute value of `v`
pub fn fabs(v: f32) -> f32 {
    if v < 0.0 {
        -v
    } else {
        v
    }
}
