//! # Trigonometric primitive
//!
//! Maps a 32 bit phase, where the full `u32` range covers exactly one turn, to a sine or cosine amplitude.
//!
//! A table of one sine cycle is indexed with the top bits of the phase and the remaining bits are used to linearly
//! interpolate between neighboring points. The point after the last table entry is the first entry again, so the
//! output is continuous across the `u32::MAX -> 0` wraparound.

use crate::{lookup_tables, utils::*};

/// The number of phase bits used to index the sine table
const NUM_INDEX_BITS: u32 = ilog_2(lookup_tables::SINE_LUT_SIZE);

/// The number of phase bits left over for interpolation
const NUM_FRACTION_BITS: u32 = u32::BITS - NUM_INDEX_BITS;

const FRACTION_MASK: u32 = (1 << NUM_FRACTION_BITS) - 1;

/// One quarter turn in phase units
pub const QUARTER_TURN: u32 = 1 << 30;

/// `sin(phase)` is the sine of the angle `phase / 2^32` turns, in `[-1.0, +1.0]`
pub fn sin(phase: u32) -> f32 {
    let lut_idx = (phase >> NUM_FRACTION_BITS) as usize;
    let next_lut_idx = (lut_idx + 1) & (lookup_tables::SINE_LUT_SIZE - 1);
    let frac = (phase & FRACTION_MASK) as f32 / (1_u32 << NUM_FRACTION_BITS) as f32;

    linear_interp(
        lookup_tables::SINE_TABLE[lut_idx],
        lookup_tables::SINE_TABLE[next_lut_idx],
        frac,
    )
}

/// `cos(phase)` is the cosine of the angle `phase / 2^32` turns, in `[-1.0, +1.0]`
pub fn cos(phase: u32) -> f32 {
    sin(phase.wrapping_add(QUARTER_TURN))
}

/// `sin_dac(phase)` is the sine of `phase` pre-scaled into the unipolar 12 bit output range `[0, 4095]`
pub fn sin_dac(phase: u32) -> u16 {
    to_converter((sin(phase) + 1.0) * (FULL_SCALE as f32 / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn cardinal_points() {
        let epsilon = 0.0001;
        assert!(is_almost(sin(0), 0.0, epsilon));
        assert!(is_almost(sin(QUARTER_TURN), 1.0, epsilon));
        assert!(is_almost(sin(2 * QUARTER_TURN), 0.0, epsilon));
        assert!(is_almost(sin(3 * QUARTER_TURN), -1.0, epsilon));
        assert!(is_almost(cos(0), 1.0, epsilon));
        assert!(is_almost(cos(2 * QUARTER_TURN), -1.0, epsilon));
    }

    #[test]
    fn matches_float_sine_between_table_points() {
        let epsilon = 0.0001;
        for phase in (0..u32::MAX).step_by(12_345_677) {
            let angle = (phase as f64 / 4_294_967_296.0_f64) * 2.0 * PI;
            assert!(is_almost(sin(phase), angle.sin() as f32, epsilon));
        }
    }

    #[test]
    fn continuous_across_wraparound() {
        // the step across the wrap is no bigger than the step from one phase unit to the next anywhere else
        let resolution = 0.0001;
        assert!(is_almost(sin(u32::MAX), sin(0), resolution));
        assert!(is_almost(cos(u32::MAX), cos(0), resolution));
        assert!(sin(u32::MAX) <= sin(0));
    }

    #[test]
    fn dac_variant_spans_the_output_range() {
        assert_eq!(sin_dac(3 * QUARTER_TURN), 0);
        assert_eq!(sin_dac(QUARTER_TURN), FULL_SCALE);
        assert!(2046 <= sin_dac(0) && sin_dac(0) <= 2048);
    }
}
