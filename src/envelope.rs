//! # Gate driven envelopes
//!
//! Two simple envelopes are driven by the same gate input:
//!
//! - Ramp: rises while the gate is high and holds at the level bound
//! - Swell: rises while the gate is high, turns around at the level bound and falls back to zero
//!
//! Each envelope has a rate and a level control. The rate and level both scale how fast the envelope moves, and the
//! level also sets the top of its travel. When the gate goes low both envelopes return to zero in a straight line at a
//! fixed speed instead of dropping out abruptly, and the swell is re-armed to rise on the next gate.
//!
//! Outputs are normalized to `[0.0, 1.0]`. The swell falls more slowly than it rises, a swell that decays gently
//! sounds better than a symmetrical one.
//!
//! There are no error states, every value is clamped.

use crate::utils::*;

/// Per tick rise of the ramp with both rate and level at full scale
pub const RAMP_INCREMENT: f32 = 1.0 / 2_000.0;

/// Per tick rise of the swell with both rate and level at full scale
pub const SWELL_INCREMENT: f32 = 2.0 * RAMP_INCREMENT;

/// Per tick fall of both envelopes after the gate goes low
pub const RELEASE_INCREMENT: f32 = 1.0 / 400.0;

/// Direction multiplier for a rising swell
pub const SWELL_RISE: f32 = 1.0;

/// Direction multiplier for a falling swell, smaller in magnitude than the rise
pub const SWELL_FALL: f32 = -0.5;

/// Envelope shapes are represented here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    Ramp,
    Swell,
}

/// A gate driven envelope is represented here
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    shape: Shape,
    value: f32,

    /// Only used by the swell, flips negative at the top of the rise
    direction: f32,
}

impl Envelope {
    /// `Envelope::new(s)` is a new envelope with shape `s` resting at zero
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            value: 0.0,
            direction: SWELL_RISE,
        }
    }

    /// `env.tick(gate, rate, level)` advances the envelope by 1 tick, must be called at the tick rate
    ///
    /// # Arguments
    ///
    /// * `gate` - true while the gate input is active
    ///
    /// * `rate`, `level` - the raw 12 bit readings of the envelope's rate and level controls
    pub fn tick(&mut self, gate: bool, rate: u16, level: u16) {
        if !gate {
            self.value = (self.value - RELEASE_INCREMENT).max(0.0);
            self.direction = SWELL_RISE;
            return;
        }

        let rate = normalize(rate);
        let level = normalize(level);

        match self.shape {
            Shape::Ramp => {
                self.value = (self.value + RAMP_INCREMENT * level * rate).min(level);
            }
            Shape::Swell => {
                let next = self.value + SWELL_INCREMENT * level * rate * self.direction;
                if level <= next {
                    // reached the top, hold here and start heading back down from the next tick
                    self.direction = SWELL_FALL;
                    self.value = self.value.min(level);
                } else {
                    self.value = next.max(0.0);
                }
            }
        }
    }

    /// `env.value()` is the current value of the envelope in `[0.0, 1.0]`
    pub fn value(&self) -> f32 {
        self.value
    }

    /// `env.is_falling()` is true iff this is a swell on its way back down
    pub fn is_falling(&self) -> bool {
        self.direction < 0.0
    }

    /// `env.dac_value()` is the envelope output scaled for its 12 bit DAC
    pub fn dac_value(&self) -> u16 {
        to_converter(self.value * FULL_SCALE as f32)
    }

    /// `env.led_value()` is the PWM duty for the envelope's indicator LED
    ///
    /// The ramp LED follows the square of the output so its brightness looks linear, the swell LED follows the output.
    pub fn led_value(&self) -> u16 {
        match self.shape {
            Shape::Ramp => to_converter(self.value * self.value * FULL_SCALE as f32),
            Shape::Swell => self.dac_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_rises_to_level_then_releases_at_fixed_speed() {
        let mut ramp = Envelope::new(Shape::Ramp);

        let mut last = ramp.value();
        let mut clamped_after = None;
        for t in 0..3_000 {
            ramp.tick(true, FULL_SCALE, FULL_SCALE);
            if clamped_after.is_none() {
                if ramp.value() == 1.0 {
                    clamped_after = Some(t);
                } else {
                    assert!(last < ramp.value());
                }
            } else {
                assert_eq!(ramp.value(), 1.0);
            }
            last = ramp.value();
        }
        assert!(clamped_after.is_some());

        // straight line back down, then rest at zero
        let epsilon = 0.00001;
        let mut expected = 1.0_f32;
        while 0.0 < expected {
            ramp.tick(false, FULL_SCALE, FULL_SCALE);
            expected = (expected - RELEASE_INCREMENT).max(0.0);
            assert!(is_almost(ramp.value(), expected, epsilon));
        }
        for _ in 0..100 {
            ramp.tick(false, FULL_SCALE, FULL_SCALE);
            assert_eq!(ramp.value(), 0.0);
        }
    }

    #[test]
    fn ramp_is_bounded_by_level() {
        let mut ramp = Envelope::new(Shape::Ramp);
        let level = 1_000;

        for _ in 0..20_000 {
            ramp.tick(true, FULL_SCALE, level);
            assert!(ramp.value() <= normalize(level));
        }
        assert!(is_almost(ramp.value(), normalize(level), 0.00001));

        // turning the level down while the gate is held pulls the output down with it
        ramp.tick(true, FULL_SCALE, 500);
        assert!(ramp.value() <= normalize(500));
    }

    #[test]
    fn zero_rate_or_level_holds_the_ramp_at_zero() {
        let mut ramp = Envelope::new(Shape::Ramp);
        for _ in 0..1_000 {
            ramp.tick(true, 0, FULL_SCALE);
            ramp.tick(true, FULL_SCALE, 0);
        }
        assert_eq!(ramp.value(), 0.0);
        assert_eq!(ramp.dac_value(), 0);
    }

    #[test]
    fn swell_falls_slower_than_it_rises() {
        let mut swell = Envelope::new(Shape::Swell);

        let mut rise_ticks = 0;
        while !swell.is_falling() {
            swell.tick(true, FULL_SCALE, FULL_SCALE);
            rise_ticks += 1;
            assert!(rise_ticks < 10_000);
        }

        let mut fall_ticks = 0;
        while 0.0 < swell.value() {
            swell.tick(true, FULL_SCALE, FULL_SCALE);
            fall_ticks += 1;
            assert!(fall_ticks < 10_000);
        }

        assert!(rise_ticks < fall_ticks);
        assert!(SWELL_FALL.abs() < SWELL_RISE.abs());

        // stays at the floor for as long as the gate is held
        for _ in 0..100 {
            swell.tick(true, FULL_SCALE, FULL_SCALE);
            assert_eq!(swell.value(), 0.0);
        }
    }

    #[test]
    fn release_rearms_the_swell() {
        let mut swell = Envelope::new(Shape::Swell);
        while !swell.is_falling() {
            swell.tick(true, FULL_SCALE, FULL_SCALE);
        }

        swell.tick(false, FULL_SCALE, FULL_SCALE);
        assert!(!swell.is_falling());
    }

    #[test]
    fn outputs_stay_in_bounds_for_any_gate_pattern() {
        let mut ramp = Envelope::new(Shape::Ramp);
        let mut swell = Envelope::new(Shape::Swell);

        // a cheap deterministic pseudo random gate and level pattern
        let mut seed = 0x1234_5678_u32;
        for _ in 0..50_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let gate = seed & 0x100 != 0;
            let level = (seed >> 20) as u16 & 0x0FFF;
            let rate = (seed >> 4) as u16 & 0x0FFF;

            let ramp_before = ramp.value();
            ramp.tick(gate, rate, level);
            swell.tick(gate, rate, level);

            for env in [ramp, swell] {
                assert!(0.0 <= env.value() && env.value() <= 1.0);
                if gate {
                    assert!(env.value() <= normalize(level));
                }
            }
            if !gate {
                assert!(is_almost(
                    ramp.value(),
                    (ramp_before - RELEASE_INCREMENT).max(0.0),
                    0.00001
                ));
            }
        }
    }

    #[test]
    fn ramp_led_is_squared() {
        let mut ramp = Envelope::new(Shape::Ramp);
        for _ in 0..1_000 {
            ramp.tick(true, FULL_SCALE, FULL_SCALE);
        }
        // halfway up, the LED should be at about a quarter
        assert!(is_almost(ramp.value(), 0.5, 0.001));
        assert!(1_020 <= ramp.led_value() && ramp.led_value() <= 1_027);
        assert!(2_045 <= ramp.dac_value() && ramp.dac_value() <= 2_049);
    }
}
