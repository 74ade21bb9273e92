//! # Low Frequency Oscillator
//!
//! ## Acronyms used:
//!
//! - `LFO`: Low Frequency Oscillator
//! - `FM`: Frequency Modulation
//! - `DAC`: Digital to Analog Converter
//!
//! Three sine LFOs are chained together. Each one is a 32 bit phase accumulator read through the sine primitive, with
//! its speed set by a rate control and its output amplitude set by a level control. Either control may additionally
//! be scaled by one of the envelopes, see [`crate::routing`].
//!
//! The LFOs are chained with FM: LFO 1 bends the phase of LFO 2, and the result bends the phase of LFO 3. The FM is
//! applied to a copy of the phase right before it is read, the accumulator itself is never disturbed, so every LFO
//! keeps its own steady frequency and additionally offers an FM output.
//!
//! Speed is chosen one of two ways:
//!
//! - Free running: the rate control is squared before being scaled into a phase increment, this spreads the bottom
//!   of the control's travel, where small speed changes are most noticeable, over a larger part of the knob.
//! - Clocked: with a valid external clock the first LFO runs at a multiple of the clock, see [`crate::clock`].

use crate::{
    button::DebouncedButton,
    clock::ClockMultiplier,
    phase_accumulator::PhaseAccumulator,
    routing::{Axis, RoutingMode},
    trig,
    utils::*,
};

/// The number of LFOs in the chain
pub const NUM_LFOS: usize = 3;

/// Phase units of FM offset per unit of upstream output times upstream level
pub const FM_SCALE: f32 = (1 << 18) as f32;

/// The free running phase increment with the rate control at full scale
pub const FREE_RUNNING_SCALE: f32 = 500_000.0;

/// The largest increment ever used, half a cycle per tick
pub const MAX_INCREMENT: u32 = 1 << 31;

/// One full cycle in phase units
const FULL_CYCLE: f32 = 4_294_967_296.0;

/// The current values of both envelopes, as seen by the LFOs, in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvelopeLevels {
    pub ramp: f32,
    pub swell: f32,
}

impl EnvelopeLevels {
    /// `levels.factor(m)` is the scaling applied by routing mode `m`, envelopes not routed leave values unscaled
    pub fn factor(&self, mode: RoutingMode) -> f32 {
        match mode {
            RoutingMode::None => 1.0,
            RoutingMode::Ramp => self.ramp,
            RoutingMode::Swell => self.swell,
        }
    }
}

/// What the next LFO in the chain needs to know about the one before it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FmSource {
    pub output: f32,
    pub fm_output: f32,
    pub out_level: f32,
}

/// A chained sine LFO is represented here
#[derive(Debug, Clone, Copy)]
pub struct Lfo {
    /// Position in the chain, LFO `k > 0` is frequency modulated by LFO `k - 1`
    index: usize,

    phase_accumulator: PhaseAccumulator,

    /// Sine at the accumulator's phase, in `[-1.0, +1.0]`
    output: f32,

    /// Sine at the FM bent phase, in `[-1.0, +1.0]`, only meaningful with an upstream source
    fm_output: f32,

    /// Half the output swing in DAC units, the level control scaled by any routed envelope
    out_level: f32,

    rate_mode: RoutingMode,
    level_mode: RoutingMode,

    rate_button: DebouncedButton,
    level_button: DebouncedButton,

    clock_multiplier: ClockMultiplier,
}

impl Lfo {
    /// `Lfo::new(i)` is a new LFO at position `i` in the chain with nothing routed
    pub fn new(index: usize) -> Self {
        Self {
            index,
            phase_accumulator: PhaseAccumulator::new(),
            output: 0.0,
            fm_output: 0.0,
            out_level: 0.0,
            rate_mode: RoutingMode::None,
            level_mode: RoutingMode::None,
            rate_button: DebouncedButton::new(),
            level_button: DebouncedButton::new(),
            clock_multiplier: ClockMultiplier::new(),
        }
    }

    /// `lfo.tick(rate, level, envs, clock, upstream)` advances the LFO by 1 tick, must be called at the tick rate
    ///
    /// # Arguments
    ///
    /// * `rate`, `level` - the raw 12 bit readings of this LFO's controls
    ///
    /// * `envs` - the envelope values of this tick
    ///
    /// * `clock_interval` - the measured clock period in ticks if this LFO should follow a valid clock
    ///
    /// * `upstream` - the previous LFO in the chain, already ticked this tick, ignored by the first LFO
    pub fn tick(
        &mut self,
        rate: u16,
        level: u16,
        envs: EnvelopeLevels,
        clock_interval: Option<u32>,
        upstream: Option<FmSource>,
    ) {
        self.out_level = level.min(FULL_SCALE) as f32 * 0.5 * envs.factor(self.level_mode);

        let increment = match clock_interval {
            Some(interval) if 0 < interval => self.clocked_increment(rate, envs, interval),
            _ => self.free_running_increment(rate, envs),
        };
        self.phase_accumulator.set_increment(increment);
        self.phase_accumulator.tick();

        let phase = self.phase_accumulator.phase();
        self.output = trig::sin(phase);

        if let Some(up) = upstream.filter(|_| 0 < self.index) {
            // the second LFO follows the first one's plain sine, later ones follow the FM output before them
            let upstream_value = if self.index == 1 {
                up.output
            } else {
                up.fm_output
            };
            let offset = upstream_value * up.out_level * FM_SCALE;
            self.fm_output = trig::sin(phase.wrapping_add_signed(offset as i32));
        }
    }

    /// `lfo.free_running_increment(rate, envs)` is the phase increment for the rate control without a clock
    fn free_running_increment(&self, rate: u16, envs: EnvelopeLevels) -> u32 {
        let speed = normalize(rate) * envs.factor(self.rate_mode);
        (speed * speed * FREE_RUNNING_SCALE) as u32
    }

    /// `lfo.clocked_increment(rate, envs, interval)` is the phase increment following a clock of `interval` ticks
    fn clocked_increment(&mut self, rate: u16, envs: EnvelopeLevels, interval: u32) -> u32 {
        let reading = (rate.min(FULL_SCALE) as f32 * envs.factor(self.rate_mode)) as i32;
        let multiplier = self.clock_multiplier.update(reading);

        // float to int casts saturate, very short clocks top out at the largest increment
        ((multiplier * FULL_CYCLE / interval as f32) as u32).min(MAX_INCREMENT)
    }

    /// `lfo.poll_button(axis, is_down, now)` polls one of the LFO's buttons and steps its routing mode on a press
    ///
    /// # Returns
    ///
    /// * `Some((old, new))` - the mode changed from `old` to `new`
    ///
    /// * `None` - no press was accepted
    pub fn poll_button(
        &mut self,
        axis: Axis,
        is_down: bool,
        now_ms: u32,
    ) -> Option<(RoutingMode, RoutingMode)> {
        let (button, mode) = match axis {
            Axis::Rate => (&mut self.rate_button, &mut self.rate_mode),
            Axis::Level => (&mut self.level_button, &mut self.level_mode),
        };

        if button.pressed(is_down, now_ms) {
            let old = *mode;
            *mode = old.next();
            Some((old, *mode))
        } else {
            None
        }
    }

    /// `lfo.mode(axis)` is the envelope routed to the given axis
    pub fn mode(&self, axis: Axis) -> RoutingMode {
        match axis {
            Axis::Rate => self.rate_mode,
            Axis::Level => self.level_mode,
        }
    }

    /// `lfo.set_mode(axis, m)` routes envelope mode `m` to the given axis
    pub fn set_mode(&mut self, axis: Axis, mode: RoutingMode) {
        match axis {
            Axis::Rate => self.rate_mode = mode,
            Axis::Level => self.level_mode = mode,
        }
    }

    /// `lfo.fm_source()` is this LFO as seen by the next one in the chain
    pub fn fm_source(&self) -> FmSource {
        FmSource {
            output: self.output,
            fm_output: self.fm_output,
            out_level: self.out_level,
        }
    }

    /// `lfo.has_fm()` is true iff this LFO is modulated by an upstream LFO
    pub fn has_fm(&self) -> bool {
        0 < self.index
    }

    /// `lfo.output()` is the current sine output in `[-1.0, +1.0]`
    pub fn output(&self) -> f32 {
        self.output
    }

    /// `lfo.out_level()` is half the current output swing, in DAC units
    pub fn out_level(&self) -> f32 {
        self.out_level
    }

    /// `lfo.increment()` is the phase increment used on the last tick
    pub fn increment(&self) -> u32 {
        self.phase_accumulator.increment()
    }

    /// `lfo.phase()` is the current phase of the accumulator
    pub fn phase(&self) -> u32 {
        self.phase_accumulator.phase()
    }

    /// `lfo.dac_value()` is the main output shifted from bipolar into the unipolar DAC range
    pub fn dac_value(&self) -> u16 {
        to_converter((self.output + 1.0) * self.out_level)
    }

    /// `lfo.fm_dac_value()` is the FM output shifted into the DAC range, if this LFO has an upstream source
    pub fn fm_dac_value(&self) -> Option<u16> {
        self.has_fm()
            .then(|| to_converter((self.fm_output + 1.0) * self.out_level))
    }

    /// `lfo.clock_multiplier()` is the multiplier currently chosen for clocked operation
    pub fn clock_multiplier(&self) -> f32 {
        self.clock_multiplier.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ENVS: EnvelopeLevels = EnvelopeLevels {
        ramp: 0.0,
        swell: 0.0,
    };

    #[test]
    fn free_running_increment_is_the_squared_rate() {
        let mut lfo = Lfo::new(0);

        lfo.tick(FULL_SCALE, FULL_SCALE, NO_ENVS, None, None);
        assert_eq!(lfo.increment(), FREE_RUNNING_SCALE as u32);

        lfo.tick(0, FULL_SCALE, NO_ENVS, None, None);
        assert_eq!(lfo.increment(), 0);

        // half the knob is a quarter of the speed
        lfo.tick(2048, FULL_SCALE, NO_ENVS, None, None);
        let quarter = FREE_RUNNING_SCALE as u32 / 4;
        assert!(quarter - 500 < lfo.increment() && lfo.increment() < quarter + 500);
    }

    #[test]
    fn increment_is_monotonic_in_the_rate() {
        let mut lfo = Lfo::new(0);
        let mut last = 0;
        for rate in (0..=FULL_SCALE).step_by(16) {
            lfo.tick(rate, FULL_SCALE, NO_ENVS, None, None);
            assert!(last <= lfo.increment());
            last = lfo.increment();
        }
    }

    #[test]
    fn ramp_routed_to_rate_at_zero_freezes_the_lfo() {
        let mut lfo = Lfo::new(0);
        lfo.set_mode(Axis::Rate, RoutingMode::Ramp);

        for _ in 0..1_000 {
            lfo.tick(FULL_SCALE, FULL_SCALE, NO_ENVS, None, None);
            assert_eq!(lfo.increment(), 0);
            assert_eq!(lfo.phase(), 0);
        }

        let rising = EnvelopeLevels {
            ramp: 0.1,
            swell: 0.0,
        };
        lfo.tick(FULL_SCALE, FULL_SCALE, rising, None, None);
        assert!(0 < lfo.increment());
    }

    #[test]
    fn level_sets_the_output_swing() {
        let mut lfo = Lfo::new(0);

        lfo.tick(FULL_SCALE, FULL_SCALE, NO_ENVS, None, None);
        assert!(is_almost(lfo.out_level(), 2047.5, 0.001));

        // routed to a swell sitting at a quarter
        lfo.set_mode(Axis::Level, RoutingMode::Swell);
        let envs = EnvelopeLevels {
            ramp: 1.0,
            swell: 0.25,
        };
        lfo.tick(FULL_SCALE, FULL_SCALE, envs, None, None);
        assert!(is_almost(lfo.out_level(), 2047.5 * 0.25, 0.001));
    }

    #[test]
    fn zero_level_sits_at_the_bottom_of_the_dac() {
        let mut lfo = Lfo::new(1);
        let upstream = FmSource {
            output: 1.0,
            fm_output: 0.5,
            out_level: 2047.5,
        };
        for _ in 0..1_000 {
            lfo.tick(FULL_SCALE, 0, NO_ENVS, None, Some(upstream));
            assert_eq!(lfo.dac_value(), 0);
            assert_eq!(lfo.fm_dac_value(), Some(0));
        }
    }

    #[test]
    fn output_stays_in_the_dac_range() {
        let mut lfo = Lfo::new(0);
        let mut lowest = u16::MAX;
        let mut highest = 0;
        for _ in 0..20_000 {
            lfo.tick(FULL_SCALE, FULL_SCALE, NO_ENVS, None, None);
            lowest = lowest.min(lfo.dac_value());
            highest = highest.max(lfo.dac_value());
        }
        assert!(lowest < 5);
        assert!(4_090 < highest && highest <= FULL_SCALE);
    }

    #[test]
    fn clocked_lfo_completes_a_cycle_per_interval_over_multiplier() {
        let mut lfo = Lfo::new(0);
        let interval = 4_000;

        // a reading in the middle band gives a multiplier of 1
        lfo.tick(2_400, FULL_SCALE, NO_ENVS, Some(interval), None);
        assert_eq!(lfo.clock_multiplier(), 1.0);
        let expected = (FULL_CYCLE / interval as f32) as u32;
        assert_eq!(lfo.increment(), expected);

        // the top band gives a quarter
        lfo.tick(4_000, FULL_SCALE, NO_ENVS, Some(interval), None);
        assert_eq!(lfo.clock_multiplier(), 0.25);
        let expected = (0.25 * FULL_CYCLE / interval as f32) as u32;
        assert_eq!(lfo.increment(), expected);
    }

    #[test]
    fn clocked_rate_ignores_small_wobbles() {
        let mut lfo = Lfo::new(0);
        lfo.tick(2_040, FULL_SCALE, NO_ENVS, Some(1_000), None);
        let settled = lfo.increment();

        for rate in [2_050, 2_055, 2_030, 2_060] {
            lfo.tick(rate, FULL_SCALE, NO_ENVS, Some(1_000), None);
            assert_eq!(lfo.increment(), settled);
        }
    }

    #[test]
    fn very_short_clocks_are_capped() {
        let mut lfo = Lfo::new(0);
        lfo.tick(0, FULL_SCALE, NO_ENVS, Some(1), None);
        assert_eq!(lfo.increment(), MAX_INCREMENT);
    }

    #[test]
    fn first_lfo_has_no_fm() {
        let lfo = Lfo::new(0);
        assert!(!lfo.has_fm());
        assert_eq!(lfo.fm_dac_value(), None);
    }

    #[test]
    fn silent_upstream_leaves_fm_output_equal_to_output() {
        let mut lfo = Lfo::new(1);
        let silent = FmSource {
            output: 1.0,
            fm_output: 1.0,
            out_level: 0.0,
        };
        for _ in 0..500 {
            lfo.tick(3_000, FULL_SCALE, NO_ENVS, None, Some(silent));
            assert_eq!(lfo.output(), lfo.fm_source().fm_output);
        }
    }

    #[test]
    fn fm_bends_the_phase_by_the_scaled_upstream() {
        let mut lfo = Lfo::new(1);
        let upstream = FmSource {
            output: 1.0,
            fm_output: -1.0,
            out_level: 1_024.0,
        };
        lfo.tick(3_000, FULL_SCALE, NO_ENVS, None, Some(upstream));

        // the second LFO follows the plain output of the first
        let offset = (1_024.0 * FM_SCALE) as i32;
        let expected = trig::sin(lfo.phase().wrapping_add_signed(offset));
        assert_eq!(lfo.fm_source().fm_output, expected);

        // the third follows the FM output of the second
        let mut third = Lfo::new(2);
        third.tick(3_000, FULL_SCALE, NO_ENVS, None, Some(upstream));
        let expected = trig::sin(third.phase().wrapping_add_signed(-offset));
        assert_eq!(third.fm_source().fm_output, expected);
    }

    #[test]
    fn fm_offset_wraps_below_zero() {
        let mut lfo = Lfo::new(1);
        let upstream = FmSource {
            output: -1.0,
            fm_output: 0.0,
            out_level: 2047.5,
        };
        // the accumulator sits just past zero, the negative offset wraps round to the top of the cycle
        lfo.tick(100, FULL_SCALE, NO_ENVS, None, Some(upstream));
        assert!(lfo.phase() < 1_000);
        let wrapped = lfo
            .phase()
            .wrapping_sub((2047.5 * FM_SCALE) as u32);
        assert_eq!(lfo.fm_source().fm_output, trig::sin(wrapped));
        assert!(lfo.fm_source().fm_output < 0.0);
    }
}
