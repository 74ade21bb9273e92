//! # External clock synchronization
//!
//! When a clock is patched into the module the first LFO locks to it. The time between clock edges is measured in
//! ticks, and the rate control no longer sets a free running speed but instead picks a multiplier or divider of the
//! clock from a ladder of six bands.
//!
//! The clock is only trusted while edges keep arriving, once a second goes by without an edge the LFO falls back to
//! free running.
//!
//! Analog controls are noisy. To stop the multiplier from fluttering when the rate control sits right on a band edge,
//! a new reading is only adopted when it moves far enough away from the last adopted reading.

use crate::engine::TICK_RATE_HZ;

/// The clock counts as present only if an edge arrived within this many ticks
pub const CLOCK_TIMEOUT_TICKS: u32 = TICK_RATE_HZ;

/// Readings within this distance of the last adopted reading are treated as noise
pub const HYSTERESIS_MARGIN: i32 = 20;

/// Upper edges of the first five bands, the 12 bit control range split into sixths
pub const BAND_EDGES: [i32; 5] = [682, 1365, 2048, 2731, 3413];

/// The multiplier picked by each band, lowest band first
pub const BAND_MULTIPLIERS: [f32; 6] = [8.0, 4.0, 2.0, 1.0, 0.5, 0.25];

/// The clock edge detector and interval timer is represented here
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSync {
    /// Free running tick count, allowed to wrap
    counter: u32,

    /// Tick count at the most recent rising edge, `None` until the first edge
    last_edge: Option<u32>,

    /// Ticks between the two most recent edges, `None` until two edges have been seen
    interval: Option<u32>,

    /// Level of the clock input on the previous tick
    was_high: bool,

    valid: bool,
}

impl ClockSync {
    /// `ClockSync::new()` is a new clock detector which has not seen any edges
    pub fn new() -> Self {
        Self::default()
    }

    /// `clk.tick(high)` samples the clock input once, must be called at the tick rate
    ///
    /// # Arguments
    ///
    /// * `high` - true while the clock input is active
    pub fn tick(&mut self, high: bool) {
        if high {
            if !self.was_high {
                if let Some(last) = self.last_edge {
                    self.interval = Some(self.counter.wrapping_sub(last));
                }
                self.last_edge = Some(self.counter);
                self.was_high = true;
            }
        } else {
            self.was_high = false;
        }

        self.valid = match (self.last_edge, self.interval) {
            (Some(last), Some(interval)) => {
                0 < interval && self.counter.wrapping_sub(last) < CLOCK_TIMEOUT_TICKS
            }
            _ => false,
        };

        self.counter = self.counter.wrapping_add(1);
    }

    /// `clk.is_valid()` is true iff a measured clock is present and fresh
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `clk.interval()` is the number of ticks between the two most recent clock edges, if measured
    pub fn interval(&self) -> Option<u32> {
        self.interval
    }
}

/// The hysteresis guarded clock multiplier of one LFO is represented here
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockMultiplier {
    /// The reading the current multiplier was chosen from, `None` until the first reading
    adopted: Option<i32>,
    multiplier: f32,
}

impl Default for ClockMultiplier {
    fn default() -> Self {
        Self {
            adopted: None,
            multiplier: 1.0,
        }
    }
}

impl ClockMultiplier {
    /// `ClockMultiplier::new()` is a new multiplier which will adopt the first reading it sees
    pub fn new() -> Self {
        Self::default()
    }

    /// `cm.update(reading)` is the multiplier after considering the new rate control reading
    ///
    /// # Arguments
    ///
    /// * `reading` - the rate control in raw 12 bit units, already scaled by an envelope if one is routed to the rate
    pub fn update(&mut self, reading: i32) -> f32 {
        let moved = match self.adopted {
            Some(adopted) => HYSTERESIS_MARGIN < (reading - adopted).abs(),
            None => true,
        };

        if moved {
            self.adopted = Some(reading);
            self.multiplier = band_multiplier(reading);
        }

        self.multiplier
    }

    /// `cm.multiplier()` is the current multiplier
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }
}

/// `band_multiplier(reading)` is the multiplier of the band that the raw rate reading falls in
pub fn band_multiplier(reading: i32) -> f32 {
    let band = BAND_EDGES
        .iter()
        .position(|edge| reading < *edge)
        .unwrap_or(BAND_EDGES.len());
    BAND_MULTIPLIERS[band]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// tick `clk` through `n` clock periods of `period` ticks with a 1 tick pulse
    fn run_clock(clk: &mut ClockSync, period: u32, n: u32) {
        for _ in 0..n {
            clk.tick(true);
            for _ in 1..period {
                clk.tick(false);
            }
        }
    }

    #[test]
    fn no_clock_is_never_valid() {
        let mut clk = ClockSync::new();
        for _ in 0..100_000 {
            clk.tick(false);
            assert!(!clk.is_valid());
        }
        assert_eq!(clk.interval(), None);
    }

    #[test]
    fn a_single_edge_is_not_enough() {
        let mut clk = ClockSync::new();
        clk.tick(true);
        for _ in 0..100 {
            clk.tick(true);
        }
        assert!(!clk.is_valid());
    }

    #[test]
    fn measures_the_interval_between_edges() {
        let mut clk = ClockSync::new();
        run_clock(&mut clk, 1_000, 3);

        assert_eq!(clk.interval(), Some(1_000));
        assert!(clk.is_valid());
    }

    #[test]
    fn held_high_input_is_one_edge() {
        let mut clk = ClockSync::new();
        // long pulses, only the rising edge counts
        for _ in 0..3 {
            for _ in 0..300 {
                clk.tick(true);
            }
            for _ in 0..200 {
                clk.tick(false);
            }
        }
        assert_eq!(clk.interval(), Some(500));
    }

    #[test]
    fn clock_times_out_after_a_second() {
        let mut clk = ClockSync::new();
        run_clock(&mut clk, 2_000, 2);
        assert!(clk.is_valid());

        for _ in 0..(CLOCK_TIMEOUT_TICKS - 2_000) {
            clk.tick(false);
        }
        assert!(clk.is_valid());

        clk.tick(false);
        assert!(!clk.is_valid());
    }

    #[test]
    fn bands_split_the_control_range_in_sixths() {
        assert_eq!(band_multiplier(0), 8.0);
        assert_eq!(band_multiplier(681), 8.0);
        assert_eq!(band_multiplier(682), 4.0);
        assert_eq!(band_multiplier(1_364), 4.0);
        assert_eq!(band_multiplier(1_365), 2.0);
        assert_eq!(band_multiplier(2_048), 1.0);
        assert_eq!(band_multiplier(2_731), 0.5);
        assert_eq!(band_multiplier(3_413), 0.25);
        assert_eq!(band_multiplier(4_095), 0.25);
    }

    #[test]
    fn first_reading_is_always_adopted() {
        let mut cm = ClockMultiplier::new();
        assert_eq!(cm.update(5), 8.0);
    }

    #[test]
    fn small_moves_do_not_change_the_multiplier() {
        let mut cm = ClockMultiplier::new();

        // sitting right under a band edge
        assert_eq!(cm.update(2_040), 2.0);

        // noise that crosses the edge is ignored
        for reading in 2_020..=2_060 {
            assert_eq!(cm.update(reading), 2.0);
        }
    }

    #[test]
    fn larger_moves_change_the_multiplier() {
        let mut cm = ClockMultiplier::new();
        assert_eq!(cm.update(2_040), 2.0);

        assert_eq!(cm.update(2_061), 1.0);
        // the new reading is the new anchor
        assert_eq!(cm.update(2_045), 1.0);
        assert_eq!(cm.update(2_041), 1.0);
        assert_eq!(cm.update(2_040), 2.0);
    }
}
