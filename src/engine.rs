//! # Modulation engine
//!
//! The engine owns every piece of real time state and is ticked once per period of the tick timer. Each tick it:
//!
//! 1. reads a snapshot of the panel through the [`RegisterMap`]
//! 2. polls the routing buttons, updating the mode LEDs and booking a settings save on every change
//! 3. samples the clock input
//! 4. steps the ramp and swell envelopes
//! 5. steps the three LFOs in chain order, each one seeing the one before it
//! 6. writes every output back through the [`RegisterMap`]
//!
//! Nothing in here blocks or allocates. Saving the routing is left to the idle loop, the engine only books it.

use crate::{
    clock::ClockSync,
    config::SaveScheduler,
    envelope::{Envelope, Shape},
    io::{ControlInputs, ModeLed, Outputs, RegisterMap},
    lfo::{EnvelopeLevels, Lfo, NUM_LFOS},
    routing::{Axis, RoutingMode, RoutingSettings},
};

/// The rate at which [`Engine::tick`] must be called
pub const TICK_RATE_HZ: u32 = 40_000;

/// The one LFO that follows the external clock
pub const CLOCKED_LFO: usize = 0;

/// The modulation engine is represented here
#[derive(Debug, Clone)]
pub struct Engine {
    lfos: [Lfo; NUM_LFOS],
    ramp: Envelope,
    swell: Envelope,
    clock: ClockSync,
    outputs: Outputs,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// `Engine::new()` is a new engine at rest with nothing routed
    pub fn new() -> Self {
        Self {
            lfos: [Lfo::new(0), Lfo::new(1), Lfo::new(2)],
            ramp: Envelope::new(Shape::Ramp),
            swell: Envelope::new(Shape::Swell),
            clock: ClockSync::new(),
            outputs: Outputs::default(),
        }
    }

    /// `engine.init(regs)` drives every mode LED to show the current routing
    ///
    /// Call once at boot after the routing has been restored, and again after [`Engine::apply_routing_settings`].
    pub fn init<R: RegisterMap>(&self, regs: &mut R) {
        for (i, lfo) in self.lfos.iter().enumerate() {
            for axis in Axis::ALL {
                show_mode(regs, i, axis, lfo.mode(axis));
            }
        }
    }

    /// `engine.tick(regs, now, saves)` runs the engine for 1 tick, must be called at `TICK_RATE_HZ`
    ///
    /// # Arguments
    ///
    /// * `regs` - the panel and outputs
    ///
    /// * `now_ms` - a monotonic millisecond counter for the button debouncers, allowed to wrap
    ///
    /// * `saves` - where a settings save is booked when the routing changes
    pub fn tick<R: RegisterMap>(&mut self, regs: &mut R, now_ms: u32, saves: &SaveScheduler) {
        let inputs = regs.read_inputs();

        self.poll_buttons(regs, &inputs, now_ms, saves);

        self.clock.tick(inputs.clock);

        self.ramp.tick(inputs.gate, inputs.ramp_rate, inputs.ramp_level);
        self.swell.tick(inputs.gate, inputs.swell_rate, inputs.swell_level);
        let envs = EnvelopeLevels {
            ramp: self.ramp.value(),
            swell: self.swell.value(),
        };

        let clock_interval = if self.clock.is_valid() {
            self.clock.interval()
        } else {
            None
        };

        let mut upstream = None;
        for (i, lfo) in self.lfos.iter_mut().enumerate() {
            let clock = if i == CLOCKED_LFO { clock_interval } else { None };
            lfo.tick(inputs.lfo_rate[i], inputs.lfo_level[i], envs, clock, upstream);
            upstream = Some(lfo.fm_source());

            self.outputs.lfo_dac[i] = lfo.dac_value();
            self.outputs.lfo_led[i] = lfo.dac_value();
            self.outputs.fm_dac[i] = lfo.fm_dac_value();
        }

        self.outputs.ramp_dac = self.ramp.dac_value();
        self.outputs.ramp_led = self.ramp.led_value();
        self.outputs.swell_dac = self.swell.dac_value();
        self.outputs.swell_led = self.swell.led_value();

        regs.write_outputs(&self.outputs);
    }

    fn poll_buttons<R: RegisterMap>(
        &mut self,
        regs: &mut R,
        inputs: &ControlInputs,
        now_ms: u32,
        saves: &SaveScheduler,
    ) {
        for (i, lfo) in self.lfos.iter_mut().enumerate() {
            for axis in Axis::ALL {
                let is_down = match axis {
                    Axis::Rate => inputs.rate_buttons[i],
                    Axis::Level => inputs.level_buttons[i],
                };

                if let Some((_old, new)) = lfo.poll_button(axis, is_down, now_ms) {
                    show_mode(regs, i, axis, new);
                    saves.schedule(now_ms);

                    #[cfg(feature = "defmt")]
                    defmt::debug!("lfo {} {} routing {} -> {}", i, axis, _old, new);
                }
            }
        }
    }

    /// `engine.routing_settings()` is a copy of the current routing, ready to be saved
    pub fn routing_settings(&self) -> RoutingSettings {
        let mut settings = RoutingSettings::default();
        for (i, lfo) in self.lfos.iter().enumerate() {
            for axis in Axis::ALL {
                settings.set_mode(i, axis, lfo.mode(axis));
            }
        }
        settings
    }

    /// `engine.apply_routing_settings(rs)` takes over the routing in `rs`, typically just restored from flash
    pub fn apply_routing_settings(&mut self, settings: &RoutingSettings) {
        for (i, lfo) in self.lfos.iter_mut().enumerate() {
            for axis in Axis::ALL {
                lfo.set_mode(axis, settings.mode(i, axis));
            }
        }
    }

    /// `engine.lfo(i)` is LFO `i` of the chain
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than `NUM_LFOS`
    pub fn lfo(&self, i: usize) -> &Lfo {
        &self.lfos[i]
    }

    pub fn ramp(&self) -> &Envelope {
        &self.ramp
    }

    pub fn swell(&self) -> &Envelope {
        &self.swell
    }

    pub fn clock(&self) -> &ClockSync {
        &self.clock
    }

    /// `engine.outputs()` is what was written on the last tick
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }
}

/// Light the LED of the active mode of one axis and turn the other one off, `None` leaves both dark
fn show_mode<R: RegisterMap>(regs: &mut R, lfo: usize, axis: Axis, active: RoutingMode) {
    for mode in [RoutingMode::Ramp, RoutingMode::Swell] {
        regs.set_mode_led(ModeLed { lfo, axis, mode }, mode == active);
    }
}
