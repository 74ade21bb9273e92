//! # Hardware boundary
//!
//! The engine never touches peripheral registers itself. Once per tick it asks a [`RegisterMap`] for the latest
//! control readings and hands it back a full set of output values. The register map is the only thing that knows
//! about ADC buffers, DAC data registers, PWM compare registers and GPIO pins.
//!
//! All values crossing this boundary are logical. The gate, clock and buttons are active-low on the panel and the
//! mode LEDs are common-anode, it is up to the register map to invert them, see [`PinLevel`].

use crate::lfo::NUM_LFOS;
use crate::routing::{Axis, RoutingMode};

/// One snapshot of every control the engine reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInputs {
    /// Raw 12 bit rate controls of each LFO
    pub lfo_rate: [u16; NUM_LFOS],

    /// Raw 12 bit level controls of each LFO
    pub lfo_level: [u16; NUM_LFOS],

    pub ramp_rate: u16,
    pub ramp_level: u16,
    pub swell_rate: u16,
    pub swell_level: u16,

    /// True while the gate input is active
    pub gate: bool,

    /// True while the clock input is active
    pub clock: bool,

    /// True while the matching rate button is held
    pub rate_buttons: [bool; NUM_LFOS],

    /// True while the matching level button is held
    pub level_buttons: [bool; NUM_LFOS],
}

/// One tick's worth of output values, all in the 12 bit range `[0, 4095]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    /// Main sine output of each LFO
    pub lfo_dac: [u16; NUM_LFOS],

    /// Frequency modulated output, only LFOs with an upstream source have one
    pub fm_dac: [Option<u16>; NUM_LFOS],

    /// LED PWM duty following each LFO's main output
    pub lfo_led: [u16; NUM_LFOS],

    pub ramp_dac: u16,
    pub ramp_led: u16,
    pub swell_dac: u16,
    pub swell_led: u16,
}

/// Addresses one of the four routing indicator LEDs of an LFO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeLed {
    pub lfo: usize,
    pub axis: Axis,

    /// Which of the axis' two LEDs, always `Ramp` or `Swell`
    pub mode: RoutingMode,
}

/// The electrical level of a GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// `level.is_active_low()` is the logical state of an active-low input read at `level`
    pub fn is_active_low(self) -> bool {
        self == PinLevel::Low
    }

    /// `PinLevel::common_anode(lit)` is the pin level that drives a common-anode LED on or off
    pub fn common_anode(lit: bool) -> Self {
        if lit {
            PinLevel::Low
        } else {
            PinLevel::High
        }
    }
}

/// The capability to read the panel and write the outputs, implemented once by the board support layer
pub trait RegisterMap {
    /// `regs.read_inputs()` is the latest reading of every control
    ///
    /// Analog values come straight out of a DMA buffer with no handshake, they only need to be recent.
    fn read_inputs(&mut self) -> ControlInputs;

    /// `regs.write_outputs(o)` writes every DAC and PWM value in `o`
    fn write_outputs(&mut self, outputs: &Outputs);

    /// `regs.set_mode_led(led, lit)` turns one routing indicator LED on or off
    fn set_mode_led(&mut self, led: ModeLed, lit: bool);
}
