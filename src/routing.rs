//! # Envelope routing
//!
//! Each LFO has two buttons, one for its rate and one for its level. Each press steps that axis through the envelope
//! routing modes in a circle, `None -> Ramp -> Swell -> None`, choosing which envelope (if any) modulates it.
//!
//! The chosen modes are the only settings that survive a power cycle. They are stored as a small plain-old-data
//! struct which is copied by value in and out of the configuration store.

use crate::config::{ConfigSaver, Validator};
use crate::lfo::NUM_LFOS;

/// The envelope modulating one axis of an LFO
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoutingMode {
    #[default]
    None,
    Ramp,
    Swell,
}

impl RoutingMode {
    /// `mode.next()` is the mode one button press after `mode`
    pub fn next(self) -> Self {
        match self {
            RoutingMode::None => RoutingMode::Ramp,
            RoutingMode::Ramp => RoutingMode::Swell,
            RoutingMode::Swell => RoutingMode::None,
        }
    }

    /// `RoutingMode::from_raw(b)` is the mode stored as byte `b`, or `None` if `b` is not a known mode
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(RoutingMode::None),
            1 => Some(RoutingMode::Ramp),
            2 => Some(RoutingMode::Swell),
            _ => None,
        }
    }

    /// `mode.raw()` is the byte used to store `mode`
    pub fn raw(self) -> u8 {
        match self {
            RoutingMode::None => 0,
            RoutingMode::Ramp => 1,
            RoutingMode::Swell => 2,
        }
    }
}

/// The two modulatable axes of an LFO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Rate,
    Level,
}

impl Axis {
    /// Both axes, in storage order
    pub const ALL: [Axis; 2] = [Axis::Rate, Axis::Level];

    fn slot(self) -> usize {
        match self {
            Axis::Rate => 0,
            Axis::Level => 1,
        }
    }
}

/// The persisted routing of every LFO, one raw mode byte per LFO per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoutingSettings {
    modes: [[u8; 2]; NUM_LFOS],
}

impl RoutingSettings {
    /// The number of bytes the settings occupy in a configuration block
    pub const SIZE: usize = 2 * NUM_LFOS;

    /// `rs.mode(lfo, axis)` is the stored mode, unknown bytes read as `RoutingMode::None`
    pub fn mode(&self, lfo: usize, axis: Axis) -> RoutingMode {
        RoutingMode::from_raw(self.modes[lfo][axis.slot()]).unwrap_or_default()
    }

    /// `rs.set_mode(lfo, axis, m)` stores mode `m` for the given LFO axis
    pub fn set_mode(&mut self, lfo: usize, axis: Axis, mode: RoutingMode) {
        self.modes[lfo][axis.slot()] = mode.raw();
    }
}

impl Validator for RoutingSettings {
    /// Anything that is not a known mode, from a corrupted or foreign block, falls back to no routing
    fn validate(&mut self) {
        for raw in self.modes.iter_mut().flatten() {
            if RoutingMode::from_raw(*raw).is_none() {
                *raw = RoutingMode::None.raw();
            }
        }
    }
}

impl ConfigSaver for RoutingSettings {
    fn settings_size(&self) -> usize {
        Self::SIZE
    }

    fn save(&self, buf: &mut [u8]) {
        for (dst, src) in buf.iter_mut().zip(self.modes.iter().flatten()) {
            *dst = *src;
        }
    }

    fn restore(&mut self, buf: &[u8]) {
        for (dst, src) in self.modes.iter_mut().flatten().zip(buf.iter()) {
            *dst = *src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_cycle_through_all_modes() {
        let mut mode = RoutingMode::default();
        assert_eq!(mode, RoutingMode::None);

        mode = mode.next();
        assert_eq!(mode, RoutingMode::Ramp);
        mode = mode.next();
        assert_eq!(mode, RoutingMode::Swell);
        mode = mode.next();
        assert_eq!(mode, RoutingMode::None);
    }

    #[test]
    fn raw_bytes_map_back_to_modes() {
        for mode in [RoutingMode::None, RoutingMode::Ramp, RoutingMode::Swell] {
            assert_eq!(RoutingMode::from_raw(mode.raw()), Some(mode));
        }
        assert_eq!(RoutingMode::from_raw(3), None);
        assert_eq!(RoutingMode::from_raw(0xFF), None);
    }

    #[test]
    fn cold_boot_settings_route_nothing() {
        let rs = RoutingSettings::default();
        for lfo in 0..NUM_LFOS {
            for axis in Axis::ALL {
                assert_eq!(rs.mode(lfo, axis), RoutingMode::None);
            }
        }
    }

    #[test]
    fn save_writes_one_byte_per_axis_in_lfo_order() {
        let mut rs = RoutingSettings::default();
        rs.set_mode(0, Axis::Level, RoutingMode::Ramp);
        rs.set_mode(2, Axis::Rate, RoutingMode::Swell);

        let mut buf = [0xAA_u8; RoutingSettings::SIZE];
        rs.save(&mut buf);
        assert_eq!(buf, [0, 1, 0, 0, 2, 0]);
    }

    #[test]
    fn validator_repairs_foreign_bytes() {
        let mut rs = RoutingSettings::default();
        rs.restore(&[1, 7, 2, 0xFF, 0, 2]);
        rs.validate();

        assert_eq!(rs.mode(0, Axis::Rate), RoutingMode::Ramp);
        assert_eq!(rs.mode(0, Axis::Level), RoutingMode::None);
        assert_eq!(rs.mode(1, Axis::Rate), RoutingMode::Swell);
        assert_eq!(rs.mode(1, Axis::Level), RoutingMode::None);
        assert_eq!(rs.mode(2, Axis::Level), RoutingMode::Swell);

        let mut buf = [0_u8; RoutingSettings::SIZE];
        rs.save(&mut buf);
        assert_eq!(buf, [1, 0, 2, 0, 0, 2]);
    }
}
