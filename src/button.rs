//! # Debounced push button
//!
//! Mechanical switches bounce, a single physical press shows up as a burst of transitions on the input pin.
//!
//! Both edges are filtered independently against a millisecond clock. A release is only accepted once the button has
//! been down for longer than the debounce window, and a new press is only accepted once the button has been up for
//! longer than the debounce window. Any chatter inside either window is ignored, so one physical press reports
//! exactly one press event.

/// The debounce window for both edges, in milliseconds
pub const DEBOUNCE_MS: u32 = 100;

/// A debounced button is represented here
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedButton {
    /// Time of the accepted press, `None` while the button is considered released
    down: Option<u32>,

    /// Time of the last accepted release
    up: u32,
}

impl DebouncedButton {
    /// `DebouncedButton::new()` is a new button in the released state
    pub fn new() -> Self {
        Self::default()
    }

    /// `btn.pressed(is_down, now)` is true iff a new press was accepted on this call
    ///
    /// # Arguments
    ///
    /// * `is_down` - the current logical state of the button, true when it is being pushed
    ///
    /// * `now_ms` - a monotonic millisecond counter, allowed to wrap
    pub fn pressed(&mut self, is_down: bool, now_ms: u32) -> bool {
        if let Some(down) = self.down {
            if !is_down && DEBOUNCE_MS < now_ms.wrapping_sub(down) {
                self.down = None;
                self.up = now_ms;
            }
        }

        if is_down && self.down.is_none() && DEBOUNCE_MS < now_ms.wrapping_sub(self.up) {
            self.down = Some(now_ms);
            return true;
        }

        false
    }

    /// `btn.is_held()` is true iff the button is in an accepted press
    pub fn is_held(&self) -> bool {
        self.down.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_press_registers_once() {
        let mut btn = DebouncedButton::new();

        assert!(btn.pressed(true, 1_000));
        // holding it down does not repeat
        for t in 1_001..2_000 {
            assert!(!btn.pressed(true, t));
        }
        assert!(btn.is_held());
    }

    #[test]
    fn bounce_train_produces_exactly_one_press() {
        let mut btn = DebouncedButton::new();

        // contacts chatter for 40 milliseconds on the way down and 40 on the way up
        let mut presses = 0;
        for t in 500..540 {
            if btn.pressed(t % 2 == 0, t) {
                presses += 1;
            }
        }
        for t in 540..700 {
            if btn.pressed(true, t) {
                presses += 1;
            }
        }
        for t in 700..740 {
            if btn.pressed(t % 3 == 0, t) {
                presses += 1;
            }
        }
        for t in 740..900 {
            if btn.pressed(false, t) {
                presses += 1;
            }
        }

        assert_eq!(presses, 1);
        assert!(!btn.is_held());
    }

    #[test]
    fn release_is_ignored_inside_the_window() {
        let mut btn = DebouncedButton::new();

        assert!(btn.pressed(true, 1_000));
        // a quick lift inside the window is bounce, not a release
        assert!(!btn.pressed(false, 1_050));
        assert!(btn.is_held());

        assert!(!btn.pressed(false, 1_101));
        assert!(!btn.is_held());
    }

    #[test]
    fn second_press_needs_the_release_window_to_pass() {
        let mut btn = DebouncedButton::new();

        assert!(btn.pressed(true, 1_000));
        assert!(!btn.pressed(false, 1_200));

        // too soon after the accepted release
        assert!(!btn.pressed(true, 1_250));
        assert!(!btn.pressed(false, 1_260));

        assert!(btn.pressed(true, 1_301));
    }

    #[test]
    fn survives_millisecond_counter_wraparound() {
        let mut btn = DebouncedButton::new();
        let start = u32::MAX - 150;

        assert!(btn.pressed(true, start));
        assert!(!btn.pressed(false, start.wrapping_add(120)));
        assert!(btn.pressed(true, start.wrapping_add(240)));
    }
}
