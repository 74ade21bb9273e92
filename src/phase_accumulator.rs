/// A 32 bit phase accumulator is represented here
///
/// The full `u32` range is one cycle. The accumulator wraps modulo `2^32` on its own, that overflow is the
/// periodicity of whatever waveform is read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseAccumulator {
    accumulator: u32,
    increment: u32,
}

impl PhaseAccumulator {
    /// `PhaseAccumulator::new()` is a new phase accumulator at phase zero, standing still
    pub fn new() -> Self {
        Self::default()
    }

    /// `pa.tick()` advances the phase accumulator by the current increment, expected to be called at the tick rate
    pub fn tick(&mut self) {
        self.accumulator = self.accumulator.wrapping_add(self.increment);
    }

    /// `pa.set_increment(i)` sets the number of phase units the accumulator moves per tick
    pub fn set_increment(&mut self, increment: u32) {
        self.increment = increment;
    }

    /// `pa.increment()` is the number of phase units the accumulator moves per tick
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// `pa.phase()` is the current raw phase, one full cycle spans the whole `u32` range
    pub fn phase(&self) -> u32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_phase() {
        let mut pa = PhaseAccumulator::new();
        pa.set_increment(1_000);

        assert_eq!(pa.phase(), 0);
        pa.tick();
        assert_eq!(pa.phase(), 1_000);
    }

    #[test]
    fn zero_increment_stands_still() {
        let mut pa = PhaseAccumulator::new();
        for _ in 0..100 {
            pa.tick();
        }
        assert_eq!(pa.phase(), 0);
    }

    #[test]
    fn advancing_n_times_is_modular_multiplication() {
        let increment = 0x3456_789A_u32;
        let mut pa = PhaseAccumulator::new();
        pa.set_increment(increment);

        let n = 1_001_u64;
        for _ in 0..n {
            pa.tick();
        }
        let expected = ((n * increment as u64) % (1_u64 << 32)) as u32;
        assert_eq!(pa.phase(), expected);
    }

    #[test]
    fn accum_rolls_over() {
        let mut pa = PhaseAccumulator::new();
        // a quarter turn per tick comes back around after 4 ticks
        pa.set_increment(1 << 30);

        for _ in 0..3 {
            pa.tick();
        }
        assert_eq!(pa.phase(), 3 << 30);

        pa.tick();
        assert_eq!(pa.phase(), 0);
    }
}
