//! Count-up interpolator
//!
//! Animates an integer display value from 0 to an exact target over a
//! fixed wall-clock duration, realized as discrete timer ticks. The
//! emitted sequence is monotonically non-decreasing, never exceeds the
//! target, and always lands on the target exactly.

/// Number of discrete ticks a counter runs for
pub const COUNT_STEPS: u32 = 40;

/// Interval between counter ticks, in milliseconds
pub const COUNT_TICK_MS: f32 = 50.0;

/// A timed integer counter from 0 to `target`
///
/// Driven by `tick(dt_ms)` from the scheduler. Internally accumulates
/// a floating-point running total (`target / 40` per tick) and emits
/// its floor, clamped to the target on the final tick. A zero target
/// finishes immediately and consumes no ticks.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    increment: f64,
    total: f64,
    /// Carry-over toward the next 50ms tick boundary
    carry_ms: f32,
    display: u64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / COUNT_STEPS as f64,
            total: 0.0,
            carry_ms: 0.0,
            display: 0,
            finished: target == 0,
        }
    }

    /// The value currently shown
    pub fn value(&self) -> u64 {
        self.display
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the counter has reached its target and stopped ticking
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by elapsed wall-clock time
    ///
    /// Performs as many whole 50ms ticks as `dt_ms` covers; fractional
    /// remainder carries into the next call.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.finished {
            return;
        }

        self.carry_ms += dt_ms;
        while self.carry_ms >= COUNT_TICK_MS && !self.finished {
            self.carry_ms -= COUNT_TICK_MS;
            self.total += self.increment;
            if self.total >= self.target as f64 {
                self.display = self.target;
                self.finished = true;
            } else {
                self.display = self.total.floor() as u64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(counter: &mut CountUp) -> Vec<u64> {
        let mut emissions = vec![counter.value()];
        // Generous upper bound; the counter must stop well before this
        for _ in 0..200 {
            counter.tick(COUNT_TICK_MS);
            emissions.push(counter.value());
            if counter.is_finished() {
                break;
            }
        }
        emissions
    }

    #[test]
    fn test_reaches_target_exactly() {
        for target in [1u64, 7, 40, 145, 256, 10_000] {
            let mut counter = CountUp::new(target);
            let emissions = run_to_completion(&mut counter);
            assert_eq!(*emissions.last().unwrap(), target);
            assert!(counter.is_finished());
        }
    }

    #[test]
    fn test_emissions_monotonic_and_bounded() {
        let mut counter = CountUp::new(256);
        let emissions = run_to_completion(&mut counter);
        for pair in emissions.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(emissions.iter().all(|&v| v <= 256));
    }

    #[test]
    fn test_zero_target_finishes_without_ticking() {
        let mut counter = CountUp::new(0);
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 0);

        counter.tick(COUNT_TICK_MS * 10.0);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_completes_in_forty_ticks() {
        let mut counter = CountUp::new(100);
        let mut ticks = 0;
        while !counter.is_finished() {
            counter.tick(COUNT_TICK_MS);
            ticks += 1;
            assert!(ticks <= COUNT_STEPS, "counter overran its step budget");
        }
        assert_eq!(ticks, COUNT_STEPS);
    }

    #[test]
    fn test_fractional_dt_carries() {
        // Ticks delivered in sub-interval slices must still fire
        let mut counter = CountUp::new(80);
        for _ in 0..300 {
            counter.tick(16.0); // ~60fps frames
            if counter.is_finished() {
                break;
            }
        }
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 80);
    }

    #[test]
    fn test_small_target_never_overshoots() {
        let mut counter = CountUp::new(3);
        let emissions = run_to_completion(&mut counter);
        assert!(emissions.iter().all(|&v| v <= 3));
        assert_eq!(*emissions.last().unwrap(), 3);
    }
}
