//! Scalar tweens
//!
//! A tween moves a value between two endpoints over a fixed duration
//! with an easing curve, optionally after a start delay, optionally
//! looping forever with a linear phase wrap. Every declarative
//! transition in the dashboard (ring sweeps, bar fills, entrances,
//! particle cycles) reduces to one of these.

use crate::easing::Easing;

/// A timed scalar transition
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    looping: bool,
    elapsed_ms: f32,
    playing: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        let duration_ms = if duration_ms > 0.0 {
            duration_ms
        } else {
            tracing::warn!(duration_ms, "tween duration must be positive, clamping");
            f32::EPSILON
        };
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
            looping: false,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Set the easing curve (builder)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set a delay before the transition starts (builder)
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Loop forever, wrapping phase linearly at the end of each cycle
    pub fn loop_infinite(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Start (or restart) from the beginning
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Raw progress through the active cycle (0.0 to 1.0, pre-easing)
    pub fn progress(&self) -> f32 {
        let active = self.elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return 0.0;
        }
        if self.looping {
            (active % self.duration_ms) / self.duration_ms
        } else {
            (active / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * t
    }

    /// Advance by elapsed wall-clock time
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms;
        if !self.looping && self.elapsed_ms - self.delay_ms >= self.duration_ms {
            self.elapsed_ms = self.delay_ms + self.duration_ms;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_endpoint() {
        let mut tween = Tween::new(0.0, 100.0, 1500.0).easing(Easing::EaseOut);
        tween.start();
        tween.tick(1500.0);
        assert!(!tween.is_playing());
        assert!((tween.value() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut tween = Tween::new(0.0, 50.0, 1000.0).delay(300.0);
        tween.start();
        tween.tick(200.0);
        assert_eq!(tween.value(), 0.0);
        assert!(tween.is_playing());

        tween.tick(200.0); // 400ms total, 100ms into the transition
        assert!(tween.value() > 0.0);
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        let mut tween = Tween::new(0.0, 100.0, 1000.0).easing(Easing::EaseOut);
        tween.start();
        tween.tick(500.0);
        // Halfway through an ease-out, more than half the distance is covered
        assert!(tween.value() > 50.0);
    }

    #[test]
    fn test_looping_wraps_phase() {
        let mut tween = Tween::new(0.0, 1.0, 1000.0).loop_infinite();
        tween.start();
        tween.tick(2250.0);
        assert!(tween.is_playing());
        assert!((tween.progress() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_non_positive_duration_is_clamped() {
        let mut tween = Tween::new(0.0, 10.0, 0.0);
        tween.start();
        tween.tick(1.0);
        assert!((tween.value() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_value_monotonic_for_monotonic_easing() {
        let mut tween = Tween::new(0.0, 100.0, 1000.0).easing(Easing::EaseInOut);
        tween.start();
        let mut prev = tween.value();
        for _ in 0..100 {
            tween.tick(10.0);
            let v = tween.value();
            assert!(v >= prev - 1e-5);
            prev = v;
        }
    }
}
