//! Ring progress renderer
//!
//! A circular arc whose filled fraction sweeps in from 0% to a target
//! percentage over 1.5s ease-out, drawn via stroke-dash-offset: the
//! offset starts at the full circumference (arc hidden) and animates
//! down to `circumference * (1 - percent/100)`. The centered numeric
//! label is a nested count-up interpolator. Every instance allocates
//! its own gradient identifier; sharing one would let a sibling ring's
//! gradient definition silently override this one's colors.

use claimsight_animation::{AnimatedCount, AnimatedTween, Easing, SchedulerHandle, Tween};
use claimsight_core::{Color, Gradient, GradientId, Point};

/// Sweep transition duration
pub const SWEEP_DURATION_MS: f32 = 1500.0;

/// Parameters for one ring instance
#[derive(Clone, Copy, Debug)]
pub struct RingSpec {
    /// Filled fraction of the circle, 0-100
    pub percent: f32,
    /// Target of the centered count-up label
    pub display_value: u64,
    /// Outer diameter in pixels
    pub diameter: f32,
    /// Stroke width in pixels; must stay below `diameter / 2`
    pub stroke_width: f32,
    pub color_start: Color,
    pub color_end: Color,
}

impl RingSpec {
    pub fn new(percent: f32, display_value: u64, diameter: f32, stroke_width: f32) -> Self {
        Self {
            percent,
            display_value,
            diameter,
            stroke_width,
            color_start: Color::WHITE,
            color_end: Color::WHITE,
        }
    }

    pub fn with_colors(mut self, start: Color, end: Color) -> Self {
        self.color_start = start;
        self.color_end = end;
        self
    }

    /// Clamp out-of-contract parameters instead of corrupting the render
    ///
    /// `percent` outside 0-100 and `stroke_width >= diameter / 2` are
    /// caller contract violations; they are clamped and logged, never
    /// allowed to crash or distort the geometry.
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=100.0).contains(&self.percent) {
            tracing::warn!(percent = self.percent, "ring percent outside 0..=100, clamping");
            self.percent = self.percent.clamp(0.0, 100.0);
        }
        let max_stroke = self.diameter / 2.0;
        if self.stroke_width >= max_stroke {
            tracing::warn!(
                stroke_width = self.stroke_width,
                diameter = self.diameter,
                "ring stroke too wide for diameter, clamping"
            );
            self.stroke_width = max_stroke - 1.0;
        }
        self
    }

    /// Arc radius: `(diameter - stroke_width) / 2`
    pub fn radius(&self) -> f32 {
        (self.diameter - self.stroke_width) / 2.0
    }

    pub fn circumference(&self) -> f32 {
        2.0 * std::f32::consts::PI * self.radius()
    }

    /// Dash offset once the sweep settles
    pub fn target_dash_offset(&self) -> f32 {
        self.circumference() * (1.0 - self.percent / 100.0)
    }
}

/// A mounted ring with its sweep, label, and gradient
pub struct RingProgress {
    spec: RingSpec,
    gradient_id: GradientId,
    gradient: Gradient,
    sweep: AnimatedTween,
    label: AnimatedCount,
}

impl RingProgress {
    /// Mount a ring, registering its animations with the scheduler
    pub fn mount(handle: &SchedulerHandle, spec: RingSpec) -> Self {
        let spec = spec.sanitized();
        let sweep = AnimatedTween::new(
            handle.clone(),
            Tween::new(
                spec.circumference(),
                spec.target_dash_offset(),
                SWEEP_DURATION_MS,
            )
            .easing(Easing::EaseOut),
        );
        let label = AnimatedCount::new(handle.clone(), spec.display_value);
        let gradient = Gradient::linear(
            Point::ZERO,
            Point::new(spec.diameter, spec.diameter),
            spec.color_start,
            spec.color_end,
        );

        Self {
            spec,
            gradient_id: GradientId::next(),
            gradient,
            sweep,
            label,
        }
    }

    pub fn spec(&self) -> &RingSpec {
        &self.spec
    }

    /// Current stroke-dash-offset of the sweeping arc
    pub fn dash_offset(&self) -> f32 {
        self.sweep.get()
    }

    /// Current value of the centered label
    pub fn label_value(&self) -> u64 {
        self.label.get()
    }

    /// This instance's unique gradient identifier
    pub fn gradient_id(&self) -> GradientId {
        self.gradient_id
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Whether both the sweep and the label have settled
    pub fn is_settled(&self) -> bool {
        !self.sweep.is_playing() && self.label.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimsight_animation::AnimationScheduler;

    fn settle(scheduler: &AnimationScheduler) {
        for _ in 0..80 {
            scheduler.tick(50.0);
        }
    }

    #[test]
    fn test_full_ring_sweeps_to_zero_offset() {
        let scheduler = AnimationScheduler::new();
        let ring = RingProgress::mount(&scheduler.handle(), RingSpec::new(100.0, 145, 100.0, 8.0));

        // Fully hidden before any tick
        assert!((ring.dash_offset() - ring.spec().circumference()).abs() < 1e-3);

        settle(&scheduler);
        assert!(ring.is_settled());
        assert!(ring.dash_offset().abs() < 1e-3);
    }

    #[test]
    fn test_empty_ring_stays_hidden() {
        let scheduler = AnimationScheduler::new();
        let ring = RingProgress::mount(&scheduler.handle(), RingSpec::new(0.0, 0, 100.0, 8.0));

        settle(&scheduler);
        assert!((ring.dash_offset() - ring.spec().circumference()).abs() < 1e-3);
    }

    #[test]
    fn test_half_ring_offset() {
        let spec = RingSpec::new(50.0, 50, 100.0, 8.0);
        assert!((spec.target_dash_offset() - spec.circumference() / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_geometry() {
        let spec = RingSpec::new(100.0, 0, 100.0, 8.0);
        assert!((spec.radius() - 46.0).abs() < 1e-6);
        assert!((spec.circumference() - 2.0 * std::f32::consts::PI * 46.0).abs() < 1e-3);
    }

    #[test]
    fn test_sanitize_clamps_percent_and_stroke() {
        let spec = RingSpec::new(150.0, 0, 100.0, 60.0).sanitized();
        assert_eq!(spec.percent, 100.0);
        assert!(spec.stroke_width < spec.diameter / 2.0);
    }

    #[test]
    fn test_sibling_rings_get_distinct_gradient_ids() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let a = RingProgress::mount(&handle, RingSpec::new(4.0, 4, 50.0, 5.0));
        let b = RingProgress::mount(&handle, RingSpec::new(4.0, 4, 50.0, 5.0));
        assert_ne!(a.gradient_id(), b.gradient_id());
    }

    #[test]
    fn test_label_counts_up_to_display_value() {
        let scheduler = AnimationScheduler::new();
        let ring = RingProgress::mount(&scheduler.handle(), RingSpec::new(100.0, 145, 90.0, 10.0));

        let mut prev = 0;
        for _ in 0..80 {
            scheduler.tick(50.0);
            let v = ring.label_value();
            assert!(v >= prev && v <= 145);
            prev = v;
        }
        assert_eq!(ring.label_value(), 145);
    }
}
