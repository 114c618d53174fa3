//! Linear progress renderer
//!
//! A rectangular track whose fill grows from zero to a target fraction
//! of the track width over 1.5s ease-out, after an optional start
//! delay. Groups of bars get monotonically increasing delays from the
//! caller to produce the cascading-fill effect; the primitive itself
//! knows nothing about its siblings.

use claimsight_animation::{AnimatedTween, Easing, SchedulerHandle, Tween};
use claimsight_core::{Color, Gradient, Point, Rect};

/// Fill transition duration
pub const FILL_DURATION_MS: f32 = 1500.0;

/// Parameters for one bar instance
#[derive(Clone, Debug)]
pub struct BarSpec {
    /// Final fill, percent of the track width (0-100)
    pub width_percent: f32,
    /// Fill gradient, left to right
    pub gradient: Gradient,
    /// Delay before the fill starts (ms)
    pub delay_ms: f32,
}

impl BarSpec {
    pub fn new(width_percent: f32, from: Color, to: Color) -> Self {
        Self {
            width_percent,
            gradient: Gradient::linear(Point::ZERO, Point::new(1.0, 0.0), from, to),
            delay_ms: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Clamp out-of-contract parameters instead of corrupting the render
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=100.0).contains(&self.width_percent) {
            tracing::warn!(
                width_percent = self.width_percent,
                "bar width percent outside 0..=100, clamping"
            );
            self.width_percent = self.width_percent.clamp(0.0, 100.0);
        }
        if self.delay_ms < 0.0 {
            tracing::warn!(delay_ms = self.delay_ms, "bar delay negative, clamping");
            self.delay_ms = 0.0;
        }
        self
    }
}

/// A mounted bar with its fill animation
pub struct BarProgress {
    spec: BarSpec,
    fill: AnimatedTween,
}

impl BarProgress {
    /// Mount a bar, registering its fill tween with the scheduler
    pub fn mount(handle: &SchedulerHandle, spec: BarSpec) -> Self {
        let spec = spec.sanitized();
        let fill = AnimatedTween::new(
            handle.clone(),
            Tween::new(0.0, spec.width_percent / 100.0, FILL_DURATION_MS)
                .easing(Easing::EaseOut)
                .delay(spec.delay_ms),
        );
        Self { spec, fill }
    }

    pub fn spec(&self) -> &BarSpec {
        &self.spec
    }

    /// Current fill as a fraction of the track width (0.0 to 1.0)
    pub fn fill_fraction(&self) -> f32 {
        self.fill.get()
    }

    /// Current fill in pixels for a track of the given width
    pub fn fill_width(&self, track_width: f32) -> f32 {
        self.fill_fraction() * track_width
    }

    /// The filled portion of the given track rectangle
    pub fn fill_rect(&self, track: Rect) -> Rect {
        Rect::new(
            track.x,
            track.y,
            self.fill_width(track.width),
            track.height,
        )
    }

    pub fn is_settled(&self) -> bool {
        !self.fill.is_playing()
    }
}
