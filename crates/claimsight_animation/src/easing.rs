//! Easing functions
//!
//! Timing curves applied to normalized animation progress. Ease-out is
//! the workhorse here: sweep and fill transitions start fast and
//! decelerate into their resting value.

/// An easing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate
    #[default]
    Linear,
    /// Accelerate from rest (cubic)
    EaseIn,
    /// Decelerate into rest (cubic)
    EaseOut,
    /// Accelerate then decelerate (cubic)
    EaseInOut,
}

impl Easing {
    /// Apply the curve to progress `t`, clamped to 0.0..=1.0
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
