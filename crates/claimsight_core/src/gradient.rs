//! Gradient fills and per-instance gradient identifiers

use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::geometry::Point;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    pub color: Color,
}

/// A linear gradient between ordered stops
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a simple two-stop linear gradient
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Sample the gradient color at position `t` (0.0 to 1.0)
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        if self.stops.is_empty() {
            return Color::TRANSPARENT;
        }

        let mut prev = &self.stops[0];
        for stop in &self.stops {
            if stop.offset >= t {
                let span = stop.offset - prev.offset;
                if span <= f32::EPSILON {
                    return stop.color;
                }
                let local = (t - prev.offset) / span;
                return Color::lerp(&prev.color, &stop.color, local);
            }
            prev = stop;
        }
        prev.color
    }
}

/// A process-unique identifier for a gradient definition
///
/// Every ring instance must reference its own gradient definition;
/// a shared identifier would let one instance's definition silently
/// override another's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientId(u64);

static NEXT_GRADIENT_ID: AtomicU64 = AtomicU64::new(0);

impl GradientId {
    /// Allocate the next unique identifier
    pub fn next() -> Self {
        Self(NEXT_GRADIENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_ids_are_unique() {
        let ids: Vec<GradientId> = (0..100).map(|_| GradientId::next()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_linear_sample_endpoints() {
        let g = Gradient::linear(
            Point::ZERO,
            Point::new(1.0, 1.0),
            Color::from_hex(0x06B6D4),
            Color::from_hex(0xEC4899),
        );
        assert_eq!(g.sample(0.0), Color::from_hex(0x06B6D4));
        assert_eq!(g.sample(1.0), Color::from_hex(0xEC4899));
    }

    #[test]
    fn test_linear_sample_midpoint() {
        let g = Gradient::linear(Point::ZERO, Point::new(1.0, 0.0), Color::BLACK, Color::WHITE);
        let mid = g.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }
}
