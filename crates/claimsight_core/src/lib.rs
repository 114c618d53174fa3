//! Claimsight core value types
//!
//! Dependency-free primitives shared by the animation engine and the
//! dashboard composition layer:
//!
//! - **Colors**: f32 RGBA with hex constructors and interpolation
//! - **Geometry**: points, sizes, rectangles
//! - **Gradients**: two-stop linear gradients plus process-unique
//!   gradient identifiers (two rings sharing an id would silently
//!   corrupt each other's colors)

pub mod color;
pub mod geometry;
pub mod gradient;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use gradient::{Gradient, GradientId, GradientStop};
