//! Theme palette
//!
//! Color tokens and gradient pairings from the reference design. The
//! particle palette alternates cyan/violet; each progress bar carries
//! its own gradient.

use claimsight_core::Color;

/// Named palette slots
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Cyan,
    Violet,
    Pink,
    Blue,
    Amber,
    Orange,
    Emerald,
}

/// Resolve a palette token to its color
pub fn color(token: ColorToken) -> Color {
    match token {
        ColorToken::Cyan => Color::from_hex(0x06B6D4),
        ColorToken::Violet => Color::from_hex(0x8B5CF6),
        ColorToken::Pink => Color::from_hex(0xEC4899),
        ColorToken::Blue => Color::from_hex(0x3B82F6),
        ColorToken::Amber => Color::from_hex(0xF59E0B),
        ColorToken::Orange => Color::from_hex(0xF97316),
        ColorToken::Emerald => Color::from_hex(0x10B981),
    }
}

/// Particle palette, indexed by a particle's alternating slot
pub fn particle_color(palette_index: usize) -> Color {
    if palette_index % 2 == 0 {
        color(ColorToken::Cyan)
    } else {
        color(ColorToken::Violet)
    }
}

/// Deadline bar fill widths (percent), one per general deadline
pub const DEADLINE_BAR_WIDTHS: [f32; 5] = [90.0, 75.0, 60.0, 45.0, 30.0];

/// Gradient color pairs for the deadline bars, in render order
pub fn deadline_bar_gradient(index: usize) -> (Color, Color) {
    match index % 5 {
        0 => (color(ColorToken::Pink), color(ColorToken::Orange)),
        1 => (color(ColorToken::Violet), color(ColorToken::Cyan)),
        2 => (color(ColorToken::Cyan), color(ColorToken::Emerald)),
        3 => (color(ColorToken::Blue), color(ColorToken::Violet)),
        _ => (color(ColorToken::Amber), color(ColorToken::Pink)),
    }
}

/// Gradient color pairs for the small deadline rings
pub fn deadline_ring_gradient(index: usize) -> (Color, Color) {
    match index % 3 {
        0 => (color(ColorToken::Cyan), color(ColorToken::Violet)),
        1 => (color(ColorToken::Blue), color(ColorToken::Pink)),
        _ => (color(ColorToken::Violet), color(ColorToken::Amber)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_palette_alternates() {
        assert_eq!(particle_color(0), color(ColorToken::Cyan));
        assert_eq!(particle_color(1), color(ColorToken::Violet));
        assert_eq!(particle_color(2), color(ColorToken::Cyan));
    }

    #[test]
    fn test_bar_widths_descend() {
        for pair in DEADLINE_BAR_WIDTHS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
