//! Drawing surface contract
//!
//! The engine only ever talks to the host's canvas through these primitives.
//! All coordinates are in the fixed logical playfield space.

use glam::Vec2;
use thiserror::Error;

use super::assets::ImageHandle;
use crate::sim::Rect;

/// RGBA color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const RED: Color = Color::from_hex(0xFF0000);
    pub const ORANGE_RED: Color = Color::from_hex(0xFF4500);
    pub const GOLD: Color = Color::from_hex(0xFFD700);
    pub const DARK_RED: Color = Color::from_hex(0x8B0000);
    pub const ROYAL_BLUE: Color = Color::from_hex(0x4169E1);
    pub const CRIMSON: Color = Color::from_hex(0xDC143C);
    pub const BLUE: Color = Color::from_hex(0x0000FF);
    pub const SADDLE_BROWN: Color = Color::from_hex(0x8B4513);
}

/// One stop of a vertical linear gradient (offset 0 = top, 1 = bottom)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("rendering context unavailable")]
    ContextUnavailable,
    #[error("surface cannot present a {width}x{height} logical resolution")]
    UnsupportedResolution { width: f32, height: f32 },
}

/// Primitive drawing operations offered by the host
pub trait Surface {
    /// Fix the logical resolution; called once when the engine is built
    fn configure(&mut self, width: f32, height: f32) -> Result<(), SurfaceError>;

    fn clear(&mut self);

    /// Global alpha applied to subsequent draws until reset to 1.0
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Closed polygon through `points`
    fn fill_path(&mut self, points: &[Vec2], color: Color);

    fn draw_image(&mut self, image: ImageHandle, rect: Rect);

    /// Fill `rect` with a top-to-bottom linear gradient
    fn fill_gradient(&mut self, rect: Rect, stops: &[GradientStop]);

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF4500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 69.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }
}
