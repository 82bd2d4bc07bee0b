//! A surface that records draw calls instead of rasterizing them
//!
//! Used by the headless binary and by tests that check draw order.

use glam::Vec2;

use super::assets::ImageHandle;
use super::surface::{Color, GradientStop, Surface, SurfaceError};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetAlpha(f32),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, line_width: f32 },
    FillCircle { center: Vec2, radius: f32, color: Color },
    FillPath { points: Vec<Vec2>, color: Color },
    DrawImage { image: ImageHandle, rect: Rect },
    FillGradient { rect: Rect, stops: Vec<GradientStop> },
    FillText { text: String, pos: Vec2, size: f32, color: Color },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<Vec2>,
    commands: Vec<DrawCommand>,
    /// Number of frames begun with `clear`
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    /// Commands issued since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, width: f32, height: f32) -> Result<(), SurfaceError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::UnsupportedResolution { width, height });
        }
        self.size = Some(Vec2::new(width, height));
        Ok(())
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_path(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPath {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, rect: Rect) {
        self.commands.push(DrawCommand::DrawImage { image, rect });
    }

    fn fill_gradient(&mut self, rect: Rect, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::FillGradient {
            rect,
            stops: stops.to_vec(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

/// Recording surface that refuses its first `failures` configure calls
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct UnreadySurface {
    pub inner: RecordingSurface,
    pub failures: u32,
}

#[cfg(test)]
impl Surface for UnreadySurface {
    fn configure(&mut self, width: f32, height: f32) -> Result<(), SurfaceError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(SurfaceError::ContextUnavailable);
        }
        self.inner.configure(width, height)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.inner.set_alpha(alpha);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.inner.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.inner.stroke_rect(rect, color, line_width);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.inner.fill_circle(center, radius, color);
    }

    fn fill_path(&mut self, points: &[Vec2], color: Color) {
        self.inner.fill_path(points, color);
    }

    fn draw_image(&mut self, image: ImageHandle, rect: Rect) {
        self.inner.draw_image(image, rect);
    }

    fn fill_gradient(&mut self, rect: Rect, stops: &[GradientStop]) {
        self.inner.fill_gradient(rect, stops);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.inner.fill_text(text, pos, size, color);
    }
}
