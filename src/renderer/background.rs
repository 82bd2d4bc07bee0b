//! Playfield backdrop and debug overlay

use glam::Vec2;

use super::assets::{AssetSource, Sprite};
use super::surface::{Color, GradientStop, Surface};
use crate::sim::Rect;

const SKY_EDGE: Color = Color::from_hex(0x1E3A8A);
const SKY_MIDDLE: Color = Color::from_hex(0x0F172A);

/// Largest star radius in the fallback star field
const MAX_STAR_RADIUS: f32 = 2.0;

/// Position and radius of star `i`; stable across frames so the field never flickers
pub fn star(i: u32, width: f32, height: f32) -> (Vec2, f32) {
    let x = (i * 37) as f32 % width;
    let y = (i * 47) as f32 % height;
    let hash = i.wrapping_mul(2654435761).wrapping_add(7919);
    let radius = (hash % 1000) as f32 / 1000.0 * MAX_STAR_RADIUS;
    (Vec2::new(x, y), radius)
}

/// Background image, or a vertical gradient with a star field when it is unavailable
pub fn draw_background(
    surface: &mut dyn Surface,
    assets: &dyn AssetSource,
    size: Vec2,
    star_count: u32,
) {
    let full = Rect::new(0.0, 0.0, size.x, size.y);
    if let Some(image) = assets.image(Sprite::Background) {
        surface.draw_image(image, full);
        return;
    }

    surface.fill_gradient(
        full,
        &[
            GradientStop::new(0.0, SKY_EDGE),
            GradientStop::new(0.5, SKY_MIDDLE),
            GradientStop::new(1.0, SKY_EDGE),
        ],
    );
    for i in 0..star_count {
        let (center, radius) = star(i, size.x, size.y);
        if radius > 0.0 {
            surface.fill_circle(center, radius, Color::WHITE);
        }
    }
}

/// Entity counts shown by the debug overlay
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayStats {
    pub enemies: usize,
    pub bullets: usize,
    pub particles: usize,
    pub fps: u32,
}

pub fn draw_overlay(surface: &mut dyn Surface, stats: &OverlayStats, height: f32) {
    let lines = [
        format!("Enemies: {}", stats.enemies),
        format!("Bullets: {}", stats.bullets),
        format!("Particles: {}", stats.particles),
        format!("FPS: {}", stats.fps),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = height - 60.0 + i as f32 * 15.0;
        surface.fill_text(line, Vec2::new(10.0, y), 12.0, Color::WHITE);
    }
}
