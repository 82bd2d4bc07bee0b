//! Shared entity plumbing
//!
//! Every simulated object is an axis-aligned rectangle with an identity and an
//! active flag. Concrete kinds embed a [`Body`] and implement [`Entity`].

use std::fmt;

use glam::Vec2;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::renderer::{AssetSource, Surface};

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on both axes; rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Shrink (positive) or grow (negative) on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::splat(amount),
            size: self.size - Vec2::splat(amount * 2.0),
        }
    }
}

/// Opaque identity used in diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id allocator, one per engine
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Position, size and lifecycle shared by all entity kinds
#[derive(Debug, Clone)]
pub struct Body {
    pub id: EntityId,
    pub rect: Rect,
    pub active: bool,
}

impl Body {
    pub fn new(id: EntityId, x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "entity size must be positive");
        Self {
            id,
            rect: Rect::new(x, y, width, height),
            active: true,
        }
    }
}

/// Per-frame timing handed to every `update`
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Elapsed time since the previous frame (ms)
    pub dt_ms: f32,
    /// Accumulated simulation time at this frame (ms)
    pub now_ms: f64,
    /// Playfield extent
    pub playfield: Vec2,
}

impl FrameContext {
    pub fn new(dt_ms: f32, now_ms: f64) -> Self {
        Self {
            dt_ms,
            now_ms,
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        }
    }

    /// Elapsed time in seconds, for speeds expressed in units per second
    #[inline]
    pub fn dt_secs(&self) -> f32 {
        self.dt_ms / 1000.0
    }
}

/// The two per-kind capabilities plus shared rectangle behavior
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance internal state by one frame
    fn update(&mut self, ctx: &FrameContext);

    /// Issue draw calls; falls back to primitives when the sprite is unavailable
    fn render(&self, surface: &mut dyn Surface, assets: &dyn AssetSource);

    fn id(&self) -> EntityId {
        self.body().id
    }

    fn rect(&self) -> Rect {
        self.body().rect
    }

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn destroy(&mut self) {
        self.body_mut().active = false;
    }

    fn center(&self) -> Vec2 {
        self.body().rect.center()
    }

    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.body().rect.overlaps(&other.body().rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(400.0, 500.0, 48.0, 48.0);
        assert_eq!(r.center(), Vec2::new(424.0, 524.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = EntityIds::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(format!("{a}"), "#1");
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..900.0, ay in -100.0f32..700.0,
            aw in 1.0f32..64.0, ah in 1.0f32..64.0,
            bx in -100.0f32..900.0, by in -100.0f32..700.0,
            bw in 1.0f32..64.0, bh in 1.0f32..64.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
