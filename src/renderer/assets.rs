//! Sprite availability tracking
//!
//! Images load asynchronously on the host. Renderers only ask "is it ready?";
//! pending and failed loads look the same and both select the vector fallback.

use std::collections::HashMap;

/// Sprites the game knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Enemy,
    Bullet,
    Background,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Player,
        Sprite::Enemy,
        Sprite::Bullet,
        Sprite::Background,
    ];

    /// Path the host loads the image from
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Player => "/sprites/eagle.svg",
            Sprite::Enemy => "/sprites/enemy.svg",
            Sprite::Bullet => "/sprites/bullet.svg",
            Sprite::Background => "/sprites/flag-bg.svg",
        }
    }
}

/// Host-side image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Load progress of a single sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(ImageHandle),
    Failed,
}

/// Read side used by entity renderers
pub trait AssetSource {
    /// `Some` only when the image finished loading successfully
    fn image(&self, sprite: Sprite) -> Option<ImageHandle>;
}

/// Sprite table updated by the host loader
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    states: HashMap<Sprite, LoadState>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, sprite: Sprite) -> LoadState {
        self.states.get(&sprite).copied().unwrap_or_default()
    }

    pub fn mark_loaded(&mut self, sprite: Sprite, handle: ImageHandle) {
        log::debug!("{} loaded", sprite.path());
        self.states.insert(sprite, LoadState::Loaded(handle));
    }

    pub fn mark_failed(&mut self, sprite: Sprite) {
        log::warn!("{} failed to load, using fallback", sprite.path());
        self.states.insert(sprite, LoadState::Failed);
    }
}

impl AssetSource for AssetCache {
    fn image(&self, sprite: Sprite) -> Option<ImageHandle> {
        match self.state(sprite) {
            LoadState::Loaded(handle) => Some(handle),
            LoadState::Pending | LoadState::Failed => None,
        }
    }
}
