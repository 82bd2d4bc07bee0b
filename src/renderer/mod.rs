//! Rendering module
//!
//! Entities draw themselves through the [`Surface`] primitives; the host decides
//! how those primitives reach the screen.

pub mod assets;
pub mod background;
pub mod recording;
pub mod surface;

pub use assets::{AssetCache, AssetSource, ImageHandle, LoadState, Sprite};
pub use background::{OverlayStats, draw_background, draw_overlay};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Color, GradientStop, Surface, SurfaceError};
