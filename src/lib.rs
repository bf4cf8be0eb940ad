//! Narshe Scene - a scrolling pixel-art snowfield
//!
//! Core modules:
//! - `sprites`: Static pixel-art catalog, validated at startup
//! - `sim`: Camera, enemy patrol, snow particles, procedural terrain
//! - `renderer`: Layer renderers over a `Surface` (software or canvas)
//! - `scheduler`: Frame loop state machine, resize debounce, frame limiting
//! - `platform`: Host abstraction (headless / browser)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod sprites;

pub use error::{Result, SceneError, SpriteError};
pub use platform::{HandleId, HeadlessHost, Host};
pub use renderer::{Color, PixelBuffer, Surface, Viewport};
pub use scheduler::{FrameScheduler, SessionStats, TickOutcome};
pub use settings::{Facing, QualityPreset, SceneConfig};
pub use sprites::{Sprite, SpriteCatalog, SpriteId};

/// Scene constants
pub mod consts {
    /// Horizon line as a fraction of surface height
    pub const HORIZON_RATIO: f32 = 0.40;

    /// Rate particle speeds are authored against (units per tick at 60 Hz)
    pub const REFERENCE_TICK_HZ: f32 = 60.0;
    /// Delta used for the first frame after mount
    pub const FIRST_FRAME_DT: f32 = 1.0 / REFERENCE_TICK_HZ;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_DT: f32 = 0.1;

    /// Party baseline below the horizon, in surface pixels
    pub const PARTY_BASELINE: f32 = 100.0;
    /// Enemy baseline below the horizon, in surface pixels
    pub const ENEMY_BASELINE: f32 = 60.0;
    /// Milliseconds of scene time per walk-cycle phase unit
    pub const MS_PER_PHASE: f64 = 50.0;
    /// Phase offset between consecutive party members
    pub const PARTY_PHASE_STRIDE: f64 = 100.0;

    /// Frames in the rolling FPS window
    pub const FPS_WINDOW: usize = 60;
}

/// Horizon y for a surface of the given height
#[inline]
pub fn horizon_y(height: f32) -> f32 {
    (height * consts::HORIZON_RATIO).floor()
}
