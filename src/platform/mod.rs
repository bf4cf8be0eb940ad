//! Platform abstraction layer
//!
//! Everything the frame scheduler needs from its environment:
//! - A drawing surface
//! - Viewport size and device pixel ratio
//! - A monotonic clock
//! - Refresh callbacks and one-shot timers
//! - Resize notifications

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessHost, SurfaceMode};

use crate::error::Result;
use crate::renderer::{Surface, Viewport};

/// Opaque id of a scheduled frame or timer
pub type HandleId = i32;

pub trait Host {
    type Surface: Surface;

    /// The surface to draw on. `Ok(None)` when the host has nothing to
    /// draw on (the scene quietly stays unmounted); `Err` when a surface
    /// exists but cannot be drawn to.
    fn acquire_surface(&mut self) -> Result<Option<Self::Surface>>;

    fn viewport(&self) -> Viewport;

    /// Milliseconds on the same timeline as refresh timestamps
    fn now_ms(&self) -> f64;

    /// Ask for one refresh callback
    fn request_frame(&mut self) -> Option<HandleId>;
    fn cancel_frame(&mut self, id: HandleId);

    /// Ask for one timer callback after `delay_ms`
    fn set_timeout(&mut self, delay_ms: f64) -> Option<HandleId>;
    fn clear_timeout(&mut self, id: HandleId);

    fn attach_resize_listener(&mut self) -> Result<()>;
    fn detach_resize_listener(&mut self);
}
