//! Frame scheduler
//!
//! Owns the sprite catalog, the scene config and, while mounted, a
//! `Session`: the surface, the moving scene state and every pending
//! callback handle. The host calls `tick` on each display refresh,
//! `on_resize_event` when the viewport changes and `flush_resize` when the
//! debounce timer fires.
//!
//! ```text
//! Unmounted --start(host)--> Mounted --stop()--> Unmounted
//! ```

pub mod debounce;
pub mod limiter;
pub mod stats;

pub use debounce::Debouncer;
pub use limiter::FrameLimiter;
pub use stats::{FrameStats, SessionStats};

use crate::consts::{FIRST_FRAME_DT, MAX_DT};
use crate::error::Result;
use crate::platform::{HandleId, Host};
use crate::renderer::{FrameContext, Surface, Viewport, compose_frame, enemy_extent};
use crate::settings::SceneConfig;
use crate::sim::SceneState;
use crate::sprites::SpriteCatalog;

/// What a refresh callback did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not mounted; nothing drawn, nothing rescheduled
    Stopped,
    /// Skipped by the frame limiter; next refresh requested
    Throttled,
    /// Frame drawn; next refresh requested
    Rendered,
}

/// Loop state for one mount
struct Session<S> {
    surface: S,
    viewport: Viewport,
    state: SceneState,
    frame_handle: Option<HandleId>,
    timeout_handle: Option<HandleId>,
    resize: Debouncer<Viewport>,
    limiter: FrameLimiter,
    fps: FrameStats,
    stats: SessionStats,
    last_frame_ms: Option<f64>,
    enemy_extent: f32,
}

impl<S: Surface> Session<S> {
    fn apply_resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        self.viewport = viewport;
        self.stats.resizes_applied += 1;
        log::debug!(
            "Surface resized to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
    }
}

pub struct FrameScheduler<H: Host> {
    catalog: SpriteCatalog,
    config: SceneConfig,
    watch_mode: bool,
    host: Option<H>,
    session: Option<Box<Session<H::Surface>>>,
}

impl<H: Host> FrameScheduler<H> {
    /// Validate the config and build the sprite catalog. A defective sprite
    /// fails here, before any loop can start.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let catalog = SpriteCatalog::builtin()?;
        log::info!(
            "Scene ready ({:?} quality, {} particles)",
            config.quality,
            config.particle_count()
        );
        Ok(Self {
            catalog,
            config,
            watch_mode: true,
            host: None,
            session: None,
        })
    }

    /// Mount onto `host`.
    ///
    /// `Ok(false)` when the host has no surface; `Err` when the surface or
    /// resize listener cannot be set up. Either way no loop runs. Starting
    /// while mounted keeps the current session and returns `Ok(true)`.
    pub fn start(&mut self, mut host: H) -> Result<bool> {
        if self.session.is_some() {
            log::warn!("Scene already mounted; start ignored");
            return Ok(true);
        }

        let mut surface = match host.acquire_surface() {
            Ok(Some(surface)) => surface,
            Ok(None) => {
                log::debug!("No drawing surface; scene stays unmounted");
                self.host = Some(host);
                return Ok(false);
            }
            Err(e) => {
                log::warn!("Scene mount aborted: {e}");
                self.host = Some(host);
                return Err(e);
            }
        };

        if let Err(e) = host.attach_resize_listener() {
            log::warn!("Scene mount aborted: {e}");
            self.host = Some(host);
            return Err(e);
        }

        let viewport = host.viewport();
        surface.resize(viewport);
        let seed = self.config.seed.unwrap_or_else(|| host.now_ms().to_bits());
        let state = SceneState::new(&self.config, surface.width(), surface.height(), seed);
        let frame_handle = host.request_frame();

        self.session = Some(Box::new(Session {
            surface,
            viewport,
            state,
            frame_handle,
            timeout_handle: None,
            resize: Debouncer::new(self.config.resize_debounce_ms),
            limiter: FrameLimiter::new(self.config.frame_cap_fps()),
            fps: FrameStats::default(),
            stats: SessionStats::default(),
            last_frame_ms: None,
            enemy_extent: enemy_extent(&self.catalog, &self.config),
        }));
        self.host = Some(host);

        log::info!(
            "Scene mounted at {}x{} (seed {seed})",
            viewport.width,
            viewport.height
        );
        Ok(true)
    }

    /// One display refresh at `timestamp_ms`
    pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
        let (Some(host), Some(session)) = (self.host.as_mut(), self.session.as_deref_mut()) else {
            return TickOutcome::Stopped;
        };
        // This callback consumed the handle
        session.frame_handle = None;

        if let Some(viewport) = session.resize.take_due(timestamp_ms) {
            session.apply_resize(viewport);
            if let Some(id) = session.timeout_handle.take() {
                host.clear_timeout(id);
            }
        }

        if !session.limiter.should_render(timestamp_ms) {
            session.stats.frames_throttled += 1;
            session.frame_handle = host.request_frame();
            return TickOutcome::Throttled;
        }

        let dt = match session.last_frame_ms {
            Some(last) => (((timestamp_ms - last) / 1000.0) as f32).clamp(0.0, MAX_DT),
            None => FIRST_FRAME_DT,
        };
        session.last_frame_ms = Some(timestamp_ms);

        let (width, height) = (session.surface.width(), session.surface.height());
        session
            .state
            .advance(dt, width, height, session.enemy_extent);

        let frame = FrameContext {
            catalog: &self.catalog,
            config: &self.config,
            state: &session.state,
            watch_mode: self.watch_mode,
        };
        compose_frame(&mut session.surface, &frame);

        session.fps.record(timestamp_ms);
        session.stats.frames_rendered += 1;
        session.frame_handle = host.request_frame();
        TickOutcome::Rendered
    }

    /// The host viewport changed; (re)start the debounce window
    pub fn on_resize_event(&mut self) {
        let (Some(host), Some(session)) = (self.host.as_mut(), self.session.as_deref_mut()) else {
            log::debug!("Resize ignored; scene not mounted");
            return;
        };
        let now = host.now_ms();
        session.resize.push(host.viewport(), now);
        if let Some(id) = session.timeout_handle.take() {
            host.clear_timeout(id);
        }
        session.timeout_handle = host.set_timeout(session.resize.window_ms());
    }

    /// The debounce timer fired; apply the resize if the window is quiet,
    /// otherwise wait out the remainder
    pub fn flush_resize(&mut self) {
        let (Some(host), Some(session)) = (self.host.as_mut(), self.session.as_deref_mut()) else {
            return;
        };
        session.timeout_handle = None;
        let now = host.now_ms();
        if let Some(viewport) = session.resize.take_due(now) {
            session.apply_resize(viewport);
        } else if let Some(rest) = session.resize.remaining(now) {
            session.timeout_handle = host.set_timeout(rest);
        }
    }

    /// Unmount: cancel the pending frame and timer, drop any pending
    /// resize, detach the listener and hand the host back. Safe to call
    /// any number of times.
    pub fn stop(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        if let Some(session) = self.session.take() {
            if let Some(id) = session.frame_handle {
                host.cancel_frame(id);
            }
            if let Some(id) = session.timeout_handle {
                host.clear_timeout(id);
            }
            host.detach_resize_listener();
            log::info!(
                "Scene stopped after {} frames",
                session.stats.frames_rendered
            );
        }
        Some(host)
    }

    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    pub fn watch_mode(&self) -> bool {
        self.watch_mode
    }

    /// Host toggle; only affects the optional dim overlay
    pub fn set_watch_mode(&mut self, on: bool) {
        if self.watch_mode != on {
            log::debug!("Watch mode {}", if on { "on" } else { "off" });
        }
        self.watch_mode = on;
    }

    /// Rolling frames per second (0 when unmounted)
    pub fn fps(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.fps.fps())
    }

    pub fn stats(&self) -> Option<SessionStats> {
        self.session.as_ref().map(|s| s.stats)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.session.as_ref().map(|s| s.viewport)
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.session.as_ref().map(|s| &s.surface)
    }

    pub fn state(&self) -> Option<&SceneState> {
        self.session.as_ref().map(|s| &s.state)
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SpriteCatalog {
        &self.catalog
    }
}
