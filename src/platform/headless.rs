//! Headless host
//!
//! Draws into a `PixelBuffer` and records scheduled callbacks instead of
//! running them. The owner drives time by hand with `FrameScheduler::pump`,
//! which makes the whole loop reproducible in tests and the native binary.

use super::{HandleId, Host};
use crate::error::{Result, SceneError};
use crate::renderer::{PixelBuffer, Viewport};
use crate::scheduler::{FrameScheduler, TickOutcome};

/// What `acquire_surface` hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceMode {
    Available,
    /// No surface element at all
    Missing,
    /// Surface exists but has no usable context
    Unavailable(String),
}

#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    now_ms: f64,
    surface_mode: SurfaceMode,
    listener_fails: bool,
    next_handle: HandleId,
    pending_frames: Vec<HandleId>,
    /// (id, fires at)
    timers: Vec<(HandleId, f64)>,
    listener_attached: bool,
    frames_requested: u64,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            now_ms: 0.0,
            surface_mode: SurfaceMode::Available,
            listener_fails: false,
            next_handle: 1,
            pending_frames: Vec::new(),
            timers: Vec::new(),
            listener_attached: false,
            frames_requested: 0,
        }
    }

    pub fn with_surface_mode(mut self, mode: SurfaceMode) -> Self {
        self.surface_mode = mode;
        self
    }

    /// Make `attach_resize_listener` fail
    pub fn with_failing_listener(mut self) -> Self {
        self.listener_fails = true;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn pending_frames(&self) -> &[HandleId] {
        &self.pending_frames
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    /// Total `request_frame` calls over the host's life
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Nothing scheduled and nothing listening
    pub fn is_idle(&self) -> bool {
        self.pending_frames.is_empty() && self.timers.is_empty() && !self.listener_attached
    }

    fn next_id(&mut self) -> HandleId {
        let id = self.next_handle;
        self.next_handle = self.next_handle.wrapping_add(1).max(1);
        id
    }

    /// Remove and return the earliest timer due by now
    fn take_due_timer(&mut self) -> Option<HandleId> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= self.now_ms)
            .min_by(|a, b| a.1.1.total_cmp(&b.1.1))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(idx).0)
    }

    /// Consume the pending refresh, if any
    fn take_frame(&mut self) -> Option<HandleId> {
        if self.pending_frames.is_empty() {
            None
        } else {
            Some(self.pending_frames.remove(0))
        }
    }
}

impl Host for HeadlessHost {
    type Surface = PixelBuffer;

    fn acquire_surface(&mut self) -> Result<Option<PixelBuffer>> {
        match &self.surface_mode {
            SurfaceMode::Available => Ok(Some(PixelBuffer::new(self.viewport))),
            SurfaceMode::Missing => Ok(None),
            SurfaceMode::Unavailable(reason) => Err(SceneError::SurfaceUnavailable(reason.clone())),
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> Option<HandleId> {
        let id = self.next_id();
        self.pending_frames.push(id);
        self.frames_requested += 1;
        Some(id)
    }

    fn cancel_frame(&mut self, id: HandleId) {
        self.pending_frames.retain(|f| *f != id);
    }

    fn set_timeout(&mut self, delay_ms: f64) -> Option<HandleId> {
        let id = self.next_id();
        self.timers.push((id, self.now_ms + delay_ms.max(0.0)));
        Some(id)
    }

    fn clear_timeout(&mut self, id: HandleId) {
        self.timers.retain(|(t, _)| *t != id);
    }

    fn attach_resize_listener(&mut self) -> Result<()> {
        if self.listener_fails {
            return Err(SceneError::ListenerUnavailable("listener refused".into()));
        }
        self.listener_attached = true;
        Ok(())
    }

    fn detach_resize_listener(&mut self) {
        self.listener_attached = false;
    }
}

impl FrameScheduler<HeadlessHost> {
    /// Advance the host clock to `now_ms`, fire due timers, then deliver the
    /// pending refresh. `None` when no refresh was scheduled.
    pub fn pump(&mut self, now_ms: f64) -> Option<TickOutcome> {
        let host = self.host_mut()?;
        host.set_now(now_ms);

        while self
            .host_mut()
            .and_then(HeadlessHost::take_due_timer)
            .is_some()
        {
            self.flush_resize();
        }

        self.host_mut()?.take_frame()?;
        Some(self.tick(now_ms))
    }

    /// The window changed size: update the host and notify the listener
    pub fn emit_resize(&mut self, viewport: Viewport) {
        let Some(host) = self.host_mut() else {
            return;
        };
        host.set_viewport(viewport);
        if host.listener_attached() {
            self.on_resize_event();
        }
    }
}
