//! Frame-rate ceiling

/// Refresh callbacks land a little early or late; accept a frame this close
/// to the interval.
const SLACK_MS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    min_interval_ms: f64,
    last_frame_ms: f64,
    has_rendered: bool,
}

impl FrameLimiter {
    /// `cap_fps = None` renders on every refresh
    pub fn new(cap_fps: Option<f32>) -> Self {
        let min_interval_ms = match cap_fps {
            Some(fps) if fps > 0.0 => 1000.0 / fps as f64,
            _ => 0.0,
        };
        Self {
            min_interval_ms,
            last_frame_ms: 0.0,
            has_rendered: false,
        }
    }

    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }

    /// Decide whether the refresh at `now_ms` renders a frame.
    ///
    /// The first call always renders. A clock that jumps backwards also
    /// renders, restarting the interval from there.
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_frame_ms;
        if !self.has_rendered || elapsed < 0.0 || elapsed + SLACK_MS >= self.min_interval_ms {
            self.has_rendered = true;
            self.last_frame_ms = now_ms;
            return true;
        }
        false
    }

    /// Forget the last frame (next call renders)
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
