//! Frame counters and rolling FPS

use serde::Serialize;

use crate::consts::FPS_WINDOW;

/// Counters for one mounted session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub frames_rendered: u64,
    /// Refreshes skipped by the frame limiter
    pub frames_throttled: u64,
    pub resizes_applied: u64,
}

/// Rolling FPS over the last `FPS_WINDOW` rendered frames
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }
}

impl FrameStats {
    pub fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.recorded = (self.recorded + 1).min(FPS_WINDOW);

        // Oldest sample still in the window
        let oldest_idx = if self.recorded < FPS_WINDOW {
            0
        } else {
            self.frame_index
        };
        let intervals = self.recorded.saturating_sub(1);
        let elapsed = time_ms - self.frame_times[oldest_idx];
        if intervals > 0 && elapsed > 0.0 {
            self.fps = (intervals as f64 * 1000.0 / elapsed).round() as u32;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
