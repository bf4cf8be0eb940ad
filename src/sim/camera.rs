//! Scrolling camera

/// Vertical camera over the infinite snowfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World distance scrolled so far, in screen pixels
    pub offset: f64,
    /// Scroll speed, pixels per second
    pub speed: f32,
}

impl Camera {
    pub fn new(speed: f32) -> Self {
        Self { offset: 0.0, speed }
    }

    /// Scroll forward; never moves backwards
    pub fn advance(&mut self, dt: f32) {
        self.offset += (self.speed.max(0.0) * dt.max(0.0)) as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_is_monotonic() {
        let mut cam = Camera::new(50.0);
        cam.advance(0.5);
        assert_eq!(cam.offset, 25.0);
        cam.advance(-1.0);
        assert_eq!(cam.offset, 25.0);
        cam.advance(0.02);
        assert!(cam.offset > 25.0);
    }
}
