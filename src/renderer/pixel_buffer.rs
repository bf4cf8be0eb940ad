//! Software RGBA framebuffer
//!
//! Used by the headless host (native binary, tests). A pixel is covered by a
//! shape when its center lies inside the shape, so integer-aligned rects map
//! to exact pixel blocks.

use std::io::{self, Write};

use glam::Vec2;

use super::surface::{Color, GradientStop, Rect, Surface, Viewport, sample_gradient};

/// Pixel-center coverage span `[start, end)` for a logical interval
#[inline]
fn span(start: f32, end: f32, scale: f32, limit: u32) -> (u32, u32) {
    let lo = (start * scale - 0.5).ceil().max(0.0);
    let hi = (end * scale - 0.5).ceil().max(0.0);
    (lo.min(limit as f32) as u32, hi.min(limit as f32) as u32)
}

pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixel_ratio: f32,
    pixels: Vec<Color>,
    /// Clip in physical pixels: x0, y0, x1, y1
    clip: Option<(u32, u32, u32, u32)>,
}

impl PixelBuffer {
    pub fn new(viewport: Viewport) -> Self {
        let (width, height) = viewport.physical_size();
        Self {
            width,
            height,
            pixel_ratio: viewport.pixel_ratio.max(f32::EPSILON),
            pixels: vec![Color::BLACK; (width * height) as usize],
            clip: None,
        }
    }

    /// Backing-store width in device pixels
    pub fn physical_width(&self) -> u32 {
        self.width
    }

    /// Backing-store height in device pixels
    pub fn physical_height(&self) -> u32 {
        self.height
    }

    /// Read a device pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write a binary PPM (alpha dropped)
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut row = Vec::with_capacity(self.width as usize * 3);
        for chunk in self.pixels.chunks(self.width as usize) {
            row.clear();
            for c in chunk {
                row.extend_from_slice(&[c.r, c.g, c.b]);
            }
            out.write_all(&row)?;
        }
        Ok(())
    }

    /// Physical bounds intersected with the clip
    fn bounds(&self) -> (u32, u32, u32, u32) {
        self.clip.unwrap_or((0, 0, self.width, self.height))
    }

    #[inline]
    fn blend(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y * self.width + x) as usize;
        if let Some(dst) = self.pixels.get_mut(idx) {
            *dst = color.over(*dst);
        }
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> f32 {
        self.width as f32 / self.pixel_ratio
    }

    fn height(&self) -> f32 {
        self.height as f32 / self.pixel_ratio
    }

    fn resize(&mut self, viewport: Viewport) {
        *self = PixelBuffer::new(viewport);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 || rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let (bx0, by0, bx1, by1) = self.bounds();
        let (x0, x1) = span(rect.x, rect.right(), self.pixel_ratio, self.width);
        let (y0, y1) = span(rect.y, rect.bottom(), self.pixel_ratio, self.height);
        for y in y0.max(by0)..y1.min(by1) {
            for x in x0.max(bx0)..x1.min(bx1) {
                self.blend(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if color.a == 0 || radius <= 0.0 {
            return;
        }
        let s = self.pixel_ratio;
        let (cx, cy, r) = (center.x * s, center.y * s, radius * s);
        let (bx0, by0, bx1, by1) = self.bounds();
        let (x0, x1) = span(center.x - radius, center.x + radius, s, self.width);
        let (y0, y1) = span(center.y - radius, center.y + radius, s, self.height);
        for y in y0.max(by0)..y1.min(by1) {
            for x in x0.max(bx0)..x1.min(bx1) {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if color.a == 0 || points.len() < 3 {
            return;
        }
        let s = self.pixel_ratio;
        let pts: Vec<Vec2> = points.iter().map(|p| *p * s).collect();
        let (min_y, max_y) = pts
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let (bx0, by0, bx1, by1) = self.bounds();
        let y0 = ((min_y - 0.5).ceil().max(0.0) as u32).max(by0);
        let y1 = ((max_y - 0.5).ceil().max(0.0) as u32).min(by1);

        let mut crossings = Vec::with_capacity(pts.len());
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in pts.iter().enumerate() {
                let b = pts[(i + 1) % pts.len()];
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    let t = (sy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x0 = ((pair[0] - 0.5).ceil().max(0.0) as u32).max(bx0);
                let x1 = ((pair[1] - 0.5).ceil().max(0.0) as u32).min(bx1);
                for x in x0..x1 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, stops: &[GradientStop]) {
        if stops.is_empty() || rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let s = self.pixel_ratio;
        let (bx0, by0, bx1, by1) = self.bounds();
        let (x0, x1) = span(rect.x, rect.right(), s, self.width);
        let (y0, y1) = span(rect.y, rect.bottom(), s, self.height);
        for y in y0.max(by0)..y1.min(by1) {
            let t = ((y as f32 + 0.5) / s - rect.y) / rect.h;
            let color = sample_gradient(stops, t);
            if color.a == 0 {
                continue;
            }
            for x in x0.max(bx0)..x1.min(bx1) {
                self.blend(x, y, color);
            }
        }
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip.map(|r| {
            let (x0, x1) = span(r.x, r.right(), self.pixel_ratio, self.width);
            let (y0, y1) = span(r.y, r.bottom(), self.pixel_ratio, self.height);
            (x0, y0, x1, y1)
        });
    }
}
