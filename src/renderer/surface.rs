//! Drawing surface abstraction
//!
//! Layer renderers only ever see `&mut dyn Surface`-like access through this
//! trait. Coordinates are logical (CSS) pixels; backends apply the device
//! pixel ratio themselves.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color (straight alpha)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba8(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0x000000);
    pub const WHITE: Color = Color::rgb(0xffffff);

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 0xff,
        }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced (0.0 - 1.0)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Alpha as 0.0 - 1.0
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.alpha())
    }

    /// Source-over composite of `self` onto `dst`
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            255 => self,
            _ => {
                let sa = self.alpha();
                let da = dst.alpha();
                let out_a = sa + da * (1.0 - sa);
                if out_a <= 0.0 {
                    return Color::TRANSPARENT;
                }
                let mix = |s: u8, d: u8| {
                    let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
                    v.round().clamp(0.0, 255.0) as u8
                };
                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (out_a * 255.0).round() as u8,
                }
            }
        }
    }

    /// Linear interpolation between two colors, alpha included
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// One stop of a vertical gradient; `offset` is 0.0 (top) - 1.0 (bottom)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Sample a gradient at `t` (stops sorted by offset)
pub fn sample_gradient(stops: &[GradientStop], t: f32) -> Color {
    let Some(first) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let u = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            return a.color.lerp(b.color, u);
        }
    }
    stops[stops.len() - 1].color
}

/// Host viewport: CSS size plus device pixel density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Backing-store size in device pixels (never zero)
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio.max(f32::EPSILON);
        let w = (self.width * ratio).floor().max(1.0) as u32;
        let h = (self.height * ratio).floor().max(1.0) as u32;
        (w, h)
    }
}

/// A persistent 2D drawing target
pub trait Surface {
    /// Logical width
    fn width(&self) -> f32;
    /// Logical height
    fn height(&self) -> f32;
    /// Reallocate for a new viewport (clears contents)
    fn resize(&mut self, viewport: Viewport);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Fill a simple polygon (even-odd rule)
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Fill `rect` with a top-to-bottom gradient
    fn fill_vertical_gradient(&mut self, rect: Rect, stops: &[GradientStop]);
    /// Restrict subsequent fills to `clip`; `None` lifts the restriction
    fn set_clip(&mut self, clip: Option<Rect>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_extremes() {
        let red = Color::rgb(0xff0000);
        let blue = Color::rgb(0x0000ff);
        assert_eq!(red.over(blue), red);
        assert_eq!(Color::TRANSPARENT.over(blue), blue);

        let half = red.with_alpha(0.5).over(Color::BLACK);
        assert_eq!(half.a, 255);
        assert!((half.r as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_sample_gradient() {
        let stops = [
            GradientStop::new(0.0, Color::BLACK.with_alpha(0.0)),
            GradientStop::new(0.5, Color::BLACK.with_alpha(0.8)),
            GradientStop::new(1.0, Color::BLACK.with_alpha(0.0)),
        ];
        assert_eq!(sample_gradient(&stops, -1.0).a, 0);
        assert_eq!(sample_gradient(&stops, 0.5).a, 204);
        assert_eq!(sample_gradient(&stops, 2.0).a, 0);
        assert!(sample_gradient(&stops, 0.25).a > 90);
    }

    #[test]
    fn test_physical_size() {
        assert_eq!(Viewport::new(800.0, 600.0, 2.0).physical_size(), (1600, 1200));
        assert_eq!(Viewport::new(0.0, 0.0, 1.0).physical_size(), (1, 1));
    }
}
